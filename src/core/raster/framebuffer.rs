// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Framebuffer
//!
//! The pixel grid every rasterizer writes into. The grid is row-major with
//! the origin at the top-left corner and is never resized after creation.

use super::types::Color;

/// A fixed-size RGBA pixel grid
///
/// All mutation goes through [`Framebuffer::set`], which silently drops
/// writes outside the grid and clamps colors into range.
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{Color, Framebuffer};
///
/// let mut fb = Framebuffer::new(4, 4);
/// fb.set(1, 2, Color::rgb(1.0, 0.0, 0.0));
/// fb.set(-1, 9, Color::WHITE); // outside: ignored
///
/// assert_eq!(fb.get(1, 2), Some(Color::rgb(1.0, 0.0, 0.0)));
/// assert_eq!(fb.get(-1, 9), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a framebuffer filled with transparent black
    ///
    /// Callers taking dimensions from input should check them with
    /// [`Framebuffer::fits`] first; oversized dimensions panic on allocation.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; width * height],
        }
    }

    /// Whether a `width` x `height` grid can be allocated and exported
    ///
    /// Each side must fit a `u32` (the PNG limit) and the pixel storage must
    /// not overflow `isize`. The RGBA8 export is smaller than the storage.
    pub fn fits(width: usize, height: usize) -> bool {
        if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
            return false;
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(std::mem::size_of::<Color>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Write a single pixel
    ///
    /// Coordinates outside `[0, width) x [0, height)` are a no-op. The color
    /// is clamped component-wise before it is stored.
    #[inline(always)]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color.clamped();
        }
    }

    /// Read a single pixel, `None` when out of bounds
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Reset every pixel to `color`
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.clamped());
    }

    /// Row-major view of the pixel grid
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Export the grid as row-major RGBA8 bytes, top row first
    pub fn export(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
