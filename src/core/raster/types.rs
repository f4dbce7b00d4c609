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

//! Rasterizer primitive type definitions
//!
//! This module contains the fixed-arity value types that flow through the
//! pipeline: homogeneous vertices, normalized colors, and the two flavours of
//! pixel-space point.

/// An RGBA color with normalized components
///
/// Components are stored as `f32` in the range [0, 1]. Conversion to 8-bit
/// happens only when the framebuffer is exported for encoding.
///
/// # Examples
///
/// ```
/// use softrast::core::raster::Color;
///
/// let color = Color::rgb(1.0, 0.5, 0.0);
/// assert_eq!(color.a, 1.0);
/// assert_eq!(color.to_rgba8(), [255, 128, 0, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0-1.0)
    pub r: f32,
    /// Green channel (0.0-1.0)
    pub g: f32,
    /// Blue channel (0.0-1.0)
    pub b: f32,
    /// Alpha channel (0.0-1.0)
    pub a: f32,
}

impl Color {
    /// Fully transparent black, the initial framebuffer contents
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from all four components
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from three components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build a color from a 3- or 4-component slice
    ///
    /// A missing alpha component defaults to fully opaque. Returns `None` for
    /// any other slice length.
    pub fn from_components(values: &[f32]) -> Option<Self> {
        match *values {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::new(r, g, b, a)),
            _ => None,
        }
    }

    /// Linearly blend towards `other`
    ///
    /// `t = 0` yields `self`, `t = 1` yields `other`. The result is always
    /// fully opaque since rasterized pixels are written without blending.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color::rgb(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
        )
    }

    /// Weighted sum of three colors
    ///
    /// With barycentric weights this yields a convex combination of the
    /// three inputs.
    #[inline]
    pub fn weighted(colors: &[Color; 3], weights: [f32; 3]) -> Color {
        let [w0, w1, w2] = weights;
        Color::rgb(
            colors[0].r * w0 + colors[1].r * w1 + colors[2].r * w2,
            colors[0].g * w0 + colors[1].g * w1 + colors[2].g * w2,
            colors[0].b * w0 + colors[1].b * w1 + colors[2].b * w2,
        )
    }

    /// Clamp every component into [0, 1]
    ///
    /// NaN components become 0.
    pub fn clamped(self) -> Color {
        Color::new(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            clamp_unit(self.a),
        )
    }

    /// Convert to 8-bit RGBA
    ///
    /// Components are clamped first, then scaled by 255 and rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// A homogeneous vertex position (x, y, z, w)
///
/// Perspective division by `w` happens in the viewport transform.
///
/// # Examples
///
/// ```
/// use softrast::core::raster::Vertex;
///
/// let v = Vertex::from_components(&[0.5, -0.5]);
/// assert_eq!(v, Vertex::new(0.5, -0.5, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Build a vertex from up to four components
    ///
    /// Missing components take the defaults (0, 0, 0, 1); extra components
    /// are ignored.
    pub fn from_components(values: &[f32]) -> Self {
        let get = |i: usize, default: f32| values.get(i).copied().unwrap_or(default);
        Self::new(get(0, 0.0), get(1, 0.0), get(2, 0.0), get(3, 1.0))
    }
}

/// A continuous point in pixel space
///
/// Produced by the viewport transform. X grows to the right and Y grows
/// downward with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snap to the nearest pixel, rounding halves away from zero
    #[inline]
    pub fn to_pixel(self) -> PixelPoint {
        PixelPoint::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// An integer pixel coordinate
///
/// May lie outside the framebuffer; writes to such points are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Interpolation parameter `num / den`, or `fallback` when `den` is zero
///
/// Keeps NaN and infinities out of slope and color computations.
#[inline]
pub fn ratio_or(num: f32, den: f32, fallback: f32) -> f32 {
    if den == 0.0 {
        fallback
    } else {
        num / den
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
