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

//! Viewport transform
//!
//! Maps homogeneous clip coordinates to pixel space:
//!
//! ```text
//! px = (x/w + 1) * width  / 2
//! py = (1 - y/w) * height / 2
//! ```
//!
//! The origin is the top-left corner and Y grows downward, so normalized
//! `y = 1` is the top row.

use super::types::{ScreenPoint, Vertex};
use crate::core::error::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    width: f32,
    height: f32,
}

impl ViewportTransform {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Project a vertex into pixel space
    ///
    /// # Errors
    ///
    /// - [`GeometryError::ZeroW`] when `w == 0`
    /// - [`GeometryError::NonFinite`] when the division overflows or the
    ///   input is not finite
    ///
    /// # Examples
    ///
    /// ```
    /// use softrast::core::raster::{ScreenPoint, Vertex, ViewportTransform};
    ///
    /// let viewport = ViewportTransform::new(100, 50);
    /// let p = viewport.apply(Vertex::new(-1.0, 1.0, 0.0, 1.0)).unwrap();
    /// assert_eq!(p, ScreenPoint::new(0.0, 0.0));
    /// ```
    pub fn apply(&self, v: Vertex) -> Result<ScreenPoint, GeometryError> {
        if v.w == 0.0 {
            return Err(GeometryError::ZeroW {
                x: v.x,
                y: v.y,
                z: v.z,
            });
        }

        let nx = v.x / v.w;
        let ny = v.y / v.w;
        let point = ScreenPoint::new(
            (nx + 1.0) * self.width / 2.0,
            (1.0 - ny) * self.height / 2.0,
        );

        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(GeometryError::NonFinite {
                x: v.x,
                y: v.y,
                z: v.z,
                w: v.w,
            });
        }

        Ok(point)
    }
}
