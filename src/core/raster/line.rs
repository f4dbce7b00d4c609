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

//! Line rasterization
//!
//! Implements gradient line drawing using Bresenham's algorithm with an
//! integer error accumulator. Colors are interpolated linearly along the
//! major axis.
//!
//! # Algorithm
//!
//! 1. Round both endpoints to pixel coordinates
//! 2. If the line is steep (|dy| > |dx|), swap X and Y so the walk always
//!    follows the axis of greater extent
//! 3. Order the endpoints so the walk moves towards increasing X, carrying
//!    the colors along
//! 4. Step one pixel per X, advancing Y whenever the error term drops
//!    below zero
//!
//! # References
//!
//! - [Bresenham's Line Algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)

use super::framebuffer::Framebuffer;
use super::types::{Color, ScreenPoint};

/// Draw a line with color interpolation between the two endpoints
///
/// Every visited pixel is written fully opaque. Coincident endpoints draw a
/// single pixel with `c0`. Pixels outside the framebuffer are dropped by
/// [`Framebuffer::set`].
///
/// # Returns
///
/// The number of pixels visited along the major axis (including any that
/// fell outside the framebuffer).
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{draw_line, Color, Framebuffer, ScreenPoint};
///
/// let mut fb = Framebuffer::new(8, 8);
/// let visited = draw_line(
///     &mut fb,
///     ScreenPoint::new(0.0, 0.0),
///     Color::rgb(1.0, 0.0, 0.0),
///     ScreenPoint::new(7.0, 3.0),
///     Color::rgb(0.0, 0.0, 1.0),
/// );
///
/// assert_eq!(visited, 8);
/// assert_eq!(fb.get(0, 0), Some(Color::rgb(1.0, 0.0, 0.0)));
/// assert_eq!(fb.get(7, 3), Some(Color::rgb(0.0, 0.0, 1.0)));
/// ```
pub fn draw_line(
    fb: &mut Framebuffer,
    p0: ScreenPoint,
    c0: Color,
    p1: ScreenPoint,
    c1: Color,
) -> usize {
    let (a, b) = (p0.to_pixel(), p1.to_pixel());

    // Widen so that differences of extreme coordinates cannot overflow
    let (mut x0, mut y0) = (a.x as i64, a.y as i64);
    let (mut x1, mut y1) = (b.x as i64, b.y as i64);
    let (mut c0, mut c1) = (c0, c1);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }

    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
        std::mem::swap(&mut c0, &mut c1);
    }

    let dx = x1 - x0;
    let dy = (y1 - y0).abs();
    let y_step = if y0 < y1 { 1 } else { -1 };

    let mut error = dx / 2;
    let mut y = y0;

    for x in x0..=x1 {
        let t = if dx == 0 {
            0.0
        } else {
            (x - x0) as f32 / dx as f32
        };
        let color = c0.lerp(c1, t);

        if steep {
            fb.set(y as i32, x as i32, color);
        } else {
            fb.set(x as i32, y as i32, color);
        }

        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }

    (dx + 1) as usize
}
