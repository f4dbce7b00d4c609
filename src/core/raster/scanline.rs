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

//! Scanline triangle fill
//!
//! Splits triangles into top-flat and bottom-flat sub-triangles and fills
//! each row with a gradient line:
//!
//! 1. Snap vertex Y coordinates to their pixel row
//! 2. Sort vertices by Y coordinate (colors travel with their vertex)
//! 3. Split the triangle at the middle vertex on the long edge
//! 4. Fill each half row by row using per-edge slopes and colors
//!
//! The split row belongs to the upper (flat-bottom) half; the lower
//! (flat-top) half starts one row below it, so no row is filled twice.
//!
//! # References
//!
//! - [Triangle Rasterization Tutorial](https://www.sunshine2k.de/coding/java/TriangleRasterization/TriangleRasterization.html)

use super::framebuffer::Framebuffer;
use super::line::draw_line;
use super::triangle::edge_function;
use super::types::{lerp, ratio_or, Color, ScreenPoint};
use crate::core::error::GeometryError;

/// Fill a triangle row by row
///
/// Returns the number of rows filled inside the framebuffer.
pub(super) fn fill(
    fb: &mut Framebuffer,
    vertices: [ScreenPoint; 3],
    colors: [Color; 3],
) -> Result<usize, GeometryError> {
    let mut verts = [
        (snap_row(vertices[0]), colors[0]),
        (snap_row(vertices[1]), colors[1]),
        (snap_row(vertices[2]), colors[2]),
    ];

    let area = edge_function(verts[0].0, verts[1].0, verts[2].0);
    if area == 0.0 || !area.is_finite() {
        return Err(GeometryError::DegenerateTriangle);
    }

    verts.sort_by(|a, b| a.0.y.total_cmp(&b.0.y));
    let [(v0, c0), (v1, c1), (v2, c2)] = verts;

    let rows = if v1.y == v2.y {
        fill_flat_bottom(fb, [v0, v1, v2], [c0, c1, c2])
    } else if v0.y == v1.y {
        fill_flat_top(fb, [v0, v1, v2], [c0, c1, c2], v0.y as i64)
    } else {
        // v0.y < v1.y < v2.y, so the long edge has non-zero height
        let t = (v1.y - v0.y) / (v2.y - v0.y);
        let split = ScreenPoint::new(lerp(v0.x, v2.x, t), v1.y);
        let split_color = c0.lerp(c2, t);

        fill_flat_bottom(fb, [v0, v1, split], [c0, c1, split_color])
            + fill_flat_top(fb, [v1, split, v2], [c1, split_color, c2], v1.y as i64 + 1)
    };

    Ok(rows)
}

#[inline]
fn snap_row(p: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(p.x, p.y.round())
}

/// Rows `first..=last` clipped to the framebuffer
fn visible_rows(fb: &Framebuffer, first: i64, last: i64) -> std::ops::RangeInclusive<i64> {
    first.max(0)..=last.min(fb.height() as i64 - 1)
}

/// Fill a triangle whose `v[1]` and `v[2]` share the bottom row
///
/// Rows run from `v[0].y` down to the bottom row inclusive.
fn fill_flat_bottom(fb: &mut Framebuffer, v: [ScreenPoint; 3], c: [Color; 3]) -> usize {
    let [v0, v1, v2] = v;
    let [c0, c1, c2] = c;

    let height = v1.y - v0.y;
    let slope1 = ratio_or(v1.x - v0.x, height, 0.0);
    let slope2 = ratio_or(v2.x - v0.x, v2.y - v0.y, 0.0);

    let mut rows = 0;
    for y in visible_rows(fb, v0.y as i64, v1.y as i64) {
        let dy = y as f32 - v0.y;
        let t = ratio_or(dy, height, 1.0);

        let left = v0.x + slope1 * dy;
        let right = v0.x + slope2 * dy;
        draw_span(fb, y, (left, c0.lerp(c1, t)), (right, c0.lerp(c2, t)));
        rows += 1;
    }
    rows
}

/// Fill a triangle whose `v[0]` and `v[1]` share the top row
///
/// Rows run from `first_row` down to `v[2].y` inclusive.
fn fill_flat_top(
    fb: &mut Framebuffer,
    v: [ScreenPoint; 3],
    c: [Color; 3],
    first_row: i64,
) -> usize {
    let [v0, v1, v2] = v;
    let [c0, c1, c2] = c;

    let height = v2.y - v0.y;
    let slope1 = ratio_or(v2.x - v0.x, height, 0.0);
    let slope2 = ratio_or(v2.x - v1.x, v2.y - v1.y, 0.0);

    let mut rows = 0;
    for y in visible_rows(fb, first_row, v2.y as i64) {
        // Distance above the bottom vertex
        let dy = v2.y - y as f32;
        let t = ratio_or(dy, height, 1.0);

        let left = v2.x - slope1 * dy;
        let right = v2.x - slope2 * dy;
        draw_span(fb, y, (left, c2.lerp(c0, t)), (right, c2.lerp(c1, t)));
        rows += 1;
    }
    rows
}

/// Draw one row between two `(x, color)` ends
///
/// Ends beyond the framebuffer are pulled in to `[-1, width]` with their
/// color interpolated to match, so the walk never leaves the visible row by
/// more than a pixel. Returns the number of pixels visited.
fn draw_span(fb: &mut Framebuffer, y: i64, a: (f32, Color), b: (f32, Color)) -> usize {
    let (lo, hi) = (-1.0, fb.width() as f32);
    let ((x0, c0), (x1, c1)) = (a, b);

    if (x0 < lo && x1 < lo) || (x0 > hi && x1 > hi) {
        return 0;
    }

    let clamp_end = |x: f32, color: Color, fallback: f32| {
        let clamped = x.clamp(lo, hi);
        if clamped == x {
            (clamped, color)
        } else {
            (clamped, c0.lerp(c1, ratio_or(clamped - x0, x1 - x0, fallback)))
        }
    };
    let (x0, c0) = clamp_end(x0, c0, 0.0);
    let (x1, c1) = clamp_end(x1, c1, 1.0);

    let row = y as f32;
    draw_line(fb, ScreenPoint::new(x0, row), c0, ScreenPoint::new(x1, row), c1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    fn count_written(fb: &Framebuffer) -> usize {
        fb.pixels().iter().filter(|p| p.a > 0.0).count()
    }

    #[test]
    fn test_bottom_flat_triangle() {
        let mut fb = Framebuffer::new(32, 32);
        let rows = fill(
            &mut fb,
            [pt(15.0, 5.0), pt(5.0, 25.0), pt(25.0, 25.0)],
            [Color::WHITE; 3],
        )
        .unwrap();

        assert_eq!(rows, 21);
        assert!(fb.get(15, 20).is_some_and(|c| c.a > 0.0));
        assert!(fb.get(2, 2).is_some_and(|c| c.a == 0.0));
    }

    #[test]
    fn test_top_flat_triangle() {
        let mut fb = Framebuffer::new(32, 32);
        let rows = fill(
            &mut fb,
            [pt(5.0, 5.0), pt(25.0, 5.0), pt(15.0, 25.0)],
            [Color::WHITE; 3],
        )
        .unwrap();

        assert_eq!(rows, 21);
        assert!(fb.get(15, 10).is_some_and(|c| c.a > 0.0));
        assert!(fb.get(5, 24).is_some_and(|c| c.a == 0.0));
    }

    #[test]
    fn test_split_row_filled_once() {
        let mut fb = Framebuffer::new(32, 32);
        let rows = fill(
            &mut fb,
            [pt(10.0, 2.0), pt(2.0, 12.0), pt(20.0, 30.0)],
            [Color::WHITE; 3],
        )
        .unwrap();

        // One span per row from 2 to 30 inclusive
        assert_eq!(rows, 29);
    }

    #[test]
    fn test_vertex_colors_reached() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let green = Color::rgb(0.0, 1.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);

        let mut fb = Framebuffer::new(16, 16);
        fill(
            &mut fb,
            [pt(0.0, 0.0), pt(12.0, 0.0), pt(0.0, 12.0)],
            [red, green, blue],
        )
        .unwrap();

        assert_eq!(fb.get(0, 0), Some(red));
        assert_eq!(fb.get(12, 0), Some(green));
        assert_eq!(fb.get(0, 12), Some(blue));
    }

    #[test]
    fn test_rows_clipped_to_framebuffer() {
        let mut fb = Framebuffer::new(8, 8);
        let rows = fill(
            &mut fb,
            [pt(-20.0, -20.0), pt(40.0, -20.0), pt(4.0, 40.0)],
            [Color::WHITE; 3],
        )
        .unwrap();

        assert_eq!(rows, 8);
        assert!(count_written(&fb) > 0);
    }

    #[test]
    fn test_span_clamped_to_row() {
        let mut fb = Framebuffer::new(8, 1);
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);

        let visited = draw_span(&mut fb, 0, (-1000.0, red), (1000.0, blue));

        // -1..=8 instead of two thousand columns
        assert_eq!(visited, 10);
        assert_eq!(count_written(&fb), 8);

        let first = fb.get(0, 0).unwrap();
        assert!((first.r - 0.5).abs() < 0.01);
        assert!((first.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_span_inside_row_is_unchanged() {
        let mut fb = Framebuffer::new(8, 1);
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);

        assert_eq!(draw_span(&mut fb, 0, (6.0, blue), (1.0, red)), 6);
        assert_eq!(fb.get(1, 0), Some(red));
        assert_eq!(fb.get(6, 0), Some(blue));
    }

    #[test]
    fn test_span_entirely_off_screen() {
        let mut fb = Framebuffer::new(8, 1);
        assert_eq!(
            draw_span(&mut fb, 0, (-50.0, Color::WHITE), (-2.0, Color::WHITE)),
            0
        );
        assert_eq!(
            draw_span(&mut fb, 0, (9.5, Color::WHITE), (400.0, Color::WHITE)),
            0
        );
        assert_eq!(count_written(&fb), 0);
    }

    #[test]
    fn test_far_vertex_fills_visible_rows() {
        let mut fb = Framebuffer::new(8, 8);
        let rows = fill(
            &mut fb,
            [pt(0.0, 0.0), pt(1.0e7, 0.0), pt(0.0, 7.0)],
            [Color::WHITE; 3],
        )
        .unwrap();

        assert_eq!(rows, 8);
        // Rows above the bottom vertex reach past the right edge
        for y in 0..7 {
            assert!((0..8).all(|x| fb.get(x, y).is_some_and(|c| c.a > 0.0)));
        }
        assert_eq!(count_written(&fb), 7 * 8 + 1);
    }

    #[test]
    fn test_sub_row_triangle_is_degenerate() {
        let mut fb = Framebuffer::new(8, 8);
        let result = fill(
            &mut fb,
            [pt(1.0, 2.1), pt(6.0, 1.9), pt(3.0, 2.2)],
            [Color::WHITE; 3],
        );

        assert_eq!(result, Err(GeometryError::DegenerateTriangle));
        assert_eq!(count_written(&fb), 0);
    }
}
