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

//! Triangle rasterizer
//!
//! Fills Gouraud-shaded triangles using one of two fill strategies:
//!
//! - [`FillStrategy::EdgeFunction`] (default): tests every pixel of the
//!   bounding box against the three edge functions and interpolates color
//!   with the normalized edge values (barycentric weights).
//! - [`FillStrategy::Scanline`]: splits the triangle into flat-bottom and
//!   flat-top halves and fills each row as a gradient line. See
//!   [`super::scanline`].
//!
//! # Edge Function
//!
//! ```text
//! E(a, b, c) = (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
//! ```
//!
//! `E(v0, v1, v2)` is the signed (doubled) area of the triangle. A zero area
//! means the triangle is degenerate and nothing is drawn.
//!
//! # Fill Rule
//!
//! Pixels are sampled at their integer coordinates. A pixel exactly on an
//! edge is drawn only when that edge is a top or left edge, so triangles
//! sharing an edge never both write the pixels on it.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - [Scratchapixel: Rasterization](https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::framebuffer::Framebuffer;
use super::scanline;
use super::types::{Color, ScreenPoint};
use crate::core::error::GeometryError;

/// Triangle fill algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillStrategy {
    /// Flat-top/flat-bottom decomposition filled row by row
    Scanline,
    /// Bounding-box traversal with edge functions
    #[default]
    EdgeFunction,
}

impl FillStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillStrategy::Scanline => "scanline",
            FillStrategy::EdgeFunction => "edge-function",
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scanline" => Ok(FillStrategy::Scanline),
            "edge-function" | "edge_function" | "edge" => Ok(FillStrategy::EdgeFunction),
            other => Err(format!(
                "unknown fill strategy '{}' (expected 'scanline' or 'edge-function')",
                other
            )),
        }
    }
}

/// Triangle rasterizer parameterized by fill strategy
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{Color, FillStrategy, Framebuffer, ScreenPoint, TriangleRasterizer};
///
/// let mut fb = Framebuffer::new(4, 4);
/// let rasterizer = TriangleRasterizer::new(FillStrategy::EdgeFunction);
///
/// rasterizer
///     .draw(
///         &mut fb,
///         [
///             ScreenPoint::new(0.0, 0.0),
///             ScreenPoint::new(3.0, 0.0),
///             ScreenPoint::new(0.0, 3.0),
///         ],
///         [
///             Color::rgb(1.0, 0.0, 0.0),
///             Color::rgb(0.0, 1.0, 0.0),
///             Color::rgb(0.0, 0.0, 1.0),
///         ],
///     )
///     .unwrap();
///
/// assert_eq!(fb.get(0, 0), Some(Color::rgb(1.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriangleRasterizer {
    strategy: FillStrategy,
}

impl TriangleRasterizer {
    pub fn new(strategy: FillStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: FillStrategy) {
        self.strategy = strategy;
    }

    /// Rasterize a triangle with per-vertex colors
    ///
    /// Every written pixel is fully opaque.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateTriangle`] when the triangle has zero (or
    /// non-finite) signed area. No pixels are written in that case.
    pub fn draw(
        &self,
        fb: &mut Framebuffer,
        vertices: [ScreenPoint; 3],
        colors: [Color; 3],
    ) -> Result<(), GeometryError> {
        log::trace!(
            "Rasterizing triangle ({:.2}, {:.2}), ({:.2}, {:.2}), ({:.2}, {:.2}) with {}",
            vertices[0].x,
            vertices[0].y,
            vertices[1].x,
            vertices[1].y,
            vertices[2].x,
            vertices[2].y,
            self.strategy
        );

        match self.strategy {
            FillStrategy::EdgeFunction => fill_edge_function(fb, vertices, colors),
            FillStrategy::Scanline => scanline::fill(fb, vertices, colors).map(|_| ()),
        }
    }
}

/// Evaluate the edge function of `c` against the directed edge `a -> b`
#[inline(always)]
pub fn edge_function(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint) -> f32 {
    (c.x - a.x) * (b.y - a.y) - (c.y - a.y) * (b.x - a.x)
}

/// Barycentric weights of `p` with respect to `tri`
///
/// Weight `i` belongs to vertex `i` and is the edge function of the opposite
/// edge normalized by the triangle area. The weights sum to 1 and all lie in
/// [0, 1] exactly when `p` is inside the triangle.
///
/// Returns `None` for a degenerate triangle.
pub fn barycentric(p: ScreenPoint, tri: [ScreenPoint; 3]) -> Option<[f32; 3]> {
    let area = edge_function(tri[0], tri[1], tri[2]);
    if area == 0.0 || !area.is_finite() {
        return None;
    }

    Some([
        edge_function(tri[1], tri[2], p) / area,
        edge_function(tri[2], tri[0], p) / area,
        edge_function(tri[0], tri[1], p) / area,
    ])
}

/// Whether the directed edge `a -> b` is a top or left edge
///
/// Only valid for triangles wound so that their area is positive.
#[inline]
fn is_top_left(a: ScreenPoint, b: ScreenPoint) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dy > 0.0 || (dy == 0.0 && dx < 0.0)
}

fn fill_edge_function(
    fb: &mut Framebuffer,
    mut v: [ScreenPoint; 3],
    mut c: [Color; 3],
) -> Result<(), GeometryError> {
    let mut area = edge_function(v[0], v[1], v[2]);
    if area == 0.0 || !area.is_finite() {
        return Err(GeometryError::DegenerateTriangle);
    }

    // Normalize the winding so interior points have positive edge values
    if area < 0.0 {
        v.swap(1, 2);
        c.swap(1, 2);
        area = -area;
    }

    let top_left = [
        is_top_left(v[1], v[2]),
        is_top_left(v[2], v[0]),
        is_top_left(v[0], v[1]),
    ];

    // Bounding box over integer sample positions, clipped to the framebuffer
    let min_x = v[0].x.min(v[1].x).min(v[2].x).ceil().max(0.0);
    let min_y = v[0].y.min(v[1].y).min(v[2].y).ceil().max(0.0);
    let max_x = v[0].x.max(v[1].x).max(v[2].x).floor().min(fb.width() as f32 - 1.0);
    let max_y = v[0].y.max(v[1].y).max(v[2].y).floor().min(fb.height() as f32 - 1.0);

    if min_x > max_x || min_y > max_y {
        return Ok(());
    }

    for y in min_y as i32..=max_y as i32 {
        for x in min_x as i32..=max_x as i32 {
            let p = ScreenPoint::new(x as f32, y as f32);
            let e = [
                edge_function(v[1], v[2], p),
                edge_function(v[2], v[0], p),
                edge_function(v[0], v[1], p),
            ];

            let inside = e
                .iter()
                .zip(top_left)
                .all(|(&ei, tl)| ei > 0.0 || (ei == 0.0 && tl));
            if !inside {
                continue;
            }

            let weights = [e[0] / area, e[1] / area, e[2] / area];
            fb.set(x, y, Color::weighted(&c, weights));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    #[test]
    fn test_edge_function_sign() {
        let a = pt(0.0, 0.0);
        let b = pt(4.0, 0.0);
        // Below the edge in y-down screen space
        assert!(edge_function(a, b, pt(2.0, 2.0)) < 0.0);
        assert!(edge_function(a, b, pt(2.0, -2.0)) > 0.0);
        assert_eq!(edge_function(a, b, pt(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_barycentric_at_vertices() {
        let tri = [pt(0.0, 0.0), pt(100.0, 0.0), pt(50.0, 100.0)];

        assert_eq!(barycentric(tri[0], tri), Some([1.0, 0.0, 0.0]));
        assert_eq!(barycentric(tri[1], tri), Some([0.0, 1.0, 0.0]));
        assert_eq!(barycentric(tri[2], tri), Some([0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_barycentric_centroid() {
        let tri = [pt(0.0, 0.0), pt(90.0, 0.0), pt(0.0, 90.0)];
        let w = barycentric(pt(30.0, 30.0), tri).unwrap();
        for wi in w {
            assert!((wi - 1.0 / 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_barycentric_degenerate() {
        let tri = [pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)];
        assert_eq!(barycentric(pt(1.0, 1.0), tri), None);
    }

    #[test]
    fn test_top_left_classification() {
        // Positive-area triangle: (0,0) -> (0,3) -> (3,0)
        let (a, b, c) = (pt(0.0, 0.0), pt(0.0, 3.0), pt(3.0, 0.0));
        assert!(edge_function(a, b, c) > 0.0);

        assert!(is_top_left(a, b)); // left edge (going down)
        assert!(!is_top_left(b, c)); // right edge (going up)
        assert!(is_top_left(c, a)); // top edge (going left)
    }

    #[test]
    fn test_fill_strategy_parsing() {
        assert_eq!("scanline".parse::<FillStrategy>(), Ok(FillStrategy::Scanline));
        assert_eq!(
            "Edge-Function".parse::<FillStrategy>(),
            Ok(FillStrategy::EdgeFunction)
        );
        assert_eq!(
            "edge_function".parse::<FillStrategy>(),
            Ok(FillStrategy::EdgeFunction)
        );
        assert!("zbuffer".parse::<FillStrategy>().is_err());
        assert_eq!(FillStrategy::default(), FillStrategy::EdgeFunction);
        assert_eq!(FillStrategy::Scanline.to_string(), "scanline");
    }

    #[test]
    fn test_degenerate_triangle_writes_nothing() {
        for strategy in [FillStrategy::EdgeFunction, FillStrategy::Scanline] {
            let mut fb = Framebuffer::new(16, 16);
            let rasterizer = TriangleRasterizer::new(strategy);

            let result = rasterizer.draw(
                &mut fb,
                [pt(1.0, 1.0), pt(5.0, 5.0), pt(9.0, 9.0)],
                [Color::WHITE; 3],
            );

            assert_eq!(result, Err(GeometryError::DegenerateTriangle));
            assert!(fb.pixels().iter().all(|&p| p == Color::TRANSPARENT));
        }
    }
}
