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

//! Rasterization session
//!
//! A session exclusively owns the framebuffer and the vertex buffers for one
//! output image. It is created with fixed dimensions, mutated only through
//! buffer loads and draw calls, and consumed when the image is finished.

use log::{debug, warn};

use super::assembler::PrimitiveAssembler;
use super::framebuffer::Framebuffer;
use super::triangle::{FillStrategy, TriangleRasterizer};
use super::types::{Color, Vertex};
use super::viewport::ViewportTransform;
use crate::core::error::IndexError;

/// Outcome of a single draw request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    /// Triangles handed to the rasterizer
    pub drawn: usize,
    /// Triangles skipped because of a geometry error (zero w, zero area)
    pub skipped: usize,
}

impl DrawStats {
    pub fn total(&self) -> usize {
        self.drawn + self.skipped
    }
}

impl std::ops::AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: Self) {
        self.drawn += rhs.drawn;
        self.skipped += rhs.skipped;
    }
}

/// Rasterization session
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{Color, FillStrategy, RenderSession, Vertex};
///
/// let mut session = RenderSession::new(8, 8, FillStrategy::EdgeFunction);
/// session.load_positions(vec![
///     Vertex::new(-1.0, 1.0, 0.0, 1.0),
///     Vertex::new(1.0, 1.0, 0.0, 1.0),
///     Vertex::new(-1.0, -1.0, 0.0, 1.0),
/// ]);
/// session.load_colors(vec![Color::WHITE; 3]);
///
/// let stats = session.draw_arrays_triangles(0, 3).unwrap();
/// assert_eq!(stats.drawn, 1);
/// assert_eq!(session.framebuffer().get(0, 0), Some(Color::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct RenderSession {
    framebuffer: Framebuffer,
    viewport: ViewportTransform,
    rasterizer: TriangleRasterizer,
    positions: Vec<Vertex>,
    colors: Vec<Color>,
}

impl RenderSession {
    /// Create a session with a transparent `width` x `height` framebuffer
    pub fn new(width: usize, height: usize, strategy: FillStrategy) -> Self {
        debug!(
            "Creating {}x{} session with {} fill",
            width, height, strategy
        );

        Self {
            framebuffer: Framebuffer::new(width, height),
            viewport: ViewportTransform::new(width, height),
            rasterizer: TriangleRasterizer::new(strategy),
            positions: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// End the session, handing over the finished framebuffer
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    pub fn strategy(&self) -> FillStrategy {
        self.rasterizer.strategy()
    }

    pub fn set_strategy(&mut self, strategy: FillStrategy) {
        self.rasterizer.set_strategy(strategy);
    }

    /// Replace the position buffer
    pub fn load_positions(&mut self, positions: Vec<Vertex>) {
        debug!("Loaded {} positions", positions.len());
        self.positions = positions;
    }

    /// Replace the color buffer
    pub fn load_colors(&mut self, colors: Vec<Color>) {
        debug!("Loaded {} colors", colors.len());
        self.colors = colors;
    }

    pub fn positions(&self) -> &[Vertex] {
        &self.positions
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Draw `count / 3` triangles starting at buffer index `first`
    ///
    /// Triangles with a vertex at `w = 0` or with zero area are skipped and
    /// reported in [`DrawStats::skipped`]; they do not fail the request.
    ///
    /// # Errors
    ///
    /// Returns an [`IndexError`] when the range is not a whole number of
    /// triangles inside both buffers. The framebuffer is untouched in that
    /// case.
    pub fn draw_arrays_triangles(
        &mut self,
        first: usize,
        count: usize,
    ) -> Result<DrawStats, IndexError> {
        let assembler = PrimitiveAssembler::new(&self.positions, &self.colors);
        let triangles = assembler.triangles(first, count)?;

        let mut stats = DrawStats::default();

        for tri in triangles {
            let projected = tri
                .vertices
                .iter()
                .map(|&v| self.viewport.apply(v))
                .collect::<Result<Vec<_>, _>>();

            let points = match projected {
                Ok(points) => [points[0], points[1], points[2]],
                Err(e) => {
                    warn!("Skipping triangle at index {}: {}", tri.first, e);
                    stats.skipped += 1;
                    continue;
                }
            };

            match self
                .rasterizer
                .draw(&mut self.framebuffer, points, tri.colors)
            {
                Ok(()) => stats.drawn += 1,
                Err(e) => {
                    debug!("Skipping triangle at index {}: {}", tri.first, e);
                    stats.skipped += 1;
                }
            }
        }

        debug!(
            "drawArraysTriangles({}, {}): {} drawn, {} skipped",
            first, count, stats.drawn, stats.skipped
        );

        Ok(stats)
    }
}
