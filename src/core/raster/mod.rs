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

//! Software rasterization pipeline
//!
//! Converts triangles given as homogeneous vertices with per-vertex colors
//! into pixel writes on a [`Framebuffer`]:
//!
//! ```text
//! PrimitiveAssembler -> ViewportTransform -> TriangleRasterizer -> Framebuffer
//!                                               (scanline) -> draw_line
//! ```
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is at the top-left of the framebuffer
//! - X increases to the right, Y increases downward
//! - Normalized device coordinates span [-1, 1] on both axes with +Y up
//!
//! Writes outside the framebuffer are silently dropped; there is no clipping
//! against the view volume.

mod assembler;
mod framebuffer;
mod line;
mod scanline;
mod session;
mod triangle;
mod types;
mod viewport;

#[cfg(test)]
mod tests;

pub use assembler::{AssembledTriangle, PrimitiveAssembler};
pub use framebuffer::Framebuffer;
pub use line::draw_line;
pub use session::{DrawStats, RenderSession};
pub use triangle::{barycentric, edge_function, FillStrategy, TriangleRasterizer};
pub use types::{lerp, ratio_or, Color, PixelPoint, ScreenPoint, Vertex};
pub use viewport::ViewportTransform;
