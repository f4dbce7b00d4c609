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

//! Software triangle and line rasterizer
//!
//! Renders triangles with per-vertex colors into an RGBA framebuffer and
//! writes the result as PNG. Input comes from a small command language
//! (`png`, `position`, `color`, `drawArraysTriangles`).
//!
//! # Example
//!
//! ```
//! use softrast::core::raster::{Color, FillStrategy, RenderSession, Vertex};
//!
//! let mut session = RenderSession::new(4, 4, FillStrategy::Scanline);
//! session.load_positions(vec![
//!     Vertex::new(-1.0, 1.0, 0.0, 1.0),
//!     Vertex::new(1.0, 1.0, 0.0, 1.0),
//!     Vertex::new(-1.0, -1.0, 0.0, 1.0),
//! ]);
//! session.load_colors(vec![Color::WHITE; 3]);
//!
//! session.draw_arrays_triangles(0, 3).unwrap();
//! let rgba = session.framebuffer().export();
//! assert_eq!(rgba.len(), 4 * 4 * 4);
//! ```

pub mod core;
