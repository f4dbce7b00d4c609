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

//! Primitive assembly
//!
//! Groups entries of the position and color buffers into triangles for a
//! `drawArraysTriangles(first, count)` request.

use super::types::{Color, Vertex};
use crate::core::error::IndexError;

/// A triangle read from the buffers, before the viewport transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssembledTriangle {
    /// Index of the first vertex in the buffers
    pub first: usize,
    pub vertices: [Vertex; 3],
    pub colors: [Color; 3],
}

/// Reads index-aligned position/color buffers three entries at a time
///
/// # Examples
///
/// ```
/// use softrast::core::raster::{Color, PrimitiveAssembler, Vertex};
///
/// let positions = vec![Vertex::new(0.0, 0.0, 0.0, 1.0); 6];
/// let colors = vec![Color::WHITE; 6];
/// let assembler = PrimitiveAssembler::new(&positions, &colors);
///
/// assert_eq!(assembler.triangles(0, 6).unwrap().count(), 2);
/// assert!(assembler.triangles(3, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveAssembler<'a> {
    positions: &'a [Vertex],
    colors: &'a [Color],
}

impl<'a> PrimitiveAssembler<'a> {
    pub fn new(positions: &'a [Vertex], colors: &'a [Color]) -> Self {
        Self { positions, colors }
    }

    /// Number of entries usable by a draw request
    ///
    /// Positions and colors are indexed in lockstep, so the shorter buffer
    /// bounds every request.
    pub fn len(&self) -> usize {
        self.positions.len().min(self.colors.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate the range `[first, first + count)` and iterate its triangles
    ///
    /// Validation happens up front, so an error means nothing was read.
    ///
    /// # Errors
    ///
    /// - [`IndexError::PartialTriangle`] if `count` is not a multiple of 3
    /// - [`IndexError::Overflow`] if `first + count` overflows
    /// - [`IndexError::OutOfRange`] if the range exceeds either buffer
    pub fn triangles(
        &self,
        first: usize,
        count: usize,
    ) -> Result<impl Iterator<Item = AssembledTriangle> + 'a, IndexError> {
        if count % 3 != 0 {
            return Err(IndexError::PartialTriangle { count });
        }

        let end = first
            .checked_add(count)
            .ok_or(IndexError::Overflow { first, count })?;

        let len = self.len();
        if end > len {
            return Err(IndexError::OutOfRange { first, end, len });
        }

        let (positions, colors): (&'a [Vertex], &'a [Color]) = (self.positions, self.colors);
        let positions = &positions[first..end];
        let colors = &colors[first..end];

        Ok(positions
            .chunks_exact(3)
            .zip(colors.chunks_exact(3))
            .enumerate()
            .map(move |(i, (p, c))| AssembledTriangle {
                first: first + i * 3,
                vertices: [p[0], p[1], p[2]],
                colors: [c[0], c[1], c[2]],
            }))
    }
}
