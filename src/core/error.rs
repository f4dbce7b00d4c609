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

/// Rasterizer error types
use thiserror::Error;

/// Result type for rasterizer operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// Main error type for the rasterizer
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Framebuffer {width}x{height} does not fit a PNG image")]
    ImageSize { width: usize, height: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by individual primitives
///
/// These never abort a session: the offending triangle is skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Vertex ({x}, {y}, {z}) has w = 0")]
    ZeroW { x: f32, y: f32, z: f32 },

    #[error("Vertex ({x}, {y}, {z}, {w}) projects to a non-finite point")]
    NonFinite { x: f32, y: f32, z: f32, w: f32 },

    #[error("Degenerate triangle (zero signed area)")]
    DegenerateTriangle,
}

/// Errors raised by draw requests that do not fit the loaded buffers
///
/// The request is rejected before any pixel is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Vertex count {count} is not a multiple of 3")]
    PartialTriangle { count: usize },

    #[error("Draw range {first}..{end} exceeds buffer length {len}")]
    OutOfRange { first: usize, end: usize, len: usize },

    #[error("Draw range starting at {first} with count {count} overflows")]
    Overflow { first: usize, count: usize },
}

/// Command-file errors
///
/// Every variant carries the 1-based line number of the offending command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: unknown command '{verb}'")]
    UnknownCommand { line: usize, verb: String },

    #[error("line {line}: '{verb}' expects {expected}")]
    MissingArgument {
        line: usize,
        verb: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: '{verb}' does not accept component size {size}")]
    InvalidComponentSize {
        line: usize,
        verb: &'static str,
        size: usize,
    },

    #[error("line {line}: {count} values is not a multiple of component size {size}")]
    ValueCountMismatch {
        line: usize,
        count: usize,
        size: usize,
    },

    #[error("line {line}: invalid framebuffer dimensions {width}x{height}")]
    InvalidDimensions {
        line: usize,
        width: usize,
        height: usize,
    },

    #[error("line {line}: '{verb}' before any 'png' command")]
    NoSession { line: usize, verb: &'static str },
}
