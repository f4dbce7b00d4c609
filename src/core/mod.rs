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

//! Renderer core
//!
//! - `raster`: framebuffer, viewport transform, line and triangle rasterizers
//! - `command`: command-file parser and interpreter
//! - `config`: layered renderer settings
//! - `encoder`: PNG output
//! - `error`: error taxonomy

pub mod command;
pub mod config;
pub mod encoder;
pub mod error;
pub mod raster;

// Re-export commonly used types
pub use command::{Command, Interpreter, RenderedImage};
pub use config::RenderConfig;
pub use encoder::write_png;
pub use error::{FormatError, GeometryError, IndexError, RasterError, Result};
pub use raster::{Color, FillStrategy, Framebuffer, RenderSession, Vertex};
