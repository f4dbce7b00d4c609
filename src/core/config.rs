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

//! Renderer configuration
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file (`--config`)
//! 3. Environment variables (a `.env` file is loaded by the binary)
//! 4. Command line flags
//!
//! # TOML Format
//!
//! ```toml
//! fill_strategy = "scanline"      # or "edge-function"
//! abort_on_draw_error = false
//! ```
//!
//! # Environment
//!
//! - `SOFTRAST_FILL_STRATEGY`
//! - `SOFTRAST_ABORT_ON_DRAW_ERROR` (`true`/`false`/`1`/`0`)

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{RasterError, Result};
use super::raster::FillStrategy;

/// Environment variable selecting the triangle fill strategy
pub const ENV_FILL_STRATEGY: &str = "SOFTRAST_FILL_STRATEGY";

/// Environment variable controlling whether a failed draw request stops
/// the command stream
pub const ENV_ABORT_ON_DRAW_ERROR: &str = "SOFTRAST_ABORT_ON_DRAW_ERROR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Triangle fill algorithm
    pub fill_strategy: FillStrategy,

    /// Stop processing commands when a draw request is rejected
    ///
    /// Default: false (the request is logged and skipped)
    pub abort_on_draw_error: bool,
}

impl RenderConfig {
    /// Parse a configuration from TOML text
    ///
    /// # Example
    ///
    /// ```
    /// use softrast::core::config::RenderConfig;
    /// use softrast::core::raster::FillStrategy;
    ///
    /// let config = RenderConfig::from_toml_str("fill_strategy = \"scanline\"").unwrap();
    /// assert_eq!(config.fill_strategy, FillStrategy::Scanline);
    /// assert!(!config.abort_on_draw_error);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RasterError::Config(e.to_string()))
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FILL_STRATEGY) {
            self.fill_strategy = value
                .parse()
                .map_err(|e| RasterError::Config(format!("{}: {}", ENV_FILL_STRATEGY, e)))?;
        }

        if let Some(value) = lookup(ENV_ABORT_ON_DRAW_ERROR) {
            self.abort_on_draw_error = parse_bool(&value).ok_or_else(|| {
                RasterError::Config(format!(
                    "{}: expected a boolean, got '{}'",
                    ENV_ABORT_ON_DRAW_ERROR, value
                ))
            })?;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
