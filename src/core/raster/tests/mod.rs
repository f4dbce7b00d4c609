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

//! Rasterizer module tests
//!
//! Tests are organized into the following modules:
//! - `rendering`: Concrete line and triangle scenarios
//! - `fill_rules`: Shared-edge ownership and interpolation bounds
//! - `session`: Draw requests, buffer validation, and skipped geometry

mod rendering;

use super::*;

/// Coordinates of every pixel that has been written (non-zero alpha)
pub(super) fn written_pixels(fb: &Framebuffer) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..fb.height() as i32 {
        for x in 0..fb.width() as i32 {
            if fb.get(x, y).is_some_and(|c| c.a > 0.0) {
                out.push((x, y));
            }
        }
    }
    out
}

pub(super) const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub(super) const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
pub(super) const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
