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

//! PNG output
//!
//! Encodes a finished framebuffer as an 8-bit RGBA PNG. The image is written
//! to a temporary sibling file and renamed into place, so a failed write
//! never leaves a truncated image at the destination.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use super::error::{RasterError, Result};
use super::raster::Framebuffer;

/// Encode a framebuffer as PNG bytes
pub fn encode_png(fb: &Framebuffer) -> Result<Vec<u8>> {
    let (width, height) = image_dimensions(fb.width(), fb.height())?;
    let image = RgbaImage::from_raw(width, height, fb.export()).ok_or(RasterError::ImageSize {
        width: fb.width(),
        height: fb.height(),
    })?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn image_dimensions(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(RasterError::ImageSize { width, height }),
    }
}

/// Write a framebuffer to `path` as PNG
pub fn write_png(fb: &Framebuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(fb)?;

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    log::info!(
        "Wrote {}x{} image to {}",
        fb.width(),
        fb.height(),
        path.display()
    );
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
