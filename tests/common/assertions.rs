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

//! Custom assertions for decoded images

use image::RgbaImage;

/// Assert a decoded pixel has the expected RGBA8 value
#[allow(dead_code)]
pub fn assert_pixel(image: &RgbaImage, x: u32, y: u32, expected: [u8; 4]) {
    let actual = image.get_pixel(x, y).0;
    assert_eq!(
        actual, expected,
        "Pixel ({}, {}) mismatch: expected {:?}, got {:?}",
        x, y, expected, actual
    );
}

/// Assert every pixel of the image is opaque
#[allow(dead_code)]
pub fn assert_fully_covered(image: &RgbaImage) {
    for (x, y, pixel) in image.enumerate_pixels() {
        assert_eq!(pixel.0[3], 255, "Pixel ({}, {}) was not written", x, y);
    }
}

/// Count pixels with non-zero alpha
#[allow(dead_code)]
pub fn count_written(image: &RgbaImage) -> usize {
    image.pixels().filter(|p| p.0[3] > 0).count()
}
