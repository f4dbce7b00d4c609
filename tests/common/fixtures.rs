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

//! Command scripts used across integration tests

use std::path::Path;

/// 4x4 image with a right triangle at pixels (0,0), (3,0), (0,3) colored
/// red, green and blue
#[allow(dead_code)]
pub fn corner_triangle_script(output: &Path) -> String {
    format!(
        "# corner triangle\n\
         png 4 4 {}\n\
         position 4  -1 1 0 1   0.5 1 0 1   -1 -0.5 0 1\n\
         color 3     1 0 0      0 1 0       0 0 1\n\
         drawArraysTriangles 0 3\n",
        output.display()
    )
}

/// Square covering the whole viewport, split along its diagonal
#[allow(dead_code)]
pub fn full_square_script(size: usize, output: &Path) -> String {
    format!(
        "png {size} {size} {}\n\
         position 2  -1 1  1 1  1 -1    -1 1  1 -1  -1 -1\n\
         color 3     1 1 1  1 1 1  1 1 1   1 1 1  1 1 1  1 1 1\n\
         drawArraysTriangles 0 6\n",
        output.display()
    )
}
