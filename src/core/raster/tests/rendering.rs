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

//! Concrete rendering scenarios
//! Tests for lines and triangles at known pixel positions and colors

use super::super::*;
use super::{written_pixels, BLUE, GREEN, RED};

fn corner_triangle(strategy: FillStrategy) -> Framebuffer {
    let mut fb = Framebuffer::new(4, 4);
    TriangleRasterizer::new(strategy)
        .draw(
            &mut fb,
            [
                ScreenPoint::new(0.0, 0.0),
                ScreenPoint::new(3.0, 0.0),
                ScreenPoint::new(0.0, 3.0),
            ],
            [RED, GREEN, BLUE],
        )
        .unwrap();
    fb
}

#[test]
fn test_edge_function_corner_is_exact_vertex_color() {
    let fb = corner_triangle(FillStrategy::EdgeFunction);
    assert_eq!(fb.get(0, 0), Some(RED));
}

#[test]
fn test_edge_function_interior_blends_all_colors() {
    let fb = corner_triangle(FillStrategy::EdgeFunction);

    let pixel = fb.get(1, 1).unwrap();
    assert!(pixel.r > 0.0);
    assert!(pixel.g > 0.0);
    assert!(pixel.b > 0.0);
    assert_eq!(pixel.a, 1.0);
}

#[test]
fn test_edge_function_excludes_hypotenuse() {
    let fb = corner_triangle(FillStrategy::EdgeFunction);

    // The hypotenuse (x + y = 3) is a right edge: not owned by this triangle
    assert_eq!(
        written_pixels(&fb),
        vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]
    );
}

#[test]
fn test_scanline_corner_is_exact_vertex_color() {
    let fb = corner_triangle(FillStrategy::Scanline);

    assert_eq!(fb.get(0, 0), Some(RED));
    assert_eq!(fb.get(3, 0), Some(GREEN));
    assert_eq!(fb.get(0, 3), Some(BLUE));
}

#[test]
fn test_vertical_line_sets_six_pixels() {
    let mut fb = Framebuffer::new(8, 8);
    let visited = draw_line(
        &mut fb,
        ScreenPoint::new(2.0, 0.0),
        Color::WHITE,
        ScreenPoint::new(2.0, 5.0),
        Color::WHITE,
    );

    assert_eq!(visited, 6);
    let pixels = written_pixels(&fb);
    assert_eq!(pixels.len(), 6);
    assert!(pixels.iter().all(|&(x, _)| x == 2));
    assert_eq!(
        pixels.iter().map(|&(_, y)| y).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4, 5]
    );
    assert!(pixels
        .iter()
        .all(|&(x, y)| fb.get(x, y) == Some(Color::WHITE)));
}

#[test]
fn test_diagonal_line() {
    let mut fb = Framebuffer::new(64, 64);
    draw_line(
        &mut fb,
        ScreenPoint::new(10.0, 10.0),
        RED,
        ScreenPoint::new(50.0, 50.0),
        BLUE,
    );

    assert_eq!(fb.get(10, 10), Some(RED));
    assert_eq!(fb.get(50, 50), Some(BLUE));
    assert!(fb.get(30, 30).is_some_and(|c| c.a == 1.0));
    assert_eq!(written_pixels(&fb).len(), 41);
}

#[test]
fn test_basic_triangle_both_strategies() {
    for strategy in [FillStrategy::EdgeFunction, FillStrategy::Scanline] {
        let mut fb = Framebuffer::new(256, 256);
        TriangleRasterizer::new(strategy)
            .draw(
                &mut fb,
                [
                    ScreenPoint::new(100.0, 100.0),
                    ScreenPoint::new(200.0, 100.0),
                    ScreenPoint::new(150.0, 200.0),
                ],
                [Color::WHITE; 3],
            )
            .unwrap();

        // Center pixel is drawn
        assert_eq!(fb.get(150, 150), Some(Color::WHITE), "{}", strategy);

        // A pixel outside the triangle is not drawn
        assert_eq!(fb.get(50, 50), Some(Color::TRANSPARENT), "{}", strategy);
    }
}

#[test]
fn test_triangle_partially_outside_framebuffer() {
    for strategy in [FillStrategy::EdgeFunction, FillStrategy::Scanline] {
        let mut fb = Framebuffer::new(32, 32);
        TriangleRasterizer::new(strategy)
            .draw(
                &mut fb,
                [
                    ScreenPoint::new(-100.0, -100.0),
                    ScreenPoint::new(2000.0, 10.0),
                    ScreenPoint::new(10.0, 1000.0),
                ],
                [RED, GREEN, BLUE],
            )
            .unwrap();

        // Should not crash; the visible corner is covered
        assert!(fb.get(5, 5).is_some_and(|c| c.a == 1.0), "{}", strategy);
    }
}

#[test]
fn test_strategies_agree_on_interior() {
    let vertices = [
        ScreenPoint::new(4.0, 3.0),
        ScreenPoint::new(40.0, 12.0),
        ScreenPoint::new(15.0, 44.0),
    ];

    let mut edge = Framebuffer::new(48, 48);
    let mut scan = Framebuffer::new(48, 48);
    TriangleRasterizer::new(FillStrategy::EdgeFunction)
        .draw(&mut edge, vertices, [Color::WHITE; 3])
        .unwrap();
    TriangleRasterizer::new(FillStrategy::Scanline)
        .draw(&mut scan, vertices, [Color::WHITE; 3])
        .unwrap();

    // Boundary pixels may differ by rounding; the interior must not
    for (x, y) in written_pixels(&edge) {
        let p = ScreenPoint::new(x as f32, y as f32);
        let w = barycentric(p, vertices).unwrap();
        if w.iter().all(|&wi| wi > 0.1) {
            assert_eq!(scan.get(x, y), Some(Color::WHITE), "({}, {})", x, y);
        }
    }
}
