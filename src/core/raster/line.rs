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

//! Line, wireframe and marker rendering
//!
//! None of these primitives read or write the depth buffer; they are drawn
//! over whatever is already in the color buffer.

use super::framebuffer::FrameBuffer;
use super::primitives::{Color, ProjectedTriangle};
use crate::core::math::{Point2i, Vec2};

/// Side length of the square drawn on each vertex in marker mode
pub const VERTEX_MARKER_SIZE: i32 = 5;

/// Draw a line with a DDA walk
///
/// Steps once per pixel along the longer axis, so both endpoints are
/// included. Off-screen pixels are dropped.
///
/// # Arguments
///
/// * `frame` - Target buffer
/// * `p0` - Start point
/// * `p1` - End point
/// * `color` - Line color
///
/// # Returns
///
/// Number of pixels written
pub fn draw_line(frame: &mut FrameBuffer, p0: Point2i, p1: Point2i, color: Color) -> usize {
    let delta = p1 - p0;
    let side_length = delta.x.abs().max(delta.y.abs());

    if side_length == 0 {
        return usize::from(frame.set_pixel(p0, color));
    }

    let increment = Vec2::new(
        delta.x as f32 / side_length as f32,
        delta.y as f32 / side_length as f32,
    );

    let mut current = p0.as_point2();
    let mut written = 0;
    for _ in 0..=side_length {
        if frame.set_pixel(Point2i::from_point2_rounded(current), color) {
            written += 1;
        }
        current = current + increment;
    }
    written
}

/// Draw the three edges of a triangle
pub fn draw_wire_triangle(
    frame: &mut FrameBuffer,
    triangle: &ProjectedTriangle,
    color: Color,
) -> usize {
    let points = triangle.vertices.map(|v| v.point);
    (0..3)
        .map(|i| draw_line(frame, points[i], points[(i + 1) % 3], color))
        .sum()
}

/// Fill an axis-aligned rectangle
///
/// `origin` is the top-left corner; `width` and `height` are in pixels.
/// Non-positive sizes draw nothing.
pub fn draw_rect(
    frame: &mut FrameBuffer,
    origin: Point2i,
    width: i32,
    height: i32,
    color: Color,
) -> usize {
    let mut written = 0;
    for y in origin.y..origin.y.saturating_add(height) {
        for x in origin.x..origin.x.saturating_add(width) {
            if frame.set_pixel(Point2i::new(x, y), color) {
                written += 1;
            }
        }
    }
    written
}

/// Draw a square marker centered on a vertex
pub fn draw_vertex_marker(frame: &mut FrameBuffer, center: Point2i, color: Color) -> usize {
    let half = VERTEX_MARKER_SIZE / 2;
    let origin = Point2i::new(center.x - half, center.y - half);
    draw_rect(frame, origin, VERTEX_MARKER_SIZE, VERTEX_MARKER_SIZE, color)
}
