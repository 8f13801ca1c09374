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

//! Unit tests for lines, wireframes and markers

use super::{triangle, vertex};
use crate::core::math::Point2i;
use crate::core::raster::{
    draw_line, draw_rect, draw_vertex_marker, draw_wire_triangle, Color, FrameBuffer,
};

fn lit(frame: &FrameBuffer) -> usize {
    frame
        .color_buffer()
        .iter()
        .filter(|&&c| c != Color::BLACK)
        .count()
}

#[test]
fn test_horizontal_line_includes_endpoints() {
    let mut frame = FrameBuffer::new(10, 10).unwrap();
    let written = draw_line(&mut frame, Point2i::new(2, 5), Point2i::new(7, 5), Color::WHITE);
    assert_eq!(written, 6);
    for x in 2..=7 {
        assert_eq!(frame.pixel(x, 5), Some(Color::WHITE));
    }
    assert_eq!(frame.pixel(1, 5), Some(Color::BLACK));
    assert_eq!(frame.pixel(8, 5), Some(Color::BLACK));
}

#[test]
fn test_diagonal_line_steps_longer_axis() {
    let mut frame = FrameBuffer::new(10, 10).unwrap();
    let written = draw_line(&mut frame, Point2i::new(0, 0), Point2i::new(8, 4), Color::WHITE);
    // One pixel per step along x
    assert_eq!(written, 9);
    assert_eq!(frame.pixel(0, 0), Some(Color::WHITE));
    assert_eq!(frame.pixel(8, 4), Some(Color::WHITE));
    assert_eq!(frame.pixel(4, 2), Some(Color::WHITE));
}

#[test]
fn test_shallow_line_rounds_minor_axis() {
    let mut frame = FrameBuffer::new(6, 6).unwrap();
    let written = draw_line(&mut frame, Point2i::new(0, 0), Point2i::new(4, 3), Color::WHITE);
    assert_eq!(written, 5);

    // y steps 0.75, 1.5, 2.25 round to 1, 2, 2
    assert_eq!(frame.pixel(1, 1), Some(Color::WHITE));
    assert_eq!(frame.pixel(1, 0), Some(Color::BLACK));
    assert_eq!(frame.pixel(2, 2), Some(Color::WHITE));
    assert_eq!(frame.pixel(3, 2), Some(Color::WHITE));
    assert_eq!(frame.pixel(4, 3), Some(Color::WHITE));
}

#[test]
fn test_line_depth_untouched() {
    let mut frame = FrameBuffer::new(10, 10).unwrap();
    draw_line(&mut frame, Point2i::new(0, 9), Point2i::new(9, 0), Color::WHITE);
    assert!(frame.depth_buffer().iter().all(|&d| d == 1.0));
}

#[test]
fn test_single_point_line() {
    let mut frame = FrameBuffer::new(4, 4).unwrap();
    assert_eq!(draw_line(&mut frame, Point2i::new(1, 2), Point2i::new(1, 2), Color::CYAN), 1);
    assert_eq!(frame.pixel(1, 2), Some(Color::CYAN));
}

#[test]
fn test_line_clipped_at_edges() {
    let mut frame = FrameBuffer::new(4, 4).unwrap();
    let written = draw_line(&mut frame, Point2i::new(-3, 1), Point2i::new(6, 1), Color::WHITE);
    assert_eq!(written, 4);
    assert_eq!(lit(&frame), 4);
}

#[test]
fn test_wire_triangle_draws_outline_only() {
    let mut frame = FrameBuffer::new(20, 20).unwrap();
    let tri = triangle([vertex(2, 2, 1.0), vertex(17, 2, 1.0), vertex(2, 17, 1.0)]);
    draw_wire_triangle(&mut frame, &tri, Color::CYAN);

    assert_eq!(frame.pixel(2, 2), Some(Color::CYAN));
    assert_eq!(frame.pixel(10, 2), Some(Color::CYAN));
    assert_eq!(frame.pixel(2, 10), Some(Color::CYAN));
    // Interior stays empty
    assert_eq!(frame.pixel(5, 5), Some(Color::BLACK));
}

#[test]
fn test_rect_fills_exact_area() {
    let mut frame = FrameBuffer::new(10, 10).unwrap();
    assert_eq!(draw_rect(&mut frame, Point2i::new(1, 2), 3, 4, Color::WHITE), 12);
    assert_eq!(lit(&frame), 12);
    assert_eq!(frame.pixel(3, 5), Some(Color::WHITE));
    assert_eq!(frame.pixel(4, 5), Some(Color::BLACK));

    assert_eq!(draw_rect(&mut frame, Point2i::new(0, 0), 0, 5, Color::WHITE), 0);
    assert_eq!(draw_rect(&mut frame, Point2i::new(0, 0), -2, 5, Color::WHITE), 0);
}

#[test]
fn test_vertex_marker_is_centered() {
    let mut frame = FrameBuffer::new(10, 10).unwrap();
    assert_eq!(draw_vertex_marker(&mut frame, Point2i::new(5, 5), Color::WHITE), 25);
    assert_eq!(frame.pixel(3, 3), Some(Color::WHITE));
    assert_eq!(frame.pixel(7, 7), Some(Color::WHITE));
    assert_eq!(frame.pixel(8, 7), Some(Color::BLACK));

    // Partially off-screen
    let mut corner = FrameBuffer::new(10, 10).unwrap();
    assert_eq!(draw_vertex_marker(&mut corner, Point2i::new(0, 0), Color::WHITE), 9);
}
