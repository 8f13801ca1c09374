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

//! Unit tests for FrameBuffer

use crate::core::error::RenderError;
use crate::core::math::Point2i;
use crate::core::raster::framebuffer::{DEPTH_CLEAR, MAX_DIMENSION};
use crate::core::raster::{Color, FrameBuffer};

#[test]
fn test_new_frame_is_black_and_cleared() {
    let frame = FrameBuffer::new(4, 3).unwrap();
    assert_eq!(frame.width(), 4);
    assert_eq!(frame.height(), 3);
    assert_eq!(frame.color_buffer().len(), 12);
    assert!(frame.color_buffer().iter().all(|&c| c == Color::BLACK));
    assert!(frame.depth_buffer().iter().all(|&d| d == DEPTH_CLEAR));
}

#[test]
fn test_new_rejects_bad_sizes() {
    assert!(matches!(
        FrameBuffer::new(0, 10),
        Err(RenderError::InvalidViewport { width: 0, height: 10 })
    ));
    assert!(FrameBuffer::new(10, 0).is_err());
    assert!(FrameBuffer::new(MAX_DIMENSION + 1, 10).is_err());
    assert!(FrameBuffer::new(MAX_DIMENSION, 1).is_ok());
}

#[test]
fn test_set_pixel_drops_out_of_bounds() {
    let mut frame = FrameBuffer::new(4, 4).unwrap();
    assert!(!frame.set_pixel(Point2i::new(-1, 0), Color::WHITE));
    assert!(!frame.set_pixel(Point2i::new(0, -1), Color::WHITE));
    assert!(!frame.set_pixel(Point2i::new(4, 0), Color::WHITE));
    assert!(!frame.set_pixel(Point2i::new(0, 4), Color::WHITE));
    assert!(frame.color_buffer().iter().all(|&c| c == Color::BLACK));

    // Row 0 is writable
    assert!(frame.set_pixel(Point2i::new(3, 0), Color::WHITE));
    assert_eq!(frame.pixel(3, 0), Some(Color::WHITE));
}

#[test]
fn test_index_layout_is_row_major() {
    let frame = FrameBuffer::new(5, 3).unwrap();
    assert_eq!(frame.index_of(Point2i::new(0, 0)), Some(0));
    assert_eq!(frame.index_of(Point2i::new(4, 0)), Some(4));
    assert_eq!(frame.index_of(Point2i::new(0, 1)), Some(5));
    assert_eq!(frame.index_of(Point2i::new(4, 2)), Some(14));
    assert_eq!(frame.index_of(Point2i::new(5, 2)), None);
}

#[test]
fn test_clear_resets_color_and_depth() {
    let mut frame = FrameBuffer::new(2, 2).unwrap();
    frame.set_pixel(Point2i::new(1, 1), Color::WHITE);
    assert!(frame.test_and_write(0, 0.25, || Color::CYAN));
    assert_eq!(frame.depth(0, 0), Some(0.25));

    let sky = Color::rgb(10, 20, 30);
    frame.clear(sky);
    assert!(frame.color_buffer().iter().all(|&c| c == sky));
    assert!(frame.depth_buffer().iter().all(|&d| d == DEPTH_CLEAR));
}

#[test]
fn test_depth_test_smaller_key_wins() {
    let mut frame = FrameBuffer::new(1, 1).unwrap();
    assert!(frame.test_and_write(0, 0.5, || Color::WHITE));
    // Equal key loses
    assert!(!frame.test_and_write(0, 0.5, || Color::CYAN));
    assert!(!frame.test_and_write(0, 0.75, || Color::CYAN));
    assert_eq!(frame.pixel(0, 0), Some(Color::WHITE));

    assert!(frame.test_and_write(0, -2.0, || Color::CYAN));
    assert_eq!(frame.pixel(0, 0), Some(Color::CYAN));
}

#[test]
fn test_resize_reallocates() {
    let mut frame = FrameBuffer::new(2, 2).unwrap();
    frame.resize(8, 6).unwrap();
    assert_eq!(frame.color_buffer().len(), 48);
    assert_eq!(frame.depth_buffer().len(), 48);

    let err = frame.resize(0, 6);
    assert!(err.is_err());
    assert_eq!((frame.width(), frame.height()), (8, 6));
}

#[test]
fn test_byte_views() {
    let mut frame = FrameBuffer::new(2, 1).unwrap();
    frame.set_pixel(Point2i::new(0, 0), Color(0x80102030));

    assert_eq!(frame.as_bytes().len(), 8);
    assert_eq!(&frame.to_rgba8()[0..4], &[0x10, 0x20, 0x30, 0x80]);
    assert_eq!(&frame.to_rgba8()[4..8], &[0, 0, 0, 0xFF]);
}
