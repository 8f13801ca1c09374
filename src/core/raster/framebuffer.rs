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

//! Color and depth buffers
//!
//! # Memory Layout
//!
//! Both buffers are row-major with the origin at the top-left:
//!
//! ```text
//! index = y * width + x
//! ```
//!
//! The depth buffer stores `1 - 1/w` keys. Clearing resets every key to
//! `1.0`, which is farther than anything in front of the camera.

use super::primitives::Color;
use crate::core::error::{RenderError, Result};
use crate::core::math::Point2i;

/// Largest accepted width or height
///
/// Keeps every in-bounds coordinate representable as `i32`.
pub const MAX_DIMENSION: u32 = 16384;

/// Depth value written by [`FrameBuffer::clear`]
pub const DEPTH_CLEAR: f32 = 1.0;

/// Render target owned by the renderer
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    color: Vec<Color>,
    depth: Vec<f32>,
}

impl FrameBuffer {
    /// Allocate buffers for a viewport
    ///
    /// Color starts black and depth starts cleared.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidViewport` if either dimension is zero or
    /// exceeds [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_size(width, height)?;
        let len = width as usize * height as usize;

        log::debug!("Allocated {}x{} frame buffer", width, height);

        Ok(Self {
            width,
            height,
            color: vec![Color::BLACK; len],
            depth: vec![DEPTH_CLEAR; len],
        })
    }

    /// Reallocate for a new viewport size
    ///
    /// On error the buffers are left untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        validate_size(width, height)?;
        if width == self.width && height == self.height {
            return Ok(());
        }

        let len = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.color.clear();
        self.color.resize(len, Color::BLACK);
        self.depth.clear();
        self.depth.resize(len, DEPTH_CLEAR);

        log::debug!("Resized frame buffer to {}x{}", width, height);
        Ok(())
    }

    /// Fill the color buffer and reset every depth key
    pub fn clear(&mut self, color: Color) {
        self.color.fill(color);
        self.depth.fill(DEPTH_CLEAR);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer index of a screen point, or `None` when off-screen
    #[inline]
    pub fn index_of(&self, point: Point2i) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.color[y as usize * self.width as usize + x as usize])
    }

    pub fn depth(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.depth[y as usize * self.width as usize + x as usize])
    }

    /// Write a pixel without a depth test
    ///
    /// Returns `false` (and writes nothing) for off-screen points.
    #[inline]
    pub fn set_pixel(&mut self, point: Point2i, color: Color) -> bool {
        match self.index_of(point) {
            Some(index) => {
                self.color[index] = color;
                true
            }
            None => false,
        }
    }

    /// Depth-tested write at a buffer index
    ///
    /// The smaller key wins. The color is only computed when the test passes.
    #[inline]
    pub(crate) fn test_and_write(
        &mut self,
        index: usize,
        key: f32,
        color: impl FnOnce() -> Color,
    ) -> bool {
        if key < self.depth[index] {
            self.depth[index] = key;
            self.color[index] = color();
            true
        } else {
            false
        }
    }

    /// Color buffer as packed `0xAARRGGBB` pixels
    pub fn color_buffer(&self) -> &[Color] {
        &self.color
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth
    }

    /// Color buffer as raw native-endian bytes for upload to a presenter
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color)
    }

    /// Color buffer converted to RGBA8 byte order
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.color.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

fn validate_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        log::warn!("Rejected viewport size {}x{}", width, height);
        return Err(RenderError::InvalidViewport { width, height });
    }
    Ok(())
}
