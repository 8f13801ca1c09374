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

//! Rasterization stage
//!
//! Turns screen-space triangles into pixels.
//!
//! # Components
//!
//! - [`FrameBuffer`]: color and depth storage for one viewport
//! - [`fill_triangle`]: depth-tested scanline fill (flat or textured)
//! - [`draw_line`], [`draw_wire_triangle`], [`draw_rect`]: overlays that
//!   ignore depth

pub mod framebuffer;
pub mod line;
pub mod primitives;
pub mod rasterizer;

#[cfg(test)]
mod tests;

pub use framebuffer::FrameBuffer;
pub use line::{draw_line, draw_rect, draw_vertex_marker, draw_wire_triangle};
pub use primitives::{
    Barycentric, Color, FillMode, ProjectedTriangle, ProjectedVertex, RasterOutcome,
};
pub use rasterizer::fill_triangle;
