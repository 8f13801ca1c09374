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

//! Unit tests for the rasterization stage

mod framebuffer;
mod line;

use crate::core::math::Point2i;
use crate::core::raster::{Color, ProjectedTriangle, ProjectedVertex};
use crate::core::texture::Uv;

fn vertex(x: i32, y: i32, w: f32) -> ProjectedVertex {
    ProjectedVertex::new(Point2i::new(x, y), 0.0, w, Uv::default())
}

fn uv_vertex(x: i32, y: i32, w: f32, u: f32, v: f32) -> ProjectedVertex {
    ProjectedVertex::new(Point2i::new(x, y), 0.0, w, Uv::new(u, v))
}

fn triangle(vertices: [ProjectedVertex; 3]) -> ProjectedTriangle {
    ProjectedTriangle::new(vertices, Color::WHITE)
}
