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

//! Perspective divide and screen mapping
//!
//! Normalized device coordinates span `-1..1` with +y up. Screen space has
//! its origin at the top-left corner with +y down:
//!
//! ```text
//! x_screen = round(x_ndc *  width / 2) + width / 2
//! y_screen = round(y_ndc * -height / 2) + height / 2
//! ```
//!
//! The half sizes added at the end use integer division.

use crate::core::math::{Mat22, Mat44, Point2, Point2i, Point3, Vec2i};
use crate::core::raster::ProjectedVertex;
use crate::core::texture::Uv;

/// Target surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Map a point in normalized device coordinates to a pixel
    ///
    /// # Example
    ///
    /// ```
    /// use softrender::core::math::{Point2, Point2i};
    /// use softrender::core::pipeline::Viewport;
    ///
    /// let viewport = Viewport::new(800, 600);
    /// assert_eq!(viewport.to_screen(Point2::new(0.0, 0.0)), Point2i::new(400, 300));
    /// assert_eq!(viewport.to_screen(Point2::new(-1.0, 1.0)), Point2i::new(0, 0));
    /// ```
    pub fn to_screen(&self, ndc: Point2) -> Point2i {
        let scale = Mat22::scale(self.width as f32 / 2.0, self.height as f32 / -2.0);
        let center = Vec2i::new(self.width as i32 / 2, self.height as i32 / 2);
        Point2i::from_point2_rounded(scale.transform_point(ndc)) + center
    }
}

/// Project a view-space point onto the viewport
///
/// `z` keeps the post-divide depth and `w` the view-space depth the
/// rasterizer interpolates as `1/w`.
pub fn project_vertex(
    projection: &Mat44,
    viewport: &Viewport,
    point: Point3,
    uv: Uv,
) -> ProjectedVertex {
    let projected = projection.project_point3(point);
    ProjectedVertex::new(viewport.to_screen(projected.xy()), projected.z, projected.w, uv)
}
