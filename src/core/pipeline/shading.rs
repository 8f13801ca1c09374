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

//! Backface culling and flat Lambert lighting
//!
//! Both work on the un-clipped triangle in view space, where the camera sits
//! at the origin. Clipped pieces inherit the source triangle's color.

use crate::core::math::{Point3, Vec3};
use crate::core::raster::Color;

/// Unit normal of a view-space triangle
///
/// Edges are normalized before the cross product so the result does not
/// depend on triangle size. Degenerate triangles give a zero vector.
pub fn face_normal(a: Point3, b: Point3, c: Point3) -> Vec3 {
    let ab = (b - a).normalized();
    let ac = (c - a).normalized();
    ab.cross(ac).normalized()
}

/// True when the face points away from a camera at the view-space origin
///
/// A face seen exactly edge-on is kept.
pub fn is_back_facing(normal: Vec3, a: Point3) -> bool {
    let to_camera = Point3::ORIGIN - a;
    normal.dot(to_camera) < 0.0
}

/// Lambert term for a view-space normal and light direction
///
/// The result is not clamped; [`Color::scaled`] clamps it to `[0, 1]`.
pub fn light_intensity(normal: Vec3, light_direction: Vec3) -> f32 {
    -normal.dot(light_direction)
}

/// White scaled by the light intensity
pub fn shade(normal: Vec3, light_direction: Vec3) -> Color {
    Color::WHITE.scaled(light_intensity(normal, light_direction))
}
