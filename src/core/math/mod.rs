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

//! Linear algebra kernel
//!
//! Small value types used by every pipeline stage.
//!
//! # Coordinate System
//!
//! View space is left-handed: +x right, +y up, +z forward (into the screen).
//! The camera sits at the origin of view space looking down +z.
//!
//! # Contents
//!
//! - [`vector`]: 2D/3D/4D vectors and points (float and integer)
//! - [`matrix`]: 2x2, 3x3, 3x4 (affine) and 4x4 (projection) matrices

pub mod matrix;
pub mod vector;

pub use matrix::{Mat22, Mat33, Mat34, Mat44};
pub use vector::{Point2, Point2i, Point3, Point4, Vec2, Vec2i, Vec3};

/// Linear interpolation between two scalars
#[inline]
pub fn mix(begin: f32, end: f32, t: f32) -> f32 {
    begin + (end - begin) * t
}
