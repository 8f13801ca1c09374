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

//! Orbit/fly camera rig
//!
//! The camera is a pivot point with an offset arm. Yaw and pitch rotate the
//! arm around the pivot:
//!
//! ```text
//! transform = T(pivot) * Ry(yaw) * Rx(pitch) * T(offset)
//! ```
//!
//! A zero offset gives a first-person camera; a negative z offset orbits the
//! pivot from behind.

use crate::core::math::{Mat33, Mat34, Point3, Vec3};
use bitflags::bitflags;

/// Default translation speed in world units per second
pub const DEFAULT_MOVE_SPEED: f32 = 10.0;

bitflags! {
    /// Directions the camera is currently moving in
    ///
    /// Several flags may be held at once (e.g. forward and right for a
    /// diagonal move). Opposite flags cancel out.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Movement: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
    }
}

/// Camera state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Point the camera rotates around
    pub pivot: Point3,
    /// Arm from the pivot to the eye, in rotated space
    pub offset: Vec3,
    /// Rotation about the x axis in radians (unbounded)
    pub pitch: f32,
    /// Rotation about the y axis in radians (unbounded)
    pub yaw: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pivot: Point3::ORIGIN,
            offset: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl Camera {
    pub fn new(pivot: Point3, offset: Vec3) -> Self {
        Self {
            pivot,
            offset,
            ..Self::default()
        }
    }

    /// Camera-to-world transform
    pub fn transform(&self) -> Mat34 {
        let pitch_yaw = Mat33::rotation_y(self.yaw) * Mat33::rotation_x(self.pitch);
        Mat34::translation(self.pivot.to_vec3()) * pitch_yaw * Mat34::translation(self.offset)
    }

    /// World-to-camera transform
    ///
    /// The camera transform is rotation plus translation only, so the rigid
    /// inverse is exact.
    pub fn view(&self) -> Mat34 {
        self.transform().rigid_inverse()
    }

    /// Eye position in world space
    pub fn position(&self) -> Point3 {
        Point3::from_vec3(self.transform().translation_part())
    }

    /// Orientation in world space
    pub fn rotation(&self) -> Mat33 {
        self.transform().linear()
    }

    /// Add to the pitch and yaw angles
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.pitch += delta_pitch;
        self.yaw += delta_yaw;
    }

    /// Move the pivot for one frame of held movement keys
    ///
    /// Forward/backward/left/right are expressed in camera space and rotated
    /// by the current orientation, so "forward" follows the view direction
    /// (pitch included). Up/down move along world y regardless of
    /// orientation.
    ///
    /// # Arguments
    ///
    /// * `movement` - Directions held this frame
    /// * `delta_seconds` - Frame time in seconds
    /// * `speed` - World units per second (see [`DEFAULT_MOVE_SPEED`])
    ///
    /// # Example
    ///
    /// ```
    /// use softrender::core::camera::{Camera, Movement};
    ///
    /// let mut camera = Camera::default();
    /// camera.apply_movement(Movement::FORWARD, 0.5, 10.0);
    /// assert!((camera.pivot.z - 5.0).abs() < 1e-5);
    /// ```
    pub fn apply_movement(&mut self, movement: Movement, delta_seconds: f32, speed: f32) {
        if movement.is_empty() {
            return;
        }

        let step = delta_seconds * speed;
        let mut local = Vec3::ZERO;
        if movement.contains(Movement::FORWARD) {
            local.z += step;
        }
        if movement.contains(Movement::BACKWARD) {
            local.z -= step;
        }
        if movement.contains(Movement::LEFT) {
            local.x -= step;
        }
        if movement.contains(Movement::RIGHT) {
            local.x += step;
        }

        let rotation = self.rotation();
        self.pivot += rotation.transform_vector(local);

        if movement.contains(Movement::UP) {
            self.pivot.y += step;
        }
        if movement.contains(Movement::DOWN) {
            self.pivot.y -= step;
        }

        log::trace!("Camera moved {:?} to {:?}", movement, self.pivot);
    }
}
