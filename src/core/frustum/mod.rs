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

//! View frustum construction
//!
//! The frustum is described by six half-spaces in view space. Each plane's
//! normal points into the visible volume, so a point is visible when its
//! signed distance to every plane is positive.
//!
//! # Plane Layout
//!
//! ```text
//!            top
//!        +---------+
//!  left  |  near   |  right      (camera at origin, looking down +z)
//!        +---------+
//!          bottom        far plane at z = far
//! ```
//!
//! The side planes pass through the camera origin. Their normals are the
//! axis directions rotated by half the horizontal (left/right) or vertical
//! (top/bottom) field of view.

use crate::core::error::{RenderError, Result};
use crate::core::math::{Mat44, Point3, Vec3};
use std::f32::consts::PI;

/// Validated perspective projection parameters
///
/// Construction fails fast on parameters that would leave the frustum
/// undefined, so every `Projection` value is safe to build planes and a
/// projection matrix from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    aspect_ratio: f32,
    vertical_fov: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Create projection parameters
    ///
    /// # Arguments
    ///
    /// * `aspect_ratio` - Width divided by height (must be > 0)
    /// * `vertical_fov` - Vertical field of view in radians (0 < fov < PI)
    /// * `near` - Near plane distance (must be > 0)
    /// * `far` - Far plane distance (must be > near)
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidProjection` naming the first violated
    /// precondition. NaN inputs fail every comparison and are rejected too.
    ///
    /// # Example
    ///
    /// ```
    /// use softrender::core::frustum::Projection;
    ///
    /// let projection = Projection::new(800.0 / 600.0, 60f32.to_radians(), 0.1, 100.0);
    /// assert!(projection.is_ok());
    ///
    /// let inverted = Projection::new(1.0, 1.0, 10.0, 1.0);
    /// assert!(inverted.is_err());
    /// ```
    pub fn new(aspect_ratio: f32, vertical_fov: f32, near: f32, far: f32) -> Result<Self> {
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(invalid(format!(
                "aspect ratio must be positive, got {}",
                aspect_ratio
            )));
        }
        if !(vertical_fov > 0.0 && vertical_fov < PI) {
            return Err(invalid(format!(
                "vertical field of view must be in (0, PI), got {}",
                vertical_fov
            )));
        }
        if !(near > 0.0) {
            return Err(invalid(format!("near plane must be positive, got {}", near)));
        }
        if !(far > near && far.is_finite()) {
            return Err(invalid(format!(
                "far plane ({}) must lie beyond near plane ({})",
                far, near
            )));
        }

        Ok(Self {
            aspect_ratio,
            vertical_fov,
            near,
            far,
        })
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn vertical_fov(&self) -> f32 {
        self.vertical_fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Half of the horizontal field of view derived from the aspect ratio
    pub fn half_horizontal_fov(&self) -> f32 {
        (self.aspect_ratio * (self.vertical_fov * 0.5).tan()).atan()
    }

    /// Perspective matrix for these parameters
    pub fn matrix(&self) -> Mat44 {
        Mat44::perspective(self.aspect_ratio, self.vertical_fov, self.near, self.far)
    }

    /// Same parameters with a new aspect ratio (viewport resize)
    pub fn with_aspect_ratio(&self, aspect_ratio: f32) -> Result<Self> {
        Self::new(aspect_ratio, self.vertical_fov, self.near, self.far)
    }
}

fn invalid(reason: String) -> RenderError {
    log::warn!("Rejected projection parameters: {}", reason);
    RenderError::InvalidProjection { reason }
}

/// Identifies one of the six frustum planes
///
/// The discriminant order is the order planes are clipped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
    Near = 4,
    Far = 5,
}

impl FrustumPlane {
    /// All planes in clipping order
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Top,
        FrustumPlane::Bottom,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];
}

/// A half-space bounded by a plane through `point` with inward `normal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Signed distance scaled by the normal length; positive means inside
    #[inline]
    pub fn signed_distance(&self, p: Point3) -> f32 {
        (p - self.point).dot(self.normal)
    }

    /// Strictly inside test (points on the plane are outside)
    #[inline]
    pub fn contains(&self, p: Point3) -> bool {
        self.signed_distance(p) > 0.0
    }
}

/// The six view-space clip planes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Build the clip planes for a projection
    ///
    /// # Example
    ///
    /// ```
    /// use softrender::core::frustum::{Frustum, Projection};
    /// use softrender::core::math::Point3;
    ///
    /// let projection = Projection::new(1.0, 90f32.to_radians(), 0.1, 100.0).unwrap();
    /// let frustum = Frustum::new(&projection);
    ///
    /// assert!(frustum.contains(Point3::new(0.0, 0.0, 5.0)));
    /// assert!(!frustum.contains(Point3::new(0.0, 0.0, -5.0)));
    /// ```
    pub fn new(projection: &Projection) -> Self {
        let half_v = projection.vertical_fov() * 0.5;
        let half_h = projection.half_horizontal_fov();

        let planes = [
            Plane::new(Point3::ORIGIN, Vec3::X.rotate_y(half_h)),
            Plane::new(Point3::ORIGIN, (-Vec3::X).rotate_y(-half_h)),
            Plane::new(Point3::ORIGIN, (-Vec3::Y).rotate_x(-half_v)),
            Plane::new(Point3::ORIGIN, Vec3::Y.rotate_x(half_v)),
            Plane::new(Point3::new(0.0, 0.0, projection.near()), Vec3::Z),
            Plane::new(Point3::new(0.0, 0.0, projection.far()), -Vec3::Z),
        ];

        log::debug!(
            "Built frustum: half_h={:.4} rad, half_v={:.4} rad, near={}, far={}",
            half_h,
            half_v,
            projection.near(),
            projection.far()
        );

        Self { planes }
    }

    pub fn plane(&self, which: FrustumPlane) -> &Plane {
        &self.planes[which as usize]
    }

    /// Planes in clipping order (left, right, top, bottom, near, far)
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// True when the point is strictly inside all six planes
    pub fn contains(&self, p: Point3) -> bool {
        self.planes.iter().all(|plane| plane.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_projection() -> Projection {
        Projection::new(800.0 / 600.0, 60f32.to_radians(), 0.1, 100.0).unwrap()
    }

    #[test]
    fn test_projection_rejects_degenerate_input() {
        let fov = 60f32.to_radians();
        assert!(Projection::new(0.0, fov, 0.1, 100.0).is_err());
        assert!(Projection::new(-1.0, fov, 0.1, 100.0).is_err());
        assert!(Projection::new(1.0, 0.0, 0.1, 100.0).is_err());
        assert!(Projection::new(1.0, PI, 0.1, 100.0).is_err());
        assert!(Projection::new(1.0, fov, 0.0, 100.0).is_err());
        assert!(Projection::new(1.0, fov, 10.0, 10.0).is_err());
        assert!(Projection::new(1.0, fov, 10.0, 1.0).is_err());
        assert!(Projection::new(f32::NAN, fov, 0.1, 100.0).is_err());
    }

    #[test]
    fn test_projection_error_names_the_problem() {
        let err = Projection::new(1.0, 1.0, 5.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("far plane"));
    }

    #[test]
    fn test_side_plane_normals_are_unit_length() {
        let frustum = Frustum::new(&default_projection());
        for plane in frustum.planes() {
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_near_and_far_planes_are_axis_aligned() {
        let frustum = Frustum::new(&default_projection());
        let near = frustum.plane(FrustumPlane::Near);
        let far = frustum.plane(FrustumPlane::Far);
        assert_eq!(near.point, Point3::new(0.0, 0.0, 0.1));
        assert_eq!(near.normal, Vec3::Z);
        assert_eq!(far.point, Point3::new(0.0, 0.0, 100.0));
        assert_eq!(far.normal, -Vec3::Z);
    }

    #[test]
    fn test_points_on_view_axis_inside_between_near_and_far() {
        let frustum = Frustum::new(&default_projection());
        assert!(frustum.contains(Point3::new(0.0, 0.0, 1.0)));
        assert!(frustum.contains(Point3::new(0.0, 0.0, 99.0)));
        assert!(!frustum.contains(Point3::new(0.0, 0.0, 0.05)));
        assert!(!frustum.contains(Point3::new(0.0, 0.0, 101.0)));
    }

    #[test]
    fn test_side_planes_follow_field_of_view() {
        let projection = default_projection();
        let frustum = Frustum::new(&projection);
        let z = 10.0;
        let half_height = z * (projection.vertical_fov() * 0.5).tan();
        let half_width = half_height * projection.aspect_ratio();

        assert!(frustum.contains(Point3::new(0.0, half_height * 0.99, z)));
        assert!(!frustum.contains(Point3::new(0.0, half_height * 1.01, z)));
        assert!(!frustum.contains(Point3::new(0.0, -half_height * 1.01, z)));
        assert!(frustum.contains(Point3::new(half_width * 0.99, 0.0, z)));
        assert!(!frustum.contains(Point3::new(half_width * 1.01, 0.0, z)));
        assert!(!frustum.contains(Point3::new(-half_width * 1.01, 0.0, z)));
    }

    #[test]
    fn test_each_side_plane_rejects_its_own_side() {
        let frustum = Frustum::new(&default_projection());
        let far_left = Point3::new(-100.0, 0.0, 1.0);
        let far_up = Point3::new(0.0, 100.0, 1.0);
        assert!(!frustum.plane(FrustumPlane::Left).contains(far_left));
        assert!(frustum.plane(FrustumPlane::Right).contains(far_left));
        assert!(!frustum.plane(FrustumPlane::Top).contains(far_up));
        assert!(frustum.plane(FrustumPlane::Bottom).contains(far_up));
    }

    #[test]
    fn test_with_aspect_ratio_revalidates() {
        let projection = default_projection();
        assert!(projection.with_aspect_ratio(2.0).is_ok());
        assert!(projection.with_aspect_ratio(0.0).is_err());
    }
}
