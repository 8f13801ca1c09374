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

//! Row-major matrix types
//!
//! All matrices store their coefficients in a flat row-major array, so the
//! element at row `r`, column `c` of an `R x C` matrix lives at `r * C + c`.
//!
//! # Matrix Kinds
//!
//! | Type    | Use                                                   |
//! |---------|-------------------------------------------------------|
//! | `Mat22` | 2D scale (screen mapping)                             |
//! | `Mat33` | Rotation and scale                                    |
//! | `Mat34` | Affine transform: linear part plus translation column |
//! | `Mat44` | Perspective projection                                |
//!
//! A `Mat34` behaves like a 4x4 matrix whose implicit last row is
//! `[0, 0, 0, 1]`, which keeps affine composition cheap.

use super::vector::{Point2, Point3, Point4, Vec3};
use std::ops::Mul;

/// Determinants smaller than this are treated as singular
const SINGULAR_EPSILON: f32 = 1e-8;

/// 2x2 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat22 {
    pub elems: [f32; 4],
}

impl Mat22 {
    pub const IDENTITY: Mat22 = Mat22 {
        elems: [1.0, 0.0, 0.0, 1.0],
    };

    /// Non-uniform scale along x and y
    pub fn scale(scale_x: f32, scale_y: f32) -> Self {
        Self {
            elems: [scale_x, 0.0, 0.0, scale_y],
        }
    }

    pub fn transform_point(&self, p: Point2) -> Point2 {
        let m = &self.elems;
        Point2::new(m[0] * p.x + m[1] * p.y, m[2] * p.x + m[3] * p.y)
    }
}

/// 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat33 {
    pub elems: [f32; 9],
}

impl Mat33 {
    pub const IDENTITY: Mat33 = Mat33 {
        elems: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Non-uniform scale along each axis
    pub fn scale(scale: Vec3) -> Self {
        Self {
            elems: [scale.x, 0.0, 0.0, 0.0, scale.y, 0.0, 0.0, 0.0, scale.z],
        }
    }

    /// Rotation about the x axis (turns +y toward +z)
    pub fn rotation_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            elems: [1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c],
        }
    }

    /// Rotation about the y axis (turns +z toward +x)
    pub fn rotation_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            elems: [c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c],
        }
    }

    /// Rotation about the z axis (turns +x toward +y)
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self {
            elems: [c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0],
        }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.elems[row * 3 + col]
    }

    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let m = &self.elems;
        Vec3::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z,
            m[3] * v.x + m[4] * v.y + m[5] * v.z,
            m[6] * v.x + m[7] * v.y + m[8] * v.z,
        )
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        Point3::from_vec3(self.transform_vector(p.to_vec3()))
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elems;
        Self {
            elems: [m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]],
        }
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.elems;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Inverse via the adjugate, or `None` when the matrix is singular
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let m = &self.elems;
        let inv_det = 1.0 / det;
        Some(Self {
            elems: [
                (m[4] * m[8] - m[5] * m[7]) * inv_det,
                (m[2] * m[7] - m[1] * m[8]) * inv_det,
                (m[1] * m[5] - m[2] * m[4]) * inv_det,
                (m[5] * m[6] - m[3] * m[8]) * inv_det,
                (m[0] * m[8] - m[2] * m[6]) * inv_det,
                (m[2] * m[3] - m[0] * m[5]) * inv_det,
                (m[3] * m[7] - m[4] * m[6]) * inv_det,
                (m[1] * m[6] - m[0] * m[7]) * inv_det,
                (m[0] * m[4] - m[1] * m[3]) * inv_det,
            ],
        })
    }
}

impl Mul for Mat33 {
    type Output = Mat33;

    fn mul(self, rhs: Mat33) -> Mat33 {
        let mut elems = [0.0; 9];
        for r in 0..3 {
            for c in 0..3 {
                elems[r * 3 + c] = (0..3).map(|k| self.at(r, k) * rhs.at(k, c)).sum();
            }
        }
        Mat33 { elems }
    }
}

/// 3x4 affine matrix (linear part in columns 0-2, translation in column 3)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat34 {
    pub elems: [f32; 12],
}

impl Mat34 {
    pub const IDENTITY: Mat34 = Mat34 {
        elems: [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Pure translation
    pub fn translation(t: Vec3) -> Self {
        Self {
            elems: [1.0, 0.0, 0.0, t.x, 0.0, 1.0, 0.0, t.y, 0.0, 0.0, 1.0, t.z],
        }
    }

    /// Build from a linear part and a translation column
    pub fn from_parts(linear: Mat33, translation: Vec3) -> Self {
        let l = &linear.elems;
        Self {
            elems: [
                l[0],
                l[1],
                l[2],
                translation.x,
                l[3],
                l[4],
                l[5],
                translation.y,
                l[6],
                l[7],
                l[8],
                translation.z,
            ],
        }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.elems[row * 4 + col]
    }

    /// Upper-left 3x3 block
    pub fn linear(&self) -> Mat33 {
        let m = &self.elems;
        Mat33 {
            elems: [m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]],
        }
    }

    /// Translation column
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.elems[3], self.elems[7], self.elems[11])
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        let m = &self.elems;
        Point3::new(
            m[0] * p.x + m[1] * p.y + m[2] * p.z + m[3],
            m[4] * p.x + m[5] * p.y + m[6] * p.z + m[7],
            m[8] * p.x + m[9] * p.y + m[10] * p.z + m[11],
        )
    }

    /// Transform a direction (translation is ignored)
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.linear().transform_vector(v)
    }

    /// General affine inverse, or `None` when the linear part is singular
    pub fn inverse(&self) -> Option<Self> {
        let linear_inv = self.linear().inverse()?;
        let t = linear_inv.transform_vector(self.translation_part());
        Some(Self::from_parts(linear_inv, -t))
    }

    /// Inverse of a rigid transform (orthonormal linear part)
    ///
    /// Uses the transpose of the linear part, so it never fails. The result is
    /// only meaningful when the linear part is a pure rotation.
    pub fn rigid_inverse(&self) -> Self {
        let rotation_t = self.linear().transpose();
        let t = rotation_t.transform_vector(self.translation_part());
        Self::from_parts(rotation_t, -t)
    }
}

impl Mul for Mat34 {
    type Output = Mat34;

    fn mul(self, rhs: Mat34) -> Mat34 {
        let mut elems = [0.0; 12];
        for r in 0..3 {
            for c in 0..4 {
                let mut sum: f32 = (0..3).map(|k| self.at(r, k) * rhs.at(k, c)).sum();
                if c == 3 {
                    sum += self.at(r, 3);
                }
                elems[r * 4 + c] = sum;
            }
        }
        Mat34 { elems }
    }
}

impl Mul<Mat33> for Mat34 {
    type Output = Mat34;

    fn mul(self, rhs: Mat33) -> Mat34 {
        self * Mat34::from_parts(rhs, Vec3::ZERO)
    }
}

impl Mul<Mat34> for Mat33 {
    type Output = Mat34;

    fn mul(self, rhs: Mat34) -> Mat34 {
        Mat34::from_parts(self, Vec3::ZERO) * rhs
    }
}

/// 4x4 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat44 {
    pub elems: [f32; 16],
}

impl Mat44 {
    pub const IDENTITY: Mat44 = Mat44 {
        elems: [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Left-handed perspective projection (camera looks down +z)
    ///
    /// Maps view-space depth `near..far` to NDC `0..1` and copies view-space
    /// `z` into clip `w`.
    ///
    /// # Arguments
    ///
    /// * `aspect_ratio` - Width divided by height
    /// * `vertical_fov` - Vertical field of view in radians
    /// * `near` - Distance to the near plane
    /// * `far` - Distance to the far plane
    pub fn perspective(aspect_ratio: f32, vertical_fov: f32, near: f32, far: f32) -> Self {
        let e = 1.0 / (vertical_fov * 0.5).tan();
        let mut elems = [0.0; 16];
        elems[0] = e / aspect_ratio;
        elems[5] = e;
        elems[10] = far / (far - near);
        elems[11] = (-far * near) / (far - near);
        elems[14] = 1.0;
        Self { elems }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.elems[row * 4 + col]
    }

    pub fn transform_point4(&self, p: Point4) -> Point4 {
        let m = &self.elems;
        Point4::new(
            m[0] * p.x + m[1] * p.y + m[2] * p.z + m[3] * p.w,
            m[4] * p.x + m[5] * p.y + m[6] * p.z + m[7] * p.w,
            m[8] * p.x + m[9] * p.y + m[10] * p.z + m[11] * p.w,
            m[12] * p.x + m[13] * p.y + m[14] * p.z + m[15] * p.w,
        )
    }

    /// Project a point and perform the perspective divide
    ///
    /// `x`, `y` and `z` of the result are divided by clip `w`; `w` itself is
    /// kept so callers can interpolate perspective-correctly.
    pub fn project_point3(&self, p: Point3) -> Point4 {
        let clip = self.transform_point4(Point4::from_point3(p));
        Point4::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w, clip.w)
    }
}

impl Mul for Mat44 {
    type Output = Mat44;

    fn mul(self, rhs: Mat44) -> Mat44 {
        let mut elems = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                elems[r * 4 + c] = (0..4).map(|k| self.at(r, k) * rhs.at(k, c)).sum();
            }
        }
        Mat44 { elems }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_point_near(a: Point3, b: Point3) {
        assert!(
            (a - b).length() < 1e-4,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    fn assert_mat34_near(a: &Mat34, b: &Mat34) {
        for (i, (x, y)) in a.elems.iter().zip(b.elems.iter()).enumerate() {
            assert!((x - y).abs() < 1e-4, "element {} differs: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = Mat33::rotation_y(0.7) * Mat33::scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m * Mat33::IDENTITY, m);
        assert_eq!(Mat33::IDENTITY * m, m);
    }

    #[test]
    fn test_rotation_y_turns_z_toward_x() {
        let v = Mat33::rotation_y(FRAC_PI_2).transform_vector(Vec3::Z);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.z.abs() < 1e-6);
    }

    #[test]
    fn test_rotation_z_turns_x_toward_y() {
        let v = Mat33::rotation_z(FRAC_PI_2).transform_vector(Vec3::X);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mat33_inverse_roundtrip() {
        let m = Mat33::rotation_x(0.3) * Mat33::scale(Vec3::new(2.0, 0.5, 3.0));
        let inv = m.inverse().unwrap();
        let p = Point3::new(1.0, -2.0, 3.0);
        assert_point_near(inv.transform_point(m.transform_point(p)), p);
    }

    #[test]
    fn test_mat33_singular_has_no_inverse() {
        let m = Mat33::scale(Vec3::new(1.0, 0.0, 1.0));
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_mat34_translation_moves_points_not_vectors() {
        let m = Mat34::translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            m.transform_point(Point3::ORIGIN),
            Point3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_mat34_composition_applies_right_to_left() {
        let translate = Mat34::translation(Vec3::new(0.0, 0.0, 5.0));
        let scale = Mat33::scale(Vec3::new(2.0, 2.0, 2.0));
        let m = translate * scale;
        assert_point_near(
            m.transform_point(Point3::new(1.0, 0.0, 0.0)),
            Point3::new(2.0, 0.0, 5.0),
        );
    }

    #[test]
    fn test_mat34_inverse_matches_rigid_inverse() {
        let m = Mat34::translation(Vec3::new(1.0, -2.0, 4.0))
            * (Mat33::rotation_y(0.4) * Mat33::rotation_x(-0.9));
        let general = m.inverse().unwrap();
        let rigid = m.rigid_inverse();
        assert_mat34_near(&general, &rigid);
        assert_mat34_near(&(m * general), &Mat34::IDENTITY);
    }

    #[test]
    fn test_mat34_inverse_with_scale() {
        let m =
            Mat34::translation(Vec3::new(3.0, 0.0, 0.0)) * Mat33::scale(Vec3::new(2.0, 4.0, 8.0));
        let inv = m.inverse().unwrap();
        let p = Point3::new(0.5, 1.5, -2.0);
        assert_point_near(inv.transform_point(m.transform_point(p)), p);
    }

    #[test]
    fn test_perspective_copies_depth_into_w() {
        let proj = Mat44::perspective(4.0 / 3.0, 60f32.to_radians(), 0.1, 100.0);
        let p = proj.project_point3(Point3::new(0.0, 0.0, 7.5));
        assert!((p.w - 7.5).abs() < 1e-5);
    }

    #[test]
    fn test_perspective_maps_near_far_to_unit_depth() {
        let proj = Mat44::perspective(1.0, 60f32.to_radians(), 0.1, 100.0);
        let near = proj.project_point3(Point3::new(0.0, 0.0, 0.1));
        let far = proj.project_point3(Point3::new(0.0, 0.0, 100.0));
        assert!(near.z.abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_perspective_frustum_edge_maps_to_ndc_one() {
        let fov = 60f32.to_radians();
        let proj = Mat44::perspective(1.0, fov, 0.1, 100.0);
        let z = 10.0;
        let y = z * (fov * 0.5).tan();
        let p = proj.project_point3(Point3::new(0.0, y, z));
        assert!((p.y - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_mat22_scale() {
        let p = Mat22::scale(400.0, -300.0).transform_point(Point2::new(0.5, 0.5));
        assert_eq!(p, Point2::new(200.0, -150.0));
    }
}
