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

//! Polygon clipping against the view frustum
//!
//! Implements Sutherland-Hodgman clipping of a textured triangle against the
//! six frustum planes, followed by fan re-triangulation.
//!
//! # Algorithm
//!
//! For each plane, the closed vertex loop is walked as (previous, current)
//! pairs:
//!
//! 1. If the pair straddles the plane, emit the intersection point with its
//!    UV interpolated at the same parameter
//! 2. If the current vertex is inside, emit it
//!
//! Clipping a convex polygon against a plane keeps it convex and adds at most
//! one vertex, so a triangle clipped by six planes has at most nine.
//!
//! # References
//!
//! - [Sutherland-Hodgman algorithm](https://en.wikipedia.org/wiki/Sutherland%E2%80%93Hodgman_algorithm)

use crate::core::frustum::{Frustum, Plane};
use crate::core::math::Point3;
use crate::core::texture::Uv;

#[cfg(test)]
mod tests;

/// Upper bound on vertices after clipping a triangle against six planes
pub const MAX_CLIPPED_VERTICES: usize = 9;

/// A view-space triangle with per-vertex texture coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvTriangle {
    pub vertices: [Point3; 3],
    pub uvs: [Uv; 3],
}

impl UvTriangle {
    pub fn new(vertices: [Point3; 3], uvs: [Uv; 3]) -> Self {
        Self { vertices, uvs }
    }
}

/// A polygon vertex: position paired with its texture coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipVertex {
    pub position: Point3,
    pub uv: Uv,
}

impl ClipVertex {
    pub fn new(position: Point3, uv: Uv) -> Self {
        Self { position, uv }
    }

    fn mix(self, other: ClipVertex, t: f32) -> ClipVertex {
        ClipVertex {
            position: self.position.mix(other.position, t),
            uv: self.uv.mix(other.uv, t),
        }
    }
}

/// A closed convex polygon produced while clipping one triangle
///
/// Vertices are kept in winding order; the last vertex connects back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<ClipVertex>,
    /// Scratch buffer reused between planes
    scratch: Vec<ClipVertex>,
}

impl Polygon {
    /// Start a polygon from a source triangle
    pub fn from_triangle(triangle: &UvTriangle) -> Self {
        let mut vertices = Vec::with_capacity(MAX_CLIPPED_VERTICES);
        vertices.extend(
            triangle
                .vertices
                .iter()
                .zip(triangle.uvs.iter())
                .map(|(&position, &uv)| ClipVertex::new(position, uv)),
        );

        Self {
            vertices,
            scratch: Vec::with_capacity(MAX_CLIPPED_VERTICES),
        }
    }

    pub fn vertices(&self) -> &[ClipVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Clip against a single plane, keeping the part on the normal's side
    ///
    /// Vertices lying exactly on the plane are dropped unless they arise as
    /// an intersection. An empty polygon stays empty.
    pub fn clip_against_plane(&mut self, plane: &Plane) {
        let Some(&last) = self.vertices.last() else {
            return;
        };

        self.scratch.clear();

        let mut previous = last;
        let mut previous_dot = plane.signed_distance(previous.position);

        for &current in &self.vertices {
            let current_dot = plane.signed_distance(current.position);

            // The edge crosses the plane
            if previous_dot * current_dot < 0.0 {
                let t = previous_dot / (previous_dot - current_dot);
                self.scratch.push(previous.mix(current, t));
            }

            if current_dot > 0.0 {
                self.scratch.push(current);
            }

            previous = current;
            previous_dot = current_dot;
        }

        std::mem::swap(&mut self.vertices, &mut self.scratch);
    }

    /// Clip against all six frustum planes in order
    pub fn clip_against_frustum(&mut self, frustum: &Frustum) {
        for plane in frustum.planes() {
            self.clip_against_plane(plane);
            if self.vertices.is_empty() {
                break;
            }
        }
    }

    /// Fan triangulation from the first vertex
    ///
    /// Produces `max(0, n - 2)` triangles `(v0, v[i], v[i + 1])`.
    pub fn triangulate(&self) -> Vec<UvTriangle> {
        let Some(&first) = self.vertices.first() else {
            return Vec::new();
        };

        self.vertices
            .windows(2)
            .skip(1)
            .map(|pair| {
                UvTriangle::new(
                    [first.position, pair[0].position, pair[1].position],
                    [first.uv, pair[0].uv, pair[1].uv],
                )
            })
            .collect()
    }
}

/// Clip a triangle against the frustum and re-triangulate the result
///
/// # Returns
///
/// Zero triangles when the triangle lies fully outside, the input
/// triangle when it lies fully inside, and up to seven fan triangles
/// otherwise.
///
/// # Examples
///
/// ```
/// use softrender::core::clipper::{clip_triangle, UvTriangle};
/// use softrender::core::frustum::{Frustum, Projection};
/// use softrender::core::math::Point3;
/// use softrender::core::texture::Uv;
///
/// let projection = Projection::new(1.0, 60f32.to_radians(), 0.1, 100.0).unwrap();
/// let frustum = Frustum::new(&projection);
///
/// let behind = UvTriangle::new(
///     [
///         Point3::new(0.0, 0.0, -1.0),
///         Point3::new(1.0, 0.0, -1.0),
///         Point3::new(0.0, 1.0, -1.0),
///     ],
///     [Uv::default(); 3],
/// );
/// assert!(clip_triangle(&behind, &frustum).is_empty());
/// ```
pub fn clip_triangle(triangle: &UvTriangle, frustum: &Frustum) -> Vec<UvTriangle> {
    let mut polygon = Polygon::from_triangle(triangle);
    polygon.clip_against_frustum(frustum);
    polygon.triangulate()
}
