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

//! Scene data: meshes and placed models
//!
//! Meshes are validated once when they are built, so the per-frame pipeline
//! can index vertices and UVs without checking.

use crate::core::error::{RenderError, Result};
use crate::core::math::{Mat33, Mat34, Point3, Vec3};
use crate::core::texture::{Texture, Uv};

/// A triangle referencing mesh vertices and UVs by 0-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub vertex_indices: [usize; 3],
    pub uv_indices: [usize; 3],
}

impl Face {
    pub fn new(vertex_indices: [usize; 3], uv_indices: [usize; 3]) -> Self {
        Self {
            vertex_indices,
            uv_indices,
        }
    }
}

/// Immutable triangle mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3>,
    uvs: Vec<Uv>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh from 0-based faces
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidMeshIndex` for the first face that
    /// references a vertex or UV past the end of its list.
    pub fn new(vertices: Vec<Point3>, uvs: Vec<Uv>, faces: Vec<Face>) -> Result<Self> {
        for (face_index, face) in faces.iter().enumerate() {
            check_indices(face_index, "vertex", &face.vertex_indices, vertices.len())?;
            check_indices(face_index, "uv", &face.uv_indices, uvs.len())?;
        }

        Ok(Self {
            vertices,
            uvs,
            faces,
        })
    }

    /// Build a mesh from 1-based faces (as written in OBJ files)
    ///
    /// Index 0 is rejected as out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use softrender::core::math::Point3;
    /// use softrender::core::scene::{Face, Mesh};
    /// use softrender::core::texture::Uv;
    ///
    /// let mesh = Mesh::from_one_based(
    ///     vec![
    ///         Point3::new(0.0, 0.0, 0.0),
    ///         Point3::new(1.0, 0.0, 0.0),
    ///         Point3::new(0.0, 1.0, 0.0),
    ///     ],
    ///     vec![Uv::new(0.0, 0.0)],
    ///     vec![Face::new([1, 2, 3], [1, 1, 1])],
    /// )
    /// .unwrap();
    /// assert_eq!(mesh.faces()[0].vertex_indices, [0, 1, 2]);
    ///
    /// let broken = Mesh::from_one_based(vec![], vec![], vec![Face::new([0, 1, 2], [1, 1, 1])]);
    /// assert!(broken.is_err());
    /// ```
    pub fn from_one_based(vertices: Vec<Point3>, uvs: Vec<Uv>, faces: Vec<Face>) -> Result<Self> {
        let mut normalized = Vec::with_capacity(faces.len());
        for (face_index, face) in faces.iter().enumerate() {
            let vertex_indices =
                to_zero_based(face_index, "vertex", face.vertex_indices, vertices.len())?;
            let uv_indices = to_zero_based(face_index, "uv", face.uv_indices, uvs.len())?;
            normalized.push(Face {
                vertex_indices,
                uv_indices,
            });
        }
        Self::new(vertices, uvs, normalized)
    }

    /// Unit cube spanning `-1..1` on every axis
    ///
    /// Twelve triangles, two per side, each side mapped to the full `0..1`
    /// UV square. Faces wind clockwise when seen from outside.
    pub fn cube() -> Self {
        const VERTICES: [[f32; 3]; 8] = [
            [-1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, 1.0, 1.0],
            [1.0, -1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, -1.0, 1.0],
        ];
        // bottom-left, top-left, top-right, bottom-right
        const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        // 1-based, as in the usual OBJ listing of this cube
        const FACES: [([usize; 3], [usize; 3]); 12] = [
            // front
            ([1, 2, 3], [1, 2, 3]),
            ([1, 3, 4], [1, 3, 4]),
            // right
            ([4, 3, 5], [1, 2, 3]),
            ([4, 5, 6], [1, 3, 4]),
            // back
            ([6, 5, 7], [1, 2, 3]),
            ([6, 7, 8], [1, 3, 4]),
            // left
            ([8, 7, 2], [1, 2, 3]),
            ([8, 2, 1], [1, 3, 4]),
            // top
            ([2, 7, 5], [1, 2, 3]),
            ([2, 5, 3], [1, 3, 4]),
            // bottom
            ([6, 8, 1], [1, 2, 3]),
            ([6, 1, 4], [1, 3, 4]),
        ];

        let faces = FACES
            .iter()
            .map(|&(v, t)| Face {
                vertex_indices: [v[0] - 1, v[1] - 1, v[2] - 1],
                uv_indices: [t[0] - 1, t[1] - 1, t[2] - 1],
            })
            .collect();

        Self {
            vertices: VERTICES.iter().map(|&[x, y, z]| Point3::new(x, y, z)).collect(),
            uvs: UVS.iter().map(|&[u, v]| Uv::new(u, v)).collect(),
            faces,
        }
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn uvs(&self) -> &[Uv] {
        &self.uvs
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Positions and UVs of one face
    pub fn face_geometry(&self, face: &Face) -> ([Point3; 3], [Uv; 3]) {
        (
            face.vertex_indices.map(|i| self.vertices[i]),
            face.uv_indices.map(|i| self.uvs[i]),
        )
    }
}

fn check_indices(face: usize, kind: &'static str, indices: &[usize; 3], len: usize) -> Result<()> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(RenderError::InvalidMeshIndex {
            face,
            kind,
            index,
            len,
        }),
        None => Ok(()),
    }
}

fn to_zero_based(
    face: usize,
    kind: &'static str,
    indices: [usize; 3],
    len: usize,
) -> Result<[usize; 3]> {
    if let Some(&index) = indices.iter().find(|&&index| index == 0) {
        return Err(RenderError::InvalidMeshIndex {
            face,
            kind,
            index,
            len,
        });
    }
    Ok(indices.map(|index| index - 1))
}

/// A mesh placed in the world with its texture
#[derive(Debug, Clone)]
pub struct Model {
    pub mesh: Mesh,
    pub texture: Texture,
    /// Euler angles in radians, applied x then y then z
    pub rotation: Vec3,
    pub scale: Vec3,
    pub translation: Vec3,
}

impl Model {
    pub fn new(mesh: Mesh, texture: Texture) -> Self {
        Self {
            mesh,
            texture,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            translation: Vec3::ZERO,
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Model-to-world transform: `T * (Rz * Ry * Rx) * S`
    pub fn transform(&self) -> Mat34 {
        let rotation = Mat33::rotation_z(self.rotation.z)
            * (Mat33::rotation_y(self.rotation.y) * Mat33::rotation_x(self.rotation.x));
        Mat34::translation(self.translation) * rotation * Mat33::scale(self.scale)
    }
}
