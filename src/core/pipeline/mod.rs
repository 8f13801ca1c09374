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

//! Per-frame rendering pipeline
//!
//! [`Renderer`] owns the frame buffer and projection state and turns models
//! seen through a [`Camera`] into pixels.
//!
//! # Stages
//!
//! ```text
//! model space --model transform--> world --view--> view space
//!     -> backface cull (optional)
//!     -> clip against frustum, fan triangulate
//!     -> perspective divide, screen mapping
//!     -> fill / outline according to the display mode
//! ```
//!
//! Culling and lighting use the source triangle before clipping; every piece
//! produced by the clipper shares its color.

pub mod screen;
pub mod settings;
pub mod shading;
pub mod stats;

#[cfg(test)]
mod tests;

pub use screen::{project_vertex, Viewport};
pub use settings::{DisplayMode, Light, RenderSettings};
pub use stats::{FrameStats, TriangleOutcome};

use crate::core::camera::Camera;
use crate::core::clipper::{clip_triangle, UvTriangle};
use crate::core::error::Result;
use crate::core::frustum::{Frustum, Projection};
use crate::core::math::{Mat34, Mat44, Vec3};
use crate::core::raster::{
    draw_vertex_marker, draw_wire_triangle, fill_triangle, Color, FillMode, FrameBuffer,
    ProjectedTriangle,
};
use crate::core::scene::Model;
use crate::core::texture::Texture;

/// Software renderer for one viewport
///
/// Created once at startup, [`resize`](Renderer::resize)d when the target
/// surface changes and asked to [`render`](Renderer::render) every frame.
/// The color buffer of the last frame stays readable through
/// [`frame`](Renderer::frame) until the next render.
///
/// # Example
///
/// ```
/// use softrender::core::camera::Camera;
/// use softrender::core::math::Vec3;
/// use softrender::core::pipeline::{DisplayMode, Renderer};
/// use softrender::core::raster::Color;
/// use softrender::core::scene::{Mesh, Model};
/// use softrender::core::texture::Texture;
///
/// let mut renderer = Renderer::new(320, 240, 60f32.to_radians(), 0.1, 100.0)?;
/// renderer.settings_mut().display_mode = DisplayMode::Filled;
///
/// let texture = Texture::checkerboard(8, 2, Color::WHITE, Color::BLACK);
/// let cube = Model::new(Mesh::cube(), texture).with_translation(Vec3::new(0.0, 0.0, 5.0));
///
/// let stats = renderer.render(&[cube], &Camera::default());
/// assert_eq!(stats.source_triangles, 12);
/// assert!(stats.pixels_written > 0);
/// # Ok::<(), softrender::RenderError>(())
/// ```
pub struct Renderer {
    frame: FrameBuffer,
    viewport: Viewport,
    projection: Projection,
    projection_matrix: Mat44,
    frustum: Frustum,
    settings: RenderSettings,
    /// Reused between models to avoid per-frame allocation
    projected: Vec<ProjectedTriangle>,
}

impl Renderer {
    /// Create a renderer for a `width` x `height` viewport
    ///
    /// The aspect ratio is taken from the viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    /// * `vertical_fov` - Vertical field of view in radians
    /// * `near` - Near plane distance
    /// * `far` - Far plane distance
    ///
    /// # Errors
    ///
    /// `RenderError::InvalidViewport` for an empty or oversized viewport,
    /// `RenderError::InvalidProjection` for unusable projection parameters.
    pub fn new(width: u32, height: u32, vertical_fov: f32, near: f32, far: f32) -> Result<Self> {
        let frame = FrameBuffer::new(width, height)?;
        let viewport = Viewport::new(width, height);
        let projection = Projection::new(viewport.aspect_ratio(), vertical_fov, near, far)?;

        log::debug!(
            "Renderer created: {}x{}, fov {:.1} deg, near {}, far {}",
            width,
            height,
            vertical_fov.to_degrees(),
            near,
            far
        );

        Ok(Self {
            frame,
            viewport,
            projection,
            projection_matrix: projection.matrix(),
            frustum: Frustum::new(&projection),
            settings: RenderSettings::default(),
            projected: Vec::new(),
        })
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Reallocate the buffers and rebuild the projection for a new size
    ///
    /// On error the renderer keeps its previous size.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) == (self.viewport.width, self.viewport.height) {
            return Ok(());
        }

        self.frame.resize(width, height)?;
        let viewport = Viewport::new(width, height);
        let projection = self.projection.with_aspect_ratio(viewport.aspect_ratio())?;

        self.viewport = viewport;
        self.projection = projection;
        self.projection_matrix = projection.matrix();
        self.frustum = Frustum::new(&projection);

        log::debug!("Renderer resized to {}x{}", width, height);
        Ok(())
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    /// Draw one frame
    ///
    /// Clears both buffers, then projects and draws each model in order.
    ///
    /// # Returns
    ///
    /// Counters for the frame (also logged at debug level)
    pub fn render(&mut self, models: &[Model], camera: &Camera) -> FrameStats {
        self.frame.clear(self.settings.clear_color);

        let view = camera.view();
        let mut stats = FrameStats::default();
        let mut projected = std::mem::take(&mut self.projected);

        for model in models {
            projected.clear();
            stats += self.project_model(model, &view, &mut projected);
            stats += self.draw_triangles(&projected, &model.texture);
        }

        self.projected = projected;
        log::debug!("Frame rendered ({}): {}", self.settings.display_mode, stats);
        stats
    }

    /// Transform, cull, clip and project every face of a model
    ///
    /// Projected triangles are appended to `out`. The returned stats carry
    /// per-face outcomes only; nothing is drawn.
    pub fn project_model(
        &self,
        model: &Model,
        view: &Mat34,
        out: &mut Vec<ProjectedTriangle>,
    ) -> FrameStats {
        let model_view = *view * model.transform();
        let light_direction = view.transform_vector(self.settings.light.direction);

        let mut stats = FrameStats::default();
        for face in model.mesh.faces() {
            let (positions, uvs) = model.mesh.face_geometry(face);
            let triangle = UvTriangle::new(positions.map(|p| model_view.transform_point(p)), uvs);
            stats.record(self.project_triangle(&triangle, light_direction, out));
        }
        stats
    }

    /// Take one view-space triangle through culling, clipping and projection
    ///
    /// # Arguments
    ///
    /// * `triangle` - Triangle in view space
    /// * `light_direction` - Light direction in view space
    /// * `out` - Receives zero or more projected triangles
    pub fn project_triangle(
        &self,
        triangle: &UvTriangle,
        light_direction: Vec3,
        out: &mut Vec<ProjectedTriangle>,
    ) -> TriangleOutcome {
        let [a, b, c] = triangle.vertices;
        let normal = shading::face_normal(a, b, c);

        if self.settings.backface_culling && shading::is_back_facing(normal, a) {
            log::trace!("Culled back face {:?}", triangle.vertices);
            return TriangleOutcome::Culled;
        }

        let clipped = clip_triangle(triangle, &self.frustum);
        if clipped.is_empty() {
            log::trace!("Clipped away {:?}", triangle.vertices);
            return TriangleOutcome::ClippedAway;
        }

        let color = shading::shade(normal, light_direction);
        for piece in &clipped {
            let vertices = std::array::from_fn(|i| {
                project_vertex(
                    &self.projection_matrix,
                    &self.viewport,
                    piece.vertices[i],
                    piece.uvs[i],
                )
            });
            out.push(ProjectedTriangle::new(vertices, color));
        }

        TriangleOutcome::Emitted(clipped.len())
    }

    fn draw_triangles(&mut self, triangles: &[ProjectedTriangle], texture: &Texture) -> FrameStats {
        let mode = self.settings.display_mode;
        let mut stats = FrameStats::default();

        for triangle in triangles {
            let mut written = 0;

            if mode.is_filled() {
                written += fill_triangle(&mut self.frame, triangle, FillMode::Flat(triangle.color))
                    .pixels_written();
            } else if mode.is_textured() {
                written += fill_triangle(&mut self.frame, triangle, FillMode::Textured(texture))
                    .pixels_written();
            }

            if let Some(wire_color) = mode.wire_color() {
                written += draw_wire_triangle(&mut self.frame, triangle, wire_color);
            }

            if mode.shows_vertices() {
                for vertex in &triangle.vertices {
                    written += draw_vertex_marker(&mut self.frame, vertex.point, Color::WHITE);
                }
            }

            if written > 0 {
                stats.rasterized += 1;
            }
            stats.pixels_written += written;
        }

        stats
    }
}
