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

//! softrender: a CPU-only 3D rendering pipeline
//!
//! Takes textured triangle meshes, a camera and a perspective projection and
//! produces a rasterized image with per-pixel depth testing,
//! perspective-correct texture mapping and flat directional lighting.
//!
//! # Architecture
//!
//! - [`core`]: the geometry-to-pixel pipeline (math, frustum, camera,
//!   clipping, rasterization, texturing)
//! - [`frontend`]: configuration, input bindings and image export around the
//!   core
//!
//! # Example
//!
//! ```
//! use softrender::core::camera::Camera;
//! use softrender::core::math::Vec3;
//! use softrender::core::pipeline::{DisplayMode, Renderer};
//! use softrender::core::raster::Color;
//! use softrender::core::scene::{Mesh, Model};
//! use softrender::core::texture::Texture;
//!
//! let mut renderer = Renderer::new(800, 600, 60f32.to_radians(), 0.1, 100.0)?;
//! renderer.settings_mut().display_mode = DisplayMode::Textured;
//!
//! let texture = Texture::checkerboard(64, 8, Color::WHITE, Color::rgb(80, 80, 80));
//! let cube = Model::new(Mesh::cube(), texture).with_translation(Vec3::new(0.0, 0.0, 5.0));
//!
//! let stats = renderer.render(&[cube], &Camera::default());
//! assert_eq!(stats.emitted, 2);
//! let pixels = renderer.frame().color_buffer();
//! # let _ = pixels;
//! # Ok::<(), softrender::RenderError>(())
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T>`], an alias for
//! `Result<T, RenderError>`. Geometry that cannot be drawn is skipped, not
//! reported as an error.

pub mod core;
pub mod frontend;

// Re-export commonly used types
pub use core::error::{RenderError, Result};
