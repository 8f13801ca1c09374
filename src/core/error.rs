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

//! Error types for the rendering pipeline
//!
//! Only configuration and asset problems surface as errors. Geometry that
//! cannot be drawn (back faces, triangles outside the frustum, zero-area
//! spans, off-screen pixels) is skipped silently by the pipeline.

use thiserror::Error;

/// Errors raised while configuring the renderer or building scene data
#[derive(Debug, Error)]
pub enum RenderError {
    /// Projection parameters that would make the frustum undefined
    #[error("Invalid projection: {reason}")]
    InvalidProjection { reason: String },

    /// Viewport dimensions that cannot back a frame buffer
    #[error("Invalid viewport size: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// A face references a vertex or UV outside the mesh
    #[error("Face {face} references {kind} index {index}, but the mesh has {len}")]
    InvalidMeshIndex {
        face: usize,
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// Texture dimensions do not match the supplied pixel data
    #[error("Invalid texture: {width}x{height} with {len} bytes of pixel data")]
    InvalidTexture { width: u32, height: u32, len: usize },

    /// Display mode name not recognised (command line or config)
    #[error("Unknown display mode: {0}")]
    UnknownDisplayMode(String),

    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// PNG decoding or encoding failed
    #[cfg(feature = "png")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, RenderError>;
