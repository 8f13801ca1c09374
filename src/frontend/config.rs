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

//! Render configuration file
//!
//! A TOML file describing the viewport, projection and render settings:
//!
//! ```toml
//! width = 800
//! height = 600
//! vertical_fov_degrees = 60.0
//! near = 0.1
//! far = 100.0
//! display_mode = "textured"
//! backface_culling = true
//! clear_color = 4278190080
//!
//! [light_direction]
//! x = 0.0
//! y = 0.0
//! z = 1.0
//! ```
//!
//! Missing fields take their default values.

use crate::core::error::{RenderError, Result};
use crate::core::frustum::Projection;
use crate::core::math::Vec3;
use crate::core::pipeline::{DisplayMode, Light, RenderSettings, Renderer};
use crate::core::raster::framebuffer::MAX_DIMENSION;
use crate::core::raster::Color;
use crate::frontend::input::InputConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to set up a [`Renderer`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub vertical_fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub display_mode: DisplayMode,
    pub backface_culling: bool,
    /// Packed `0xAARRGGBB`
    pub clear_color: Color,
    pub light_direction: Vec3,
    pub input: InputConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        Self {
            width: 800,
            height: 600,
            vertical_fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
            display_mode: settings.display_mode,
            backface_culling: settings.backface_culling,
            clear_color: settings.clear_color,
            light_direction: settings.light.direction,
            input: InputConfig::default_config(),
        }
    }
}

impl RenderConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// `RenderError::ConfigIo` if the file cannot be read,
    /// `RenderError::ConfigParse` if it is not valid for this schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        log::debug!("Loaded render config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is missing
    /// or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            log::info!(
                "Using default render config (failed to load {}: {})",
                path.display(),
                e
            );
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Check the viewport and projection parameters
    ///
    /// # Returns
    ///
    /// The projection described by this configuration
    ///
    /// # Errors
    ///
    /// `RenderError::InvalidViewport` or `RenderError::InvalidProjection`
    pub fn validate(&self) -> Result<Projection> {
        let in_range = |size: u32| (1..=MAX_DIMENSION).contains(&size);
        if !in_range(self.width) || !in_range(self.height) {
            log::warn!("Rejected viewport size {}x{}", self.width, self.height);
            return Err(RenderError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        Projection::new(
            self.width as f32 / self.height as f32,
            self.vertical_fov_degrees.to_radians(),
            self.near,
            self.far,
        )
    }

    /// Per-frame settings described by this configuration
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            display_mode: self.display_mode,
            backface_culling: self.backface_culling,
            light: Light::new(self.light_direction.normalized()),
            clear_color: self.clear_color,
        }
    }

    /// Validate and build a renderer
    pub fn build_renderer(&self) -> Result<Renderer> {
        let projection = self.validate()?;
        let renderer = Renderer::new(
            self.width,
            self.height,
            projection.vertical_fov(),
            projection.near(),
            projection.far(),
        )?;
        Ok(renderer.with_settings(self.render_settings()))
    }
}
