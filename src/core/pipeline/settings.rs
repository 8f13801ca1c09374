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

//! Render settings: display mode, culling, lighting and clear color

use crate::core::error::RenderError;
use crate::core::math::Vec3;
use crate::core::raster::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How projected triangles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Cyan outlines plus a white marker on every vertex
    WireframeVertices,
    /// Outlines only
    #[default]
    Wireframe,
    /// Flat shaded fill
    Filled,
    /// Flat shaded fill with black outlines
    FilledWireframe,
    /// Perspective-correct texturing (unlit)
    Textured,
    /// Texturing with white outlines
    TexturedWireframe,
}

impl DisplayMode {
    /// Every mode, in hotkey order (`1` to `6`)
    pub const ALL: [DisplayMode; 6] = [
        DisplayMode::WireframeVertices,
        DisplayMode::Wireframe,
        DisplayMode::Filled,
        DisplayMode::FilledWireframe,
        DisplayMode::Textured,
        DisplayMode::TexturedWireframe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::WireframeVertices => "wireframe_vertices",
            DisplayMode::Wireframe => "wireframe",
            DisplayMode::Filled => "filled",
            DisplayMode::FilledWireframe => "filled_wireframe",
            DisplayMode::Textured => "textured",
            DisplayMode::TexturedWireframe => "textured_wireframe",
        }
    }

    /// Outline color drawn over the triangle, if any
    pub fn wire_color(self) -> Option<Color> {
        match self {
            DisplayMode::WireframeVertices | DisplayMode::Wireframe => Some(Color::CYAN),
            DisplayMode::FilledWireframe => Some(Color::BLACK),
            DisplayMode::TexturedWireframe => Some(Color::WHITE),
            DisplayMode::Filled | DisplayMode::Textured => None,
        }
    }

    pub fn is_textured(self) -> bool {
        matches!(self, DisplayMode::Textured | DisplayMode::TexturedWireframe)
    }

    pub fn is_filled(self) -> bool {
        matches!(self, DisplayMode::Filled | DisplayMode::FilledWireframe)
    }

    pub fn shows_vertices(self) -> bool {
        self == DisplayMode::WireframeVertices
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        DisplayMode::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| RenderError::UnknownDisplayMode(s.to_string()))
    }
}

/// Directional light
///
/// `direction` is the way the light travels, in world space. A face is
/// fully lit when its normal points straight back against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub direction: Vec3,
}

impl Light {
    pub fn new(direction: Vec3) -> Self {
        Self { direction }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self { direction: Vec3::Z }
    }
}

/// Per-frame render state the caller may change between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub display_mode: DisplayMode,
    pub backface_culling: bool,
    pub light: Light,
    pub clear_color: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::default(),
            backface_culling: true,
            light: Light::default(),
            clear_color: Color::BLACK,
        }
    }
}

impl RenderSettings {
    /// Flip backface culling, returning the new state
    pub fn toggle_backface_culling(&mut self) -> bool {
        self.backface_culling = !self.backface_culling;
        self.backface_culling
    }
}
