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

//! Key bindings for interactive frontends
//!
//! Maps key names (as reported by whatever windowing layer drives the
//! renderer) to [`Action`]s and tracks which movement keys are held.
//!
//! # Default Bindings
//!
//! | Key | Action |
//! |-----|--------|
//! | `1` to `6` | Display modes, in [`DisplayMode::ALL`] order |
//! | `c` | Toggle backface culling |
//! | `w` / `s` | Move forward / backward |
//! | `a` / `d` | Move left / right |
//! | `e` / `q` | Move up / down |
//! | `escape` | Quit |
//!
//! Dragging with a mouse button held rotates the camera by
//! [`MOUSE_SENSITIVITY`] radians per pixel.

use crate::core::camera::{Camera, Movement};
use crate::core::error::Result;
use crate::core::math::Vec2i;
use crate::core::pipeline::{DisplayMode, RenderSettings};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Radians of camera rotation per pixel of mouse drag
pub const MOUSE_SENSITIVITY: f32 = 0.01;

/// Something a key can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    WireframeVertices,
    Wireframe,
    Filled,
    FilledWireframe,
    Textured,
    TexturedWireframe,
    ToggleBackfaceCulling,
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Quit,
}

impl Action {
    /// Display mode selected by this action, if any
    pub fn display_mode(self) -> Option<DisplayMode> {
        match self {
            Action::WireframeVertices => Some(DisplayMode::WireframeVertices),
            Action::Wireframe => Some(DisplayMode::Wireframe),
            Action::Filled => Some(DisplayMode::Filled),
            Action::FilledWireframe => Some(DisplayMode::FilledWireframe),
            Action::Textured => Some(DisplayMode::Textured),
            Action::TexturedWireframe => Some(DisplayMode::TexturedWireframe),
            _ => None,
        }
    }

    /// Movement direction held while this action's key is down, if any
    pub fn movement(self) -> Option<Movement> {
        match self {
            Action::MoveForward => Some(Movement::FORWARD),
            Action::MoveBackward => Some(Movement::BACKWARD),
            Action::MoveLeft => Some(Movement::LEFT),
            Action::MoveRight => Some(Movement::RIGHT),
            Action::MoveUp => Some(Movement::UP),
            Action::MoveDown => Some(Movement::DOWN),
            _ => None,
        }
    }
}

/// Key bindings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Key name to action
    pub key_mapping: BTreeMap<String, Action>,
}

impl InputConfig {
    /// Create default configuration
    pub fn default_config() -> Self {
        let mut key_mapping = BTreeMap::new();

        // Display modes on the number row
        for (digit, mode) in ["1", "2", "3", "4", "5", "6"].into_iter().zip([
            Action::WireframeVertices,
            Action::Wireframe,
            Action::Filled,
            Action::FilledWireframe,
            Action::Textured,
            Action::TexturedWireframe,
        ]) {
            key_mapping.insert(digit.to_string(), mode);
        }

        key_mapping.insert("c".to_string(), Action::ToggleBackfaceCulling);

        // Movement
        key_mapping.insert("w".to_string(), Action::MoveForward);
        key_mapping.insert("s".to_string(), Action::MoveBackward);
        key_mapping.insert("a".to_string(), Action::MoveLeft);
        key_mapping.insert("d".to_string(), Action::MoveRight);
        key_mapping.insert("e".to_string(), Action::MoveUp);
        key_mapping.insert("q".to_string(), Action::MoveDown);

        key_mapping.insert("escape".to_string(), Action::Quit);

        Self { key_mapping }
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Key names are matched case-insensitively
fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// Input handler for keyboard and mouse
///
/// Turns key and mouse events into render setting changes, held camera
/// movement and camera rotation.
pub struct InputHandler {
    /// Normalized key name to action
    key_mapping: HashMap<String, Action>,

    /// Movement keys currently held
    movement: Movement,

    /// Whether a mouse button is held
    dragging: bool,
}

impl InputHandler {
    /// Create a new input handler with default key bindings
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default_config())
    }

    /// Create an input handler from saved bindings
    pub fn from_config(config: &InputConfig) -> Self {
        let key_mapping = config
            .key_mapping
            .iter()
            .map(|(key, &action)| (normalize_key(key), action))
            .collect();

        Self {
            key_mapping,
            movement: Movement::empty(),
            dragging: false,
        }
    }

    /// Handle a key press or release
    ///
    /// Display mode and culling actions apply to `settings` on press.
    /// Movement actions set their direction on press and clear it on
    /// release.
    ///
    /// # Arguments
    ///
    /// * `key` - Key name, e.g. `"w"` or `"Escape"`
    /// * `pressed` - true if the key was pressed, false if released
    /// * `settings` - Render settings to update
    ///
    /// # Returns
    ///
    /// The mapped action, or `None` for unbound keys
    ///
    /// # Example
    ///
    /// ```
    /// use softrender::core::pipeline::{DisplayMode, RenderSettings};
    /// use softrender::frontend::input::{Action, InputHandler};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut settings = RenderSettings::default();
    ///
    /// assert_eq!(handler.handle_key("3", true, &mut settings), Some(Action::Filled));
    /// assert_eq!(settings.display_mode, DisplayMode::Filled);
    /// ```
    pub fn handle_key(
        &mut self,
        key: &str,
        pressed: bool,
        settings: &mut RenderSettings,
    ) -> Option<Action> {
        let action = *self.key_mapping.get(&normalize_key(key))?;

        if let Some(direction) = action.movement() {
            self.movement.set(direction, pressed);
        } else if pressed {
            if let Some(mode) = action.display_mode() {
                log::info!("Display mode: {}", mode);
                settings.display_mode = mode;
            } else if action == Action::ToggleBackfaceCulling {
                let enabled = settings.toggle_backface_culling();
                log::info!("Backface culling {}", if enabled { "on" } else { "off" });
            }
        }

        Some(action)
    }

    /// Record a mouse button press or release
    pub fn handle_mouse_button(&mut self, pressed: bool) {
        self.dragging = pressed;
    }

    /// Rotate the camera by a mouse movement while a button is held
    ///
    /// Horizontal motion turns (yaw), vertical motion tilts (pitch).
    pub fn handle_mouse_motion(&self, delta: Vec2i, camera: &mut Camera) {
        if self.dragging {
            camera.rotate(delta.y as f32 * MOUSE_SENSITIVITY, delta.x as f32 * MOUSE_SENSITIVITY);
        }
    }

    /// Movement directions currently held
    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set a key mapping
    pub fn set_key_mapping(&mut self, key: &str, action: Action) {
        self.key_mapping.insert(normalize_key(key), action);
    }

    /// Remove a key mapping
    pub fn remove_key_mapping(&mut self, key: &str) {
        self.key_mapping.remove(&normalize_key(key));
    }

    /// Current bindings, sorted by key name
    pub fn to_config(&self) -> InputConfig {
        InputConfig {
            key_mapping: self
                .key_mapping
                .iter()
                .map(|(key, &action)| (key.clone(), action))
                .collect(),
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
