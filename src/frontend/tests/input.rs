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

//! Unit tests for InputHandler

use crate::core::camera::{Camera, Movement};
use crate::core::math::Vec2i;
use crate::core::pipeline::{DisplayMode, RenderSettings};
use crate::frontend::input::{Action, InputConfig, InputHandler, MOUSE_SENSITIVITY};
use tempfile::tempdir;

#[test]
fn test_number_row_selects_display_modes() {
    let mut handler = InputHandler::new();
    let mut settings = RenderSettings::default();

    for (digit, mode) in ["1", "2", "3", "4", "5", "6"].into_iter().zip(DisplayMode::ALL) {
        handler.handle_key(digit, true, &mut settings);
        assert_eq!(settings.display_mode, mode);
    }

    // Releases do not change the mode
    settings.display_mode = DisplayMode::Wireframe;
    handler.handle_key("3", false, &mut settings);
    assert_eq!(settings.display_mode, DisplayMode::Wireframe);
}

#[test]
fn test_culling_toggles_on_press() {
    let mut handler = InputHandler::new();
    let mut settings = RenderSettings::default();

    assert_eq!(
        handler.handle_key("c", true, &mut settings),
        Some(Action::ToggleBackfaceCulling)
    );
    assert!(!settings.backface_culling);
    handler.handle_key("c", false, &mut settings);
    assert!(!settings.backface_culling);
    handler.handle_key("C", true, &mut settings);
    assert!(settings.backface_culling);
}

#[test]
fn test_movement_keys_are_held() {
    let mut handler = InputHandler::new();
    let mut settings = RenderSettings::default();

    handler.handle_key("w", true, &mut settings);
    handler.handle_key("d", true, &mut settings);
    assert_eq!(handler.movement(), Movement::FORWARD | Movement::RIGHT);

    handler.handle_key("w", false, &mut settings);
    assert_eq!(handler.movement(), Movement::RIGHT);

    handler.handle_key("e", true, &mut settings);
    handler.handle_key("q", true, &mut settings);
    assert!(handler.movement().contains(Movement::UP | Movement::DOWN));
}

#[test]
fn test_unbound_and_quit_keys() {
    let mut handler = InputHandler::new();
    let mut settings = RenderSettings::default();

    assert_eq!(handler.handle_key("p", true, &mut settings), None);
    assert_eq!(
        handler.handle_key("Escape", true, &mut settings),
        Some(Action::Quit)
    );
    assert_eq!(settings, RenderSettings::default());
}

#[test]
fn test_mouse_drag_rotates_camera() {
    let mut handler = InputHandler::new();
    let mut camera = Camera::default();

    // No button held: ignored
    handler.handle_mouse_motion(Vec2i::new(10, 10), &mut camera);
    assert_eq!(camera, Camera::default());

    handler.handle_mouse_button(true);
    handler.handle_mouse_motion(Vec2i::new(20, -5), &mut camera);
    assert!((camera.yaw - 20.0 * MOUSE_SENSITIVITY).abs() < 1e-6);
    assert!((camera.pitch + 5.0 * MOUSE_SENSITIVITY).abs() < 1e-6);

    handler.handle_mouse_button(false);
    assert!(!handler.is_dragging());
}

#[test]
fn test_remap_keys() {
    let mut handler = InputHandler::new();
    let mut settings = RenderSettings::default();

    handler.set_key_mapping("F", Action::Filled);
    handler.remove_key_mapping("3");

    assert_eq!(handler.handle_key("3", true, &mut settings), None);
    assert_eq!(handler.handle_key("f", true, &mut settings), Some(Action::Filled));
    assert_eq!(settings.display_mode, DisplayMode::Filled);

    let config = handler.to_config();
    assert_eq!(config.key_mapping.get("f"), Some(&Action::Filled));
    assert!(!config.key_mapping.contains_key("3"));
}

#[test]
fn test_input_config_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.toml");

    let mut config = InputConfig::default_config();
    config.key_mapping.insert("space".to_string(), Action::MoveUp);
    config.save(&path).unwrap();

    let loaded = InputConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.key_mapping.get("w"), Some(&Action::MoveForward));
}
