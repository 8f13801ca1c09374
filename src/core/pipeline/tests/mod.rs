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

//! Unit tests for the per-frame pipeline


use crate::core::math::Vec3;
use crate::core::pipeline::{DisplayMode, Renderer};
use crate::core::raster::Color;
use crate::core::scene::{Mesh, Model};
use crate::core::texture::Texture;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn renderer(mode: DisplayMode, backface_culling: bool) -> Renderer {
    let mut renderer = Renderer::new(WIDTH, HEIGHT, 60f32.to_radians(), 0.1, 100.0).unwrap();
    let settings = renderer.settings_mut();
    settings.display_mode = mode;
    settings.backface_culling = backface_culling;
    renderer
}

/// Unit cube five units in front of the default camera
fn cube_at(translation: Vec3) -> Model {
    let texture = Texture::checkerboard(8, 2, Color::rgb(200, 40, 40), Color::rgb(40, 40, 200));
    Model::new(Mesh::cube(), texture).with_translation(translation)
}

fn front_cube() -> Model {
    cube_at(Vec3::new(0.0, 0.0, 5.0))
}
