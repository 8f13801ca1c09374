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

//! Headless renderer entry point
//!
//! Renders a small scene of spinning cubes for a number of frames and writes
//! the last frame as a PNG. Settings come from a TOML config file (see
//! `RenderConfig`), overridable from the command line.

use clap::Parser;
use softrender::core::camera::{Camera, DEFAULT_MOVE_SPEED};
use softrender::core::math::{Vec2i, Vec3};
use softrender::core::pipeline::{DisplayMode, FrameStats};
use softrender::core::raster::Color;
use softrender::core::scene::{Mesh, Model};
use softrender::core::texture::{AddressMode, Texture};
use softrender::frontend::export::{load_texture, save_png};
use softrender::frontend::{InputHandler, RenderConfig};
use std::path::PathBuf;

/// Simulated frame time
const FRAME_SECONDS: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "softrender-cli", version, about = "Render a scene on the CPU and save it as PNG")]
struct Args {
    /// Render config file (defaults to $SOFTRENDER_CONFIG, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "frame.png")]
    output: PathBuf,

    /// Number of frames to simulate before saving
    #[arg(short, long, default_value_t = 1)]
    frames: u32,

    /// Display mode (e.g. wireframe, filled, textured_wireframe)
    #[arg(short, long)]
    mode: Option<DisplayMode>,

    /// Texture image for the cubes (checkerboard if omitted)
    #[arg(short, long)]
    texture: Option<PathBuf>,

    /// Wrap negative texture coordinates as well
    #[arg(long)]
    repeat: bool,

    /// Disable backface culling
    #[arg(long)]
    no_culling: bool,

    /// Keys held for every frame, comma separated (e.g. "w,e")
    #[arg(long, value_delimiter = ',')]
    hold: Vec<String>,

    /// Mouse drag applied every frame, in pixels: "dx,dy"
    #[arg(long, value_delimiter = ',', num_args = 2, allow_negative_numbers = true)]
    drag: Vec<i32>,

    /// Cube spin around the y axis in radians per second
    #[arg(long, default_value_t = 0.6)]
    spin: f32,

    /// Write the effective config to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging (RUST_LOG overrides the Info default)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var_os("SOFTRENDER_CONFIG").map(PathBuf::from));
    let mut config = match &config_path {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.display_mode = mode;
    }
    if args.no_culling {
        config.backface_culling = false;
    }

    if let Some(path) = &args.write_config {
        config.save(path)?;
        log::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let mut renderer = config.build_renderer()?;
    let mut input = InputHandler::from_config(&config.input);
    for key in &args.hold {
        if input.handle_key(key, true, renderer.settings_mut()).is_none() {
            log::warn!("Key '{}' is not bound to anything", key);
        }
    }

    let texture = match &args.texture {
        Some(path) => load_texture(path)?,
        None => Texture::checkerboard(64, 8, Color::rgb(220, 220, 220), Color::rgb(180, 40, 40)),
    };
    let texture = if args.repeat {
        texture.with_address_mode(AddressMode::Repeat)
    } else {
        texture
    };

    let mut models = vec![
        Model::new(Mesh::cube(), texture.clone()).with_translation(Vec3::new(2.0, 0.0, 5.0)),
        Model::new(Mesh::cube(), texture).with_translation(Vec3::new(-2.0, 0.0, 5.0)),
    ];

    let drag = match args.drag.as_slice() {
        [dx, dy] => Some(Vec2i::new(*dx, *dy)),
        _ => None,
    };
    input.handle_mouse_button(drag.is_some());

    log::info!(
        "Rendering {} frame(s) at {}x{} in {} mode",
        args.frames,
        config.width,
        config.height,
        renderer.settings().display_mode
    );

    let mut camera = Camera::default();
    let mut stats = FrameStats::default();
    for _ in 0..args.frames.max(1) {
        if let Some(delta) = drag {
            input.handle_mouse_motion(delta, &mut camera);
        }
        camera.apply_movement(input.movement(), FRAME_SECONDS, DEFAULT_MOVE_SPEED);
        for model in &mut models {
            model.rotation.y += args.spin * FRAME_SECONDS;
        }
        stats = renderer.render(&models, &camera);
    }

    log::info!("Last frame: {}", stats);
    save_png(renderer.frame(), &args.output)?;

    Ok(())
}
