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

//! PNG output and texture loading through the `image` crate

use crate::core::error::{RenderError, Result};
use crate::core::raster::FrameBuffer;
use crate::core::texture::Texture;
use image::RgbaImage;
use std::path::Path;

/// Write the color buffer as an RGBA PNG
pub fn save_png(frame: &FrameBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let image = RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba8()).ok_or(
        RenderError::InvalidViewport {
            width: frame.width(),
            height: frame.height(),
        },
    )?;
    image.save(path)?;
    log::info!(
        "Wrote {}x{} frame to {}",
        frame.width(),
        frame.height(),
        path.display()
    );
    Ok(())
}

/// Decode an image file into a texture
///
/// Any format the `image` crate was built with is accepted; pixels are
/// converted to RGBA first.
pub fn load_texture(path: impl AsRef<Path>) -> Result<Texture> {
    let path = path.as_ref();
    let rgba = image::open(path)?.to_rgba8();
    log::debug!("Decoded texture {}", path.display());
    Texture::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw())
}
