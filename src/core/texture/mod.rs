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

//! Texture storage and nearest-neighbour sampling
//!
//! Textures are stored top row first, as image decoders produce them. UV
//! space has its origin at the bottom-left, so sampling flips the row:
//!
//! ```text
//!  v=1 +--------+   row 0
//!      |        |
//!      |        |
//!  v=0 +--------+   row height-1
//!     u=0      u=1
//! ```

use crate::core::error::{RenderError, Result};
use crate::core::math;
use crate::core::raster::Color;
use serde::{Deserialize, Serialize};

/// A texture coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

impl Uv {
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Linear interpolation between two coordinates
    pub fn mix(self, other: Uv, t: f32) -> Uv {
        Uv {
            u: math::mix(self.u, other.u, t),
            v: math::mix(self.v, other.v, t),
        }
    }

    pub fn scale(self, s: f32) -> Uv {
        Uv {
            u: self.u * s,
            v: self.v * s,
        }
    }
}

/// How out-of-range UVs are mapped back into `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressMode {
    /// Coordinates above 1 wrap, then everything is clamped to `[0, 1]`.
    /// Negative coordinates clamp to the first texel.
    #[default]
    Reference,
    /// Coordinates wrap in both directions (euclidean remainder)
    Repeat,
}

impl AddressMode {
    fn resolve(self, coord: f32) -> f32 {
        let wrapped = match self {
            AddressMode::Reference => {
                if coord - 1.0 > 0.0 {
                    coord % 1.0
                } else {
                    coord
                }
            }
            AddressMode::Repeat => coord.rem_euclid(1.0),
        };
        wrapped.clamp(0.0, 1.0)
    }
}

/// A decoded RGBA texture
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    address_mode: AddressMode,
}

impl Texture {
    /// Wrap already-packed pixels
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidTexture` if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(RenderError::InvalidTexture {
                width,
                height,
                len: pixels.len() * 4,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            address_mode: AddressMode::default(),
        })
    }

    /// Build a texture from decoded RGBA8 bytes (top row first)
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `rgba` - `width * height * 4` bytes in R, G, B, A order
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidTexture` on a size mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use softrender::core::texture::Texture;
    ///
    /// let texture = Texture::from_rgba8(1, 1, &[255, 0, 0, 255]).unwrap();
    /// assert_eq!(texture.pixel(0, 0).unwrap().0, 0xFFFF0000);
    ///
    /// assert!(Texture::from_rgba8(2, 2, &[0; 4]).is_err());
    /// ```
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(RenderError::InvalidTexture {
                width,
                height,
                len: rgba.len(),
            });
        }

        let pixels = rgba
            .chunks_exact(4)
            .map(|px| Color::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();

        log::debug!("Loaded {}x{} texture", width, height);

        Ok(Self {
            width,
            height,
            pixels,
            address_mode: AddressMode::default(),
        })
    }

    /// Procedural checkerboard
    ///
    /// `cells` squares per side alternate between `even` and `odd`, starting
    /// with `even` in the top-left corner. Sizes of zero are bumped to one.
    pub fn checkerboard(size: u32, cells: u32, even: Color, odd: Color) -> Self {
        let size = size.max(1);
        let cell_size = (size / cells.max(1)).max(1);

        let pixels = (0..size)
            .flat_map(|y| {
                (0..size).map(move |x| {
                    if ((x / cell_size) + (y / cell_size)) % 2 == 0 {
                        even
                    } else {
                        odd
                    }
                })
            })
            .collect();

        Self {
            width: size,
            height: size,
            pixels,
            address_mode: AddressMode::default(),
        }
    }

    pub fn with_address_mode(mut self, address_mode: AddressMode) -> Self {
        self.address_mode = address_mode;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    /// Raw pixel at storage coordinates (row 0 is the top row)
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Nearest-neighbour lookup
    ///
    /// The UV is resolved by the texture's [`AddressMode`], scaled to texel
    /// space with `floor(u * width)`, clamped to the last texel, and the row
    /// is flipped so `v = 0` reads the bottom row.
    ///
    /// # Examples
    ///
    /// ```
    /// use softrender::core::raster::Color;
    /// use softrender::core::texture::{Texture, Uv};
    ///
    /// // Top row red, bottom row blue
    /// let texture = Texture::from_rgba8(
    ///     1,
    ///     2,
    ///     &[255, 0, 0, 255, 0, 0, 255, 255],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(texture.sample(Uv::new(0.0, 0.0)), Color::rgb(0, 0, 255));
    /// assert_eq!(texture.sample(Uv::new(0.0, 1.0)), Color::rgb(255, 0, 0));
    /// ```
    pub fn sample(&self, uv: Uv) -> Color {
        let u = self.address_mode.resolve(uv.u);
        let v = self.address_mode.resolve(uv.v);

        let x = texel_index(u, self.width);
        let y = texel_index(v, self.height);
        let row = self.height as usize - 1 - y;

        self.pixels[row * self.width as usize + x]
    }
}

/// Map a resolved coordinate in `[0, 1]` to a texel index in `0..dim`
#[inline]
fn texel_index(coord: f32, dim: u32) -> usize {
    // NaN casts to 0
    let index = (coord * dim as f32).floor() as usize;
    index.min(dim as usize - 1)
}
