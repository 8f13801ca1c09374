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

//! Rasterizer primitive type definitions
//!
//! This module contains the types that flow from projection into the
//! rasterizer: packed colors, projected vertices and triangles, barycentric
//! weights, and the per-pixel fill payload.

use crate::core::math::{Point2i, Vec2};
use crate::core::texture::{Texture, Uv};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A packed 32-bit color in `0xAARRGGBB` layout
///
/// This is the pixel format of the color buffer. The type is
/// `#[repr(transparent)]` over `u32`, so a `&[Color]` can be viewed as raw
/// bytes with `bytemuck` for presentation.
///
/// # Examples
///
/// ```
/// use softrender::core::raster::Color;
///
/// let color = Color::from_argb(0xFF, 0x40, 0x80, 0xC0);
/// assert_eq!(color.0, 0xFF4080C0);
/// assert_eq!(color.r(), 0x40);
/// assert_eq!(color.g(), 0x80);
/// assert_eq!(color.b(), 0xC0);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const CYAN: Color = Color(0xFF00_FFFF);

    /// Pack individual channels
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Opaque color from red, green and blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// Color from RGBA byte order (as produced by image decoders)
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::from_argb(rgba[3], rgba[0], rgba[1], rgba[2])
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Unpack into RGBA byte order
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    /// Scale the color channels by a light intensity
    ///
    /// `intensity` is clamped to `[0, 1]` (NaN counts as 0). Alpha is left
    /// untouched; each channel is truncated after scaling.
    ///
    /// # Examples
    ///
    /// ```
    /// use softrender::core::raster::Color;
    ///
    /// let half = Color::WHITE.scaled(0.5);
    /// assert_eq!(half, Color::from_argb(0xFF, 127, 127, 127));
    ///
    /// assert_eq!(Color::WHITE.scaled(-1.0), Color::BLACK);
    /// assert_eq!(Color::WHITE.scaled(3.0), Color::WHITE);
    /// ```
    pub fn scaled(self, intensity: f32) -> Self {
        let t = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        let scale = |channel: u8| (channel as f32 * t) as u8;
        Self::from_argb(self.a(), scale(self.r()), scale(self.g()), scale(self.b()))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(0x{:08X})", self.0)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

/// A vertex after perspective divide and screen mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertex {
    /// Integer screen position (origin top-left, y down)
    pub point: Point2i,
    /// NDC depth after the perspective divide
    pub z: f32,
    /// Clip-space w before the divide (view-space depth)
    pub w: f32,
    /// Texture coordinate carried from the mesh
    pub uv: Uv,
}

impl ProjectedVertex {
    pub fn new(point: Point2i, z: f32, w: f32, uv: Uv) -> Self {
        Self { point, z, w, uv }
    }
}

/// A screen-space triangle ready for rasterization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedTriangle {
    pub vertices: [ProjectedVertex; 3],
    /// Flat-shaded color (white scaled by the light intensity)
    pub color: Color,
}

impl ProjectedTriangle {
    pub fn new(vertices: [ProjectedVertex; 3], color: Color) -> Self {
        Self { vertices, color }
    }

    /// Twice the signed screen-space area
    ///
    /// Zero means the triangle is degenerate on screen.
    pub fn signed_area2(&self) -> f32 {
        let [a, b, c] = self.vertices;
        let ab = (b.point - a.point).as_vec2();
        let ac = (c.point - a.point).as_vec2();
        ab.wedge(ac)
    }
}

/// Screen-space barycentric weights of a pixel
///
/// `alpha + beta + gamma == 1` up to rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    /// Weights of `p` with respect to triangle `a b c`
    ///
    /// Returns `None` for zero-area triangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use softrender::core::math::Point2i;
    /// use softrender::core::raster::Barycentric;
    ///
    /// let a = Point2i::new(0, 0);
    /// let b = Point2i::new(10, 0);
    /// let c = Point2i::new(0, 10);
    ///
    /// let at_b = Barycentric::compute(a, b, c, b).unwrap();
    /// assert_eq!((at_b.alpha, at_b.beta, at_b.gamma), (0.0, 1.0, 0.0));
    ///
    /// let flat = Barycentric::compute(a, b, Point2i::new(20, 0), a);
    /// assert!(flat.is_none());
    /// ```
    pub fn compute(a: Point2i, b: Point2i, c: Point2i, p: Point2i) -> Option<Self> {
        let ab: Vec2 = (b - a).as_vec2();
        let ac: Vec2 = (c - a).as_vec2();
        let area = ab.wedge(ac);
        if area == 0.0 {
            return None;
        }

        let bc = (c - b).as_vec2();
        let bp = (p - b).as_vec2();
        let ap = (p - a).as_vec2();

        // Weight of a is the sub-area opposite a, and so on
        let alpha = bc.wedge(bp) / area;
        let beta = ap.wedge(ac) / area;
        let gamma = 1.0 - alpha - beta;

        Some(Self { alpha, beta, gamma })
    }

    /// Weighted sum of three scalars
    #[inline]
    pub fn blend(&self, a: f32, b: f32, c: f32) -> f32 {
        self.alpha * a + self.beta * b + self.gamma * c
    }
}

/// What the rasterizer writes for each pixel that passes the depth test
#[derive(Debug, Clone, Copy)]
pub enum FillMode<'a> {
    /// Solid color
    Flat(Color),
    /// Perspective-correct texture lookup
    Textured(&'a Texture),
}

/// Result of submitting one triangle to the rasterizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterOutcome {
    /// At least one pixel passed the depth test and was written
    Drawn { pixels_written: usize },
    /// The triangle was walked but every pixel was occluded or off-screen
    Hidden,
    /// Zero screen-space area; nothing was walked
    Degenerate,
}

impl RasterOutcome {
    pub fn pixels_written(&self) -> usize {
        match self {
            RasterOutcome::Drawn { pixels_written } => *pixels_written,
            RasterOutcome::Hidden | RasterOutcome::Degenerate => 0,
        }
    }
}
