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

//! Scanline triangle rasterizer
//!
//! Fills projected triangles into a [`FrameBuffer`] with a per-pixel depth
//! test and perspective-correct interpolation.
//!
//! # Algorithm
//!
//! 1. Sort vertices by Y coordinate (v0.y <= v1.y <= v2.y)
//! 2. Walk the top part (v0 -> v1 against the long edge v0 -> v2)
//! 3. Walk the bottom part (v1 -> v2 against the same long edge)
//! 4. For every pixel on a span, compute screen-space barycentrics and
//!    interpolate `1/w`
//!
//! The depth key is `1 - (alpha/w0 + beta/w1 + gamma/w2)`. Because `1/w` is
//! affine in screen space, comparing keys orders pixels by true view depth.
//! Texture coordinates are interpolated as `uv/w` and divided by the
//! interpolated `1/w`.
//!
//! Rows are inclusive at both ends; the shared row at v1.y is visited by
//! both parts and the second visit loses the depth test.
//!
//! The edge walk truncates span ends, which can reach one pixel past a
//! slanted edge. Those pixels fail an exact edge-function test and are
//! skipped, so every written pixel has all three weights in `0..=1`.
//! Pixels exactly on an edge belong to both neighbouring triangles.
//!
//! # References
//!
//! - [Triangle Rasterization Tutorial](https://www.sunshine2k.de/coding/java/TriangleRasterization/TriangleRasterization.html)
//! - [Scratchapixel: Perspective Correct Interpolation](https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation/perspective-correct-interpolation-vertex-attributes.html)

use super::framebuffer::FrameBuffer;
use super::primitives::{Barycentric, FillMode, ProjectedTriangle, ProjectedVertex, RasterOutcome};
use crate::core::math::Point2i;
use crate::core::texture::Uv;

/// Rasterize a filled or textured triangle
///
/// # Arguments
///
/// * `frame` - Target color and depth buffers
/// * `triangle` - Screen-space triangle (vertex order does not matter)
/// * `fill` - Flat color or texture payload
///
/// # Returns
///
/// How the triangle fared: drawn (with the number of pixels that passed the
/// depth test), hidden, or degenerate.
///
/// # Examples
///
/// ```
/// use softrender::core::math::Point2i;
/// use softrender::core::raster::{
///     fill_triangle, Color, FillMode, FrameBuffer, ProjectedTriangle, ProjectedVertex,
/// };
/// use softrender::core::texture::Uv;
///
/// let mut frame = FrameBuffer::new(16, 16).unwrap();
/// let vertex = |x, y| ProjectedVertex::new(Point2i::new(x, y), 0.5, 2.0, Uv::default());
/// let corners = [vertex(1, 1), vertex(14, 1), vertex(1, 14)];
/// let triangle = ProjectedTriangle::new(corners, Color::WHITE);
///
/// let outcome = fill_triangle(&mut frame, &triangle, FillMode::Flat(Color::WHITE));
/// assert!(outcome.pixels_written() > 0);
/// assert_eq!(frame.pixel(2, 2), Some(Color::WHITE));
/// ```
pub fn fill_triangle(
    frame: &mut FrameBuffer,
    triangle: &ProjectedTriangle,
    fill: FillMode<'_>,
) -> RasterOutcome {
    if triangle.signed_area2() == 0.0 {
        log::trace!("Skipping zero-area triangle {:?}", triangle.vertices);
        return RasterOutcome::Degenerate;
    }

    let mut sorted = triangle.vertices;
    sorted.sort_by_key(|v| v.point.y);

    let [v0, v1, v2] = sorted;
    let mut pixels_written = 0;
    pixels_written += fill_part(frame, &sorted, v0.point, v1.point, fill);
    pixels_written += fill_part(frame, &sorted, v1.point, v2.point, fill);

    if pixels_written > 0 {
        RasterOutcome::Drawn { pixels_written }
    } else {
        RasterOutcome::Hidden
    }
}

/// Fill the rows between `part_begin` and `part_end` (inclusive)
///
/// The short edge runs from `part_begin` to `part_end` and always passes
/// through v1; the long edge runs from v0 to v2.
fn fill_part(
    frame: &mut FrameBuffer,
    vertices: &[ProjectedVertex; 3],
    part_begin: Point2i,
    part_end: Point2i,
    fill: FillMode<'_>,
) -> usize {
    let [v0, v1, v2] = vertices;
    let delta = part_end - part_begin;
    if delta.y == 0 {
        return 0;
    }

    let inv_slope_short = delta.x as f32 / delta.y.abs() as f32;
    let long_dy = v2.point.y - v0.point.y;
    let inv_slope_long = if long_dy != 0 {
        (v2.point.x - v0.point.x) as f32 / long_dy.abs() as f32
    } else {
        0.0
    };

    // Rows outside the buffer would be dropped pixel by pixel anyway
    let last_row = frame.height() as i32 - 1;
    let last_col = frame.width() as i32 - 1;
    let y_begin = part_begin.y.max(0);
    let y_end = part_end.y.min(last_row);

    let reciprocal_w = [1.0 / v0.w, 1.0 / v1.w, 1.0 / v2.w];
    let mut written = 0;

    for y in y_begin..=y_end {
        let mut x_start = v1.point.x + ((y - v1.point.y) as f32 * inv_slope_short) as i32;
        let mut x_end = v0.point.x + ((y - v0.point.y) as f32 * inv_slope_long) as i32;
        if x_end < x_start {
            std::mem::swap(&mut x_start, &mut x_end);
        }

        for x in x_start.max(0)..=x_end.min(last_col) {
            let point = Point2i::new(x, y);
            if !covers(v0.point, v1.point, v2.point, point) {
                continue;
            }
            let Some(index) = frame.index_of(point) else {
                continue;
            };
            let Some(weights) = Barycentric::compute(v0.point, v1.point, v2.point, point) else {
                continue;
            };

            let w_recip = weights.blend(reciprocal_w[0], reciprocal_w[1], reciprocal_w[2]);
            let key = 1.0 - w_recip;

            let shaded = frame.test_and_write(index, key, || match fill {
                FillMode::Flat(color) => color,
                FillMode::Textured(texture) => {
                    texture.sample(interpolate_uv(&weights, vertices, &reciprocal_w, w_recip))
                }
            });
            if shaded {
                written += 1;
            }
        }
    }

    written
}

/// Whether `p` lies inside or on the boundary of triangle `a b c`
///
/// Edge functions are evaluated in `i64`, so the test is exact for any
/// winding.
pub(crate) fn covers(a: Point2i, b: Point2i, c: Point2i, p: Point2i) -> bool {
    let edge = |from: Point2i, to: Point2i| {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        dx * (i64::from(p.y) - i64::from(from.y)) - dy * (i64::from(p.x) - i64::from(from.x))
    };
    let edges = [edge(a, b), edge(b, c), edge(c, a)];
    edges.iter().all(|&e| e >= 0) || edges.iter().all(|&e| e <= 0)
}

/// Perspective-correct texture coordinate at a pixel
#[inline]
pub(crate) fn interpolate_uv(
    weights: &Barycentric,
    vertices: &[ProjectedVertex; 3],
    reciprocal_w: &[f32; 3],
    w_recip: f32,
) -> Uv {
    let [a, b, c] = vertices;
    let u = weights.blend(
        a.uv.u * reciprocal_w[0],
        b.uv.u * reciprocal_w[1],
        c.uv.u * reciprocal_w[2],
    );
    let v = weights.blend(
        a.uv.v * reciprocal_w[0],
        b.uv.v * reciprocal_w[1],
        c.uv.v * reciprocal_w[2],
    );
    Uv::new(u, v).scale(1.0 / w_recip)
}
