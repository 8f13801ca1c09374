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

//! Benchmarks for the per-frame pipeline

use criterion::{criterion_group, criterion_main, Criterion};
use softrender::core::camera::Camera;
use softrender::core::clipper::{clip_triangle, UvTriangle};
use softrender::core::frustum::{Frustum, Projection};
use softrender::core::math::{Point3, Vec3};
use softrender::core::pipeline::{DisplayMode, Renderer};
use softrender::core::raster::Color;
use softrender::core::scene::{Mesh, Model};
use softrender::core::texture::{Texture, Uv};
use std::hint::black_box;

fn scene() -> Vec<Model> {
    let texture = Texture::checkerboard(64, 8, Color::WHITE, Color::rgb(180, 40, 40));
    (0..4)
        .map(|i| {
            let mut model = Model::new(Mesh::cube(), texture.clone())
                .with_translation(Vec3::new(-3.0 + 2.0 * i as f32, 0.0, 6.0));
            model.rotation = Vec3::new(0.4, 0.3 * i as f32, 0.0);
            model
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let models = scene();
    let camera = Camera::default();

    let mut group = c.benchmark_group("render_800x600");
    for mode in [DisplayMode::Wireframe, DisplayMode::Filled, DisplayMode::Textured] {
        let mut renderer = Renderer::new(800, 600, 60f32.to_radians(), 0.1, 100.0)
            .expect("valid renderer parameters");
        renderer.settings_mut().display_mode = mode;
        group.bench_function(mode.name(), |b| {
            b.iter(|| black_box(renderer.render(black_box(&models), &camera)))
        });
    }
    group.finish();
}

fn bench_clip(c: &mut Criterion) {
    let projection = Projection::new(4.0 / 3.0, 60f32.to_radians(), 0.1, 100.0)
        .expect("valid projection parameters");
    let frustum = Frustum::new(&projection);
    // Crosses the near and left planes
    let triangle = UvTriangle::new(
        [
            Point3::new(-4.0, 0.0, 2.0),
            Point3::new(0.5, 0.5, -1.0),
            Point3::new(0.5, -0.5, 6.0),
        ],
        [Uv::new(0.0, 0.0), Uv::new(1.0, 0.0), Uv::new(0.0, 1.0)],
    );

    c.bench_function("clip_triangle", |b| {
        b.iter(|| black_box(clip_triangle(black_box(&triangle), &frustum)))
    });
}

criterion_group!(benches, bench_render, bench_clip);
criterion_main!(benches);
