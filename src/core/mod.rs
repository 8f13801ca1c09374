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

//! Rendering core
//!
//! Everything between scene data and a filled color buffer. No windowing,
//! input polling or file I/O lives here.
//!
//! - [`math`]: vectors, points and matrices
//! - [`frustum`]: projection parameters and clip planes
//! - [`camera`]: pivot/offset camera rig
//! - [`scene`]: meshes and placed models
//! - [`clipper`]: polygon clipping and fan triangulation
//! - [`raster`]: frame buffer, scanline fill, lines and markers
//! - [`texture`]: texture storage and sampling
//! - [`pipeline`]: the per-frame [`pipeline::Renderer`]

pub mod camera;
pub mod clipper;
pub mod error;
pub mod frustum;
pub mod math;
pub mod pipeline;
pub mod raster;
pub mod scene;
pub mod texture;
