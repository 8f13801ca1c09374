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

//! Frontend module
//!
//! Pieces that sit between the rendering core and the outside world.
//!
//! # Architecture
//!
//! - [`config`]: TOML render configuration
//! - [`input`]: key bindings, held movement and mouse-drag camera rotation
//! - [`export`]: PNG output and texture decoding (`png` feature)

pub mod config;
#[cfg(feature = "png")]
pub mod export;
pub mod input;

#[cfg(test)]
mod tests;

pub use config::RenderConfig;
pub use input::{Action, InputConfig, InputHandler};
