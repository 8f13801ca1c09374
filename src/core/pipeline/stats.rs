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

//! Per-triangle outcomes and per-frame counters

use std::fmt;
use std::ops::AddAssign;

/// What happened to one source triangle before rasterization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleOutcome {
    /// Facing away from the camera
    Culled,
    /// Entirely outside the view frustum
    ClippedAway,
    /// Survived clipping as this many projected triangles
    Emitted(usize),
}

/// Counters for one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Mesh faces submitted
    pub source_triangles: usize,
    pub culled: usize,
    pub clipped_away: usize,
    /// Projected triangles produced by clipping and triangulation
    pub emitted: usize,
    /// Projected triangles that wrote at least one pixel
    pub rasterized: usize,
    /// Pixels written by fills, outlines and vertex markers
    pub pixels_written: usize,
}

impl FrameStats {
    /// Count a source triangle's fate
    pub fn record(&mut self, outcome: TriangleOutcome) {
        self.source_triangles += 1;
        match outcome {
            TriangleOutcome::Culled => self.culled += 1,
            TriangleOutcome::ClippedAway => self.clipped_away += 1,
            TriangleOutcome::Emitted(count) => self.emitted += count,
        }
    }
}

impl AddAssign for FrameStats {
    fn add_assign(&mut self, other: FrameStats) {
        self.source_triangles += other.source_triangles;
        self.culled += other.culled;
        self.clipped_away += other.clipped_away;
        self.emitted += other.emitted;
        self.rasterized += other.rasterized;
        self.pixels_written += other.pixels_written;
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} source, {} culled, {} clipped away, {} emitted, {} rasterized, {} pixels",
            self.source_triangles,
            self.culled,
            self.clipped_away,
            self.emitted,
            self.rasterized,
            self.pixels_written
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut stats = FrameStats::default();
        stats.record(TriangleOutcome::Culled);
        stats.record(TriangleOutcome::ClippedAway);
        stats.record(TriangleOutcome::Emitted(3));
        stats.record(TriangleOutcome::Emitted(1));

        assert_eq!(stats.source_triangles, 4);
        assert_eq!(stats.culled, 1);
        assert_eq!(stats.clipped_away, 1);
        assert_eq!(stats.emitted, 4);
    }

    #[test]
    fn test_accumulate() {
        let mut total = FrameStats {
            source_triangles: 2,
            pixels_written: 10,
            ..Default::default()
        };
        total += FrameStats {
            source_triangles: 3,
            rasterized: 1,
            pixels_written: 5,
            ..Default::default()
        };

        assert_eq!(total.source_triangles, 5);
        assert_eq!(total.rasterized, 1);
        assert_eq!(total.pixels_written, 15);
    }
}
