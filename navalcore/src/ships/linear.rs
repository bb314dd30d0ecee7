// Copyright 2020 Zachary Stewart
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
use crate::{
    board::{common::Coordinate2D as Coordinate, Dimensions},
    ships::{Direction, ShapeProjection},
};

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Construct a linear ship with the specified length, or `None` if len is 0.
    pub fn try_new(len: usize) -> Option<Self> {
        if len > 0 {
            Some(Line(len))
        } else {
            None
        }
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// The last cell of the ship when anchored at `start` heading `dir`, without any
    /// upper bounds check. `None` if the ship would run below zero.
    pub fn far_end(&self, start: Coordinate, dir: Direction) -> Option<Coordinate> {
        start.offset(dir.unit(), self.0 - 1)
    }

    /// Project this shape from `start` along `dir`. Returns `None` if any cell falls
    /// outside `dim`.
    pub fn project(
        &self,
        start: Coordinate,
        dir: Direction,
        dim: &Dimensions,
    ) -> Option<ShapeProjection> {
        // The run is straight, so both ends being on the board covers every cell.
        let end = self.far_end(start, dir)?;
        if !dim.contains(&start) || !dim.contains(&end) {
            return None;
        }
        (0..self.0)
            .map(|step| start.offset(dir.unit(), step))
            .collect()
    }
}
