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
use std::{convert::TryFrom, fmt};

/// The coordinates of a cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate2D {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate2D {
    /// Construct a [`Coordinate2D`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step `n` cells away from this coordinate along the unit vector `(dx, dy)`.
    /// Returns `None` if the result would be negative or overflow `usize`. Upper bounds
    /// are not checked here; that is up to the board dimensions.
    pub fn offset(self, (dx, dy): (isize, isize), n: usize) -> Option<Self> {
        let n = isize::try_from(n).ok()?;
        let x = step(self.x, dx.checked_mul(n)?)?;
        let y = step(self.y, dy.checked_mul(n)?)?;
        Some(Self { x, y })
    }
}

/// Apply a signed delta to an unsigned position without wrapping.
fn step(pos: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        pos.checked_sub(delta.unsigned_abs())
    } else {
        pos.checked_add(delta as usize)
    }
}

impl From<(usize, usize)> for Coordinate2D {
    /// Construct a [`Coordinate2D`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate2D> for (usize, usize) {
    /// Convert the [`Coordinate2D`] into an `(x, y)` pair.
    fn from(coord: Coordinate2D) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
