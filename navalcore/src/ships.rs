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
//! Types used for defining ships and their placement.
use std::{convert::TryFrom, fmt};

use crate::board::{common::Coordinate2D as Coordinate, Dimensions};

pub use self::linear::Line;

mod linear;

/// Ships are identified by their 0-based position in the fleet.
pub type ShipId = usize;

/// Projection of a ship onto the board: every cell it occupies, starting from its anchor.
pub type ShapeProjection = Vec<Coordinate>;

/// Heading of a ship away from its anchor cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Decreasing `y`.
    North,
    /// Increasing `y`.
    South,
    /// Increasing `x`.
    East,
    /// Decreasing `x`.
    West,
}

impl Direction {
    /// All directions, in map-file order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector `(dx, dy)` of one step in this direction.
    pub fn unit(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The character used for this direction in map files.
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            'N' => Ok(Direction::North),
            'S' => Ok(Direction::South),
            'E' => Ok(Direction::East),
            'W' => Ok(Direction::West),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A fully described ship: its shape from the rules and its placement from the map.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    shape: Line,
    anchor: Coordinate,
    direction: Direction,
}

impl Ship {
    /// Construct a ship of the given shape anchored at `anchor`, heading `direction`.
    pub fn new(shape: Line, anchor: Coordinate, direction: Direction) -> Self {
        Self {
            shape,
            anchor,
            direction,
        }
    }

    /// Shape of this ship.
    pub fn shape(&self) -> Line {
        self.shape
    }

    /// Number of cells this ship occupies.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// The first cell of the ship.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Direction the ship extends in from its anchor.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells this ship occupies on a board with the given dimensions, or `None` if any
    /// of them is off the board.
    pub fn project(&self, dim: &Dimensions) -> Option<ShapeProjection> {
        self.shape.project(self.anchor, self.direction, dim)
    }
}
