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
//! Errors used by the `Board` and `BoardSetup`.

use thiserror::Error;

use crate::{board::common::Coordinate2D as Coordinate, ships::ShipId};

/// Error returned when board dimensions cannot be used.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsError {
    /// One of the sides was zero.
    #[error("board dimensions must be nonzero, got {width}x{height}")]
    Empty { width: usize, height: usize },
    /// The board has more than [`MAX_CELLS`][crate::board::MAX_CELLS] cells.
    #[error("board dimensions too large: {width} * {height} > {}", crate::board::MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Some part of the ship would lie outside the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the cells was already occupied by an earlier ship.
    #[error("the requested position was already occupied by ship {0}")]
    AlreadyOccupied(ShipId),
    /// There were no ships to place.
    #[error("no ships were added to the board")]
    NoShips,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship {ship} at {coord}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: ShipId,
    coord: Coordinate,
}

impl PlaceError {
    /// Construct a placement error for the given ship. `coord` is the first offending
    /// cell, or the anchor if no single cell is at fault.
    pub(super) fn new(reason: CannotPlaceReason, ship: ShipId, coord: Coordinate) -> Self {
        Self {
            reason,
            ship,
            coord,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// ID of the ship that could not be placed.
    pub fn ship(&self) -> ShipId {
        self.ship
    }

    /// The cell where placement failed.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
