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
//! Types that make up the game board.

use log::debug;

use crate::ships::{ShapeProjection, Ship, ShipId};

use self::{common::Coordinate2D as Coordinate, grid::Grid};
pub use self::{
    dimensions::{Dimensions, MAX_CELLS},
    errors::{CannotPlaceReason, DimensionsError, PlaceError},
    grid::Cell,
    setup::{BoardSetup, ShipEntry},
};

pub mod common;
mod dimensions;
mod errors;
mod grid;
pub mod setup;

/// Result of a single guess against the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The coordinate is not on the board. Nothing changed.
    OutOfBounds,
    /// The guess did not hit a ship, or hit a cell that was already hit.
    Miss,
    /// The guess hit the ship with the given ID, but did not sink it.
    Hit(ShipId),
    /// The guess sunk the ship with the given ID, but other ships remain.
    Sunk(ShipId),
    /// The guess sunk the ship with the given ID, and it was the last one afloat.
    GameOver(ShipId),
}

impl GuessOutcome {
    /// Get the id of the ship that was hit.
    pub fn ship(&self) -> Option<ShipId> {
        match *self {
            GuessOutcome::OutOfBounds | GuessOutcome::Miss => None,
            GuessOutcome::Hit(id) | GuessOutcome::Sunk(id) | GuessOutcome::GameOver(id) => {
                Some(id)
            }
        }
    }

    /// Whether this outcome ends the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, GuessOutcome::GameOver(_))
    }
}

/// The solution board: every ship's cells and what has been guessed so far.
///
/// Sunk and game-over status are recomputed from the grid on every query.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// Projected positions of all ships, indexed by [`ShipId`].
    ships: Vec<ShapeProjection>,
}

impl Board {
    /// Place the fleet, in order, onto an empty board of the given dimensions. The first
    /// ship to claim a cell keeps it; any later ship touching that cell aborts placement.
    pub fn place_fleet(dim: Dimensions, fleet: &[Ship]) -> Result<Self, PlaceError> {
        let mut setup = BoardSetup::new(dim);
        for ship in fleet {
            setup
                .add_ship(ship.shape())
                .place(ship.anchor(), ship.direction())?;
        }
        setup.start().map_err(|_| {
            PlaceError::new(CannotPlaceReason::NoShips, 0, Coordinate::new(0, 0))
        })
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Number of ships on the board.
    pub fn num_ships(&self) -> usize {
        self.ships.len()
    }

    /// Cells occupied by the given ship, or `None` if there is no such ship.
    pub fn ship_coords(&self, ship: ShipId) -> Option<&[Coordinate]> {
        self.ships.get(ship).map(|proj| &proj[..])
    }

    /// Get the cell at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Returns true if the given ship exists and none of its cells are left intact.
    pub fn is_sunk(&self, ship: ShipId) -> bool {
        ship < self.ships.len() && !self.grid.any(|cell| *cell == Cell::ShipIntact(ship))
    }

    /// Returns true if every ship cell on the board has been hit.
    pub fn is_game_over(&self) -> bool {
        !self.grid.any(|cell| matches!(cell, Cell::ShipIntact(_)))
    }

    /// Evaluate a guess at the given coordinate, updating the board.
    ///
    /// Guessing an empty cell marks it missed. Guessing an intact ship cell marks it
    /// hit. Guessing a cell that was already missed or hit changes nothing and is
    /// reported as a miss.
    pub fn guess(&mut self, coord: Coordinate) -> GuessOutcome {
        let cell = match self.grid.get_mut(coord) {
            None => return GuessOutcome::OutOfBounds,
            Some(cell) => cell,
        };
        let ship = match *cell {
            Cell::Empty | Cell::Missed => {
                *cell = Cell::Missed;
                debug!("guess at {} missed", coord);
                return GuessOutcome::Miss;
            }
            Cell::ShipHit(ship) => {
                debug!("guess at {} repeated a hit on ship {}", coord, ship);
                return GuessOutcome::Miss;
            }
            Cell::ShipIntact(ship) => {
                *cell = Cell::ShipHit(ship);
                ship
            }
        };
        let outcome = if self.is_game_over() {
            GuessOutcome::GameOver(ship)
        } else if self.is_sunk(ship) {
            GuessOutcome::Sunk(ship)
        } else {
            GuessOutcome::Hit(ship)
        };
        debug!("guess at {}: {:?}", coord, outcome);
        outcome
    }

    /// Get an iterator over the board. The iterator's item is another iterator that
    /// iterates over a single row, in increasing `x`.
    pub fn iter_rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        let grid = &self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| grid[coord]))
    }
}
