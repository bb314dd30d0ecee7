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
//! Implements the setup phase of the board.
use log::debug;

use crate::{
    board::{
        common::Coordinate2D as Coordinate, Board, CannotPlaceReason, Cell, Dimensions, Grid,
        PlaceError,
    },
    ships::{Direction, Line, ShapeProjection, ShipId},
};

/// A newly added ship together with the grid, ready to be placed.
pub struct ShipEntry<'a> {
    /// ID of this ship.
    id: ShipId,

    /// Grid that ships are being placed into.
    grid: &'a mut Grid,

    /// Back ref to the ship.
    ship: &'a mut ShipPlacementInfo,
}

impl<'a> ShipEntry<'a> {
    /// Attempts to place the ship with its first cell at `anchor`, extending towards
    /// `dir`. Fails without touching the grid if the ship leaves the board or crosses a
    /// cell claimed by another ship.
    pub fn place(self, anchor: Coordinate, dir: Direction) -> Result<(), PlaceError> {
        let placement = self
            .ship
            .shape
            .project(anchor, dir, &self.grid.dim)
            .ok_or_else(|| PlaceError::new(CannotPlaceReason::OutOfBounds, self.id, anchor))?;
        for coord in placement.iter() {
            match self.grid.get(coord) {
                None => {
                    return Err(PlaceError::new(
                        CannotPlaceReason::OutOfBounds,
                        self.id,
                        *coord,
                    ));
                }
                Some(&Cell::Empty) => {}
                Some(cell) => {
                    let owner = cell.ship().unwrap_or(self.id);
                    return Err(PlaceError::new(
                        CannotPlaceReason::AlreadyOccupied(owner),
                        self.id,
                        *coord,
                    ));
                }
            }
        }
        // Already ensured that every position is valid and not occupied.
        for coord in placement.iter() {
            self.grid[coord] = Cell::ShipIntact(self.id);
        }
        debug!("placed ship {} at {:?}", self.id, placement);
        self.ship.placement = Some(placement);
        Ok(())
    }
}

/// Contains a ship's shape and current placement status in the grid.
struct ShipPlacementInfo {
    /// Shape being placed.
    shape: Line,

    /// Placement of this ship, if it has been placed.
    placement: Option<ShapeProjection>,
}

/// Setup phase for a [`Board`]. Allows placing ships and does not allow guessing.
pub struct BoardSetup {
    /// Grid for placement of ships.
    grid: Grid,

    /// Placement info, indexed by [`ShipId`].
    ships: Vec<ShipPlacementInfo>,
}

impl BoardSetup {
    /// Begin setup by constructing a new, all-empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Tries to start the game. If all ships are placed, returns a [`Board`] with the
    /// current placements. If no ships have been added or any ship has not been placed,
    /// returns self.
    pub fn start(self) -> Result<Board, Self> {
        if !self.ready() {
            return Err(self);
        }
        let ships = self
            .ships
            .into_iter()
            .filter_map(|info| info.placement)
            .collect();
        Ok(Board {
            grid: self.grid,
            ships,
        })
    }

    /// Checks if this board is ready to start. Returns `true` if at least one ship has
    /// been added and all ships are placed.
    pub fn ready(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|ship| ship.placement.is_some())
    }

    /// Adds a ship with the given shape, assigning it the next [`ShipId`], and returns
    /// the [`ShipEntry`] for it to allow placement.
    pub fn add_ship(&mut self, shape: Line) -> ShipEntry {
        let id = self.ships.len();
        self.ships.push(ShipPlacementInfo {
            shape,
            placement: None,
        });
        let grid = &mut self.grid;
        let ship = &mut self.ships[id];
        ShipEntry { id, grid, ship }
    }
}
