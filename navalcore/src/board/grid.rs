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
//! Defines the solution grid. This is shared between the board's setup and playing
//! versions.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{common::Coordinate2D as Coordinate, Dimensions},
    ships::ShipId,
};

/// State of a single cell in the solution grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    /// No ship occupies this cell and it has not been guessed.
    Empty,
    /// Part of the given ship, not yet hit.
    ShipIntact(ShipId),
    /// Part of the given ship, hit by a guess.
    ShipHit(ShipId),
    /// Guessed, but no ship was here.
    Missed,
}

impl Cell {
    /// The ship occupying this cell, if any.
    pub fn ship(self) -> Option<ShipId> {
        match self {
            Cell::ShipIntact(id) | Cell::ShipHit(id) => Some(id),
            Cell::Empty | Cell::Missed => None,
        }
    }
}

/// Grid structure shared between [`BoardSetup`][crate::board::BoardSetup] and
/// [`Board`][crate::board::Board].
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board, row-major.
    pub(super) cells: Box<[Cell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = vec![Cell::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Cell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Returns true if any cell matches `pred`.
    pub(super) fn any(&self, pred: impl FnMut(&Cell) -> bool) -> bool {
        self.cells.iter().any(pred)
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Cell;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
