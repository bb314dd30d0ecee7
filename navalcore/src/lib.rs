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
//! Board construction and game state for a single-player game of Battleship driven by
//! two text files.
//!
//! A rules file gives the board size and the length of each ship; a map file gives each
//! ship's anchor cell and heading. [`rules::Rules`] and [`map::parse_map`] decode and
//! validate those, [`board::Board::place_fleet`] builds the hidden solution grid, and
//! [`game::play`] runs the guess loop until every ship is sunk or input runs out.

pub mod board;
pub mod game;
pub mod input;
pub mod map;
pub mod rules;
pub mod ships;

pub use board::common::Coordinate2D as Coordinate;
