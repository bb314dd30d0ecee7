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
//! The map file: where each ship of the fleet is anchored and which way it points.
use std::{
    convert::TryFrom,
    io::{self, BufRead},
};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::{
    board::common::Coordinate2D as Coordinate,
    input::{Line as InputLine, LineReader, MAX_LINE_CONTENT},
    rules::Rules,
    ships::{Direction, Ship, ShipId},
};

/// Why a map file was rejected.
#[derive(Debug, Error)]
pub enum MapError {
    /// The file ended before the given line.
    #[error("map file ended before line {line}")]
    MissingLine { line: usize },
    /// A line was longer than the limit.
    #[error("line {line} is longer than {} characters", MAX_LINE_CONTENT)]
    LineTooLong { line: usize },
    /// A line was not `x y direction`.
    #[error("line {line} should contain two non-negative integers and one of N, S, E or W")]
    Malformed { line: usize },
    /// A ship's anchor or body does not fit on the board.
    #[error("ship {ship} at {anchor} heading {direction} leaves the board")]
    OutOfBounds {
        ship: ShipId,
        anchor: Coordinate,
        direction: Direction,
    },
    /// The file could not be read.
    #[error("failed to read map file")]
    Io(#[from] io::Error),
}

impl MapError {
    /// True for errors caused by a ship not fitting on the board.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MapError::OutOfBounds { .. })
    }
}

/// Read one placement line per ship in `rules` and combine them with the ship shapes.
///
/// Lines are checked in order and the first bad line decides the error. Ships are only
/// checked against the board edges here; overlaps are found when the fleet is placed.
pub fn parse_map<B: BufRead>(read: B, rules: &Rules) -> Result<Vec<Ship>, MapError> {
    let dim = rules.dimensions();
    let mut lines = LineReader::new(read);
    let mut fleet = Vec::with_capacity(rules.num_ships());
    for (id, &shape) in rules.ships().iter().enumerate() {
        let line = lines.line_number() + 1;
        let text = match lines.next_line()? {
            InputLine::End => return Err(MapError::MissingLine { line }),
            InputLine::TooLong => return Err(MapError::LineTooLong { line }),
            InputLine::Garbled => return Err(MapError::Malformed { line }),
            InputLine::Text(text) => text,
        };
        let (anchor, direction) =
            parse_placement(&text).ok_or(MapError::Malformed { line })?;
        let ship = Ship::new(shape, anchor, direction);
        if !dim.contains(&anchor) || ship.project(&dim).is_none() {
            return Err(MapError::OutOfBounds {
                ship: id,
                anchor,
                direction,
            });
        }
        debug!(
            "ship {}: length {} at {} heading {}",
            id,
            ship.len(),
            anchor,
            direction
        );
        fleet.push(ship);
    }
    Ok(fleet)
}

/// Parse `x y D` into an anchor and direction.
fn parse_placement(line: &str) -> Option<(Coordinate, Direction)> {
    static PLACEMENT: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)\s*
        (?P<x>[0-9]+)\s+
        (?P<y>[0-9]+)\s+
        (?P<dir>[NSEW])\s*$",
        )
        .unwrap()
    });
    let caps = PLACEMENT.captures(line)?;
    let x = caps["x"].parse().ok()?;
    let y = caps["y"].parse().ok()?;
    let dir = caps["dir"].chars().next()?;
    Some((Coordinate::new(x, y), Direction::try_from(dir).ok()?))
}
