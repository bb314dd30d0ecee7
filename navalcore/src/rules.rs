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
//! The rules file: board size and the length of every ship in the fleet.
use std::{
    io::{self, BufRead},
    str::FromStr,
};

use log::debug;
use thiserror::Error;

use crate::{
    board::{Dimensions, DimensionsError},
    input::{parse_two_uints, parse_uint, Line as InputLine, LineReader, MAX_LINE_CONTENT},
    ships::Line,
};

/// Largest fleet a rules file may declare.
pub const MAX_SHIPS: usize = 15;

/// Name of the rules file that is created with [`DEFAULT_RULES`] if it does not exist.
pub const DEFAULT_RULES_FILE: &str = "standard.rules";

/// Contents of the default rules: an 8x8 board with ships of length 5, 4, 3, 2 and 1.
pub const DEFAULT_RULES: &str = "8 8\n5\n5\n4\n3\n2\n1\n\n";

/// Why a rules file was rejected.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The file ended before the given line.
    #[error("rules file ended before line {line}")]
    MissingLine { line: usize },
    /// A line was longer than the limit.
    #[error("line {line} is longer than {} characters", MAX_LINE_CONTENT)]
    LineTooLong { line: usize },
    /// A line did not match the expected grammar.
    #[error("line {line} should contain {expected}")]
    Malformed { line: usize, expected: &'static str },
    /// The board size was not usable.
    #[error("invalid board size")]
    Dimensions(#[from] DimensionsError),
    /// The fleet size was outside the allowed range.
    #[error("fleet must have between 1 and {} ships, got {0}", MAX_SHIPS)]
    FleetSize(usize),
    /// A ship had zero length.
    #[error("ship {ship} on line {line} has zero length")]
    ZeroLength { ship: usize, line: usize },
    /// The file could not be read.
    #[error("failed to read rules file")]
    Io(#[from] io::Error),
}

/// Parsed rules: board dimensions and the shape of each ship, in fleet order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rules {
    dimensions: Dimensions,
    ships: Vec<Line>,
}

impl Rules {
    /// Build rules from already validated parts. Fails if the fleet size is outside
    /// `1..=MAX_SHIPS`.
    pub fn new(dimensions: Dimensions, ships: Vec<Line>) -> Result<Self, RulesError> {
        if ships.is_empty() || ships.len() > MAX_SHIPS {
            return Err(RulesError::FleetSize(ships.len()));
        }
        Ok(Self { dimensions, ships })
    }

    /// Read rules from a line source. Only the lines the rules call for are consumed;
    /// anything after the last ship length is ignored.
    pub fn parse<B: BufRead>(read: B) -> Result<Self, RulesError> {
        let mut lines = LineReader::new(read);

        let (width, height) =
            parse_line(&mut lines, parse_two_uints, "two positive integers")?;
        let dimensions = Dimensions::try_new(width, height)?;

        let count = parse_line(&mut lines, parse_uint, "the number of ships")?;
        if count == 0 || count > MAX_SHIPS {
            return Err(RulesError::FleetSize(count));
        }

        let mut ships = Vec::with_capacity(count);
        for ship in 0..count {
            let len = parse_line(&mut lines, parse_uint, "a ship length")?;
            let shape = Line::try_new(len).ok_or(RulesError::ZeroLength {
                ship,
                line: lines.line_number(),
            })?;
            ships.push(shape);
        }

        let rules = Self::new(dimensions, ships)?;
        debug!(
            "rules: {}x{} board, ship lengths {:?}",
            width,
            height,
            rules.lengths().collect::<Vec<_>>()
        );
        Ok(rules)
    }

    /// Dimensions of the board.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Shapes of the ships, in fleet order.
    pub fn ships(&self) -> &[Line] {
        &self.ships
    }

    /// Number of ships in the fleet.
    pub fn num_ships(&self) -> usize {
        self.ships.len()
    }

    /// Lengths of the ships, in fleet order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.ships.iter().map(Line::len)
    }
}

impl FromStr for Rules {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

/// Read the next line and run it through `parse`, classifying every way it can fail.
fn parse_line<B: BufRead, T>(
    lines: &mut LineReader<B>,
    parse: impl FnOnce(&str) -> Option<T>,
    expected: &'static str,
) -> Result<T, RulesError> {
    let line = lines.line_number() + 1;
    match lines.next_line()? {
        InputLine::End => Err(RulesError::MissingLine { line }),
        InputLine::TooLong => Err(RulesError::LineTooLong { line }),
        InputLine::Garbled => Err(RulesError::Malformed { line, expected }),
        InputLine::Text(text) => parse(&text).ok_or(RulesError::Malformed { line, expected }),
    }
}
