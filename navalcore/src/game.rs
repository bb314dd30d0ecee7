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
//! The interactive part of the game: reading guesses, applying them to the board and
//! reporting what happened.
//!
//! [`Game`] is the state machine and does no I/O. [`play`] drives it from a line source
//! and writes the board, prompts and results to an output, returning how the session
//! ended instead of exiting.
use std::{
    fmt,
    io::{self, BufRead, Write},
};

use log::{debug, info};

use crate::{
    board::{common::Coordinate2D as Coordinate, Board, Cell, GuessOutcome},
    input::{parse_two_uints, Line, LineReader},
};

/// Prompt printed before every guess.
pub const PROMPT: &str = "(x,y)>";

/// Classification of one line of player input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Prompted {
    /// Two non-negative integers.
    Guess(Coordinate),
    /// Anything else, including lines over the length limit.
    Malformed,
    /// No input left.
    Exhausted,
}

/// Reads and classifies guesses from the player.
pub struct GuessReader<B> {
    lines: LineReader<B>,
}

impl<B: BufRead> GuessReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            lines: LineReader::new(read),
        }
    }

    /// Read one line and classify it. An overlong line is consumed in full and counts as
    /// a single malformed guess.
    pub fn read_guess(&mut self) -> io::Result<Prompted> {
        Ok(match self.lines.next_line()? {
            Line::End => Prompted::Exhausted,
            Line::TooLong | Line::Garbled => Prompted::Malformed,
            Line::Text(text) => match parse_two_uints(&text) {
                Some(coord) => Prompted::Guess(coord.into()),
                None => Prompted::Malformed,
            },
        })
    }
}

/// What a single turn did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Turn {
    /// The input line was not a guess.
    BadInput,
    /// The guess was applied to the board.
    Guessed(GuessOutcome),
    /// There was no more input.
    Exhausted,
}

impl Turn {
    /// Lines to show the player for this turn.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Turn::BadInput | Turn::Guessed(GuessOutcome::OutOfBounds) => &["Bad guess"],
            Turn::Guessed(GuessOutcome::Miss) => &["Miss"],
            Turn::Guessed(GuessOutcome::Hit(_)) => &["Hit"],
            Turn::Guessed(GuessOutcome::Sunk(_)) => &["Hit", "Ship sunk"],
            Turn::Guessed(GuessOutcome::GameOver(_)) => &["Hit", "Ship sunk", "Game over"],
            Turn::Exhausted => &[],
        }
    }
}

/// How a session ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Ending {
    /// Every ship was sunk.
    GameOver,
    /// Input ran out while ships were still afloat.
    InputExhausted,
}

/// State of a game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    ending: Option<Ending>,
}

impl Game {
    /// Start a game on a board with every ship placed.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ending: None,
        }
    }

    /// The solution board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How the game ended, or `None` while it is still awaiting guesses.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Apply one classified input line. Once the game has ended, further input is
    /// ignored and reported as exhausted.
    pub fn step(&mut self, input: Prompted) -> Turn {
        if self.ending.is_some() {
            return Turn::Exhausted;
        }
        match input {
            Prompted::Exhausted => {
                self.ending = Some(Ending::InputExhausted);
                Turn::Exhausted
            }
            Prompted::Malformed => Turn::BadInput,
            Prompted::Guess(coord) => {
                let outcome = self.board.guess(coord);
                if outcome.is_game_over() {
                    self.ending = Some(Ending::GameOver);
                }
                Turn::Guessed(outcome)
            }
        }
    }
}

/// Run the guess loop until the game ends: show the board, prompt, read a guess, report
/// the result.
pub fn play<B: BufRead, W: Write>(game: &mut Game, input: B, out: &mut W) -> io::Result<Ending> {
    let mut guesses = GuessReader::new(input);
    info!(
        "game started with {} ships on a {}x{} board",
        game.board().num_ships(),
        game.board().dimensions().width(),
        game.board().dimensions().height()
    );
    loop {
        if let Some(ending) = game.ending() {
            info!("game ended: {:?}", ending);
            return Ok(ending);
        }
        show_board(game.board(), out)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;
        let prompted = guesses.read_guess()?;
        let turn = game.step(prompted);
        debug!("{:?} -> {:?}", prompted, turn);
        for msg in turn.messages() {
            writeln!(out, "{}", msg)?;
        }
    }
}

/// How a cell looks to the player. Ship positions stay hidden until hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HiddenCell {
    NotShot,
    Miss,
    Hit,
}

impl From<Cell> for HiddenCell {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty | Cell::ShipIntact(_) => HiddenCell::NotShot,
            Cell::Missed => HiddenCell::Miss,
            Cell::ShipHit(_) => HiddenCell::Hit,
        }
    }
}

impl fmt::Display for HiddenCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HiddenCell::NotShot => f.pad("."),
            HiddenCell::Miss => f.pad("/"),
            HiddenCell::Hit => f.pad("*"),
        }
    }
}

/// Write the obfuscated board, one line per row.
pub fn show_board<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    for row in board.iter_rows() {
        for cell in row {
            write!(out, "{}", HiddenCell::from(cell))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Dimensions,
        ships::{Direction, Line as Shape, Ship},
    };

    fn game(w: usize, h: usize, fleet: &[Ship]) -> Game {
        Game::new(Board::place_fleet(Dimensions::try_new(w, h).unwrap(), fleet).unwrap())
    }

    fn ship(len: usize, x: usize, y: usize, dir: Direction) -> Ship {
        Ship::new(Shape::new(len), Coordinate::new(x, y), dir)
    }

    fn run(game: &mut Game, input: &str) -> (Ending, String) {
        let mut out = Vec::new();
        let ending = play(game, input.as_bytes(), &mut out).unwrap();
        (ending, String::from_utf8(out).unwrap())
    }

    #[test]
    fn classifies_input_lines() {
        let long = format!("{}\n", "1 ".repeat(15));
        let input = format!("3 4\n3,4\n{}  0   0  \n", long);
        let mut reader = GuessReader::new(input.as_bytes());
        assert_eq!(
            reader.read_guess().unwrap(),
            Prompted::Guess(Coordinate::new(3, 4))
        );
        assert_eq!(reader.read_guess().unwrap(), Prompted::Malformed);
        assert_eq!(reader.read_guess().unwrap(), Prompted::Malformed);
        assert_eq!(
            reader.read_guess().unwrap(),
            Prompted::Guess(Coordinate::new(0, 0))
        );
        assert_eq!(reader.read_guess().unwrap(), Prompted::Exhausted);
    }

    #[test]
    fn single_ship_sinks_in_one_guess() {
        let mut g = game(3, 1, &[ship(1, 0, 0, Direction::East)]);
        let (ending, out) = run(&mut g, "0 0\n");
        assert_eq!(ending, Ending::GameOver);
        assert_eq!(out, "...\n(x,y)>Hit\nShip sunk\nGame over\n");
    }

    #[test]
    fn board_shows_misses_and_hits_but_not_ships() {
        let mut g = game(
            3,
            2,
            &[ship(2, 0, 0, Direction::South), ship(1, 2, 0, Direction::North)],
        );
        let (ending, out) = run(&mut g, "1 1\n0 0\n");
        assert_eq!(ending, Ending::InputExhausted);
        assert_eq!(
            out,
            "...\n...\n(x,y)>Miss\n...\n./.\n(x,y)>Hit\n*..\n./.\n(x,y)>"
        );
    }

    #[test]
    fn bad_guesses_keep_the_loop_going() {
        let mut g = game(2, 2, &[ship(1, 1, 1, Direction::West)]);
        let (ending, out) = run(&mut g, "2 0\nnope\n0 5\n1 1\n");
        assert_eq!(ending, Ending::GameOver);
        assert_eq!(out.matches("Bad guess\n").count(), 3);
        assert!(out.ends_with("(x,y)>Hit\nShip sunk\nGame over\n"));
    }

    #[test]
    fn sinking_one_of_several_ships() {
        let mut g = game(
            4,
            1,
            &[ship(2, 0, 0, Direction::East), ship(1, 3, 0, Direction::East)],
        );
        assert_eq!(
            g.step(Prompted::Guess(Coordinate::new(1, 0))).messages(),
            &["Hit"]
        );
        assert_eq!(
            g.step(Prompted::Guess(Coordinate::new(0, 0))).messages(),
            &["Hit", "Ship sunk"]
        );
        assert_eq!(
            g.step(Prompted::Guess(Coordinate::new(0, 0))).messages(),
            &["Miss"]
        );
        assert_eq!(g.ending(), None);
        assert_eq!(
            g.step(Prompted::Guess(Coordinate::new(3, 0))),
            Turn::Guessed(GuessOutcome::GameOver(1))
        );
        assert_eq!(g.ending(), Some(Ending::GameOver));
        assert_eq!(g.step(Prompted::Malformed), Turn::Exhausted);
    }

    #[test]
    fn exhaustion_is_terminal() {
        let mut g = game(2, 1, &[ship(1, 0, 0, Direction::North)]);
        assert_eq!(g.step(Prompted::Exhausted), Turn::Exhausted);
        assert_eq!(g.ending(), Some(Ending::InputExhausted));
        assert!(Turn::Exhausted.messages().is_empty());
        let (ending, out) = run(&mut game(2, 1, &[ship(1, 0, 0, Direction::North)]), "");
        assert_eq!(ending, Ending::InputExhausted);
        assert_eq!(out, "..\n(x,y)>");
    }
}
