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
//! Line-oriented input with a fixed maximum line length, shared by the rules file, the
//! map file and the player's guesses.
use std::{
    convert::TryFrom,
    io::{self, BufRead},
};

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters allowed on a line, not counting the line break.
pub const MAX_LINE_CONTENT: usize = 20;

/// Largest value accepted for a count, size or guess coordinate.
pub const MAX_VALUE: usize = i32::max_value() as usize;

/// One line read from a [`LineReader`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Line {
    /// A line that fits the length limit, without its line break.
    Text(String),
    /// A line longer than [`MAX_LINE_CONTENT`]. The whole line has been consumed.
    TooLong,
    /// A line that is not valid UTF-8 and so cannot match any of the line grammars.
    Garbled,
    /// There is no more input.
    End,
}

/// Helper to read bounded lines from a file or the player, tracking line numbers.
pub struct LineReader<B> {
    read: B,
    buf: Vec<u8>,
    line: usize,
}

impl<B> LineReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: Vec::new(),
            line: 0,
        }
    }

    /// 1-based number of the line most recently returned, or 0 if nothing was read yet.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

impl<B: BufRead> LineReader<B> {
    /// Read the next physical line. A final line without a trailing line break is
    /// returned like any other.
    pub fn next_line(&mut self) -> io::Result<Line> {
        self.buf.clear();
        if self.read.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(Line::End);
        }
        self.line += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        if self.buf.len() > MAX_LINE_CONTENT {
            return Ok(Line::TooLong);
        }
        Ok(match std::str::from_utf8(&self.buf) {
            Ok(text) => Line::Text(text.to_owned()),
            Err(_) => Line::Garbled,
        })
    }
}

/// Parse a line holding exactly one non-negative integer no larger than [`MAX_VALUE`].
pub fn parse_uint(line: &str) -> Option<usize> {
    static ONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([0-9]+)\s*$").unwrap());
    ONE.captures(line).and_then(|caps| bounded(&caps[1]))
}

/// Parse a line holding exactly two whitespace-separated non-negative integers, each no
/// larger than [`MAX_VALUE`].
pub fn parse_two_uints(line: &str) -> Option<(usize, usize)> {
    static TWO: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*([0-9]+)\s+([0-9]+)\s*$").unwrap());
    let caps = TWO.captures(line)?;
    Some((bounded(&caps[1])?, bounded(&caps[2])?))
}

/// Parse digits as a `usize` no larger than [`MAX_VALUE`].
fn bounded(digits: &str) -> Option<usize> {
    digits
        .parse::<u64>()
        .ok()
        .filter(|&v| v <= MAX_VALUE as u64)
        .and_then(|v| usize::try_from(v).ok())
}
