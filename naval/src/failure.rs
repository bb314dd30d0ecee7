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
//! Everything that can end a run early, and how each is reported.
use std::{error::Error as StdError, io};

use thiserror::Error;

use navalcore::{
    board::{CannotPlaceReason, PlaceError},
    map::MapError,
    rules::RulesError,
};

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A fatal condition. The `Display` text is the single line shown to the player.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("usage: naval rules map")]
    ParamsMissing,
    #[error("Missing rules file")]
    RulesMissing(#[source] io::Error),
    #[error("Missing map file")]
    MapMissing(#[source] io::Error),
    #[error("Error in rules file")]
    RulesInvalid(#[from] RulesError),
    #[error("Overlap in map file")]
    Overlap(#[source] PlaceError),
    #[error("Out of bounds in map file")]
    MapOutOfBounds(#[source] Cause),
    #[error("Error in map file")]
    MapInvalid(#[source] Cause),
    /// Guess input ended before every ship was sunk.
    #[error("Bad guess")]
    InputExhausted,
    /// Reading guesses or writing the board failed.
    #[error("Bad guess")]
    SessionIo(#[source] io::Error),
}

impl Failure {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Failure::ParamsMissing => 10,
            Failure::RulesMissing(_) => 20,
            Failure::MapMissing(_) => 30,
            Failure::RulesInvalid(_) => 40,
            Failure::Overlap(_) => 50,
            Failure::MapOutOfBounds(_) => 51,
            Failure::MapInvalid(_) => 52,
            Failure::InputExhausted | Failure::SessionIo(_) => 60,
        }
    }

    /// Iterate the underlying causes, outermost first.
    pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }
}

impl From<MapError> for Failure {
    fn from(err: MapError) -> Self {
        if err.is_out_of_bounds() {
            Failure::MapOutOfBounds(err.into())
        } else {
            Failure::MapInvalid(err.into())
        }
    }
}

impl From<PlaceError> for Failure {
    fn from(err: PlaceError) -> Self {
        match err.reason() {
            CannotPlaceReason::AlreadyOccupied(_) => Failure::Overlap(err),
            CannotPlaceReason::OutOfBounds => Failure::MapOutOfBounds(err.into()),
            CannotPlaceReason::NoShips => Failure::MapInvalid(err.into()),
        }
    }
}
