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
use std::collections::HashSet;

use navalcore::{
    board::{Board, CannotPlaceReason, Cell, Dimensions, GuessOutcome},
    rules::{Rules, RulesError},
    ships::{Direction, Line, Ship},
    Coordinate,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn ship_on(w: usize, h: usize) -> impl Strategy<Value = Ship> {
    (1..=w.max(h), 0..w, 0..h, direction())
        .prop_map(|(len, x, y, dir)| Ship::new(Line::new(len), Coordinate::new(x, y), dir))
}

/// A board size and a fleet of ships that each fit on it, though they may overlap.
fn board_and_fleet() -> impl Strategy<Value = (Dimensions, Vec<Ship>)> {
    (1usize..10, 1usize..10).prop_flat_map(|(w, h)| {
        let dim = Dimensions::try_new(w, h).unwrap();
        (
            Just(dim),
            prop::collection::vec(ship_on(w, h), 1..6)
                .prop_map(move |fleet| {
                    fleet
                        .into_iter()
                        .filter(|ship| ship.project(&dim).is_some())
                        .collect::<Vec<_>>()
                })
                .prop_filter("needs at least one ship", |fleet| !fleet.is_empty()),
        )
    })
}

fn snapshot(board: &Board) -> Vec<Vec<Cell>> {
    board.iter_rows().map(|row| row.collect()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn projection_is_a_straight_run_inside_the_board(
        w in 1usize..12,
        h in 1usize..12,
        len in 1usize..12,
        x in 0usize..14,
        y in 0usize..14,
        dir in direction(),
    ) {
        let dim = Dimensions::try_new(w, h).unwrap();
        let ship = Ship::new(Line::new(len), Coordinate::new(x, y), dir);
        let (dx, dy) = dir.unit();
        let end_x = x as isize + dx * (len as isize - 1);
        let end_y = y as isize + dy * (len as isize - 1);
        let fits = x < w && y < h
            && end_x >= 0 && (end_x as usize) < w
            && end_y >= 0 && (end_y as usize) < h;
        match ship.project(&dim) {
            None => prop_assert!(!fits),
            Some(cells) => {
                prop_assert!(fits);
                prop_assert_eq!(cells.len(), len);
                prop_assert_eq!(cells[0], Coordinate::new(x, y));
                for (i, c) in cells.iter().enumerate() {
                    prop_assert!(dim.contains(c));
                    prop_assert_eq!(c.x as isize, x as isize + dx * i as isize);
                    prop_assert_eq!(c.y as isize, y as isize + dy * i as isize);
                }
            }
        }
    }

    #[test]
    fn placement_fails_exactly_when_ships_overlap((dim, fleet) in board_and_fleet()) {
        let mut claimed = HashSet::new();
        let mut first_clash = None;
        for (id, ship) in fleet.iter().enumerate() {
            for c in ship.project(&dim).unwrap() {
                if !claimed.insert(c) && first_clash.is_none() {
                    first_clash = Some(id);
                }
            }
            if first_clash.is_some() {
                break;
            }
        }
        match (Board::place_fleet(dim, &fleet), first_clash) {
            (Ok(board), None) => {
                for (id, ship) in fleet.iter().enumerate() {
                    for c in ship.project(&dim).unwrap() {
                        prop_assert_eq!(board.get(c), Some(Cell::ShipIntact(id)));
                    }
                }
            }
            (Err(err), Some(id)) => {
                prop_assert_eq!(err.ship(), id);
                let earlier = match err.reason() {
                    CannotPlaceReason::AlreadyOccupied(earlier) => earlier,
                    other => panic!("unexpected reason {:?}", other),
                };
                prop_assert!(earlier < id);
            }
            (Ok(_), Some(id)) => prop_assert!(false, "ship {} overlapped but was placed", id),
            (Err(err), None) => prop_assert!(false, "no overlap but placement failed: {}", err),
        }
    }

    #[test]
    fn repeated_guesses_change_nothing(
        (dim, fleet) in board_and_fleet(),
        guesses in prop::collection::vec((0usize..10, 0usize..10), 1..40),
    ) {
        let mut board = match Board::place_fleet(dim, &fleet) {
            Ok(board) => board,
            Err(_) => return Ok(()),
        };
        for &(x, y) in &guesses {
            let coord = Coordinate::new(x, y);
            let first = board.guess(coord);
            let after_first = snapshot(&board);
            let sunk: Vec<bool> = (0..board.num_ships()).map(|id| board.is_sunk(id)).collect();
            let over = board.is_game_over();
            let second = board.guess(coord);
            prop_assert_eq!(snapshot(&board), after_first);
            prop_assert_eq!((0..board.num_ships()).map(|id| board.is_sunk(id)).collect::<Vec<_>>(), sunk);
            prop_assert_eq!(board.is_game_over(), over);
            match first {
                GuessOutcome::OutOfBounds => prop_assert_eq!(second, GuessOutcome::OutOfBounds),
                _ => prop_assert_eq!(second, GuessOutcome::Miss),
            }
            if over {
                break;
            }
        }
    }

    #[test]
    fn game_over_iff_every_ship_cell_is_hit(
        (dim, fleet) in board_and_fleet(),
        guesses in prop::collection::vec((0usize..10, 0usize..10), 0..60),
    ) {
        let mut board = match Board::place_fleet(dim, &fleet) {
            Ok(board) => board,
            Err(_) => return Ok(()),
        };
        let mut reported = false;
        for &(x, y) in &guesses {
            if reported {
                break;
            }
            reported = board.guess(Coordinate::new(x, y)).is_game_over();
        }
        let all_hit = (0..board.num_ships())
            .flat_map(|id| board.ship_coords(id).unwrap().to_vec())
            .all(|c| matches!(board.get(c), Some(Cell::ShipHit(_))));
        prop_assert_eq!(board.is_game_over(), all_hit);
        prop_assert_eq!(reported, all_hit);
        prop_assert_eq!(
            (0..board.num_ships()).all(|id| board.is_sunk(id)),
            all_hit
        );
    }

    #[test]
    fn fleet_size_outside_range_is_rejected(count in 0usize..40) {
        let text = format!("6 6\n{}\n{}", count, "2\n".repeat(count));
        match text.parse::<Rules>() {
            Ok(rules) => {
                prop_assert!((1..=15).contains(&count));
                prop_assert_eq!(rules.num_ships(), count);
            }
            Err(RulesError::FleetSize(n)) => {
                prop_assert_eq!(n, count);
                prop_assert!(count == 0 || count > 15);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }
}
