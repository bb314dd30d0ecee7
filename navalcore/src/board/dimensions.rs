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
//! Rectangular board dimensions.
use std::borrow::Borrow;

use crate::board::{common::Coordinate2D as Coordinate, DimensionsError};

/// Largest number of cells a board may have. Every cell is allocated up front, so this
/// bounds the memory used by a single board.
pub const MAX_CELLS: usize = 1 << 20;

/// Dimensions of a rectangular board. The `x` coordinate runs along the width and the
/// `y` coordinate along the height.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Fails if `width` or `height` is 0 or if `width * height` exceeds [`MAX_CELLS`].
    pub fn try_new(width: usize, height: usize) -> Result<Self, DimensionsError> {
        if width == 0 || height == 0 {
            Err(DimensionsError::Empty { width, height })
        } else {
            width
                .checked_mul(height)
                .filter(|&cells| cells <= MAX_CELLS)
                .map(|_| Self { width, height })
                .ok_or(DimensionsError::TooLarge { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Compute the total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.y * self.width + coord.x)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row, in increasing `x`.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }

    /// Check if the given [`Coordinate`] is in bounds. If so, return it, otherwise
    /// return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.x < self.width && c.y < self.height {
            Some(coord)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_boards_are_rejected() {
        assert_eq!(
            Dimensions::try_new(0, 4),
            Err(DimensionsError::Empty {
                width: 0,
                height: 4
            })
        );
        assert!(Dimensions::try_new(4, 0).is_err());
    }

    #[test]
    fn overflowing_boards_are_rejected() {
        assert_eq!(
            Dimensions::try_new(usize::max_value(), 2),
            Err(DimensionsError::TooLarge {
                width: usize::max_value(),
                height: 2
            })
        );
    }

    #[test]
    fn boards_above_the_cell_limit_are_rejected() {
        assert!(Dimensions::try_new(1024, 1024).is_ok());
        assert!(Dimensions::try_new(MAX_CELLS, 1).is_ok());
        assert_eq!(
            Dimensions::try_new(MAX_CELLS + 1, 1),
            Err(DimensionsError::TooLarge {
                width: MAX_CELLS + 1,
                height: 1
            })
        );
        assert!(Dimensions::try_new(1025, 1024).is_err());
        assert!(Dimensions::try_new(999_999_999, 999_999_999).is_err());
    }

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::try_new(3, 2).unwrap();
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Coordinate::new(2, 0)), Some(2));
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 1)), Some(3));
        assert_eq!(dim.try_linearize(&Coordinate::new(3, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 2)), None);
        let indexes: Vec<_> = dim
            .iter_coordinates()
            .flatten()
            .map(|coord| dim.try_linearize(&coord))
            .collect();
        assert_eq!(indexes, (0..dim.total_size()).map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn rows_run_by_y_then_x() {
        let dim = Dimensions::try_new(2, 2).unwrap();
        let rows: Vec<Vec<(usize, usize)>> = dim
            .iter_coordinates()
            .map(|row| row.map(Into::into).collect())
            .collect();
        assert_eq!(rows, vec![vec![(0, 0), (1, 0)], vec![(0, 1), (1, 1)]]);
    }
}
