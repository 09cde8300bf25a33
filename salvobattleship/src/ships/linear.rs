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
use crate::board::{Coordinate, RectDimensions};

/// A linear ship shape, with a given length.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line(usize);

impl Line {
    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0);
        Line(len)
    }

    /// Construct a linear ship with the specified length, or `None` if len is 0.
    pub fn try_new(len: usize) -> Option<Self> {
        if len > 0 {
            Some(Line(len))
        } else {
            None
        }
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0
    }

    /// Project this line onto the grid, starting at `start` and extending along `x` if
    /// `horizontal` or along `y` otherwise. Returns `None` if any cell cannot be
    /// represented as a [`Coordinate`]. Does not check the cells against any board.
    pub fn project(&self, start: Coordinate, horizontal: bool) -> Option<Vec<Coordinate>> {
        (0..self.0)
            .map(|step| start.offset(step, horizontal))
            .collect()
    }

    /// Return true if the given projection is a straight contiguous run of exactly this
    /// line's length.
    pub fn is_valid_placement(&self, proj: &[Coordinate]) -> bool {
        if proj.len() != self.len() {
            return false;
        }
        let start = proj[0];
        let horizontal = proj.len() < 2 || proj[1].y == start.y;
        proj.iter()
            .enumerate()
            .all(|(step, coord)| start.offset(step, horizontal) == Some(*coord))
    }

    /// Return true if every cell of the projection from `start` lies on a board with the
    /// given dimensions. Lines longer than the side they extend along are rejected
    /// before anything is projected.
    pub fn fits(&self, start: Coordinate, horizontal: bool, dim: &RectDimensions) -> bool {
        let side = if horizontal { dim.width() } else { dim.height() };
        if self.0 > side as usize {
            return false;
        }
        match self.project(start, horizontal) {
            Some(cells) => cells.iter().all(|cell| dim.contains(cell)),
            None => false,
        }
    }
}
