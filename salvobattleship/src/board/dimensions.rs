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
use std::convert::TryFrom;

use crate::board::Coordinate;

/// Width and height of a rectangular board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectDimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: u32,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: u32,
}

impl RectDimensions {
    /// Create new [`RectDimensions`] with the specified width and height.
    /// Panics if `width` or `height` is 0 or does not fit in a [`Coordinate`] axis.
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => panic!("invalid RectDimensions {}x{}", width, height),
        }
    }

    /// Create new [`RectDimensions`] with the specified width and height.
    /// Returns `None` if `width` or `height` is 0, or if either is too large to be
    /// addressed by an `i32` coordinate.
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Get the width of these [`RectDimensions`].
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of these [`RectDimensions`].
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn total_size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check if the given [`Coordinate`] lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }
}

impl Default for RectDimensions {
    /// Construct the default rectangular dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}
