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
//! Types used for defining ships and tracking damage to them.
use crate::board::Coordinate;

pub use self::linear::Line;

mod linear;

/// A single cell of a ship and whether it has been hit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipPart {
    location: Coordinate,
    hit: bool,
}

impl ShipPart {
    /// Coordinate occupied by this part.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Whether this part has been hit.
    pub fn hit(&self) -> bool {
        self.hit
    }
}

/// A ship placed on a board. The parts form a straight contiguous run which never
/// changes after placement; only the hit flags of the parts change, and only from unhit
/// to hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    parts: Vec<ShipPart>,

    /// Cached: true iff every part is hit.
    destroyed: bool,
}

impl Ship {
    /// Build a ship covering the given cells. The caller guarantees the cells come from
    /// a [`Line`] projection, so they are non-empty, distinct and contiguous.
    pub(crate) fn new(cells: Vec<Coordinate>) -> Self {
        debug_assert!(!cells.is_empty());
        debug_assert!(Line::new(cells.len()).is_valid_placement(&cells));
        Self {
            parts: cells
                .into_iter()
                .map(|location| ShipPart {
                    location,
                    hit: false,
                })
                .collect(),
            destroyed: false,
        }
    }

    /// Number of cells this ship covers.
    pub fn size(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if some part of this ship occupies `coord`.
    pub fn covers(&self, coord: Coordinate) -> bool {
        self.parts.iter().any(|part| part.location == coord)
    }

    /// Record a shot at `coord`. Returns true only if this registered a new hit: a part
    /// of the ship occupies `coord` and had not been hit before.
    pub fn record_shot(&mut self, coord: Coordinate) -> bool {
        match self.parts.iter_mut().find(|part| part.location == coord) {
            Some(part) if !part.hit => {
                part.hit = true;
                self.destroyed = self.parts.iter().all(|part| part.hit);
                true
            }
            _ => false,
        }
    }

    /// Returns true once every part has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Get an iterator over the parts of this ship in order from its starting cell.
    pub fn parts(&self) -> impl Iterator<Item = &ShipPart> {
        self.parts.iter()
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.parts.iter().map(|part| part.location)
    }
}
