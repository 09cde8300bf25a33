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
//! Types that make up the game board.

use log::{debug, trace};

use crate::ships::{Line, Ship};

pub use self::{
    coordinate::Coordinate,
    dimensions::RectDimensions,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
};

mod coordinate;
mod dimensions;
mod errors;

/// Request to place a ship of `size` cells starting at `location`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// First cell of the ship.
    pub location: Coordinate,
    /// Number of cells the ship covers.
    pub size: usize,
    /// Extend along `x` if true, along `y` otherwise.
    pub horizontal: bool,
}

impl Placement {
    /// Construct a [`Placement`].
    pub fn new(location: Coordinate, size: usize, horizontal: bool) -> Self {
        Self {
            location,
            size,
            horizontal,
        }
    }
}

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not sink it.
    Hit,
    /// The shot hit a ship and sank it.
    Sunk,
    /// The cell had already been shot and nothing new was hit. The shot logs are left
    /// unchanged.
    Repeat,
}

impl ShotOutcome {
    /// True if the shot registered a new hit on a ship.
    pub fn is_new_hit(self) -> bool {
        match self {
            ShotOutcome::Hit | ShotOutcome::Sunk => true,
            ShotOutcome::Miss | ShotOutcome::Repeat => false,
        }
    }
}

/// Represents a single player's board: their ships and the shots fired at them.
#[derive(Debug, Clone)]
pub struct Board {
    /// Dimensions of this board.
    dim: RectDimensions,

    /// Ships in the order they were placed. No two ships share a cell.
    ships: Vec<Ship>,

    /// Cells where a shot registered a hit, in the order they were shot.
    hits: Vec<Coordinate>,

    /// Cells where a shot hit nothing, in the order they were shot.
    misses: Vec<Coordinate>,
}

impl Board {
    /// Construct an empty board with the given dimensions.
    pub fn new(dim: RectDimensions) -> Self {
        Self {
            dim,
            ships: Vec::new(),
            hits: Vec::new(),
            misses: Vec::new(),
        }
    }

    /// Get the [`RectDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &RectDimensions {
        &self.dim
    }

    /// Width of the board.
    pub fn width(&self) -> u32 {
        self.dim.width()
    }

    /// Height of the board.
    pub fn height(&self) -> u32 {
        self.dim.height()
    }

    /// Returns true if `coord` is on the board.
    pub fn is_valid_shot(&self, coord: Coordinate) -> bool {
        self.dim.contains(&coord)
    }

    /// Returns true if any ship on this board occupies `coord`.
    pub fn ship_at(&self, coord: Coordinate) -> bool {
        self.ships.iter().any(|ship| ship.covers(coord))
    }

    /// Returns true if a shot at `coord` was logged as a hit.
    pub fn hit_at(&self, coord: Coordinate) -> bool {
        self.hits.contains(&coord)
    }

    /// Returns true if a shot at `coord` was logged as a miss.
    pub fn miss_at(&self, coord: Coordinate) -> bool {
        self.misses.contains(&coord)
    }

    /// Number of ships placed on this board.
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Get an iterator over all ships on this board.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }

    /// Get an iterator over the ships that are not yet destroyed.
    pub fn alive_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|ship| !ship.is_destroyed())
    }

    /// Hits in the order they were fired.
    pub fn hits(&self) -> &[Coordinate] {
        &self.hits
    }

    /// Misses in the order they were fired.
    pub fn misses(&self) -> &[Coordinate] {
        &self.misses
    }

    /// Returns true if at least one ship has been placed and all of them are destroyed.
    /// A board without ships has nothing to lose and is never considered lost.
    pub fn is_lost(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_destroyed)
    }

    /// Attempts to place a ship of `size` cells starting at `location`. The ship extends
    /// along `x` if `horizontal`, otherwise along `y`.
    pub fn place_ship(
        &mut self,
        location: Coordinate,
        size: usize,
        horizontal: bool,
    ) -> Result<(), PlaceError> {
        self.place(Placement::new(location, size, horizontal))
    }

    /// Attempts to place a ship according to the given [`Placement`].
    pub fn place(&mut self, placement: Placement) -> Result<(), PlaceError> {
        let line = match Line::try_new(placement.size) {
            Some(line) => line,
            None => return Err(PlaceError::new(CannotPlaceReason::EmptyShip, placement)),
        };
        if !line.fits(placement.location, placement.horizontal, &self.dim) {
            return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, placement));
        }
        let cells = match line.project(placement.location, placement.horizontal) {
            Some(cells) => cells,
            None => return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, placement)),
        };
        if cells.iter().any(|&cell| self.ship_at(cell)) {
            return Err(PlaceError::new(CannotPlaceReason::Collision, placement));
        }
        debug!(
            "placed ship of size {} at {} ({})",
            placement.size,
            placement.location,
            if placement.horizontal {
                "horizontal"
            } else {
                "vertical"
            }
        );
        self.ships.push(Ship::new(cells));
        Ok(())
    }

    /// Fire a shot at `coord`. New hits are appended to the hit log and
    /// shots at empty water to the miss log. Shooting a cell that is already logged
    /// without registering anything new returns [`ShotOutcome::Repeat`] and leaves the
    /// logs untouched.
    pub fn record_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.is_valid_shot(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        // At most one ship can register the shot since ships never overlap.
        let sunk = self
            .ships
            .iter_mut()
            .find_map(|ship| {
                if ship.record_shot(coord) {
                    Some(ship.is_destroyed())
                } else {
                    None
                }
            });
        let outcome = match sunk {
            Some(sunk) => {
                self.hits.push(coord);
                if sunk {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            None if self.hit_at(coord) || self.miss_at(coord) => ShotOutcome::Repeat,
            None => {
                self.misses.push(coord);
                ShotOutcome::Miss
            }
        };
        trace!("shot at {}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Find a random legal position for a ship of `size` cells. Gives up and returns
    /// `None` after a bounded number of attempts.
    #[cfg(feature = "rng_gen")]
    pub fn random_placement<R: rand::Rng>(
        &self,
        rng: &mut R,
        size: usize,
    ) -> Option<Placement> {
        const ATTEMPTS: usize = 100;

        let line = Line::try_new(size)?;
        // Both axes fit in i32, checked when the dimensions were constructed.
        let width = self.dim.width() as i32;
        let height = self.dim.height() as i32;
        for _ in 0..ATTEMPTS {
            let location = Coordinate::new(rng.gen_range(0, width), rng.gen_range(0, height));
            let horizontal = rng.gen();
            if !line.fits(location, horizontal, &self.dim) {
                continue;
            }
            let clear = line
                .project(location, horizontal)
                .map_or(false, |cells| cells.iter().all(|&cell| !self.ship_at(cell)));
            if clear {
                return Some(Placement::new(location, size, horizontal));
            }
        }
        None
    }
}
