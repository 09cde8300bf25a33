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
//! Settings fixed when a game is created.
use crate::{
    board::RectDimensions,
    game::{ConfigError, SalvoAllocation, ShipAllocation},
};

/// Board dimensions and allocation rules for a game. Both players' boards share the
/// same dimensions and fleet.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Dimensions of each player's board.
    pub dimensions: RectDimensions,
    /// Ship sizes each player must place.
    pub ship_allocation: ShipAllocation,
    /// Shots contributed per living ship, by size.
    pub salvo_allocation: SalvoAllocation,
}

impl GameConfig {
    /// Build a config with the given board size and the default allocations. Only the
    /// dimensions are checked here; the fleet may still be replaced before it is
    /// checked against the board by [`validate`][GameConfig::validate].
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let dimensions = RectDimensions::try_new(width, height)
            .ok_or(ConfigError::InvalidDimensions { width, height })?;
        Ok(Self {
            dimensions,
            ..Default::default()
        })
    }

    /// Replace the ship allocation.
    pub fn with_ship_allocation<A: Into<ShipAllocation>>(mut self, allocation: A) -> Self {
        self.ship_allocation = allocation.into();
        self
    }

    /// Replace the salvo allocation.
    pub fn with_salvo_allocation(mut self, allocation: SalvoAllocation) -> Self {
        self.salvo_allocation = allocation;
        self
    }

    /// Check that the board dimensions are usable. Deserialized configs bypass
    /// [`RectDimensions::try_new`], so this is where they are caught.
    pub fn validate_dimensions(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.dimensions.width(), self.dimensions.height());
        match RectDimensions::try_new(width, height) {
            Some(_) => Ok(()),
            None => Err(ConfigError::InvalidDimensions { width, height }),
        }
    }

    /// Check the dimensions and reject fleets that can never be placed: an empty fleet,
    /// a ship of size 0, a ship longer than both sides of the board, or more ship cells
    /// than the board has. Passing does not guarantee that the fleet can be packed onto
    /// the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_dimensions()?;
        validate_ship_allocation(&self.ship_allocation, &self.dimensions)
    }
}

impl Default for GameConfig {
    /// A 10x10 board with the classic fleet and one shot per living ship.
    fn default() -> Self {
        Self {
            dimensions: RectDimensions::default(),
            ship_allocation: ShipAllocation::default(),
            salvo_allocation: SalvoAllocation::default(),
        }
    }
}

pub(super) fn validate_ship_allocation(
    allocation: &ShipAllocation,
    dim: &RectDimensions,
) -> Result<(), ConfigError> {
    if allocation.is_empty() {
        return Err(ConfigError::EmptyShipAllocation);
    }
    let longest = dim.width().max(dim.height()) as usize;
    for &size in allocation.sizes() {
        if size == 0 {
            return Err(ConfigError::ZeroSizeShip);
        }
        if size > longest {
            return Err(ConfigError::ShipTooLarge(size));
        }
    }
    let cells = allocation
        .sizes()
        .iter()
        .fold(0u64, |total, &size| total.saturating_add(size as u64));
    let area = dim.total_size();
    if cells > area {
        return Err(ConfigError::FleetTooLarge { cells, area });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.dimensions, RectDimensions::new(10, 10));
        assert_eq!(config.ship_allocation.sizes(), &[2, 3, 3, 4, 5]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_settings() {
        assert_eq!(
            GameConfig::new(0, 5),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        let small = GameConfig::new(4, 4).unwrap();
        assert_eq!(small.validate(), Err(ConfigError::ShipTooLarge(5)));
        assert_eq!(
            small
                .with_ship_allocation(ShipAllocation::new(vec![1]))
                .validate(),
            Ok(())
        );

        let config = GameConfig::default();
        assert_eq!(
            config.clone().with_ship_allocation(ShipAllocation::new(Vec::new())).validate(),
            Err(ConfigError::EmptyShipAllocation)
        );
        assert_eq!(
            config.with_ship_allocation(ShipAllocation::new(vec![2, 0])).validate(),
            Err(ConfigError::ZeroSizeShip)
        );
    }

    #[test]
    fn long_ship_fits_on_tall_board() {
        let config = GameConfig {
            dimensions: RectDimensions::new(1, 6),
            ..Default::default()
        };
        assert_eq!(config.with_ship_allocation(ShipAllocation::new(vec![6])).validate(), Ok(()));
    }

    #[test]
    fn fleet_must_fit_in_board_area() {
        let config = GameConfig::new(2, 2)
            .unwrap()
            .with_ship_allocation(ShipAllocation::new(vec![2, 2, 2]));
        assert_eq!(
            config.validate(),
            Err(ConfigError::FleetTooLarge { cells: 6, area: 4 })
        );
    }
}
