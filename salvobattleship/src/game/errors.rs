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
//! Errors returned by the [`Game`][crate::game::Game].
use std::borrow::Cow;

use thiserror::Error;

use crate::{
    board::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
    game::Phase,
};

/// Reason a turn (or a call to `start`) was rejected. Rejections never change the state
/// of the game, so the caller may retry with corrected input.
///
/// Each variant has a stable string [`code`][TurnError::code] for callers that pass
/// results over the wire.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TurnError {
    /// The identifier matches neither player in the game.
    #[error("player {0:?} is not part of this game")]
    UnknownPlayer(String),
    /// The game was not in the phase required by the operation.
    #[error("operation not allowed in phase {0:?}")]
    InvalidPhase(Phase),
    /// A placement was submitted outside of the placement phase.
    #[error("ships can only be placed during the placement phase")]
    NotPlacementPhase,
    /// The player has no ship of the requested size left to place.
    #[error("no ship of size {0} is left to place")]
    CannotPlaceShipOfThatSize(usize),
    /// The ship would extend past the edge of the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// The ship would overlap a ship that was already placed.
    #[error("the ship overlaps another ship")]
    Collision,
    /// A salvo was submitted outside of the battle phase.
    #[error("shots can only be fired during the battle phase")]
    NotBattlePhase,
    /// A salvo was submitted by the player who is not on turn.
    #[error("it is not this player's turn")]
    NotYourTurn,
    /// The salvo contained more shots than the player's living ships allow.
    #[error("too many shots, at most {max} may be fired")]
    TooManyShots {
        /// Number of shots the player could have fired.
        max: u32,
    },
    /// At least one shot of the salvo was aimed outside of the opponent's board.
    #[error("the salvo targets a cell outside of the board")]
    SalvoOutOfBounds,
    /// The turn kind tag was not recognized.
    #[error("unknown turn type {0:?}")]
    InvalidTurnType(String),
    /// The game cannot start because its rules can never be satisfied on its boards.
    #[error("invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl TurnError {
    /// Stable, machine readable code for this error.
    pub fn code(&self) -> Cow<'static, str> {
        match self {
            TurnError::UnknownPlayer(_) => "unknown_player".into(),
            TurnError::InvalidPhase(_) => "invalid_phase".into(),
            TurnError::NotPlacementPhase => "not_placement_phase".into(),
            TurnError::CannotPlaceShipOfThatSize(_) => "cannot_place_ship_of_that_size".into(),
            TurnError::OutOfBounds => "out_of_bounds".into(),
            TurnError::Collision => "collides_with_other_ship".into(),
            TurnError::NotBattlePhase => "not_battle_phase".into(),
            TurnError::NotYourTurn => "not_your_turn".into(),
            TurnError::TooManyShots { max } => format!("too_many_shots__max_is_{}", max).into(),
            TurnError::SalvoOutOfBounds => "salvo_out_of_bounds".into(),
            TurnError::InvalidTurnType(_) => "invalid_turn_type".into(),
            TurnError::InvalidConfig(_) => "invalid_config".into(),
        }
    }
}

impl From<PlaceError> for TurnError {
    fn from(err: PlaceError) -> Self {
        match err.reason() {
            CannotPlaceReason::OutOfBounds => TurnError::OutOfBounds,
            CannotPlaceReason::Collision => TurnError::Collision,
            CannotPlaceReason::EmptyShip => {
                TurnError::CannotPlaceShipOfThatSize(err.placement().size)
            }
        }
    }
}

impl From<ShotError> for TurnError {
    fn from(err: ShotError) -> Self {
        match err.reason() {
            CannotShootReason::OutOfBounds => TurnError::OutOfBounds,
        }
    }
}

/// Error returned when a game cannot be built from the given settings.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// Boards must have a nonzero width and height addressable by a coordinate.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Each board needs at least one ship, otherwise the battle can never start.
    #[error("the ship allocation is empty")]
    EmptyShipAllocation,
    /// Ships must cover at least one cell.
    #[error("the ship allocation contains a ship of size 0")]
    ZeroSizeShip,
    /// A ship of this size does not fit on the board in either orientation.
    #[error("a ship of size {0} does not fit on the board")]
    ShipTooLarge(usize),
    /// The fleet covers more cells than the board has.
    #[error("the fleet needs {cells} cells but the board only has {area}")]
    FleetTooLarge {
        /// Cells covered by the whole fleet.
        cells: u64,
        /// Cells on the board.
        area: u64,
    },
    /// Both players were given the same identifier.
    #[error("both players use the identifier {0:?}")]
    DuplicatePlayer(String),
    /// The rules can only be changed before the game has started.
    #[error("the game has already started")]
    AlreadyStarted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Coordinate, RectDimensions};

    #[test]
    fn codes() {
        assert_eq!(TurnError::Collision.code(), "collides_with_other_ship");
        assert_eq!(
            TurnError::TooManyShots { max: 11 }.code(),
            "too_many_shots__max_is_11"
        );
        assert_eq!(
            TurnError::InvalidTurnType("bomb".into()).code(),
            "invalid_turn_type"
        );
        assert_eq!(
            TurnError::CannotPlaceShipOfThatSize(6).code(),
            "cannot_place_ship_of_that_size"
        );
        assert_eq!(
            TurnError::from(ConfigError::ShipTooLarge(4)).code(),
            "invalid_config"
        );
    }

    #[test]
    fn converts_board_errors() {
        let mut board = Board::new(RectDimensions::new(4, 4));
        board.place_ship(Coordinate::new(0, 0), 2, true).unwrap();
        let collision = board
            .place_ship(Coordinate::new(1, 0), 2, false)
            .unwrap_err();
        assert_eq!(TurnError::from(collision), TurnError::Collision);
        let outside = board
            .place_ship(Coordinate::new(3, 3), 2, true)
            .unwrap_err();
        assert_eq!(TurnError::from(outside), TurnError::OutOfBounds);
        let shot = board.record_shot(Coordinate::new(4, 0)).unwrap_err();
        assert_eq!(TurnError::from(shot).code(), "out_of_bounds");
    }
}
