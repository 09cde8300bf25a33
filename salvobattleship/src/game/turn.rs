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
//! Request and response values exchanged between a caller and the [`Game`].
//!
//! [`Game`]: crate::game::Game
use std::{fmt, str::FromStr};

use crate::{
    board::{Coordinate, Placement},
    game::TurnError,
};

/// A participant in the game. Only the `identifier` is used to decide which board a
/// turn acts on and whose turn it is; the `name` is for display.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Identifier, unique within a game.
    pub identifier: String,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Construct a player with the given identifier and display name.
    pub fn new<I: Into<String>, N: Into<String>>(identifier: I, name: N) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
        }
    }

    /// Construct a player known only by its identifier.
    pub fn anonymous<I: Into<String>>(identifier: I) -> Self {
        Self::new(identifier, String::new())
    }

    /// Returns true if this player has the given identifier.
    pub fn is(&self, identifier: &str) -> bool {
        self.identifier == identifier
    }
}

/// A batch of shots fired as a single turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Salvo {
    /// Target cells on the opponent's board, applied in order.
    pub locations: Vec<Coordinate>,
}

impl Salvo {
    /// Construct a salvo aimed at the given cells.
    pub fn new(locations: Vec<Coordinate>) -> Self {
        Self { locations }
    }
}

/// Tag naming the kind of a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TurnKind {
    /// Place one ship on the acting player's own board.
    Placement,
    /// Fire a volley at the opponent's board.
    Salvo,
}

impl TurnKind {
    /// Wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TurnKind::Placement => "placement",
            TurnKind::Salvo => "salvo",
        }
    }
}

impl fmt::Display for TurnKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TurnKind {
    type Err = TurnError;

    /// Parse a wire tag. Unrecognized tags fail with [`TurnError::InvalidTurnType`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placement" => Ok(TurnKind::Placement),
            "salvo" => Ok(TurnKind::Salvo),
            other => Err(TurnError::InvalidTurnType(other.to_owned())),
        }
    }
}

/// What a turn does.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Action {
    /// Place one ship on the acting player's own board.
    Placement(Placement),
    /// Fire at the opponent's board.
    Salvo(Salvo),
}

/// A turn submitted by a player.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// The acting player.
    pub player: Player,
    /// What the player does this turn.
    pub action: Action,
}

impl Turn {
    /// A placement turn.
    pub fn placement(player: Player, placement: Placement) -> Self {
        Self {
            player,
            action: Action::Placement(placement),
        }
    }

    /// A salvo turn.
    pub fn salvo(player: Player, salvo: Salvo) -> Self {
        Self {
            player,
            action: Action::Salvo(salvo),
        }
    }

    /// The kind tag of this turn.
    pub fn kind(&self) -> TurnKind {
        match self.action {
            Action::Placement(_) => TurnKind::Placement,
            Action::Salvo(_) => TurnKind::Salvo,
        }
    }
}

/// Flat response record for callers that report results as data rather than as a
/// `Result`: `ok`, an optional error code, and the number of hits (meaningful for salvo
/// turns only).
#[derive(Debug, Clone, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Whether the turn was accepted.
    pub ok: bool,
    /// The [`TurnError::code`] of a rejected turn.
    pub error: Option<String>,
    /// New hits scored by an accepted salvo. Always 0 otherwise.
    pub hits: u32,
}

impl From<&Result<u32, TurnError>> for TurnReport {
    fn from(result: &Result<u32, TurnError>) -> Self {
        match result {
            Ok(hits) => TurnReport {
                ok: true,
                error: None,
                hits: *hits,
            },
            Err(err) => TurnReport {
                ok: false,
                error: Some(err.code().into_owned()),
                hits: 0,
            },
        }
    }
}

impl From<Result<u32, TurnError>> for TurnReport {
    fn from(result: Result<u32, TurnError>) -> Self {
        TurnReport::from(&result)
    }
}

/// A submitted turn and how it was resolved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TurnRecord {
    /// The turn as submitted.
    pub turn: Turn,
    /// Number of hits if the turn was accepted, or why it was rejected.
    pub outcome: Result<u32, TurnError>,
}

impl TurnRecord {
    /// Whether the turn was accepted.
    pub fn accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}
