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
//! Legality rules checked before a turn is executed, per kind of turn.
//!
//! Placement and salvo turns are deliberately not symmetric: during placement either
//! player may act at any time, including several times in a row, while salvos strictly
//! alternate.
use enumflags2::BitFlags;

use crate::game::{Phase, TurnError, TurnKind};

/// A single precondition on a turn.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum TurnRule {
    /// The game must be in [`Phase::Placement`].
    PlacementPhase = 0b001,
    /// The game must be in [`Phase::Battle`].
    BattlePhase = 0b010,
    /// The acting player must be the current player.
    CurrentPlayer = 0b100,
}

/// Get the set of rules that apply to turns of the given kind.
pub fn rules_for(kind: TurnKind) -> BitFlags<TurnRule> {
    match kind {
        TurnKind::Placement => BitFlags::from(TurnRule::PlacementPhase),
        TurnKind::Salvo => TurnRule::BattlePhase | TurnRule::CurrentPlayer,
    }
}

/// Check the rules for a turn of `kind` submitted in `phase`, where `on_turn` says
/// whether the acting player is the current player. Phase rules are checked before
/// turn order.
pub fn check(kind: TurnKind, phase: Phase, on_turn: bool) -> Result<(), TurnError> {
    let rules = rules_for(kind);
    if rules.contains(TurnRule::PlacementPhase) && phase != Phase::Placement {
        return Err(TurnError::NotPlacementPhase);
    }
    if rules.contains(TurnRule::BattlePhase) && phase != Phase::Battle {
        return Err(TurnError::NotBattlePhase);
    }
    if rules.contains(TurnRule::CurrentPlayer) && !on_turn {
        return Err(TurnError::NotYourTurn);
    }
    Ok(())
}
