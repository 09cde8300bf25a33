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
//! The two-player game: phases, turn order, and turn resolution.
//!
//! A [`Game`] is an ordinary value owned by its caller. All mutation goes through
//! `&mut self`, so a game can only be advanced by one writer at a time; callers serving
//! several matches keep one independent `Game` per match.
use std::collections::BTreeMap;

use log::{debug, info};

use crate::board::{Board, Coordinate, Placement};

pub use self::{
    allocation::{remaining_ships, SalvoAllocation, ShipAllocation},
    config::GameConfig,
    errors::{ConfigError, TurnError},
    rules::TurnRule,
    turn::{Action, Player, Salvo, Turn, TurnKind, TurnRecord, TurnReport},
};

mod allocation;
mod config;
mod errors;
pub mod rules;
mod turn;

/// Phase of the game. Phases only ever advance, in declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Created but [`Game::start`] has not been called.
    NotStarted,
    /// Players are placing ships, in any order.
    Placement,
    /// Players alternate firing salvos.
    Battle,
    /// One player's ships are all destroyed.
    Finished,
}

/// Which of the two seats a player occupies.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Seat {
    One,
    Two,
}

impl Seat {
    fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// A game between two players.
#[derive(Debug, Clone)]
pub struct Game {
    board1: Board,
    board2: Board,
    player1: Player,
    player2: Player,
    ship_allocation: ShipAllocation,
    salvo_allocation: SalvoAllocation,
    phase: Phase,
    current: Seat,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Create a game on `width` x `height` boards with the default fleet of sizes
    /// `{2, 3, 3, 4, 5}` and one shot per living ship.
    pub fn new(
        width: u32,
        height: u32,
        player1: Player,
        player2: Player,
    ) -> Result<Self, ConfigError> {
        Self::from_config(GameConfig::new(width, height)?, player1, player2)
    }

    /// Create a game from an explicit [`GameConfig`]. The fleet is checked against the
    /// board when it is replaced and again by [`start`][Game::start].
    pub fn from_config(
        config: GameConfig,
        player1: Player,
        player2: Player,
    ) -> Result<Self, ConfigError> {
        config.validate_dimensions()?;
        if player1.identifier == player2.identifier {
            return Err(ConfigError::DuplicatePlayer(player1.identifier));
        }
        Ok(Self {
            board1: Board::new(config.dimensions),
            board2: Board::new(config.dimensions),
            player1,
            player2,
            ship_allocation: config.ship_allocation,
            salvo_allocation: config.salvo_allocation,
            phase: Phase::NotStarted,
            current: Seat::One,
            history: Vec::new(),
        })
    }

    /// Replace the ship allocation. Only allowed before the game is started.
    pub fn set_ship_allocation(&mut self, allocation: ShipAllocation) -> Result<(), ConfigError> {
        if self.phase != Phase::NotStarted {
            return Err(ConfigError::AlreadyStarted);
        }
        config::validate_ship_allocation(&allocation, self.board1.dimensions())?;
        self.ship_allocation = allocation;
        Ok(())
    }

    /// Replace the salvo allocation. Only allowed before the game is started.
    pub fn set_salvo_allocation(
        &mut self,
        allocation: SalvoAllocation,
    ) -> Result<(), ConfigError> {
        if self.phase != Phase::NotStarted {
            return Err(ConfigError::AlreadyStarted);
        }
        self.salvo_allocation = allocation;
        Ok(())
    }

    /// Begin the placement phase with player 1 on turn. Fails with
    /// [`TurnError::InvalidPhase`] if the game was already started, and with
    /// [`TurnError::InvalidConfig`] if the fleet can never be placed on the boards.
    pub fn start(&mut self) -> Result<(), TurnError> {
        if self.phase != Phase::NotStarted {
            return Err(TurnError::InvalidPhase(self.phase));
        }
        config::validate_ship_allocation(&self.ship_allocation, self.board1.dimensions())?;
        self.current = Seat::One;
        self.advance(Phase::Placement);
        Ok(())
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// The first player.
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// The second player.
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Board of the first player.
    pub fn board1(&self) -> &Board {
        &self.board1
    }

    /// Board of the second player.
    pub fn board2(&self) -> &Board {
        &self.board2
    }

    /// The player's own board, or `None` for an unknown identifier.
    pub fn board_for(&self, identifier: &str) -> Option<&Board> {
        self.seat_of(identifier).ok().map(|seat| self.board(seat))
    }

    /// The ship allocation in effect.
    pub fn ship_allocation(&self) -> &ShipAllocation {
        &self.ship_allocation
    }

    /// The salvo allocation in effect.
    pub fn salvo_allocation(&self) -> &SalvoAllocation {
        &self.salvo_allocation
    }

    /// Every turn submitted so far, accepted or not, in submission order.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The winner once the game is finished: the player whose board is not lost.
    pub fn winner(&self) -> Option<&Player> {
        if self.phase != Phase::Finished {
            None
        } else if self.board2.is_lost() {
            Some(&self.player1)
        } else {
            Some(&self.player2)
        }
    }

    /// Ship sizes the player still has to place, with the number of ships owed per size.
    /// Returns `None` for an unknown identifier.
    pub fn remaining_ships(&self, identifier: &str) -> Option<BTreeMap<usize, isize>> {
        self.board_for(identifier)
            .map(|board| self.ship_allocation.remaining(board.ships().map(|s| s.size())))
    }

    /// Number of shots the player may fire in one salvo: the sum of the salvo allocation
    /// for every ship on the player's own board that is not yet destroyed. Unknown
    /// players may fire nothing.
    pub fn shots_player_can_fire(&self, identifier: &str) -> u32 {
        match self.board_for(identifier) {
            Some(board) => board
                .alive_ships()
                .map(|ship| self.salvo_allocation.shots(ship.size()))
                .sum(),
            None => 0,
        }
    }

    /// Submit a turn. If it is accepted, the turn passes to the other player and the
    /// phase advances when its exit condition holds. Rejected turns change nothing but
    /// the history. Returns the number of new hits, which is always 0 for placements.
    pub fn submit_turn(&mut self, turn: Turn) -> Result<u32, TurnError> {
        let outcome = self.execute_turn(&turn);
        match outcome {
            Ok(hits) => {
                debug!(
                    "accepted {} turn from {:?} ({} hits)",
                    turn.kind(),
                    turn.player.identifier,
                    hits
                );
                self.end_turn();
            }
            Err(ref err) => debug!(
                "rejected {} turn from {:?}: {}",
                turn.kind(),
                turn.player.identifier,
                err.code()
            ),
        }
        self.history.push(TurnRecord {
            turn,
            outcome: outcome.clone(),
        });
        outcome
    }

    /// Submit a placement turn for the player with the given identifier.
    pub fn submit_placement_turn(
        &mut self,
        identifier: &str,
        x: i32,
        y: i32,
        size: usize,
        horizontal: bool,
    ) -> Result<(), TurnError> {
        let placement = Placement::new(Coordinate::new(x, y), size, horizontal);
        self.submit_turn(Turn::placement(Player::anonymous(identifier), placement))
            .map(|_| ())
    }

    /// Submit a salvo for the player with the given identifier. Returns the number of
    /// new hits.
    pub fn submit_salvo_turn(
        &mut self,
        identifier: &str,
        locations: Vec<Coordinate>,
    ) -> Result<u32, TurnError> {
        self.submit_turn(Turn::salvo(
            Player::anonymous(identifier),
            Salvo::new(locations),
        ))
    }

    /// Validate and apply a turn without touching phase or turn order.
    fn execute_turn(&mut self, turn: &Turn) -> Result<u32, TurnError> {
        let seat = self.seat_of(&turn.player.identifier)?;
        rules::check(turn.kind(), self.phase, seat == self.current)?;
        match &turn.action {
            Action::Placement(placement) => {
                let board = self.board(seat);
                let placed = board.ships().map(|ship| ship.size());
                if !self.ship_allocation.can_place(placement.size, placed) {
                    return Err(TurnError::CannotPlaceShipOfThatSize(placement.size));
                }
                self.board_mut(seat).place(*placement)?;
                Ok(0)
            }
            Action::Salvo(salvo) => {
                let max = self.shots_player_can_fire(&turn.player.identifier);
                if salvo.locations.len() > max as usize {
                    return Err(TurnError::TooManyShots { max });
                }
                let target = self.board_mut(seat.other());
                if !salvo
                    .locations
                    .iter()
                    .all(|&coord| target.is_valid_shot(coord))
                {
                    return Err(TurnError::SalvoOutOfBounds);
                }
                // Not transactional: bounds were checked above so no shot can fail, and
                // any shot already applied stays applied.
                let mut hits = 0;
                for &coord in &salvo.locations {
                    if target.record_shot(coord)?.is_new_hit() {
                        hits += 1;
                    }
                }
                Ok(hits)
            }
        }
    }

    /// Pass the turn to the other player and advance the phase if its exit condition
    /// holds.
    fn end_turn(&mut self) {
        self.current = self.current.other();
        match self.phase {
            Phase::Placement
                if self.fleet_complete(Seat::One) && self.fleet_complete(Seat::Two) =>
            {
                self.advance(Phase::Battle)
            }
            Phase::Battle if self.board1.is_lost() || self.board2.is_lost() => {
                self.advance(Phase::Finished)
            }
            _ => {}
        }
    }

    fn advance(&mut self, phase: Phase) {
        debug_assert!(phase > self.phase);
        info!("game phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn fleet_complete(&self, seat: Seat) -> bool {
        self.ship_allocation
            .is_complete(self.board(seat).ships().map(|ship| ship.size()))
    }

    fn seat_of(&self, identifier: &str) -> Result<Seat, TurnError> {
        if self.player1.is(identifier) {
            Ok(Seat::One)
        } else if self.player2.is(identifier) {
            Ok(Seat::Two)
        } else {
            Err(TurnError::UnknownPlayer(identifier.to_owned()))
        }
    }

    fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player1,
            Seat::Two => &self.player2,
        }
    }

    fn board(&self, seat: Seat) -> &Board {
        match seat {
            Seat::One => &self.board1,
            Seat::Two => &self.board2,
        }
    }

    fn board_mut(&mut self, seat: Seat) -> &mut Board {
        match seat {
            Seat::One => &mut self.board1,
            Seat::Two => &mut self.board2,
        }
    }
}
