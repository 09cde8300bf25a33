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
//! Rules engine for two-player Battleship with salvos.
//!
//! The engine tracks ship placement, resolves shots, and enforces phase and turn-order
//! legality. It does no I/O: callers drive a [`Game`][game::Game] by submitting
//! [`Turn`][game::Turn]s and render the results however they like.
//!
//! ```
//! use salvobattleship::{board::Coordinate, game::{Game, Phase, Player}};
//!
//! let mut game = Game::new(10, 10, Player::new("a", "Alice"), Player::new("b", "Bob")).unwrap();
//! game.start().unwrap();
//! game.submit_placement_turn("a", 0, 0, 2, true).unwrap();
//! assert_eq!(game.phase(), Phase::Placement);
//! assert_eq!(
//!     game.submit_salvo_turn("a", vec![Coordinate::new(0, 0)]).unwrap_err().code(),
//!     "not_battle_phase"
//! );
//! ```

pub mod board;
pub mod game;
pub mod ships;
