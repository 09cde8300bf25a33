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
use std::collections::BTreeMap;

use salvobattleship::{
    board::{Board, Coordinate, RectDimensions, ShotOutcome},
    game::{
        Game, GameConfig, Phase, Player, SalvoAllocation, ShipAllocation, Turn, TurnError,
        TurnReport,
    },
};

fn started(config: GameConfig) -> Game {
    let mut game = Game::from_config(
        config,
        Player::new("p1", "Player One"),
        Player::new("p2", "Player Two"),
    )
    .unwrap();
    game.start().unwrap();
    game
}

#[test]
fn scenario_a_hit_and_miss() {
    let mut board = Board::new(RectDimensions::new(10, 10));
    board.place_ship(Coordinate::new(0, 0), 10, true).unwrap();
    assert!(!board.record_shot(Coordinate::new(4, 4)).unwrap().is_new_hit());
    assert!(board.record_shot(Coordinate::new(4, 0)).unwrap().is_new_hit());
}

#[test]
fn scenario_b_single_ship_destroyed() {
    let mut board = Board::new(RectDimensions::new(10, 10));
    board.place_ship(Coordinate::new(0, 0), 2, true).unwrap();
    assert_eq!(
        board.record_shot(Coordinate::new(0, 0)).unwrap(),
        ShotOutcome::Hit
    );
    assert_eq!(
        board.record_shot(Coordinate::new(1, 0)).unwrap(),
        ShotOutcome::Sunk
    );
    assert!(board.ships().next().unwrap().is_destroyed());
    assert!(board.is_lost());
}

#[test]
fn scenario_c_one_ship_each() {
    let mut game = started(
        GameConfig::default()
            .with_ship_allocation(ShipAllocation::new(vec![1])),
    );
    game.submit_placement_turn("p1", 3, 3, 1, true).unwrap();
    assert_eq!(game.phase(), Phase::Placement);
    game.submit_placement_turn("p2", 7, 2, 1, false).unwrap();
    assert_eq!(game.phase(), Phase::Battle);

    assert_eq!(game.shots_player_can_fire("p1"), 1);
    assert_eq!(
        game.submit_salvo_turn("p1", vec![Coordinate::new(7, 2)]),
        Ok(1)
    );
    assert!(game.board2().is_lost());
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.winner(), Some(game.player1()));
}

#[test]
fn scenario_d_salvo_budget() {
    let salvo: SalvoAllocation = vec![(1, 1), (2, 2), (3, 3), (4, 10), (5, 50)]
        .into_iter()
        .collect();
    let mut game = started(
        GameConfig::default()
            .with_ship_allocation(ShipAllocation::new(vec![1, 2, 3, 4, 5]))
            .with_salvo_allocation(salvo),
    );
    for player in &["p1", "p2"] {
        for size in 1..=5 {
            game.submit_placement_turn(player, 0, size as i32 - 1, size, true)
                .unwrap();
        }
    }
    assert_eq!(game.phase(), Phase::Battle);
    assert_eq!(game.shots_player_can_fire("p1"), 66);

    // Player one passes; player two sinks player one's ships of size 2, 3 and 5.
    assert_eq!(game.submit_salvo_turn("p1", Vec::new()), Ok(0));
    let mut targets = Vec::new();
    for &(row, size) in &[(1, 2), (2, 3), (4, 5)] {
        targets.extend((0..size).map(|x| Coordinate::new(x, row)));
    }
    assert_eq!(game.submit_salvo_turn("p2", targets), Ok(10));

    assert_eq!(game.shots_player_can_fire("p1"), 11);
    let too_many: Vec<_> = (0..12).map(|i| Coordinate::new(i % 10, 9)).collect();
    let err = game.submit_salvo_turn("p1", too_many).unwrap_err();
    assert_eq!(err, TurnError::TooManyShots { max: 11 });
    assert_eq!(err.code(), "too_many_shots__max_is_11");
    assert!(game.board2().misses().is_empty());

    let eleven: Vec<_> = (0..11).map(|i| Coordinate::new(i % 10, 9 - i / 10)).collect();
    assert_eq!(game.submit_salvo_turn("p1", eleven), Ok(0));
    assert_eq!(game.board2().misses().len(), 11);
}

#[test]
fn salvo_repeating_a_cell_hits_once() {
    let mut game = started(
        GameConfig::default()
            .with_ship_allocation(ShipAllocation::new(vec![1, 2])),
    );
    game.submit_placement_turn("p1", 0, 0, 1, true).unwrap();
    game.submit_placement_turn("p1", 0, 1, 2, true).unwrap();
    game.submit_placement_turn("p2", 0, 0, 1, true).unwrap();
    game.submit_placement_turn("p2", 5, 5, 2, true).unwrap();
    assert_eq!(game.phase(), Phase::Battle);
    assert_eq!(game.shots_player_can_fire("p1"), 2);

    let target = Coordinate::new(5, 5);
    assert_eq!(game.submit_salvo_turn("p1", vec![target, target]), Ok(1));
    assert_eq!(game.board2().hits(), &[target][..]);
    assert!(game.board2().misses().is_empty());
    assert_eq!(game.phase(), Phase::Battle);
    assert_eq!(game.current_player().identifier, "p2");
}

#[test]
fn scenario_e_sizes_outside_allocation() {
    let mut game = started(GameConfig::default());
    assert_eq!(
        game.submit_placement_turn("p1", 0, 0, 6, true)
            .unwrap_err()
            .code(),
        "cannot_place_ship_of_that_size"
    );
    game.submit_placement_turn("p1", 0, 0, 2, true).unwrap();
    assert_eq!(
        game.submit_placement_turn("p1", 0, 1, 2, true),
        Err(TurnError::CannotPlaceShipOfThatSize(2))
    );
    // Two ships of size 3 are allocated.
    game.submit_placement_turn("p1", 0, 2, 3, true).unwrap();
    game.submit_placement_turn("p1", 0, 3, 3, true).unwrap();
    assert_eq!(
        game.submit_placement_turn("p1", 0, 4, 3, true),
        Err(TurnError::CannotPlaceShipOfThatSize(3))
    );

    let mut remaining = BTreeMap::new();
    remaining.insert(2, 0);
    remaining.insert(3, 0);
    remaining.insert(4, 1);
    remaining.insert(5, 1);
    assert_eq!(game.remaining_ships("p1"), Some(remaining));
}

#[test]
fn history_records_every_submission() {
    let mut game = started(
        GameConfig::default()
            .with_ship_allocation(ShipAllocation::new(vec![1])),
    );
    let turn = Turn::salvo(Player::anonymous("p1"), Default::default());
    assert_eq!(game.submit_turn(turn.clone()), Err(TurnError::NotBattlePhase));
    game.submit_placement_turn("p1", 0, 0, 1, true).unwrap();

    let history = game.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].turn, turn);
    assert!(!history[0].accepted());
    assert!(history[1].accepted());
    assert_eq!(
        TurnReport::from(&history[0].outcome).error.as_deref(),
        Some("not_battle_phase")
    );
}
