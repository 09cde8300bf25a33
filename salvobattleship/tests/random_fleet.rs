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
#![cfg(feature = "rng_gen")]

use rand::{rngs::StdRng, Rng, SeedableRng};
use salvobattleship::{
    board::Coordinate,
    game::{Game, Phase, Player, Turn},
};

fn place_fleet(game: &mut Game, rng: &mut StdRng, id: &str) {
    let sizes = game.ship_allocation().sizes().to_vec();
    for size in sizes {
        let placement = game
            .board_for(id)
            .unwrap()
            .random_placement(rng, size)
            .unwrap();
        game.submit_turn(Turn::placement(Player::anonymous(id), placement))
            .unwrap();
    }
}

#[test]
fn random_games_run_to_completion() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game =
            Game::new(10, 10, Player::anonymous("p1"), Player::anonymous("p2")).unwrap();
        game.start().unwrap();
        place_fleet(&mut game, &mut rng, "p1");
        place_fleet(&mut game, &mut rng, "p2");
        assert_eq!(game.phase(), Phase::Battle);

        let mut turns = 0;
        while game.phase() == Phase::Battle {
            let id = game.current_player().identifier.clone();
            let shots = game.shots_player_can_fire(&id);
            let salvo = (0..shots)
                .map(|_| Coordinate::new(rng.gen_range(0, 10), rng.gen_range(0, 10)))
                .collect();
            game.submit_salvo_turn(&id, salvo).unwrap();
            turns += 1;
            assert!(turns < 10_000, "seed {} did not finish", seed);
        }
        assert_eq!(game.phase(), Phase::Finished);
        let winner = game.winner().unwrap().identifier.clone();
        let loser = if winner == "p1" { "p2" } else { "p1" };
        assert!(game.board_for(loser).unwrap().is_lost());
        assert!(!game.board_for(&winner).unwrap().is_lost());
    }
}
