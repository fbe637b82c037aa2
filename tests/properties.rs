//! Property tests for the simulation tick

use apple_basket::EnvConfig;
use apple_basket::sim::{BasketAction, BasketBox, EpisodeState, tick};
use glam::IVec2;
use proptest::prelude::*;

/// State with a single apple pinned to the left edge so nothing is caught
fn quiet_state(seed: u64, basket_x: i32) -> EpisodeState {
    let mut state = EpisodeState::new(EnvConfig::with_seed(seed));
    state.apples.clear();
    state.spawn_apple_at(0);
    state.basket.pos.x = basket_x;
    state
}

proptest! {
    #[test]
    fn hold_never_moves_basket(seed in any::<u64>(), x in 0i32..=400, n in 1usize..120) {
        let mut state = quiet_state(seed, x);
        for _ in 0..n {
            tick(&mut state, BasketAction::Hold);
        }
        prop_assert_eq!(state.basket.pos.x, x);
    }

    #[test]
    fn left_right_is_exact_round_trip(seed in any::<u64>(), x in 10i32..=400) {
        let mut state = quiet_state(seed, x);
        tick(&mut state, BasketAction::MoveLeft);
        prop_assert_eq!(state.basket.pos.x, x - 10);
        tick(&mut state, BasketAction::MoveRight);
        prop_assert_eq!(state.basket.pos.x, x);
    }

    #[test]
    fn apples_fall_by_gravity_until_removed(seed in any::<u64>(), n in 1usize..200) {
        let mut state = quiet_state(seed, 400);
        for _ in 0..n {
            let before: Vec<(u32, i32)> = state.apples.iter().map(|a| (a.id, a.pos.y)).collect();
            let missed_before = state.missed;
            let outcome = tick(&mut state, BasketAction::Hold);
            if outcome.done {
                break;
            }

            let mut expired = 0;
            for (id, y) in before {
                match state.apples.iter().find(|a| a.id == id) {
                    Some(apple) => prop_assert_eq!(apple.pos.y, y + 4),
                    None if outcome.caught => {}
                    None => {
                        prop_assert!(y + 4 >= 600);
                        expired += 1;
                    }
                }
            }
            prop_assert!(state.apples.iter().all(|a| a.pos.y < 600));
            prop_assert_eq!(state.missed - missed_before, outcome.missed);
            if !outcome.caught {
                prop_assert_eq!(outcome.missed, expired);
            }
        }
    }

    #[test]
    fn collision_is_strict_containment(px in 100i32..300, py in 520i32..640) {
        let config = EnvConfig::default();
        let mut state = EpisodeState::new(config);
        state.apples.clear();
        state.spawn_apple_at(px);
        state.apples[0].pos.y = py - 4;
        let bbox = BasketBox::around(&state.basket);
        let inside = bbox.contains(IVec2::new(px, py));
        let expected = px > 170 && px < 230 && py > 560 && py < 600;
        prop_assert_eq!(inside, expected);

        let outcome = tick(&mut state, BasketAction::Hold);
        prop_assert_eq!(outcome.caught, expected);
        if expected {
            prop_assert_eq!(outcome.reward, 1);
        } else {
            prop_assert_eq!(outcome.reward, 0);
        }
    }

    #[test]
    fn observation_always_has_head(seed in any::<u64>(), actions in prop::collection::vec(0u8..3, 1..400)) {
        let mut state = EpisodeState::new(EnvConfig::with_seed(seed));
        for a in actions {
            let action = BasketAction::ALL[a as usize];
            tick(&mut state, action);
            prop_assert!(state.head().is_some());
        }
    }
}
