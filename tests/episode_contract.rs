//! Reset/step/render contract of the environment

use apple_basket::env::{Action, Environment};
use apple_basket::settings::MAX_EXTENT;
use apple_basket::sim::EpisodePhase;
use apple_basket::{AppleBasket, BasketAction, EnvConfig, EnvError};

#[test]
fn reset_always_starts_clean() {
    let mut env = AppleBasket::new(EnvConfig::with_seed(21)).unwrap();
    for round in 1..=3 {
        // Play until the episode ends, drifting right to leave the field
        while !env.step(BasketAction::MoveRight).done {}
        assert_eq!(env.phase(), EpisodePhase::Terminated);

        let obs = env.reset();
        assert_eq!(env.episode(), round);
        assert_eq!(env.apples().len(), 1);
        assert_eq!(env.score(), 0);
        assert_eq!(env.missed(), 0);
        assert_eq!(obs.basket_x, 200);
        assert_eq!(obs.apple_y, 0);
        assert_eq!(env.phase(), EpisodePhase::Active);
    }
}

#[test]
fn frame_counter_is_not_reset() {
    // Spawn cadence alignment carries over into the next episode
    let mut env = AppleBasket::default();
    for _ in 0..25 {
        env.step(BasketAction::Hold);
    }
    env.reset();
    assert_eq!(env.frame(), 25);

    for _ in 0..4 {
        env.step(BasketAction::Hold);
    }
    assert_eq!(env.apples().len(), 1);
    // Frame 30 is a spawn tick even though this episode is 5 ticks old
    env.step(BasketAction::Hold);
    assert_eq!(env.apples().len(), 2);
}

#[test]
fn ten_misses_terminate_nine_do_not() {
    let config = EnvConfig {
        field_height: 80,
        basket_height: 5,
        fps: 120,
        apples_per_second: 120,
        seed: 8,
        ..Default::default()
    };
    // One apple per tick on a short field: misses pile up within a few dozen ticks
    let mut env = AppleBasket::new(config).unwrap();
    loop {
        let missed_before = env.missed();
        let step = env.step(BasketAction::Hold);
        if step.done {
            assert!(missed_before < 10);
            assert!(env.missed() >= 10);
            assert_eq!(step.reward, -1);
            break;
        }
        assert!(env.missed() < 10);
    }
}

#[test]
fn terminated_episode_is_absorbing() {
    let mut env = AppleBasket::default();
    while !env.step(BasketAction::MoveLeft).done {}
    let frame = env.frame();
    let score = env.score();

    let step = env.step(BasketAction::MoveRight);
    assert!(step.done);
    assert_eq!(step.reward, 0);
    assert_eq!(env.frame(), frame);
    assert_eq!(env.score(), score);
}

#[test]
fn numeric_actions() {
    let mut env = AppleBasket::default();
    assert_eq!(BasketAction::ACTION_SPACE, 3);
    assert!(matches!(env.step_numeric(3), Err(EnvError::InvalidAction(3))));
    assert_eq!(env.step_numeric(0).unwrap().observation.basket_x, 190);
    assert_eq!(env.step_numeric(1).unwrap().observation.basket_x, 190);
    assert_eq!(env.step_numeric(2).unwrap().observation.basket_x, 200);
}

#[test]
fn oversized_config_is_rejected() {
    let err = AppleBasket::new(EnvConfig {
        basket_speed: i32::MAX,
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, EnvError::InvalidConfig(_)));
    assert!(
        AppleBasket::new(EnvConfig {
            basket_width: i32::MAX,
            ..Default::default()
        })
        .is_err()
    );
}

#[test]
fn largest_accepted_values_step_without_overflow() {
    let mut env = AppleBasket::new(EnvConfig {
        basket_speed: MAX_EXTENT,
        ..Default::default()
    })
    .unwrap();
    let step = env.step(BasketAction::MoveRight);
    assert!(step.done);
    assert_eq!(step.reward, -1);
    assert_eq!(env.basket().pos.x, 200 + MAX_EXTENT);

    let mut env = AppleBasket::new(EnvConfig {
        basket_width: MAX_EXTENT,
        ..Default::default()
    })
    .unwrap();
    for _ in 0..200 {
        if env.step(BasketAction::Hold).done {
            break;
        }
    }
    assert!(env.score() > 0);
    assert!(!env.render().is_empty());
}

#[test]
fn render_is_read_only() {
    let mut env = AppleBasket::new(EnvConfig::with_seed(2)).unwrap();
    env.step(BasketAction::MoveRight);
    let obs = env.observation();
    let frame = env.render();
    assert!(frame.contains("Score: 0"));
    assert_eq!(env.observation(), obs);
    assert_eq!(env.frame(), 1);
}
