use battle_core::{AttackKind, BattleRng};
use battle_regression::{battle_trace, sample_battle, sweep, DEFAULT_SEED};

#[test]
fn battles_are_deterministic() {
    let baseline = sample_battle(DEFAULT_SEED);
    let repeat = sample_battle(DEFAULT_SEED);
    assert_eq!(baseline, repeat, "same seed should match");

    let different = sample_battle(7);
    assert_ne!(
        battle_trace(&baseline),
        battle_trace(&different),
        "different seeds should diverge"
    );
}

#[test]
fn health_never_negative_and_always_falls() {
    for summary in sweep(0..500) {
        let mut previous = summary.starting_health;
        assert!((40.0..=58.0).contains(&previous));
        for turn in &summary.turns {
            assert!(turn.remaining_health >= 0.0, "seed {}", summary.seed);
            assert!(turn.remaining_health < previous, "seed {}", summary.seed);
            previous = turn.remaining_health;
        }
        assert_eq!(previous, 0.0, "seed {} did not finish at zero", summary.seed);
    }
}

#[test]
fn only_the_last_turn_reaches_zero() {
    for summary in sweep(0..2_000) {
        let (last, earlier) = summary.turns.split_last().expect("at least one turn");
        assert_eq!(last.remaining_health, 0.0);
        for turn in earlier {
            assert!(
                turn.remaining_health >= 0.01,
                "seed {} turn {} left {} health but kept fighting",
                summary.seed,
                turn.turn,
                turn.remaining_health
            );
        }
    }
}

#[test]
fn damage_is_positive_and_inside_kind_bounds() {
    for summary in sweep(0..500) {
        for turn in &summary.turns {
            let (low, high) = turn.kind.damage_bounds();
            assert!(turn.damage > 0.0);
            assert!(
                (low..=high).contains(&turn.damage),
                "seed {} turn {}: {} did {}",
                summary.seed,
                turn.turn,
                turn.kind,
                turn.damage
            );
        }
    }
}

#[test]
fn battles_end_in_bounded_turns_with_bounded_reward() {
    for summary in sweep(0..500) {
        assert!(summary.turn_count >= 1);
        for turn in &summary.turns {
            assert_eq!(turn.remaining_health, battle_core::round2(turn.remaining_health));
        }
        assert!(summary.turn_count <= 58);
        assert_eq!(summary.turn_count as usize, summary.turns.len());
        assert!((1200.0..=2400.0).contains(&summary.reward));
        assert_eq!(summary.reward, battle_core::round2(summary.reward));
    }
}

#[test]
fn sweep_uses_every_attack_kind() {
    let mut seen = Vec::new();
    for summary in sweep(0..50) {
        for turn in summary.turns {
            if !seen.contains(&turn.kind) {
                seen.push(turn.kind);
            }
        }
    }
    for kind in AttackKind::ALL {
        assert!(seen.contains(&kind), "{kind} never chosen");
    }
}

#[test]
fn rng_handle_records_its_seed() {
    let rng = BattleRng::new(DEFAULT_SEED);
    assert_eq!(sample_battle(rng.seed()).seed, DEFAULT_SEED);
}
