//! Helpers for deterministic battle regression tests.

use std::ops::Range;

use battle_core::{Battle, BattleRng, BattleSummary};
pub use battle_core::rng::DEFAULT_SEED;
use serde_json::json;

pub const PLAYER: &str = "Pika";
pub const RIVAL: &str = "Eevee";

pub fn sample_battle(seed: u64) -> BattleSummary {
    let mut rng = BattleRng::new(seed);
    Battle::new(PLAYER, RIVAL, &mut rng).run(&mut rng, |_| {})
}

pub fn sweep(seeds: Range<u64>) -> impl Iterator<Item = BattleSummary> {
    seeds.map(sample_battle)
}

/// Compact, float-free view of a battle for snapshots.
pub fn battle_trace(summary: &BattleSummary) -> serde_json::Value {
    let kinds: Vec<&str> = summary.turns.iter().map(|t| t.kind.label()).collect();
    json!({
        "seed": summary.seed,
        "turns": summary.turn_count,
        "kinds": kinds,
        "reward_cents": (summary.reward * 100.0).round() as i64,
    })
}
