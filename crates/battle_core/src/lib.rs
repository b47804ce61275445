//! Turn-based random-damage battles, plus the small `Car` model that ships
//! alongside them.

pub mod attack;
pub mod battle;
pub mod car;
pub mod config;
pub mod report;
pub mod rng;
pub mod round;

use tracing::debug;

pub use attack::{AttackKind, AttackOutcome};
pub use battle::{
    roll_reward, roll_starting_health, Battle, BattleEvent, BattleState, BattleSummary, TurnReport,
};
pub use car::{Car, CarError};
pub use config::{BattleConfig, BattleSettings, ConfigError, TelemetryConfig};
pub use report::BattleReport;
pub use rng::BattleRng;
pub use round::round2;

/// Health pool that never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    pub fn new(max: f64) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    /// Subtracts `amount` and snaps the remainder to cents so repeated hits
    /// cannot leave a sub-cent sliver above zero.
    pub fn damage(&mut self, amount: f64) {
        self.current = round2((self.current - amount).max(0.0));
        debug!(target: "battle_core.health", current = self.current, max = self.max, "health updated");
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_to_zero() {
        let mut hp = Health::new(10.0);
        hp.damage(15.5);
        assert_eq!(0.0, hp.current());
        assert!(hp.is_depleted());
        assert_eq!(10.0, hp.max());
    }

    #[test]
    fn partial_damage_keeps_remainder() {
        let mut hp = Health::new(40.0);
        hp.damage(7.25);
        assert_eq!(32.75, hp.current());
        assert!(!hp.is_depleted());
    }

    #[test]
    fn repeated_hits_land_exactly_on_zero() {
        let mut hp = Health::new(1.0);
        for _ in 0..10 {
            assert!(!hp.is_depleted());
            hp.damage(0.1);
        }
        assert_eq!(0.0, hp.current());
        assert!(hp.is_depleted());
    }

    #[test]
    fn remainder_stays_on_cents() {
        let mut hp = Health::new(58.0);
        for amount in [16.53, 8.41, 10.07, 7.99, 2.22] {
            hp.damage(amount);
            assert_eq!(hp.current(), round2(hp.current()));
        }
        assert_eq!(12.78, hp.current());
    }
}
