use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::attack::AttackKind;
use crate::rng::BattleRng;
use crate::round::round2;
use crate::Health;

pub const MIN_STARTING_HEALTH: u32 = 40;
pub const MAX_STARTING_HEALTH: u32 = 58;
const REWARD_CEILING: f64 = 2400.0;
const REWARD_SPREAD: f64 = 1200.0;

/// Starting health for the rival, a whole number in `40..=58`.
pub fn roll_starting_health(rng: &mut BattleRng) -> f64 {
    let spread = MAX_STARTING_HEALTH - MIN_STARTING_HEALTH;
    f64::from(MIN_STARTING_HEALTH + rng.gen_range(0..=spread))
}

/// Prize money paid once the rival faints. A draw of 0 pays the full 2400;
/// draws approaching 1 approach 1200.
pub fn roll_reward(rng: &mut BattleRng) -> f64 {
    round2(rng.unit() * -REWARD_SPREAD + REWARD_CEILING)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattleState {
    pub health: Health,
    pub turn_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: u32,
    pub attacker: String,
    pub kind: AttackKind,
    pub hits: u32,
    pub damage: f64,
    pub remaining_health: f64,
}

impl fmt::Display for TurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} used {} and did {:.2} damage.",
            self.attacker, self.kind, self.damage
        )?;
        write!(
            f,
            "Your rival has {:.2} health remaining.",
            self.remaining_health
        )
    }
}

/// Everything a battle reports, in the order it happens.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    Intro { rival: String, health: f64 },
    Turn(TurnReport),
    Fainted { rival: String, turns: u32 },
    Reward { amount: f64 },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Intro { rival, health } => write!(
                f,
                "Your rival has chosen {rival} to fight, which has {health:.2} health."
            ),
            BattleEvent::Turn(report) => fmt::Display::fmt(report, f),
            BattleEvent::Fainted { rival, turns } => {
                write!(f, "{rival} fainted after {turns} turns!")
            }
            BattleEvent::Reward { amount } => write!(f, "You have earned ${amount:.2}!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSummary {
    pub seed: u64,
    pub player: String,
    pub rival: String,
    pub starting_health: f64,
    pub turns: Vec<TurnReport>,
    pub turn_count: u32,
    pub reward: f64,
}

impl BattleSummary {
    /// Rebuilds the event stream the battle emitted.
    pub fn events(&self) -> Vec<BattleEvent> {
        let mut events = Vec::with_capacity(self.turns.len() + 3);
        events.push(BattleEvent::Intro {
            rival: self.rival.clone(),
            health: self.starting_health,
        });
        events.extend(self.turns.iter().cloned().map(BattleEvent::Turn));
        events.push(BattleEvent::Fainted {
            rival: self.rival.clone(),
            turns: self.turn_count,
        });
        events.push(BattleEvent::Reward {
            amount: self.reward,
        });
        events
    }

    pub fn transcript(&self) -> String {
        self.events()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One battle between the player's creature and the rival's.
#[derive(Debug, Clone)]
pub struct Battle {
    player: String,
    rival: String,
    starting_health: f64,
    state: BattleState,
    log: Vec<TurnReport>,
}

impl Battle {
    pub fn new(player: impl Into<String>, rival: impl Into<String>, rng: &mut BattleRng) -> Self {
        let health = roll_starting_health(rng);
        Self::with_starting_health(player, rival, health)
    }

    pub fn with_starting_health(
        player: impl Into<String>,
        rival: impl Into<String>,
        health: f64,
    ) -> Self {
        let health = Health::new(health);
        Self {
            player: player.into(),
            rival: rival.into(),
            starting_health: health.max(),
            state: BattleState {
                health,
                turn_count: 0,
            },
            log: Vec::new(),
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.health.is_depleted()
    }

    pub fn intro(&self) -> BattleEvent {
        BattleEvent::Intro {
            rival: self.rival.clone(),
            health: self.starting_health,
        }
    }

    /// Plays a single turn. Returns `None` once the rival has fainted.
    pub fn step(&mut self, rng: &mut BattleRng) -> Option<TurnReport> {
        if self.is_over() {
            return None;
        }

        let outcome = AttackKind::choose(rng).roll(rng);
        self.state.health.damage(outcome.damage);
        self.state.turn_count += 1;

        let report = TurnReport {
            turn: self.state.turn_count,
            attacker: self.player.clone(),
            kind: outcome.kind,
            hits: outcome.hits,
            damage: outcome.damage,
            remaining_health: self.state.health.current(),
        };
        debug!(
            target: "battle_core.battle",
            turn = report.turn,
            kind = %report.kind,
            hits = report.hits,
            damage = report.damage,
            remaining = report.remaining_health,
            "turn resolved"
        );
        self.log.push(report.clone());
        Some(report)
    }

    /// Plays turns until the rival faints, then rolls the reward. Every event
    /// is handed to `observer` as it happens.
    pub fn run(
        mut self,
        rng: &mut BattleRng,
        mut observer: impl FnMut(&BattleEvent),
    ) -> BattleSummary {
        observer(&self.intro());
        while let Some(report) = self.step(rng) {
            observer(&BattleEvent::Turn(report));
        }

        observer(&BattleEvent::Fainted {
            rival: self.rival.clone(),
            turns: self.state.turn_count,
        });
        let reward = roll_reward(rng);
        observer(&BattleEvent::Reward { amount: reward });

        info!(
            target: "battle_core.battle",
            seed = rng.seed(),
            turns = self.state.turn_count,
            reward,
            "battle finished"
        );

        BattleSummary {
            seed: rng.seed(),
            player: self.player,
            rival: self.rival,
            starting_health: self.starting_health,
            turn_count: self.state.turn_count,
            turns: self.log,
            reward,
        }
    }
}
