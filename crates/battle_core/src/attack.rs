use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::BattleRng;
use crate::round::round2;

const SCRATCH_MAX_HITS: u32 = 3;
const SCRATCH_PER_HIT: (f64, f64) = (1.0, 6.0);
const SURF_DAMAGE: (f64, f64) = (2.0, 11.0);
const TACKLE_DAMAGE: (f64, f64) = (7.0, 9.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    Scratch,
    Surf,
    Tackle,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [AttackKind::Scratch, AttackKind::Surf, AttackKind::Tackle];

    pub fn choose(rng: &mut BattleRng) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    pub fn label(self) -> &'static str {
        match self {
            AttackKind::Scratch => "SCRATCH",
            AttackKind::Surf => "SURF",
            AttackKind::Tackle => "TACKLE",
        }
    }

    /// Smallest and largest damage a roll can produce once rounded.
    pub fn damage_bounds(self) -> (f64, f64) {
        match self {
            AttackKind::Scratch => (
                SCRATCH_PER_HIT.0,
                SCRATCH_PER_HIT.1 * f64::from(SCRATCH_MAX_HITS),
            ),
            AttackKind::Surf => SURF_DAMAGE,
            AttackKind::Tackle => TACKLE_DAMAGE,
        }
    }

    pub fn roll(self, rng: &mut BattleRng) -> AttackOutcome {
        let (hits, damage) = match self {
            AttackKind::Scratch => {
                let hits = rng.gen_range(1..=SCRATCH_MAX_HITS);
                let per_hit = round2(rng.gen_f64(SCRATCH_PER_HIT.0..SCRATCH_PER_HIT.1));
                (hits, round2(f64::from(hits) * per_hit))
            }
            AttackKind::Surf => (1, round2(rng.gen_f64(SURF_DAMAGE.0..SURF_DAMAGE.1))),
            AttackKind::Tackle => (1, round2(rng.gen_f64(TACKLE_DAMAGE.0..TACKLE_DAMAGE.1))),
        };
        AttackOutcome {
            kind: self,
            hits,
            damage,
        }
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub kind: AttackKind,
    pub hits: u32,
    pub damage: f64,
}
