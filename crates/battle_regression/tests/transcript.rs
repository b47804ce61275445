use battle_core::{AttackKind, BattleSummary, TurnReport};
use battle_regression::{battle_trace, PLAYER, RIVAL};

fn turn(turn: u32, kind: AttackKind, hits: u32, damage: f64, remaining_health: f64) -> TurnReport {
    TurnReport {
        turn,
        attacker: PLAYER.into(),
        kind,
        hits,
        damage,
        remaining_health,
    }
}

fn fixed_summary() -> BattleSummary {
    BattleSummary {
        seed: 42,
        player: PLAYER.into(),
        rival: RIVAL.into(),
        starting_health: 41.0,
        turns: vec![
            turn(1, AttackKind::Scratch, 3, 16.5, 24.5),
            turn(2, AttackKind::Tackle, 1, 8.25, 16.25),
            turn(3, AttackKind::Surf, 1, 10.75, 5.5),
            turn(4, AttackKind::Tackle, 1, 7.5, 0.0),
        ],
        turn_count: 4,
        reward: 1987.5,
    }
}

#[test]
fn transcript_matches_console_format() {
    insta::assert_snapshot!(fixed_summary().transcript(), @r"
    Your rival has chosen Eevee to fight, which has 41.00 health.
    Pika used SCRATCH and did 16.50 damage.
    Your rival has 24.50 health remaining.
    Pika used TACKLE and did 8.25 damage.
    Your rival has 16.25 health remaining.
    Pika used SURF and did 10.75 damage.
    Your rival has 5.50 health remaining.
    Pika used TACKLE and did 7.50 damage.
    Your rival has 0.00 health remaining.
    Eevee fainted after 4 turns!
    You have earned $1987.50!
    ");
}

#[test]
fn trace_snapshot() {
    insta::assert_json_snapshot!(battle_trace(&fixed_summary()), @r#"
    {
      "kinds": [
        "SCRATCH",
        "TACKLE",
        "SURF",
        "TACKLE"
      ],
      "reward_cents": 198750,
      "seed": 42,
      "turns": 4
    }
    "#);
}
