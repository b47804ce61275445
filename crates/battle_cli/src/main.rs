mod prompt;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use battle_core::{Battle, BattleConfig, BattleReport, BattleRng, BattleSettings, Car};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use prompt::Prompter;
use tracing::info;
use tracing_subscriber::EnvFilter;

const PLAYER_PROMPT: &str = "Enter your Pokemon's nickname: ";
const RIVAL_PROMPT: &str = "Enter your rival Pokemon's nickname: ";

#[derive(Parser)]
#[command(version, about = "Run a random-damage creature battle")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fight one battle and print the transcript (the default).
    Play(PlayArgs),
    /// Walk a car through start and drive.
    Car(CarArgs),
    /// Summarize a saved battle report.
    Report(ReportArgs),
}

#[derive(Args, Default)]
struct PlayArgs {
    /// TOML file with `[battle]` and `[telemetry]` tables.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fixed seed; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    player: Option<String>,
    #[arg(long)]
    rival: Option<String>,
    /// Write the finished battle as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args)]
struct CarArgs {
    #[arg(long, default_value = "Toyota")]
    brand: String,
    #[arg(long, default_value = "Red")]
    color: String,
    #[arg(long, default_value_t = 20000.0)]
    cost: f64,
    #[arg(long)]
    mileage: Option<f64>,
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    miles: f64,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or_else(|| Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => handle_play(args),
        Commands::Car(args) => {
            init_tracing("warn");
            handle_car(args)
        }
        Commands::Report(args) => {
            init_tracing("warn");
            handle_report(args)
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn load_config(path: Option<&Path>) -> Result<BattleConfig> {
    let config = match path {
        Some(path) => BattleConfig::from_path(path)?,
        None => BattleConfig::default(),
    };
    Ok(config.with_env())
}

fn time_seed() -> u64 {
    Utc::now().timestamp_millis().unsigned_abs()
}

/// Layers command-line flags over settings already merged from file and env.
fn resolve(args: &PlayArgs, from_config: BattleSettings) -> BattleSettings {
    BattleSettings {
        seed: args.seed.or(from_config.seed),
        player: args.player.clone().or(from_config.player),
        rival: args.rival.clone().or(from_config.rival),
    }
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    init_tracing(config.telemetry.trace_filter());

    let settings = resolve(&args, config.battle);
    let seed = settings.seed.unwrap_or_else(time_seed);
    let (player, rival) = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        let player = match settings.player {
            Some(name) => name,
            None => prompter.ask(PLAYER_PROMPT)?,
        };
        let rival = match settings.rival {
            Some(name) => name,
            None => prompter.ask(RIVAL_PROMPT)?,
        };
        (player, rival)
    };

    info!(target: "battle_cli", seed, %player, %rival, "starting battle");
    let mut rng = BattleRng::new(seed);
    let summary = Battle::new(player, rival, &mut rng).run(&mut rng, |event| println!("{event}"));

    if let Some(path) = args.report {
        let run_id = format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S"));
        let report = BattleReport::new(run_id, summary);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(target: "battle_cli", path = %path.display(), "report written");
    }

    Ok(())
}

fn handle_car(args: CarArgs) -> Result<()> {
    let mut car = match args.mileage {
        Some(mileage) => Car::with_mileage(args.brand, args.color, args.cost, mileage),
        None => Car::new(args.brand, args.color, args.cost),
    };
    println!(
        "{} {} costing ${:.2} with {:.1} miles (running: {})",
        car.color(),
        car.brand(),
        car.cost(),
        car.mileage(),
        car.is_running()
    );

    if let Err(err) = car.drive(args.miles) {
        println!("{err}");
    }
    car.start();
    car.drive(args.miles)?;
    println!(
        "Drove {:.1} miles; odometer now reads {:.1} (running: {})",
        args.miles,
        car.mileage(),
        car.is_running()
    );
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let report: BattleReport = serde_json::from_str(&data)?;
    println!("{}", report.headline());
    Ok(())
}
