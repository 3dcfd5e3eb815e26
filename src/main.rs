//! # Mathdash Demo Entry Point
//!
//! Generates questions or runs a spawn scheduler from the command line, so
//! difficulty and spawn settings can be tried without a game engine.

use clap::{Parser, Subcommand, ValueEnum};
use mathdash::{
    DifficultyLevel, MathdashError, MathdashResult, QuestionEngine, QuestionMode, RecordingHost,
    SpawnConfig, SpawnScheduler, TemplatePool, TextPanel,
};
use std::path::PathBuf;
#[cfg(feature = "dev-tools")]
use tracing::{info, Level};

#[cfg(not(feature = "dev-tools"))]
use log::info;

/// Command line arguments for the Mathdash demo.
#[derive(Parser, Debug)]
#[command(name = "mathdash")]
#[command(about = "Arithmetic question generation and timed spawning for a math game")]
#[command(version)]
struct Args {
    /// Random seed for generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a batch of masked questions with their answers
    Quiz {
        /// Which element of each question is hidden
        #[arg(long, value_enum, default_value_t = ModeArg::RevealAll)]
        mode: ModeArg,

        /// Number of questions to generate
        #[arg(long, default_value_t = 5)]
        count: u32,

        /// Built-in difficulty preset
        #[arg(long, value_enum, default_value_t = PresetArg::Easy)]
        difficulty: PresetArg,

        /// JSON difficulty level file, overrides --difficulty
        #[arg(long)]
        level: Option<PathBuf>,
    },

    /// Run a spawn scheduler against a recording host
    Spawn {
        /// JSON spawn configuration file
        #[arg(long)]
        config: PathBuf,

        /// Simulated seconds to run
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,

        /// Seconds per tick
        #[arg(long, default_value_t = 0.1)]
        step: f32,

        /// Template names to spawn from
        #[arg(long, value_delimiter = ',', default_value = "prefab")]
        templates: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    RevealAll,
    HideOperand,
    HideOperator,
}

impl From<ModeArg> for QuestionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::RevealAll => QuestionMode::RevealAll,
            ModeArg::HideOperand => QuestionMode::HideOperand,
            ModeArg::HideOperator => QuestionMode::HideOperator,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresetArg {
    Easy,
    Medium,
    Hard,
}

impl From<PresetArg> for DifficultyLevel {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Easy => DifficultyLevel::easy(),
            PresetArg::Medium => DifficultyLevel::medium(),
            PresetArg::Hard => DifficultyLevel::hard(),
        }
    }
}

fn main() -> MathdashResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Mathdash v{}", mathdash::VERSION);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    match args.command {
        Command::Quiz {
            mode,
            count,
            difficulty,
            level,
        } => {
            let level = match level {
                Some(path) => DifficultyLevel::load(path)?,
                None => difficulty.into(),
            };
            run_quiz(seed, mode.into(), count, &level)
        }
        Command::Spawn {
            config,
            seconds,
            step,
            templates,
        } => run_spawn(seed, SpawnConfig::load(config)?, seconds, step, templates),
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> MathdashResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let filter: log::LevelFilter = log_level
            .parse()
            .map_err(|_| {
                MathdashError::InvalidArgument(format!("unknown log level: {}", log_level))
            })?;

        env_logger::Builder::new()
            .filter_level(filter)
            .format_target(false)
            .init();
    }

    Ok(())
}

/// Generates and prints `count` questions.
fn run_quiz(
    seed: u64,
    mode: QuestionMode,
    count: u32,
    level: &DifficultyLevel,
) -> MathdashResult<()> {
    let mut engine = QuestionEngine::new(seed);
    let mut panel = TextPanel::new();

    for number in 1..=count {
        engine.generate_question(mode, level);
        engine.show(&mut panel);
        println!("{:>3}. {:<24} answer: {}", number, panel.line(), engine.display_solution_text());
    }

    Ok(())
}

/// Ticks a scheduler for `seconds` and prints every spawn request.
fn run_spawn(
    seed: u64,
    config: SpawnConfig,
    seconds: f32,
    step: f32,
    templates: Vec<String>,
) -> MathdashResult<()> {
    if !(step.is_finite() && step > 0.0) {
        return Err(MathdashError::InvalidArgument(format!(
            "tick step must be positive, got {}",
            step
        )));
    }

    let mut scheduler = SpawnScheduler::new(config, TemplatePool::from(templates), seed)?;
    let mut host = RecordingHost::new();

    let ticks = (seconds / step).ceil() as u32;
    let mut total = 0;
    for _ in 0..ticks {
        total += scheduler.tick(step, &mut host);
    }

    for record in host.records() {
        println!(
            "{} {:<12} pos={} vel={} parent={:?} scale={} ttl={:?}",
            record.id,
            record.template,
            record.position,
            record.velocity.unwrap_or_default(),
            record.parent,
            record.scale,
            record.destroy_after
        );
    }

    info!("Spawned {} instances over {} ticks", total, ticks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_quiz_args() {
        let args = Args::parse_from([
            "mathdash",
            "--seed",
            "3",
            "quiz",
            "--mode",
            "hide-operator",
            "--count",
            "2",
        ]);
        assert_eq!(args.seed, Some(3));
        match args.command {
            Command::Quiz { mode, count, .. } => {
                assert!(matches!(mode, ModeArg::HideOperator));
                assert_eq!(count, 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_spawn_templates() {
        let args = Args::parse_from([
            "mathdash",
            "spawn",
            "--config",
            "spawn.json",
            "--templates",
            "rock,cloud",
        ]);
        match args.command {
            Command::Spawn { templates, .. } => assert_eq!(templates, vec!["rock", "cloud"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_run_quiz() {
        assert!(run_quiz(1, QuestionMode::HideOperand, 3, &DifficultyLevel::medium()).is_ok());
    }

    #[test]
    fn test_run_spawn_rejects_bad_step() {
        let result = run_spawn(1, SpawnConfig::spatial(), 1.0, 0.0, vec!["x".to_string()]);
        assert!(matches!(result, Err(MathdashError::InvalidArgument(_))));
    }
}
