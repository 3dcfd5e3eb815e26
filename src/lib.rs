//! # Mathdash
//!
//! Gameplay utilities for an educational math game.
//!
//! ## Architecture Overview
//!
//! The crate provides two independent generators, each driven by the embedding
//! application rather than by engine callbacks:
//!
//! - **Question Engine**: Random arithmetic questions at a configurable difficulty,
//!   rendered with one hidden element, plus validation of player guesses
//! - **Spawn Scheduler**: Timer-driven spawning of random templates with jittered
//!   position, orientation and velocity, in a 3D and a 2D flavour
//!
//! Everything engine-specific (text labels, physics bodies, destruction, the
//! scene graph) is reached through the [`QuestionDisplay`] and [`SpawnHost`]
//! traits, so the same logic runs inside a game engine or in tests.
//!
//! ```
//! use mathdash::{DifficultyLevel, QuestionEngine, QuestionMode};
//!
//! let level = DifficultyLevel::new(0, 1.0, 10.0).unwrap();
//! let mut engine = QuestionEngine::new(7);
//! let question = engine.generate_question(QuestionMode::HideOperator, &level).clone();
//! assert!(engine.validate_operator_guess(question.operator));
//! ```

pub mod question;
pub mod spawn;
pub mod utils;

pub use question::*;
pub use spawn::*;
pub use utils::*;

pub use glam;

/// Core error type for the Mathdash crate.
#[derive(thiserror::Error, Debug)]
pub enum MathdashError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Difficulty level cannot produce valid questions
    #[error("Invalid difficulty level: {0}")]
    InvalidLevel(String),

    /// Spawn configuration is unusable
    #[error("Invalid spawn configuration: {0}")]
    InvalidSpawnConfig(String),

    /// A level-dependent operation ran before any level was supplied
    #[error("No difficulty level loaded")]
    NoLevelLoaded,

    /// Command line or caller supplied an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout the Mathdash codebase.
pub type MathdashResult<T> = Result<T, MathdashError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tuning constants.
pub mod config {
    /// Tolerance used when comparing a recomputed solution in operator guesses
    pub const DEFAULT_FLOAT_THRESHOLD: f64 = 0.0001;

    /// Extra decimal places kept when rounding a computed solution
    pub const SOLUTION_EXTRA_DECIMALS: u32 = 2;

    /// Highest precision a difficulty level may ask for
    pub const MAX_NUMBER_DECIMALS: u32 = 10;

    /// Seconds between spawns when no rate is configured
    pub const DEFAULT_SPAWN_RATE: f32 = 1.0;

    /// Speed applied to spawned instances when none is configured
    pub const DEFAULT_SPAWN_SPEED: f32 = 1.0;

    /// Lifetime of a 3D spawned instance in seconds
    pub const DEFAULT_SPATIAL_LIFE_TIME: f32 = 10.0;

    /// Lifetime of a 2D spawned instance in seconds
    pub const DEFAULT_PLANAR_LIFE_TIME: f32 = 5.0;

    /// Most instances a 2D spawner may place when pre-populating
    pub const MAX_PRE_POPULATED_INSTANCES: u32 = 1024;

    /// Identifier of a spawner's own origin
    pub const HOME_ORIGIN_ID: u32 = 0;
}
