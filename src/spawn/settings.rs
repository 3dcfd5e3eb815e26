//! # Spawn Settings
//!
//! Configuration shared by both spawner flavours plus the flavour-specific
//! fields.

use crate::{config, MathdashError, MathdashResult};
use glam::{Vec2, Vec3};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`crate::SpawnScheduler`].
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use mathdash::{SpawnConfig, SpawnVariant};
///
/// let config = SpawnConfig::planar(Vec2::NEG_X);
/// assert!(config.validate().is_ok());
/// assert!(matches!(config.variant, SpawnVariant::Planar { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Seconds between spawns
    pub spawn_rate: f32,
    /// Per-axis spread of the spawn position around the origin
    #[serde(default)]
    pub position_jitter: Vec3,
    /// Speed given to spawned instances
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Seconds before the host destroys a spawned instance
    pub life_time: f32,
    /// Whether the first tick spawns immediately
    #[serde(default = "default_true")]
    pub spawn_on_start: bool,
    /// Flavour-specific settings
    pub variant: SpawnVariant,
}

/// The two spawner flavours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnVariant {
    /// 3D: instances fly along the origin's forward axis
    Spatial {
        /// Per-axis spread of the Euler rotation, in degrees
        #[serde(default)]
        rotation_jitter: Vec3,
        /// Seconds to wait before the timer starts counting
        #[serde(default)]
        initial_delay: f32,
        /// Whether instances are parented under their origin
        #[serde(default = "default_true")]
        attach_to_origin: bool,
    },
    /// 2D: instances travel in a fixed direction
    Planar {
        /// Travel direction
        direction: Vec2,
        /// Spread of the interval between spawns, resampled after each spawn
        #[serde(default)]
        spawn_rate_jitter: f32,
        /// Uniform scale applied to each instance
        #[serde(default = "default_scale")]
        instance_scale: f32,
        /// Whether to fill the travel path with instances at startup
        #[serde(default = "default_true")]
        pre_populate: bool,
    },
}

fn default_true() -> bool {
    true
}

fn default_speed() -> f32 {
    config::DEFAULT_SPAWN_SPEED
}

fn default_scale() -> f32 {
    1.0
}

impl SpawnConfig {
    /// Default 3D spawner: one instance per second, living ten seconds.
    pub fn spatial() -> Self {
        Self {
            spawn_rate: config::DEFAULT_SPAWN_RATE,
            position_jitter: Vec3::ZERO,
            speed: config::DEFAULT_SPAWN_SPEED,
            life_time: config::DEFAULT_SPATIAL_LIFE_TIME,
            spawn_on_start: true,
            variant: SpawnVariant::Spatial {
                rotation_jitter: Vec3::ZERO,
                initial_delay: 0.0,
                attach_to_origin: true,
            },
        }
    }

    /// Default 2D spawner travelling in `direction`.
    pub fn planar(direction: Vec2) -> Self {
        Self {
            spawn_rate: config::DEFAULT_SPAWN_RATE,
            position_jitter: Vec3::ZERO,
            speed: config::DEFAULT_SPAWN_SPEED,
            life_time: config::DEFAULT_PLANAR_LIFE_TIME,
            spawn_on_start: true,
            variant: SpawnVariant::Planar {
                direction,
                spawn_rate_jitter: 0.0,
                instance_scale: 1.0,
                pre_populate: true,
            },
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> MathdashResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> MathdashResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!("Loaded spawn configuration from {}", path.display());
        Ok(config)
    }

    /// Number of instances a 2D spawner places at startup when it
    /// pre-populates.
    pub fn pre_populated_count(&self) -> f32 {
        (self.life_time / self.spawn_rate).floor()
    }

    /// Checks that the configuration can drive a scheduler.
    pub fn validate(&self) -> MathdashResult<()> {
        if !(self.spawn_rate.is_finite() && self.spawn_rate > 0.0) {
            return Err(invalid(format!("spawn rate must be positive, got {}", self.spawn_rate)));
        }
        if !(self.life_time.is_finite() && self.life_time >= 0.0) {
            return Err(invalid(format!("life time must be non-negative, got {}", self.life_time)));
        }
        if !self.speed.is_finite() {
            return Err(invalid("speed must be finite".to_string()));
        }
        check_spread("position jitter", self.position_jitter)?;

        match &self.variant {
            SpawnVariant::Spatial {
                rotation_jitter,
                initial_delay,
                ..
            } => {
                check_spread("rotation jitter", *rotation_jitter)?;
                if !(initial_delay.is_finite() && *initial_delay >= 0.0) {
                    return Err(invalid(format!(
                        "initial delay must be non-negative, got {}",
                        initial_delay
                    )));
                }
            }
            SpawnVariant::Planar {
                direction,
                spawn_rate_jitter,
                instance_scale,
                pre_populate,
            } => {
                if !direction.is_finite() {
                    return Err(invalid("direction must be finite".to_string()));
                }
                if !(spawn_rate_jitter.is_finite()
                    && *spawn_rate_jitter >= 0.0
                    && *spawn_rate_jitter <= self.spawn_rate)
                {
                    return Err(invalid(format!(
                        "spawn rate jitter must be within [0, {}], got {}",
                        self.spawn_rate, spawn_rate_jitter
                    )));
                }
                if !(instance_scale.is_finite() && *instance_scale > 0.0) {
                    return Err(invalid(format!(
                        "instance scale must be positive, got {}",
                        instance_scale
                    )));
                }
                let count = self.pre_populated_count();
                if *pre_populate && count > config::MAX_PRE_POPULATED_INSTANCES as f32 {
                    return Err(invalid(format!(
                        "pre-population would place {} instances, at most {} allowed",
                        count,
                        config::MAX_PRE_POPULATED_INSTANCES
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> MathdashError {
    MathdashError::InvalidSpawnConfig(message)
}

fn check_spread(name: &str, spread: Vec3) -> MathdashResult<()> {
    if !spread.is_finite() || spread.min_element() < 0.0 {
        return Err(invalid(format!("{} must be non-negative, got {}", name, spread)));
    }
    Ok(())
}
