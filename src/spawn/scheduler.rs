//! # Spawn Scheduler
//!
//! Counts elapsed time and spawns a random template each time the interval
//! is reached.
//!
//! Each tick:
//! 1. Consumes the remaining start delay, if any, and does nothing else
//! 2. Adds the elapsed time to the timer
//! 3. Spawns once the timer reaches the interval, then resets the timer
//!    (the 2D flavour also draws a new interval)

use crate::spawn::{
    euler_degrees_to_quat, SpawnConfig, SpawnHost, SpawnOrigin, SpawnVariant, TemplatePool,
};
use crate::utils::{jitter, jitter_vec3};
use crate::MathdashResult;
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Periodically spawns templates through a [`SpawnHost`].
///
/// # Examples
///
/// ```
/// use mathdash::{RecordingHost, SpawnConfig, SpawnScheduler, TemplatePool};
///
/// let mut config = SpawnConfig::spatial();
/// config.spawn_on_start = false;
///
/// let templates = TemplatePool::from(vec!["asteroid"]);
/// let mut scheduler = SpawnScheduler::new(config, templates, 1).unwrap();
/// let mut host = RecordingHost::new();
///
/// assert_eq!(scheduler.tick(0.5, &mut host), 0);
/// assert_eq!(scheduler.tick(0.5, &mut host), 1);
/// assert_eq!(host.records()[0].template, "asteroid");
/// ```
#[derive(Debug, Clone)]
pub struct SpawnScheduler<T> {
    config: SpawnConfig,
    templates: TemplatePool<T>,
    home: SpawnOrigin,
    origins: Vec<SpawnOrigin>,
    rng: StdRng,
    timer: f32,
    interval: f32,
    remaining_delay: f32,
    started: bool,
}

impl<T> SpawnScheduler<T> {
    /// Creates a scheduler with a seeded random source.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: SpawnConfig, templates: TemplatePool<T>, seed: u64) -> MathdashResult<Self> {
        config.validate()?;

        let remaining_delay = match &config.variant {
            SpawnVariant::Spatial { initial_delay, .. } => *initial_delay,
            SpawnVariant::Planar { .. } => 0.0,
        };

        let mut scheduler = Self {
            config,
            templates,
            home: SpawnOrigin::at(crate::config::HOME_ORIGIN_ID, glam::Vec3::ZERO),
            origins: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            timer: 0.0,
            interval: 0.0,
            remaining_delay,
            started: false,
        };

        scheduler.interval = scheduler.sample_interval();
        if scheduler.config.spawn_on_start {
            scheduler.timer = scheduler.interval;
        }

        Ok(scheduler)
    }

    /// Sets the scheduler's own origin, used when no spawn origins are set.
    pub fn with_home(mut self, home: SpawnOrigin) -> Self {
        self.home = home;
        self
    }

    /// Sets the origins spawns are drawn from.
    pub fn with_origins(mut self, origins: Vec<SpawnOrigin>) -> Self {
        self.origins = origins;
        self
    }

    /// Replaces the scheduler's own origin.
    pub fn set_home(&mut self, home: SpawnOrigin) {
        self.home = home;
    }

    /// Replaces the origins spawns are drawn from.
    pub fn set_origins(&mut self, origins: Vec<SpawnOrigin>) {
        self.origins = origins;
    }

    /// Replaces the template pool.
    pub fn set_template_collection(&mut self, templates: TemplatePool<T>) {
        debug!("Template collection replaced ({} templates)", templates.count());
        self.templates = templates;
    }

    /// The active configuration.
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// The current template pool.
    pub fn templates(&self) -> &TemplatePool<T> {
        &self.templates
    }

    /// The scheduler's own origin.
    pub fn home(&self) -> &SpawnOrigin {
        &self.home
    }

    /// Seconds accumulated toward the next spawn.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Seconds between the previous spawn and the next one.
    pub fn effective_interval(&self) -> f32 {
        self.interval
    }

    /// Start delay still to be consumed.
    pub fn remaining_delay(&self) -> f32 {
        self.remaining_delay.max(0.0)
    }

    /// Whether [`SpawnScheduler::start`] already ran.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Runs one-time startup work and returns the number of instances spawned.
    ///
    /// A 2D scheduler with pre-population fills the travel path with
    /// `floor(life_time / spawn_rate)` instances spaced one interval of travel
    /// apart, farthest first. Later calls do nothing. The first
    /// [`SpawnScheduler::tick`] calls this if the host did not.
    pub fn start<H: SpawnHost<T>>(&mut self, host: &mut H) -> usize {
        if self.started {
            return 0;
        }
        self.started = true;

        let SpawnVariant::Planar {
            direction,
            pre_populate: true,
            ..
        } = self.config.variant
        else {
            return 0;
        };

        let quantity = self.config.pre_populated_count() as u32;
        let spacing = self.config.spawn_rate * self.config.speed;
        let home = self.home;

        let mut spawned = 0;
        for step in (1..=quantity).rev() {
            let base = home.position + direction.extend(0.0) * spacing * step as f32;
            if self.spawn_at(host, &home, base) {
                spawned += 1;
            }
        }

        if spawned < quantity as usize {
            warn!("Pre-populated only {} of {} instances", spawned, quantity);
        } else {
            debug!("Pre-populated {} instances", spawned);
        }
        spawned
    }

    /// Advances the timer by `delta` seconds and returns the number of
    /// instances spawned.
    pub fn tick<H: SpawnHost<T>>(&mut self, delta: f32, host: &mut H) -> usize {
        let mut spawned = self.start(host);

        if self.remaining_delay > 0.0 {
            self.remaining_delay -= delta;
            trace!("Spawn delay remaining: {:.3}s", self.remaining_delay.max(0.0));
            return spawned;
        }

        self.timer += delta;
        if self.timer >= self.interval {
            if self.spawn(host) {
                spawned += 1;
            }
            self.timer = 0.0;
            if matches!(self.config.variant, SpawnVariant::Planar { .. }) {
                self.interval = self.sample_interval();
                trace!("Next spawn in {:.3}s", self.interval);
            }
        }

        spawned
    }

    /// Spawns one instance at a random origin right away. Returns `false`
    /// when the template pool is empty.
    pub fn spawn<H: SpawnHost<T>>(&mut self, host: &mut H) -> bool {
        let origin = self.pick_origin();
        self.spawn_at(host, &origin, origin.position)
    }

    fn pick_origin(&mut self) -> SpawnOrigin {
        if self.origins.is_empty() {
            self.home
        } else {
            self.origins[self.rng.gen_range(0..self.origins.len())]
        }
    }

    fn sample_interval(&mut self) -> f32 {
        let rate = self.config.spawn_rate;
        match self.config.variant {
            SpawnVariant::Planar {
                spawn_rate_jitter, ..
            } => jitter(&mut self.rng, rate, spawn_rate_jitter),
            SpawnVariant::Spatial { .. } => rate,
        }
    }

    fn spawn_at<H: SpawnHost<T>>(
        &mut self,
        host: &mut H,
        origin: &SpawnOrigin,
        base: glam::Vec3,
    ) -> bool {
        if self.templates.is_empty() {
            debug!("Template collection is empty, skipping spawn");
            return false;
        }

        let position = jitter_vec3(&mut self.rng, base, self.config.position_jitter);
        let orientation = match &self.config.variant {
            SpawnVariant::Spatial { rotation_jitter, .. } => {
                euler_degrees_to_quat(jitter_vec3(&mut self.rng, origin.rotation, *rotation_jitter))
            }
            SpawnVariant::Planar { .. } => origin.orientation(),
        };

        let index = self.rng.gen_range(0..self.templates.count());
        let Some(template) = self.templates.get(index) else {
            return false;
        };
        let handle = host.instantiate(template, position, orientation);

        match &self.config.variant {
            SpawnVariant::Spatial {
                attach_to_origin, ..
            } => {
                host.set_velocity(&handle, origin.forward() * self.config.speed);
                if *attach_to_origin {
                    host.set_parent(&handle, origin.id);
                }
            }
            SpawnVariant::Planar {
                direction,
                instance_scale,
                ..
            } => {
                host.set_velocity(&handle, direction.extend(0.0) * self.config.speed);
                host.scale(&handle, *instance_scale);
                host.set_parent(&handle, origin.id);
            }
        }

        host.destroy_after(&handle, self.config.life_time);
        trace!("Spawned template {} at {} from origin {}", index, position, origin.id);
        true
    }
}
