//! # Random Sampling
//!
//! Uniform sampling helpers used by both generators.

use crate::utils::round_to_decimals;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

/// Samples a number from a difficulty range at a fixed precision.
///
/// With zero decimals the result is an integer drawn uniformly from
/// `[floor(minimum), floor(maximum)]`, both ends included. Otherwise the
/// value comes from `[minimum, maximum)` and is rounded afterwards.
pub fn sample_number(rng: &mut StdRng, minimum: f64, maximum: f64, decimals: u32) -> f64 {
    if decimals == 0 {
        let low = minimum.floor() as i64;
        let high = maximum.floor() as i64;
        if high <= low {
            return low as f64;
        }
        return rng.gen_range(low..=high) as f64;
    }

    let raw = if maximum > minimum {
        rng.gen_range(minimum..maximum)
    } else {
        minimum
    };
    round_to_decimals(raw, decimals)
}

/// Samples uniformly from `[center - spread, center + spread]`.
///
/// A non-positive spread returns the center unchanged. Results that would
/// overflow are clamped to the finite `f32` range.
pub fn jitter(rng: &mut StdRng, center: f32, spread: f32) -> f32 {
    if spread <= 0.0 {
        return center;
    }
    let offset: f32 = rng.gen_range(-1.0..=1.0);
    (center + spread * offset).clamp(f32::MIN, f32::MAX)
}

/// Jitters each axis of a vector independently.
pub fn jitter_vec3(rng: &mut StdRng, center: Vec3, spread: Vec3) -> Vec3 {
    Vec3::new(
        jitter(rng, center.x, spread.x),
        jitter(rng, center.y, spread.y),
        jitter(rng, center.z, spread.z),
    )
}
