//! # Utilities Module
//!
//! Rounding, number formatting and random sampling helpers shared by the
//! question engine and the spawn scheduler.

pub mod math;
pub mod random;

pub use math::*;
pub use random::*;
