//! # Spawn Module
//!
//! Timer-driven spawning of randomized template instances.
//!
//! A [`SpawnScheduler`] counts the time delivered by the host's main loop and,
//! whenever its interval elapses, asks a [`SpawnHost`] to instantiate a random
//! template near one of its origins. The same scheduler covers the 3D flavour
//! (jittered rotation, velocity along the origin's forward axis, optional
//! start delay) and the 2D flavour (fixed travel direction, jittered interval,
//! scene pre-population), selected through [`SpawnVariant`].

pub mod host;
pub mod scheduler;
pub mod settings;

pub use host::*;
pub use scheduler::*;
pub use settings::*;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A point instances are spawned from.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use mathdash::SpawnOrigin;
///
/// let origin = SpawnOrigin::new(1, Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0));
/// let forward = origin.forward();
/// assert!((forward - Vec3::X).length() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnOrigin {
    /// Identifier handed to the host when instances are parented here
    pub id: u32,
    /// World position
    pub position: Vec3,
    /// Euler angles in degrees
    #[serde(default)]
    pub rotation: Vec3,
}

impl SpawnOrigin {
    /// Creates an origin.
    pub fn new(id: u32, position: Vec3, rotation: Vec3) -> Self {
        Self {
            id,
            position,
            rotation,
        }
    }

    /// Creates an unrotated origin.
    pub fn at(id: u32, position: Vec3) -> Self {
        Self::new(id, position, Vec3::ZERO)
    }

    /// Orientation of the origin as a quaternion.
    pub fn orientation(&self) -> Quat {
        euler_degrees_to_quat(self.rotation)
    }

    /// Unit vector the origin faces (its local +Z).
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }
}

/// Converts Euler angles in degrees to a rotation applied Z first, then X,
/// then Y.
pub fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// The templates a scheduler picks from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePool<T> {
    templates: Vec<T>,
}

impl<T> TemplatePool<T> {
    /// Creates a pool from a list of templates.
    pub fn new(templates: Vec<T>) -> Self {
        Self { templates }
    }

    /// Creates a pool with no templates; schedulers skip every spawn.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of templates.
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Template at an index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.templates.get(index)
    }

    /// Whether the pool has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterates over the templates.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.templates.iter()
    }
}

impl<T> From<Vec<T>> for TemplatePool<T> {
    fn from(templates: Vec<T>) -> Self {
        Self::new(templates)
    }
}

impl<T> Default for TemplatePool<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_unrotated_origin_faces_z() {
        let origin = SpawnOrigin::at(0, Vec3::new(1.0, 2.0, 3.0));
        assert!((origin.forward() - Vec3::Z).length() < EPSILON);
    }

    #[test]
    fn test_pitch_down_faces_negative_y() {
        let origin = SpawnOrigin::new(0, Vec3::ZERO, Vec3::new(90.0, 0.0, 0.0));
        assert!((origin.forward() - Vec3::NEG_Y).length() < EPSILON);
    }

    #[test]
    fn test_roll_keeps_forward() {
        let origin = SpawnOrigin::new(0, Vec3::ZERO, Vec3::new(0.0, 0.0, 45.0));
        assert!((origin.forward() - Vec3::Z).length() < EPSILON);
    }

    #[test]
    fn test_template_pool() {
        let pool = TemplatePool::from(vec!["rock", "cloud"]);
        assert_eq!(pool.count(), 2);
        assert_eq!(pool.get(1), Some(&"cloud"));
        assert_eq!(pool.get(2), None);
        assert!(!pool.is_empty());
        assert_eq!(pool.iter().copied().collect::<Vec<_>>(), vec!["rock", "cloud"]);
        assert!(TemplatePool::<&str>::empty().is_empty());
    }
}
