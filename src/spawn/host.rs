//! # Spawn Host
//!
//! The engine services a scheduler drives, and a recording implementation.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Engine operations needed to bring a spawned instance to life.
///
/// The host owns instances, physics and destruction; the scheduler only
/// issues requests through this trait.
pub trait SpawnHost<T> {
    /// Handle to a live instance.
    type Handle;

    /// Creates an instance of `template`.
    fn instantiate(&mut self, template: &T, position: Vec3, orientation: Quat) -> Self::Handle;

    /// Sets the instance's velocity.
    fn set_velocity(&mut self, handle: &Self::Handle, velocity: Vec3);

    /// Parents the instance under the origin with the given id.
    fn set_parent(&mut self, handle: &Self::Handle, origin_id: u32);

    /// Multiplies the instance's scale uniformly.
    fn scale(&mut self, handle: &Self::Handle, factor: f32);

    /// Schedules the instance for destruction after `seconds`.
    fn destroy_after(&mut self, handle: &Self::Handle, seconds: f32);
}

/// Unique identifier for recorded instances.
pub type InstanceId = Uuid;

/// Creates a new unique instance ID.
pub fn new_instance_id() -> InstanceId {
    Uuid::new_v4()
}

/// Everything a [`RecordingHost`] was asked to do with one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnRecord<T> {
    pub id: InstanceId,
    pub template: T,
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Option<Vec3>,
    pub parent: Option<u32>,
    pub scale: f32,
    pub destroy_after: Option<f32>,
}

/// Host that keeps a log of spawn requests instead of running an engine.
///
/// # Examples
///
/// ```
/// use glam::{Quat, Vec3};
/// use mathdash::{RecordingHost, SpawnHost};
///
/// let mut host = RecordingHost::new();
/// let id = host.instantiate(&"coin", Vec3::ONE, Quat::IDENTITY);
/// host.destroy_after(&id, 3.0);
///
/// assert_eq!(host.records().len(), 1);
/// assert_eq!(host.record(&id).unwrap().destroy_after, Some(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingHost<T> {
    records: Vec<SpawnRecord<T>>,
}

impl<T> RecordingHost<T> {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// All recorded instances in spawn order.
    pub fn records(&self) -> &[SpawnRecord<T>] {
        &self.records
    }

    /// The record of one instance.
    pub fn record(&self, id: &InstanceId) -> Option<&SpawnRecord<T>> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// Forgets every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    fn record_mut(&mut self, id: &InstanceId) -> Option<&mut SpawnRecord<T>> {
        self.records.iter_mut().find(|record| record.id == *id)
    }
}

impl<T: Clone> SpawnHost<T> for RecordingHost<T> {
    type Handle = InstanceId;

    fn instantiate(&mut self, template: &T, position: Vec3, orientation: Quat) -> InstanceId {
        let id = new_instance_id();
        self.records.push(SpawnRecord {
            id,
            template: template.clone(),
            position,
            orientation,
            velocity: None,
            parent: None,
            scale: 1.0,
            destroy_after: None,
        });
        id
    }

    fn set_velocity(&mut self, handle: &InstanceId, velocity: Vec3) {
        if let Some(record) = self.record_mut(handle) {
            record.velocity = Some(velocity);
        }
    }

    fn set_parent(&mut self, handle: &InstanceId, origin_id: u32) {
        if let Some(record) = self.record_mut(handle) {
            record.parent = Some(origin_id);
        }
    }

    fn scale(&mut self, handle: &InstanceId, factor: f32) {
        if let Some(record) = self.record_mut(handle) {
            record.scale *= factor;
        }
    }

    fn destroy_after(&mut self, handle: &InstanceId, seconds: f32) {
        if let Some(record) = self.record_mut(handle) {
            record.destroy_after = Some(seconds);
        }
    }
}
