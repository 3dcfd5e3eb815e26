//! Integration tests for spawn timing and spawn requests.

use glam::{Quat, Vec2, Vec3};
use mathdash::{
    RecordingHost, SpawnConfig, SpawnHost, SpawnOrigin, SpawnScheduler, SpawnVariant, TemplatePool,
};

/// Host that only counts calls, to check what the scheduler asks for.
#[derive(Default)]
struct CountingHost {
    instantiated: usize,
    destroyed: usize,
    parented: usize,
    next_handle: u64,
}

impl SpawnHost<u8> for CountingHost {
    type Handle = u64;

    fn instantiate(&mut self, _template: &u8, _position: Vec3, _orientation: Quat) -> u64 {
        self.instantiated += 1;
        self.next_handle += 1;
        self.next_handle
    }

    fn set_velocity(&mut self, _handle: &u64, _velocity: Vec3) {}

    fn set_parent(&mut self, _handle: &u64, _origin_id: u32) {
        self.parented += 1;
    }

    fn scale(&mut self, _handle: &u64, _factor: f32) {}

    fn destroy_after(&mut self, _handle: &u64, _seconds: f32) {
        self.destroyed += 1;
    }
}

fn spatial_without_start() -> SpawnConfig {
    let mut config = SpawnConfig::spatial();
    config.spawn_on_start = false;
    config
}

#[test]
fn test_half_second_ticks_fire_every_second() {
    let templates = TemplatePool::from(vec![1u8]);
    let mut scheduler = SpawnScheduler::new(spatial_without_start(), templates, 42).unwrap();
    let mut host = CountingHost::default();

    let mut fire_times = Vec::new();
    let mut elapsed = 0.0;
    for _ in 0..8 {
        elapsed += 0.5;
        if scheduler.tick(0.5, &mut host) > 0 {
            fire_times.push(elapsed);
        }
    }

    assert_eq!(fire_times, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(host.instantiated, 4);
    assert_eq!(host.destroyed, 4);
}

#[test]
fn test_empty_collection_fires_nothing_but_resets() {
    let templates = TemplatePool::<u8>::empty();
    let mut scheduler = SpawnScheduler::new(spatial_without_start(), templates, 42).unwrap();
    let mut host = CountingHost::default();

    scheduler.tick(0.5, &mut host);
    assert_eq!(scheduler.timer(), 0.5);
    assert_eq!(scheduler.tick(0.5, &mut host), 0);
    assert_eq!(scheduler.timer(), 0.0);
    assert_eq!(host.instantiated, 0);
}

#[test]
fn test_every_spawn_is_scheduled_for_destruction() {
    let mut config = SpawnConfig::planar(Vec2::new(0.0, -1.0));
    config.life_time = 2.5;
    config.spawn_rate = 0.5;
    let mut scheduler = SpawnScheduler::new(config, TemplatePool::from(vec!["drop"]), 9).unwrap();
    let mut host = RecordingHost::new();

    for _ in 0..40 {
        scheduler.tick(0.1, &mut host);
    }

    assert!(!host.records().is_empty());
    for record in host.records() {
        assert_eq!(record.destroy_after, Some(2.5));
        assert_eq!(record.velocity, Some(Vec3::new(0.0, -1.0, 0.0)));
    }
}

#[test]
fn test_pre_population_precedes_regular_spawns() {
    let mut config = SpawnConfig::planar(Vec2::X);
    config.spawn_rate = 1.0;
    config.life_time = 4.0;
    config.speed = 1.5;
    let home = SpawnOrigin::at(0, Vec3::new(-3.0, 1.0, 0.0));
    let mut scheduler = SpawnScheduler::new(config, TemplatePool::from(vec!["tree"]), 4)
        .unwrap()
        .with_home(home);
    let mut host = RecordingHost::new();

    // pre-population plus the spawn-on-start instance
    assert_eq!(scheduler.tick(0.0, &mut host), 5);

    let xs: Vec<f32> = host.records().iter().map(|record| record.position.x).collect();
    assert_eq!(xs, vec![3.0, 1.5, 0.0, -1.5, -3.0]);
    assert!(host.records().iter().all(|record| record.position.y == 1.0));
}

#[test]
fn test_delay_then_regular_cadence() {
    let mut config = spatial_without_start();
    config.variant = SpawnVariant::Spatial {
        rotation_jitter: Vec3::ZERO,
        initial_delay: 2.0,
        attach_to_origin: true,
    };
    let mut scheduler = SpawnScheduler::new(config, TemplatePool::from(vec![0u8]), 1).unwrap();
    let mut host = CountingHost::default();

    let fired: usize = (0..4).map(|_| scheduler.tick(0.5, &mut host)).sum();
    assert_eq!(fired, 0);
    assert_eq!(scheduler.timer(), 0.0);

    let fired: usize = (0..4).map(|_| scheduler.tick(0.5, &mut host)).sum();
    assert_eq!(fired, 2);
    assert_eq!(host.parented, 2);
}

#[test]
fn test_jittered_positions_stay_near_origins() {
    let origins = vec![
        SpawnOrigin::new(1, Vec3::new(0.0, 0.0, 50.0), Vec3::new(0.0, 180.0, 0.0)),
        SpawnOrigin::new(2, Vec3::new(0.0, 0.0, -50.0), Vec3::ZERO),
    ];
    let mut config = SpawnConfig::spatial();
    config.position_jitter = Vec3::new(2.0, 2.0, 2.0);
    config.speed = 4.0;
    let mut scheduler = SpawnScheduler::new(config, TemplatePool::from(vec!["bubble"]), 13)
        .unwrap()
        .with_origins(origins.clone());
    let mut host = RecordingHost::new();

    for _ in 0..30 {
        scheduler.tick(1.0, &mut host);
    }

    assert_eq!(host.records().len(), 30);
    for record in host.records() {
        let origin = origins
            .iter()
            .find(|origin| Some(origin.id) == record.parent)
            .expect("instances are parented under their origin");
        let offset = record.position - origin.position;
        assert!(offset.abs().max_element() <= 2.0 + 1e-4);

        // Both origins face the centre of the scene
        let velocity = record.velocity.unwrap();
        assert!((velocity.length() - 4.0).abs() < 1e-4);
        assert!(velocity.z * origin.position.z < 0.0);
    }
}
