use arcade_physics::*;

const FRAME: f64 = 1.0 / 60.0;

fn run_frames(world: &mut PhysicsWorld, start: f64, frames: &[f64]) -> f64 {
    let mut t = start;
    for delta in frames {
        t += delta;
        world.update(t);
    }
    t
}

#[test]
fn bodies_fall_under_gravity() {
    let mut world = PhysicsWorld::default();
    world.initialize(0.0);
    let body_id = world.spawn(Body::new(Vec2::new(0.0, 10.0)), BodyKind::Generic);

    let report = world.update(FRAME);
    assert_eq!(report.ticks, 1);

    let position_y = world.body(body_id).expect("body should exist").position.y;
    assert!(position_y > 10.0, "body should start falling, y = {}", position_y);
}

#[test]
fn identical_inputs_give_identical_state() {
    let jittery = [0.016, 0.018, 0.031, 0.002, 0.0, 0.045, 0.017, 0.4, 0.016, 0.009];

    let simulate = || {
        let mut world = PhysicsWorld::default();
        world.set_ground(Some(500.0));
        world.initialize(0.0);
        let tank = world.spawn(
            Body::new(Vec2::new(0.0, 480.0)).with_acceleration(Vec2::new(40.0, 0.0)),
            BodyKind::Generic,
        );
        let shot = world.spawn(
            launch_projectile(Vec2::new(0.0, 470.0), -0.5, 600.0),
            BodyKind::Projectile,
        );
        let spark = world.spawn(
            Body::new(Vec2::new(0.0, 470.0)).with_velocity(Vec2::new(-30.0, -120.0)),
            BodyKind::Particle { gravity_scale: 0.3 },
        );
        run_frames(&mut world, 0.0, &jittery);
        [tank, shot, spark].map(|h| *world.body(h).expect("body alive"))
    };

    assert_eq!(simulate(), simulate());
}

#[test]
fn paused_time_is_not_simulated() {
    let mut world = PhysicsWorld::default();
    world.initialize(0.0);
    let handle = world.spawn(Body::new(Vec2::ZERO), BodyKind::Generic);

    world.update(FRAME);
    let before = *world.body(handle).expect("body alive");

    world.pause();
    assert_eq!(world.update(5.0).ticks, 0);
    assert_eq!(*world.body(handle).expect("body alive"), before);

    world.resume(10.0);
    let report = world.update(10.0 + FRAME);
    assert_eq!(report.ticks, 1);
    assert_eq!(world.clock().total_ticks(), 2);
}

#[test]
fn despawned_handles_go_stale() {
    let mut world = PhysicsWorld::default();
    let shell = world.spawn(Body::default(), BodyKind::Projectile);
    assert!(world.despawn(shell).is_some());

    let spark = world.spawn(Body::default(), BodyKind::particle());
    assert!(world.body(shell).is_none());
    assert!(world.despawn(shell).is_none());
    assert_eq!(world.kind(spark), Some(BodyKind::particle()));
    assert_eq!(world.len(), 1);
}

#[test]
fn interpolated_position_lies_between_ticks() {
    let config = PhysicsConfig {
        air_friction: 1.0,
        ..PhysicsConfig::default()
    };
    let mut world = PhysicsWorld::new(config);
    world.initialize(0.0);
    let handle = world.spawn(
        Body::new(Vec2::ZERO)
            .with_velocity(Vec2::new(60.0, 0.0))
            .without_gravity(),
        BodyKind::Generic,
    );

    // One and a half steps: one tick runs, half a step stays pending.
    let report = world.update(1.5 * FRAME);
    assert_eq!(report.ticks, 1);
    assert!((report.alpha - 0.5).abs() < 1e-6);

    let rendered = world.interpolated_position(handle).expect("body alive");
    assert!((rendered.x - 0.5).abs() < 1e-4, "rendered x = {}", rendered.x);
    let current = world.body(handle).expect("body alive").position.x;
    assert!((current - 1.0).abs() < 1e-5, "current x = {}", current);
}

#[test]
fn ground_contacts_are_reported() {
    let mut world = PhysicsWorld::default();
    world.set_ground(Some(0.0));
    world.initialize(0.0);
    world.spawn(Body::new(Vec2::new(0.0, 0.0)), BodyKind::Generic);
    world.spawn(Body::new(Vec2::new(0.0, -1000.0)), BodyKind::Generic);

    let report = world.update(FRAME);
    assert_eq!(report.ticks, 1);
    assert_eq!(report.ground_contacts, 1);
    assert_eq!(world.profile().ground_contacts, 1);
    assert_eq!(world.profile().body_count, 2);
}

#[test]
fn invalid_config_is_rejected() {
    let config = PhysicsConfig {
        fixed_step: 0.0,
        ..PhysicsConfig::default()
    };
    assert!(PhysicsWorld::try_new(config).is_err());

    let fallback = PhysicsWorld::new(config);
    assert_eq!(fallback.fixed_timestep(), arcade_physics::config::DEFAULT_TIME_STEP);
}

#[test]
fn any_invalid_table_falls_back_to_defaults() {
    let starved = PhysicsConfig {
        max_accumulator: 0.001,
        ..PhysicsConfig::default()
    };
    assert!(PhysicsWorld::try_new(starved).is_err());

    let mut world = PhysicsWorld::new(starved);
    assert_eq!(*world.config(), PhysicsConfig::default());
    world.initialize(0.0);
    assert_eq!(world.update(FRAME).ticks, 1);
}

#[test]
fn sub_tolerance_step_is_rejected_and_never_spins() {
    let config = PhysicsConfig::default().with_fixed_step(1e-10);
    assert!(PhysicsWorld::try_new(config).is_err());

    let mut clock = SimulationClock::new(&config);
    clock.initialize(0.0);
    assert_eq!(clock.advance(0.0), 0);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_world_matches_sequential() {
    let build = |parallel: bool| {
        let mut world = PhysicsWorld::default();
        world.set_parallel_enabled(parallel);
        world.set_ground(Some(200.0));
        world.initialize(0.0);
        for i in 0..500 {
            let body = Body::new(Vec2::new(i as f32, (i % 50) as f32))
                .with_velocity(Vec2::new((i % 7) as f32 * 10.0, -50.0))
                .with_bounce(0.3);
            let kind = match i % 3 {
                0 => BodyKind::Generic,
                1 => BodyKind::Projectile,
                _ => BodyKind::Particle { gravity_scale: 0.5 },
            };
            world.spawn(body, kind);
        }
        run_frames(&mut world, 0.0, &[FRAME; 90]);
        world.bodies().map(|(_, b)| *b).collect::<Vec<_>>()
    };

    let sequential = build(false);
    let parallel = build(true);
    assert_eq!(sequential, parallel);
}
