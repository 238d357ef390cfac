use arcade_physics::*;

fn main() {
    let mut world = PhysicsWorld::default();
    world.set_ground(Some(300.0));
    world.initialize(0.0);

    let turret_angle = -0.3;
    let mut casings = Vec::new();
    for shot in 0..3 {
        let x = 100.0 + shot as f32 * 20.0;
        let casing = create_shell_ejection(x, 280.0, turret_angle, world.config());
        casings.push(world.spawn(casing, BodyKind::Generic));

        let barrel = Vec2::new(x, 280.0);
        world.spawn(launch_projectile(barrel, turret_angle, 500.0), BodyKind::Projectile);
    }

    // Irregular frame pacing, including a 300 ms hitch.
    let frames = [0.016, 0.017, 0.033, 0.3, 0.016, 0.008, 0.025];
    let mut now = 0.0;
    for _ in 0..20 {
        for delta in frames {
            now += delta;
            let report = world.update(now);
            println!(
                "t={now:.3}s ticks={} contacts={} alpha={:.2}",
                report.ticks, report.ground_contacts, report.alpha
            );
        }
    }

    let profile = world.profile();
    println!(
        "last frame: {} ticks, {} bodies, {} ground contacts",
        profile.ticks, profile.body_count, profile.ground_contacts
    );
    println!(
        "  integrate {:.3} ms, ground {:.3} ms, total {:.3} ms",
        profile.integrator_time.as_secs_f64() * 1000.0,
        profile.collision_time.as_secs_f64() * 1000.0,
        profile.total_frame_time.as_secs_f64() * 1000.0
    );
    for handle in casings {
        if let Some(position) = world.interpolated_position(handle) {
            println!("casing at {position:?}");
        }
    }
}
