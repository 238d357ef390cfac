use arcade_physics::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const FRAME: f64 = 1.0 / 60.0;

fn prepare_world(body_count: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::default();
    world.set_ground(Some(600.0));
    world.initialize(0.0);
    for i in 0..body_count {
        let kind = match i % 3 {
            0 => BodyKind::Generic,
            1 => BodyKind::Projectile,
            _ => BodyKind::particle(),
        };
        let body = Body::new(Vec2::new(i as f32 * 0.5, (i % 400) as f32))
            .with_velocity(Vec2::new(25.0, -80.0))
            .with_bounce(0.3);
        world.spawn(body, kind);
    }
    world
}

fn bench_world_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_update");
    for &count in &[1_000usize, 10_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &count,
            |b, &count| {
                let mut world = prepare_world(count);
                let mut t = 0.0;
                b.iter(|| {
                    t += FRAME;
                    black_box(world.update(black_box(t)));
                })
            },
        );
        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, &count| {
            let mut world = prepare_world(count);
            world.set_parallel_enabled(true);
            let mut t = 0.0;
            b.iter(|| {
                t += FRAME;
                black_box(world.update(black_box(t)));
            })
        });
    }
    group.finish();
}

fn bench_single_integrator(c: &mut Criterion) {
    let integrator = Integrator::new(PhysicsConfig::default());
    let dt = integrator.fixed_step();

    c.bench_function("integrate_particle", |b| {
        let mut spark = Body::new(Vec2::ZERO).with_velocity(Vec2::new(40.0, -200.0));
        b.iter(|| {
            integrator.integrate_particle(black_box(&mut spark), dt, 0.4);
        })
    });

    c.bench_function("shell_ejection", |b| {
        let config = PhysicsConfig::default();
        b.iter(|| black_box(create_shell_ejection(black_box(10.0), 20.0, 0.7, &config)))
    });
}

criterion_group!(benches, bench_world_update, bench_single_integrator);
criterion_main!(benches);
