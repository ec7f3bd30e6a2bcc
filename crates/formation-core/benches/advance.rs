use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formation_core::config::{ApproachRates, GroupConfig};
use formation_core::scene::Scene;
use formation_core::shapes::dispatcher::Shape;
use formation_core::shapes::tree::{LayeredParams, SpiralParams, TreeDims};
use formation_core::volume::BoundingVolume;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn full_scene() -> Scene {
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
    let dims = TreeDims::default();
    let mut scene = Scene::new();

    let mut foliage = GroupConfig::new(
        15_000,
        Shape::Spiral(SpiralParams::foliage(dims)),
        BoundingVolume::Sphere { radius: 30.0 },
    );
    foliage.approach = ApproachRates::uniform(1.5);
    scene.add_group(foliage, &mut rng);

    let mut lights = GroupConfig::new(
        200,
        Shape::Spiral(SpiralParams { dims, ..SpiralParams::default() }),
        BoundingVolume::cube(30.0),
    );
    lights.approach = ApproachRates::uniform(2.0);
    scene.add_group(lights, &mut rng);

    let mut gifts = GroupConfig::new(
        20,
        Shape::Layered(LayeredParams::default()),
        BoundingVolume::cube(30.0),
    );
    gifts.approach = ApproachRates::uniform(1.2);
    scene.add_group(gifts, &mut rng);

    scene
}

fn bench_step(c: &mut Criterion) {
    let mut scene = full_scene();
    c.bench_function("scene_step_15k", |b| {
        b.iter(|| {
            scene.step(black_box(1.0 / 60.0));
        })
    });

    let mut flipping = full_scene();
    c.bench_function("scene_step_15k_flipping", |b| {
        b.iter(|| {
            flipping.toggle();
            flipping.step(black_box(1.0 / 60.0));
        })
    });
}

fn bench_init(c: &mut Criterion) {
    c.bench_function("group_init_15k", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| {
            let config = GroupConfig::new(
                15_000,
                Shape::Spiral(SpiralParams::foliage(TreeDims::default())),
                BoundingVolume::Sphere { radius: 30.0 },
            );
            black_box(formation_core::group::ParticleGroup::new(config, &mut rng))
        })
    });
}

criterion_group!(benches, bench_step, bench_init);
criterion_main!(benches);
