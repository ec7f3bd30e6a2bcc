use formation_core::config::{ApproachRates, GroupConfig};
use formation_core::scene::Scene;
use formation_core::shapes::dispatcher::Shape;
use formation_core::shapes::tree::{LayeredParams, SpiralParams, TreeDims};
use formation_core::transition::SceneState;
use formation_core::volume::BoundingVolume;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn demo_scene(rng: &mut SmallRng) -> Scene {
    let dims = TreeDims::default();
    let mut scene = Scene::new();

    let mut foliage = GroupConfig::new(
        2000,
        Shape::Spiral(SpiralParams::foliage(dims)),
        BoundingVolume::Sphere { radius: 30.0 },
    );
    foliage.approach = ApproachRates::uniform(1.5);
    scene.add_group(foliage, rng);

    let mut lights = GroupConfig::new(
        200,
        Shape::Spiral(SpiralParams { dims, ..SpiralParams::default() }),
        BoundingVolume::cube(30.0),
    );
    lights.approach = ApproachRates::uniform(2.0);
    scene.add_group(lights, rng);

    let mut gifts = GroupConfig::new(
        20,
        Shape::Layered(LayeredParams::default()),
        BoundingVolume::cube(30.0),
    );
    gifts.approach = ApproachRates::uniform(1.2);
    scene.add_group(gifts, rng);

    scene
}

#[test]
fn test_default_state_is_formed() {
    assert_eq!(Scene::new().state(), SceneState::Formed);
    assert_eq!(
        Scene::with_state(SceneState::Chaos).state(),
        SceneState::Chaos
    );
}

#[test]
fn test_step_advances_all_groups() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut scene = demo_scene(&mut rng);
    let before: Vec<_> = scene
        .groups()
        .iter()
        .map(|g| g.particles().current_pos[0])
        .collect();

    scene.step(DT);
    assert!((scene.elapsed() - DT).abs() < 1e-6);
    for (group, before) in scene.groups().iter().zip(&before) {
        assert_ne!(
            group.particles().current_pos[0],
            *before,
            "group did not move toward its goal"
        );
    }
}

#[test]
fn test_buffer_lengths_stable_across_frames() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut scene = demo_scene(&mut rng);
    let counts: Vec<_> = scene.groups().iter().map(|g| g.count()).collect();
    for _ in 0..120 {
        scene.step(DT);
        for (group, count) in scene.groups().iter().zip(&counts) {
            assert_eq!(group.transforms().len(), *count);
        }
    }
}

#[test]
fn test_groups_converge_in_layers() {
    // distinct approach rates mean the fast group leads at every checkpoint
    let mut rng = SmallRng::seed_from_u64(3);
    let mut scene = demo_scene(&mut rng);
    for _ in 0..120 {
        scene.step(DT);
    }
    let distance = |scene: &Scene, idx: usize| {
        let store = scene.group(idx).unwrap().particles();
        (0..store.count)
            .map(|i| store.current_pos[i].distance(store.target_pos[i]))
            .sum::<f32>()
            / store.count as f32
    };
    let lights = distance(&scene, 1);
    let gifts = distance(&scene, 2);
    assert!(
        lights < gifts,
        "rate 2.0 group should lead rate 1.2 group: {lights} vs {gifts}"
    );
}

#[test]
fn test_state_flip_every_frame_stays_bounded() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut scene = demo_scene(&mut rng);
    // the hull of chaos and target positions, padded by the float amplitude;
    // the widest chaos volume is the cube, whose corner sits at 30 * sqrt(3)
    let bound = 30.0 * 3.0f32.sqrt() + 1.0;
    for _ in 0..300 {
        scene.toggle();
        scene.step(DT);
        for group in scene.groups() {
            for t in group.transforms() {
                let p = glam::Vec3::from_array(t.position);
                assert!(p.is_finite());
                assert!(p.length() <= bound, "unbounded drift: {p:?}");
            }
        }
    }
}

#[test]
fn test_float_animates_settled_particles() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut scene = demo_scene(&mut rng);
    // settle fully
    for _ in 0..1200 {
        scene.step(DT);
    }
    let before: Vec<_> = scene.group(2).unwrap().transforms().to_vec();
    for _ in 0..30 {
        scene.step(DT);
    }
    let after = scene.group(2).unwrap().transforms();
    let moved = before
        .iter()
        .zip(after)
        .filter(|(b, a)| b.position[1] != a.position[1])
        .count();
    assert!(moved > 0, "formed particles should keep floating");
}

#[test]
fn test_reinitialize_resamples() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut scene = demo_scene(&mut rng);
    let old = scene.group(0).unwrap().particles().chaos_pos[0];
    scene.reinitialize(&mut rng);
    assert_ne!(scene.group(0).unwrap().particles().chaos_pos[0], old);
    assert_eq!(scene.group(0).unwrap().count(), 2000);
}

#[test]
fn test_zero_dt_step_accumulates_nothing() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut scene = demo_scene(&mut rng);
    let before = scene.group(0).unwrap().particles().current_pos[0];
    scene.step(0.0);
    assert_eq!(scene.elapsed(), 0.0);
    assert_eq!(scene.group(0).unwrap().particles().current_pos[0], before);
}
