use formation_core::config::{DeviceTier, GroupConfig, VariantRule, FALLBACK_PALETTE_LEN};
use formation_core::group::ParticleGroup;
use formation_core::shapes::dispatcher::Shape;
use formation_core::transition::SceneState;
use formation_core::volume::BoundingVolume;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn basic_config(count: usize) -> GroupConfig {
    GroupConfig::new(count, Shape::default(), BoundingVolume::cube(30.0))
}

#[test]
fn test_count_invariant() {
    let mut rng = SmallRng::seed_from_u64(1);
    let group = ParticleGroup::new(basic_config(137), &mut rng);
    assert_eq!(group.count(), 137);
    assert_eq!(group.transforms().len(), 137);
    assert_eq!(group.particles().chaos_pos.len(), 137);
    assert_eq!(group.particles().target_pos.len(), 137);
}

#[test]
fn test_group_starts_at_chaos() {
    let mut rng = SmallRng::seed_from_u64(2);
    let group = ParticleGroup::new(basic_config(50), &mut rng);
    let store = group.particles();
    for i in 0..50 {
        assert_eq!(store.current_pos[i], store.chaos_pos[i]);
        assert!(store.chaos_pos[i].length() <= BoundingVolume::cube(30.0).max_extent());
    }
}

#[test]
fn test_reconfigure_fully_regenerates() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut group = ParticleGroup::new(basic_config(100), &mut rng);
    let old_target = group.particles().target_pos[10];

    group.reconfigure(basic_config(40), &mut rng);
    assert_eq!(group.count(), 40);
    assert_eq!(group.transforms().len(), 40);
    // no stale records: targets resampled, particles back at chaos
    assert_ne!(group.particles().target_pos[10], old_target);
    assert_eq!(group.particles().current_pos[0], group.particles().chaos_pos[0]);
}

#[test]
fn test_empty_group_is_valid() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut group = ParticleGroup::new(basic_config(0), &mut rng);
    assert_eq!(group.count(), 0);
    assert!(group.transforms().is_empty());
    // advancing an empty group is a no-op, not a crash
    group.advance(SceneState::Formed, 1.0, 1.0 / 60.0);
    assert!(group.transforms().is_empty());
}

#[test]
fn test_empty_palette_falls_back() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut config = basic_config(64);
    config.palette_len = 0;
    let group = ParticleGroup::new(config, &mut rng);
    for i in 0..64 {
        assert!((group.particles().variant[i] as usize) < FALLBACK_PALETTE_LEN);
    }
}

#[test]
fn test_round_robin_variants() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut config = basic_config(30);
    config.palette_len = 7;
    let group = ParticleGroup::new(config, &mut rng);
    for i in 0..30 {
        assert_eq!(group.particles().variant[i], (i % 7) as u32);
    }
}

#[test]
fn test_oversize_rule_applies_scale() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut config = basic_config(40);
    config.palette_len = 8;
    config.variants = VariantRule::Oversize {
        chance: 1.0,
        scale: 2.5,
    };
    let group = ParticleGroup::new(config, &mut rng);
    for i in 0..40 {
        assert_eq!(group.particles().scale[i], 2.5);
        assert!(group.particles().variant[i] < 8);
    }
}

#[test]
fn test_motion_params_within_bands() {
    let mut rng = SmallRng::seed_from_u64(8);
    let group = ParticleGroup::new(basic_config(200), &mut rng);
    let store = group.particles();
    for i in 0..200 {
        assert!((0.3..0.8).contains(&store.wobble_speed[i]));
        assert!((0.3..0.7).contains(&store.float_speed[i]));
        assert!((0.0..10.0).contains(&store.wobble_offset[i]));
        assert!(store.float_offset[i] < std::f32::consts::TAU);
        let rs = store.rotation_speed[i];
        assert!(rs.x.abs() <= 0.25 && rs.y.abs() <= 0.25 && rs.z.abs() <= 0.25);
        assert_eq!(store.pace[i], 1.0);
    }
}

#[test]
fn test_transform_slots_match_records() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut group = ParticleGroup::new(basic_config(25), &mut rng);
    group.advance(SceneState::Formed, 0.5, 1.0 / 60.0);
    let store = group.particles();
    for (i, t) in group.transforms().iter().enumerate() {
        assert_eq!(t.variant, store.variant[i]);
        assert_eq!(t.scale, store.scale[i]);
        assert_eq!(t.rotation, store.rotation[i].to_array());
    }
}

#[test]
fn test_tier_scaling_at_construction() {
    let config = basic_config(200).for_tier(DeviceTier::Lite);
    assert_eq!(config.count, 80);
    let full = basic_config(200).for_tier(DeviceTier::Full);
    assert_eq!(full.count, 200);
}

#[test]
fn test_sculpture_variants_override_rule() {
    use formation_core::shapes::sculpt::{Cluster, ClusterStyle, Sculpture, SculptureLayout};
    use glam::Vec3;

    let mut rng = SmallRng::seed_from_u64(10);
    let sculpture = Sculpture {
        clusters: vec![Cluster {
            center: Vec3::ZERO,
            radii: Vec3::splat(2.0),
            count: 60,
            variant: 9,
            style: ClusterStyle::Solid,
        }],
    };
    let layout = SculptureLayout::new(&sculpture, &mut rng);
    let mut config = basic_config(60);
    config.shape = Shape::Sculpture(layout);
    config.palette_len = 4;
    let group = ParticleGroup::new(config, &mut rng);
    for i in 0..60 {
        assert_eq!(group.particles().variant[i], 9);
    }
}
