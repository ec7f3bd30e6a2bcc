//! Particle group: owns the store, its configuration and the output buffer.

use std::f32::consts::{PI, TAU};

use bytemuck::Zeroable;
use glam::Vec3;
use log::debug;
use rand::Rng;

use crate::config::{GroupConfig, MotionToggles, VariantRule};
use crate::motion;
use crate::output::InstanceTransform;
use crate::particle::ParticleStore;
use crate::transition::{self, SceneState};

pub struct ParticleGroup {
    config: GroupConfig,
    store: ParticleStore,
    transforms: Vec<InstanceTransform>,
}

impl ParticleGroup {
    /// Build a group: chaos positions from the bounding volume, targets from
    /// the layout generator, motion parameters sampled once per particle.
    /// A zero count yields a valid, empty group.
    pub fn new(config: GroupConfig, rng: &mut impl Rng) -> Self {
        let config = config.sanitized();
        let count = config.count;
        let mut store = ParticleStore::new(count);
        let m = &config.motion;

        for i in 0..count {
            store.chaos_pos[i] = config.volume.sample(rng);
            store.target_pos[i] = config.shape.generate(i, count, rng);
            // groups always start scattered until the first update pulls them
            store.current_pos[i] = store.chaos_pos[i];

            store.rotation[i] = Vec3::new(
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
            );
            store.rotation_speed[i] = Vec3::new(
                symmetric(rng, m.rotation_speed),
                symmetric(rng, m.rotation_speed),
                symmetric(rng, m.rotation_speed),
            );
            store.wobble_offset[i] = rng.gen::<f32>() * 10.0;
            store.wobble_speed[i] = band(rng, m.wobble_speed);
            store.float_offset[i] = rng.gen::<f32>() * TAU;
            store.float_speed[i] = band(rng, m.float_speed);
            store.pace[i] = band(rng, m.pace);

            let (variant, scale) = match config.variants {
                VariantRule::RoundRobin => {
                    ((i % config.palette_len) as u32, band(rng, m.scale))
                }
                VariantRule::Oversize { chance, scale } => {
                    let v = rng.gen_range(0..config.palette_len) as u32;
                    if rng.gen::<f32>() < chance {
                        (v, scale)
                    } else {
                        (v, band(rng, m.scale))
                    }
                }
            };
            store.variant[i] = config.shape.variant_hint(i).unwrap_or(variant);
            store.scale[i] = scale;
        }

        let mut group = Self {
            config,
            store,
            transforms: vec![InstanceTransform::zeroed(); count],
        };
        group.refresh_transforms();
        group
    }

    /// Replace the configuration and rebuild from scratch. Chaos and target
    /// positions depend on count and shape, so there is no incremental path.
    pub fn reconfigure(&mut self, config: GroupConfig, rng: &mut impl Rng) {
        debug!(
            "regenerating group: {} -> {} particles",
            self.store.count, config.count
        );
        *self = Self::new(config, rng);
    }

    /// Resample every particle under the current configuration.
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        let config = self.config.clone();
        *self = Self::new(config, rng);
    }

    /// Flip idle-motion switches in place. Unlike count or shape changes,
    /// this touches no sampled state, so the group is not rebuilt.
    pub fn set_effects(&mut self, effects: MotionToggles) {
        self.config.effects = effects;
    }

    /// One frame: transition step, then the secondary-motion mix into the
    /// output buffer. `elapsed` is seconds since engine start, `dt` seconds
    /// since the previous frame.
    pub fn advance(&mut self, state: SceneState, elapsed: f32, dt: f32) {
        if self.store.count == 0 {
            return;
        }
        transition::advance(&mut self.store, state, &self.config.approach, dt);
        motion::apply(
            &mut self.store,
            &mut self.transforms,
            state,
            &self.config.effects,
            &self.config.motion,
            elapsed,
            dt,
        );
    }

    /// Finalized transforms, one per particle, slot `i` for record `i`.
    pub fn transforms(&self) -> &[InstanceTransform] {
        &self.transforms
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn count(&self) -> usize {
        self.store.count
    }

    /// Write current store state into the output buffer without animating.
    /// Keeps the buffer valid between construction and the first step.
    fn refresh_transforms(&mut self) {
        for i in 0..self.store.count {
            self.transforms[i] = InstanceTransform {
                position: self.store.current_pos[i].to_array(),
                scale: self.store.scale[i],
                rotation: self.store.rotation[i].to_array(),
                variant: self.store.variant[i],
            };
        }
    }
}

/// Sample a half-open band, degenerating to `lo` when the band is empty.
fn band(rng: &mut impl Rng, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform in `[-half_range, half_range)`.
fn symmetric(rng: &mut impl Rng, half_range: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half_range
}
