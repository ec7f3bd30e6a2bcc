//! Nebula ring band surrounding the sculpture.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HaloParams {
    /// Inner edge of the band.
    pub inner_distance: f32,
    /// Radial width of the band.
    pub spread: f32,
    pub half_height: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub height_frequency: f32,
}

impl Default for HaloParams {
    fn default() -> Self {
        Self {
            inner_distance: 35.0,
            spread: 60.0,
            half_height: 40.0,
            wave_amplitude: 8.0,
            wave_frequency: 2.0,
            height_frequency: 0.05,
        }
    }
}

/// Ring band with a radial wave so the cloud undulates instead of forming a
/// clean cylinder.
pub fn halo(_index: usize, _total: usize, p: &HaloParams, rng: &mut impl Rng) -> Vec3 {
    let angle = rng.gen::<f32>() * TAU;
    let height = (rng.gen::<f32>() - 0.5) * 2.0 * p.half_height;
    let distance = p.inner_distance + rng.gen::<f32>() * p.spread;
    let wave = (angle * p.wave_frequency + height * p.height_frequency).sin() * p.wave_amplitude;
    let r = distance + wave;
    Vec3::new(angle.cos() * r, height, angle.sin() * r)
}
