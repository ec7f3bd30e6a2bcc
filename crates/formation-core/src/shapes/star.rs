//! Five-pointed star layout for the tree topper.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use crate::math::lerp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub points: u32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Depth of the star slab along z.
    pub thickness: f32,
    /// Fraction of particles filling the interior instead of the outline.
    pub fill_fraction: f32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            points: 5,
            outer_radius: 2.2,
            inner_radius: 0.9,
            thickness: 0.4,
            fill_fraction: 0.3,
        }
    }
}

/// Place a particle on (or inside) the star outline.
///
/// The outline alternates outer and inner vertices; a particle picks a random
/// edge and interpolates along it, which covers the outline densely without
/// needing the index at all.
pub fn star(_index: usize, _total: usize, p: &StarParams, rng: &mut impl Rng) -> Vec3 {
    let verts = p.points.max(2) * 2;

    let edge = rng.gen_range(0..verts);
    let next = (edge + 1) % verts;
    let vertex = |k: u32| -> (f32, f32) {
        let angle = k as f32 / verts as f32 * TAU - PI * 0.5;
        let r = if k % 2 == 0 {
            p.outer_radius
        } else {
            p.inner_radius
        };
        (r * angle.cos(), r * angle.sin())
    };
    let (x0, y0) = vertex(edge);
    let (x1, y1) = vertex(next);

    let t = rng.gen::<f32>();
    let x = lerp(x0, x1, t);
    let y = lerp(y0, y1, t);
    let z = (rng.gen::<f32>() - 0.5) * p.thickness;

    if rng.gen::<f32>() < p.fill_fraction {
        let s = rng.gen::<f32>() * 0.8;
        Vec3::new(x * s, y * s, z)
    } else {
        Vec3::new(
            x + (rng.gen::<f32>() - 0.5) * 0.15,
            y + (rng.gen::<f32>() - 0.5) * 0.15,
            z,
        )
    }
}
