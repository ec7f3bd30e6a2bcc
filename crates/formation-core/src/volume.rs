//! Bounding volumes for chaos scatter positions.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::math::sanitize;

/// Volume a particle's chaos position is sampled from, uniformly by interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundingVolume {
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
}

impl BoundingVolume {
    /// Axis-aligned cube with the given half extent on every axis.
    pub fn cube(half_extent: f32) -> Self {
        Self::Cuboid {
            half_extents: Vec3::splat(half_extent),
        }
    }

    /// Uniform sample inside the volume.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        match *self {
            Self::Cuboid { half_extents } => Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * half_extents.x,
                (rng.gen::<f32>() - 0.5) * 2.0 * half_extents.y,
                (rng.gen::<f32>() - 0.5) * 2.0 * half_extents.z,
            ),
            Self::Sphere { radius } => {
                // cbrt corrects the radial density so the interior fills evenly
                let theta = rng.gen::<f32>() * TAU;
                let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
                let r = rng.gen::<f32>().cbrt() * radius;
                Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                )
            }
        }
    }

    /// Same volume with every extent multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        match *self {
            Self::Cuboid { half_extents } => Self::Cuboid {
                half_extents: half_extents * factor,
            },
            Self::Sphere { radius } => Self::Sphere {
                radius: radius * factor,
            },
        }
    }

    /// Largest distance from the origin a sample can reach.
    pub fn max_extent(&self) -> f32 {
        match *self {
            Self::Cuboid { half_extents } => half_extents.length(),
            Self::Sphere { radius } => radius,
        }
    }

    /// Clamp degenerate extents: non-finite becomes zero, negative becomes zero.
    pub fn sanitized(self) -> Self {
        match self {
            Self::Cuboid { half_extents } => Self::Cuboid {
                half_extents: Vec3::new(
                    sanitize(half_extents.x).max(0.0),
                    sanitize(half_extents.y).max(0.0),
                    sanitize(half_extents.z).max(0.0),
                ),
            },
            Self::Sphere { radius } => Self::Sphere {
                radius: sanitize(radius).max(0.0),
            },
        }
    }
}
