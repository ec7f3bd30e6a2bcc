//! Ellipsoid-cluster sculptures for particle figures (mascots, snowmen).
//!
//! A figure is a list of clusters, each an ellipsoid filled, shelled or
//! surfaced with particles and tagged with a variant for coloring. The
//! resulting point list is frozen into a layout the dispatcher cycles over.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClusterStyle {
    /// Even interior fill.
    Solid,
    /// Loose shell just outside the radius, for a fluffy silhouette.
    Fluff,
    /// Fibonacci-lattice surface with slight radial roughness.
    Surface,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cluster {
    pub center: Vec3,
    pub radii: Vec3,
    pub count: usize,
    /// Palette slot the cluster's particles render as.
    pub variant: u32,
    pub style: ClusterStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sculpture {
    pub clusters: Vec<Cluster>,
}

impl Sculpture {
    pub fn point_count(&self) -> usize {
        self.clusters.iter().map(|c| c.count).sum()
    }

    /// Sample every cluster into a flat `(position, variant)` list.
    pub fn points(&self, rng: &mut impl Rng) -> Vec<(Vec3, u32)> {
        let mut out = Vec::with_capacity(self.point_count());
        for cluster in &self.clusters {
            for i in 0..cluster.count {
                let p = match cluster.style {
                    ClusterStyle::Solid => {
                        let dir = unit_dir(rng);
                        cluster.center + dir * cluster.radii * rng.gen::<f32>().cbrt()
                    }
                    ClusterStyle::Fluff => {
                        let dir = unit_dir(rng);
                        cluster.center + dir * cluster.radii * rng.gen_range(0.9..1.2f32)
                    }
                    ClusterStyle::Surface => {
                        let phi = (-1.0 + 2.0 * i as f32 / cluster.count.max(1) as f32)
                            .clamp(-1.0, 1.0)
                            .acos();
                        let theta = (cluster.count as f32 * PI).sqrt() * phi;
                        let dir = Vec3::new(
                            theta.cos() * phi.sin(),
                            theta.sin() * phi.sin(),
                            phi.cos(),
                        );
                        cluster.center + dir * cluster.radii * rng.gen_range(0.9..1.1f32)
                    }
                };
                out.push((p, cluster.variant));
            }
        }
        out
    }
}

fn unit_dir(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Frozen sculpture point list.
#[derive(Clone, Debug)]
pub struct SculptureLayout {
    points: Vec<(Vec3, u32)>,
}

impl SculptureLayout {
    pub fn new(sculpture: &Sculpture, rng: &mut impl Rng) -> Self {
        Self {
            points: sculpture.points(rng),
        }
    }

    pub fn preferred_count(&self) -> usize {
        self.points.len()
    }

    /// Target for slot `index`, cycling so any count is valid.
    pub fn generate(&self, index: usize) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points[index % self.points.len()].0
    }

    /// Variant the sculpture assigns to slot `index`, if any.
    pub fn variant(&self, index: usize) -> Option<u32> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points[index % self.points.len()].1)
    }
}
