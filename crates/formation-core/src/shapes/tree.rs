//! Cone-family layout generators for the tree silhouette.
//!
//! All five share the tapered-cone radius law `rho(t) = R * (1 - taper * t)`
//! with `t` the normalized height. Generated points are clamped to the cone
//! bounds: horizontal distance at most `R`, height within `[-H/2, H/2]`.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::math::sanitize;

/// Silhouette constants shared by the cone-family generators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeDims {
    pub height: f32,
    pub radius: f32,
    /// Fraction of the base radius lost from bottom to top.
    pub taper: f32,
}

impl Default for TreeDims {
    fn default() -> Self {
        Self {
            height: 32.0,
            radius: 14.0,
            taper: 0.95,
        }
    }
}

impl TreeDims {
    pub fn new(height: f32, radius: f32) -> Self {
        Self {
            height: sanitize(height).max(0.0),
            radius: sanitize(radius).max(0.0),
            taper: 0.95,
        }
    }

    /// Cone radius at normalized height `t` in `[0, 1]`.
    #[inline]
    pub fn ring_radius(&self, t: f32) -> f32 {
        self.radius * (1.0 - self.taper * t.clamp(0.0, 1.0))
    }

    /// Pull a point back inside the silhouette bounds.
    fn clamp_point(&self, p: Vec3) -> Vec3 {
        let half = self.height * 0.5;
        let horiz = (p.x * p.x + p.z * p.z).sqrt();
        let (x, z) = if horiz > self.radius && horiz > 0.0 {
            let s = self.radius / horiz;
            (p.x * s, p.z * s)
        } else {
            (p.x, p.z)
        };
        Vec3::new(x, p.y.clamp(-half, half), z)
    }
}

/// Spiral band around the cone, optionally with interior scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralParams {
    pub dims: TreeDims,
    pub turns: f32,
    /// Vertical thickness of the spiral band.
    pub band: f32,
    /// Fraction of particles placed inside the cone instead of on the band.
    pub scatter: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            dims: TreeDims::default(),
            turns: 5.0,
            band: 0.5,
            scatter: 0.0,
        }
    }
}

impl SpiralParams {
    pub fn foliage(dims: TreeDims) -> Self {
        Self {
            dims,
            turns: 5.0,
            band: 1.8,
            scatter: 0.3,
        }
    }
}

/// Dense spiral winding up the cone. Height is index-driven so particle 0
/// sits at the bottom and particle `total - 1` at the tip.
pub fn spiral(index: usize, total: usize, p: &SpiralParams, rng: &mut impl Rng) -> Vec3 {
    let total = total.max(1);
    let t = index as f32 / total as f32;
    let y = t * p.dims.height - p.dims.height * 0.5;
    let ring = p.dims.ring_radius(t);

    let point = if p.scatter > 0.0 && rng.gen::<f32>() < p.scatter {
        // off-spiral fill inside the cone at this height
        let theta = rng.gen::<f32>() * TAU;
        let r = ring * rng.gen::<f32>() * 0.7;
        let noise = 0.5;
        Vec3::new(
            r * theta.cos() + (rng.gen::<f32>() - 0.5) * noise,
            y,
            r * theta.sin() + (rng.gen::<f32>() - 0.5) * noise,
        )
    } else {
        let theta = t * p.turns * TAU + (rng.gen::<f32>() - 0.5) * 0.3;
        let r = ring * rng.gen_range(0.85..1.0f32);
        let noise = (rng.gen::<f32>() - 0.5) * 0.2;
        Vec3::new(
            r * theta.cos() + noise,
            y + (rng.gen::<f32>() - 0.5) * p.band,
            r * theta.sin() + noise,
        )
    };
    p.dims.clamp_point(point)
}

/// Plain cone surface-to-interior fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeParams {
    pub dims: TreeDims,
    /// Scales the disk-uniform radius; 1.0 fills the full cross section.
    pub fill: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            dims: TreeDims::default(),
            fill: 1.0,
        }
    }
}

/// Random height, point uniform inside the disk at that height.
pub fn cone(_index: usize, _total: usize, p: &ConeParams, rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen::<f32>();
    let y = t * p.dims.height - p.dims.height * 0.5;
    let ring = p.dims.ring_radius(t);
    let theta = rng.gen::<f32>() * TAU;
    // sqrt makes the disk sampling area-uniform instead of rim-biased
    let r = ring * rng.gen::<f32>().sqrt() * p.fill;
    p.dims.clamp_point(Vec3::new(r * theta.cos(), y, r * theta.sin()))
}

/// Volumetric fill: radius uniform in `[0, rho]`, so density rises toward
/// the axis. Distinct from `cone`, which covers the cross section evenly.
pub fn random_volume(_index: usize, _total: usize, dims: &TreeDims, rng: &mut impl Rng) -> Vec3 {
    let t = rng.gen::<f32>();
    let y = t * dims.height - dims.height * 0.5;
    let ring = dims.ring_radius(t);
    let theta = rng.gen::<f32>() * TAU;
    let r = rng.gen::<f32>() * ring;
    dims.clamp_point(Vec3::new(r * theta.cos(), y, r * theta.sin()))
}

/// Discrete horizontal rings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayeredParams {
    pub dims: TreeDims,
    pub layers: usize,
}

impl Default for LayeredParams {
    fn default() -> Self {
        Self {
            dims: TreeDims::default(),
            layers: 5,
        }
    }
}

/// Index assigns the layer; particles spread evenly by angle within it.
pub fn layered(index: usize, total: usize, p: &LayeredParams, rng: &mut impl Rng) -> Vec3 {
    let total = total.max(1);
    let layers = p.layers.max(1);
    let layer = (((index as f32 / total as f32) * layers as f32) as usize).min(layers - 1);
    let layer_span = (layers - 1).max(1) as f32;
    let layer_y = -p.dims.height * 0.5 + (layer as f32 / layer_span) * p.dims.height;
    let ring = p.dims.radius * (1.0 - p.dims.taper * layer as f32 / layers as f32);

    let per_layer = (total + layers - 1) / layers;
    let step = TAU / per_layer.max(1) as f32;
    let angle = (index % per_layer.max(1)) as f32 * step + rng.gen::<f32>() * 0.5;
    let r = ring * (0.3 + rng.gen::<f32>() * 0.7);
    p.dims.clamp_point(Vec3::new(
        r * angle.cos(),
        layer_y + (rng.gen::<f32>() - 0.5) * 2.0,
        r * angle.sin(),
    ))
}

/// Tight blobs around a few cluster centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClusteredParams {
    pub dims: TreeDims,
    pub clusters: usize,
}

impl Default for ClusteredParams {
    fn default() -> Self {
        Self {
            dims: TreeDims::default(),
            clusters: 3,
        }
    }
}

/// Each particle picks a cluster center by height band and stays close to it.
pub fn clustered(_index: usize, _total: usize, p: &ClusteredParams, rng: &mut impl Rng) -> Vec3 {
    let clusters = p.clusters.max(1);
    let cluster = rng.gen_range(0..clusters);
    let span = (clusters - 1).max(1) as f32;
    let cluster_y = -p.dims.height * 0.5 + (cluster as f32 / span) * p.dims.height;
    let ring = p.dims.radius * (1.0 - p.dims.taper * cluster as f32 / clusters as f32);
    let angle = rng.gen::<f32>() * TAU;
    let r = rng.gen::<f32>() * ring * 0.5;
    p.dims.clamp_point(Vec3::new(
        r * angle.cos(),
        cluster_y + (rng.gen::<f32>() - 0.5) * 4.0,
        r * angle.sin(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_ring_radius_tapers() {
        let dims = TreeDims::default();
        assert_eq!(dims.ring_radius(0.0), 14.0);
        assert!(dims.ring_radius(1.0) < 1.0);
        assert!(dims.ring_radius(0.5) < dims.ring_radius(0.25));
    }

    #[test]
    fn test_clamp_point_respects_bounds() {
        let dims = TreeDims::default();
        let p = dims.clamp_point(Vec3::new(20.0, 40.0, 0.0));
        assert!((p.x - 14.0).abs() < 1e-5);
        assert_eq!(p.y, 16.0);
    }

    #[test]
    fn test_single_particle_no_divide_by_zero() {
        let mut rng = SmallRng::seed_from_u64(1);
        let p = spiral(0, 0, &SpiralParams::default(), &mut rng);
        assert!(p.is_finite());
        let p = layered(0, 1, &LayeredParams::default(), &mut rng);
        assert!(p.is_finite());
    }
}
