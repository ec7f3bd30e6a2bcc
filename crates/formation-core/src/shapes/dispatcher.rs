//! Shape selection: one `generate` entry point over all layout generators.

use glam::Vec3;
use log::warn;
use rand::Rng;

use crate::shapes::glyph::LetteringLayout;
use crate::shapes::ground::{ground, GroundParams, GrooveLayout};
use crate::shapes::halo::{halo, HaloParams};
use crate::shapes::sculpt::SculptureLayout;
use crate::shapes::star::{star, StarParams};
use crate::shapes::tree::{
    clustered, cone, layered, random_volume, spiral, ClusteredParams, ConeParams, LayeredParams,
    SpiralParams, TreeDims,
};

/// Layout a group's target positions follow.
#[derive(Clone, Debug)]
pub enum Shape {
    Spiral(SpiralParams),
    Cone(ConeParams),
    Random(TreeDims),
    Layered(LayeredParams),
    Clustered(ClusteredParams),
    Star(StarParams),
    Halo(HaloParams),
    Ground(GroundParams),
    Groove(GrooveLayout),
    Lettering(LetteringLayout),
    Sculpture(SculptureLayout),
}

impl Default for Shape {
    fn default() -> Self {
        Self::Spiral(SpiralParams::default())
    }
}

impl Shape {
    /// Target position for particle `index` of `total`.
    ///
    /// Deterministic for a given `(index, total)` and RNG state; `total` is
    /// clamped to at least 1 inside every generator.
    pub fn generate(&self, index: usize, total: usize, rng: &mut impl Rng) -> Vec3 {
        match self {
            Self::Spiral(p) => spiral(index, total, p, rng),
            Self::Cone(p) => cone(index, total, p, rng),
            Self::Random(dims) => random_volume(index, total, dims, rng),
            Self::Layered(p) => layered(index, total, p, rng),
            Self::Clustered(p) => clustered(index, total, p, rng),
            Self::Star(p) => star(index, total, p, rng),
            Self::Halo(p) => halo(index, total, p, rng),
            Self::Ground(p) => ground(index, total, p, rng),
            Self::Groove(layout) => layout.generate(index),
            Self::Lettering(layout) => layout.generate(index, rng),
            Self::Sculpture(layout) => layout.generate(index),
        }
    }

    /// Variant the shape itself dictates for `index`, if any. Sculptures
    /// color their particles; every other shape leaves it to the group rule.
    pub fn variant_hint(&self, index: usize) -> Option<u32> {
        match self {
            Self::Sculpture(layout) => layout.variant(index),
            _ => None,
        }
    }

    /// Natural particle count for point-list shapes.
    pub fn preferred_count(&self) -> Option<usize> {
        match self {
            Self::Groove(layout) => Some(layout.preferred_count()),
            Self::Lettering(layout) => Some(layout.preferred_count()),
            Self::Sculpture(layout) => Some(layout.preferred_count()),
            _ => None,
        }
    }

    /// Map a config-supplied name onto a cone-family shape. Unknown names
    /// fall back to the spiral rather than yielding a degenerate layout.
    pub fn parse(name: &str, dims: TreeDims) -> Self {
        match name {
            "spiral" => Self::Spiral(SpiralParams {
                dims,
                ..SpiralParams::default()
            }),
            "cone" => Self::Cone(ConeParams { dims, fill: 1.0 }),
            "random" => Self::Random(dims),
            "layered" => Self::Layered(LayeredParams {
                dims,
                ..LayeredParams::default()
            }),
            "clustered" => Self::Clustered(ClusteredParams {
                dims,
                ..ClusteredParams::default()
            }),
            other => {
                warn!("unknown shape {other:?}, falling back to spiral");
                Self::Spiral(SpiralParams {
                    dims,
                    ..SpiralParams::default()
                })
            }
        }
    }
}
