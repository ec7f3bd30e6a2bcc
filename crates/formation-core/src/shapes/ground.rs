//! Snow-field ground layout: a terrain-following annulus with an optional
//! engraved inscription and the dark groove particles inside its strokes.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::Rng;

use crate::shapes::glyph::{stroke_cells, GlyphMetrics};

/// Procedural height field: one valley, one hill, small rolling bumps and a
/// low-frequency swell over a flat base.
pub fn terrain_height(x: f32, z: f32) -> f32 {
    let base = -20.0;

    let (vx, vz) = (x - 30.0, z + 20.0);
    let valley_dist = (vx * vx + vz * vz).sqrt();
    let valley = if valley_dist < 25.0 {
        -3.0 * (valley_dist / 25.0 * PI * 0.5).cos()
    } else {
        0.0
    };

    let (hx, hz) = (x + 40.0, z - 30.0);
    let hill_dist = (hx * hx + hz * hz).sqrt();
    let hill = if hill_dist < 30.0 {
        4.0 * (hill_dist / 30.0 * PI * 0.5).cos()
    } else {
        0.0
    };

    let small_hills = (x * 0.08).sin() * (z * 0.08).cos() * 1.5
        + (x * 0.15 + 1.0).sin() * (z * 0.12 + 2.0).cos() * 0.8;
    let swell = (x * 0.05).sin() * (z * 0.05).sin() * 2.0 + (x * 0.03 + z * 0.04).cos() * 1.5;

    base + valley + hill + small_hills + swell
}

/// Text stamped into the ground plane. Cell positions are precomputed once;
/// per-particle queries scan them (a few hundred cells at most).
#[derive(Clone, Debug)]
pub struct Engraving {
    pub stroke_width: f32,
    pub depth: f32,
    cells: Vec<(f32, f32)>,
}

impl Engraving {
    /// `origin` is the (x, z) of the first character's top-left cell.
    pub fn new(text: &str, origin: (f32, f32)) -> Self {
        let cells = stroke_cells(text, &GlyphMetrics::default())
            .into_iter()
            .map(|(x, down)| (origin.0 + x, origin.1 + down))
            .collect();
        Self {
            stroke_width: 0.5,
            depth: 1.2,
            cells,
        }
    }

    pub fn cells(&self) -> &[(f32, f32)] {
        &self.cells
    }

    /// Depression at `(x, z)`: `-depth` on a stroke, `0` elsewhere.
    pub fn depth_at(&self, x: f32, z: f32) -> f32 {
        for &(cx, cz) in &self.cells {
            if (x - cx).abs() < self.stroke_width && (z - cz).abs() < self.stroke_width {
                return -self.depth;
            }
        }
        0.0
    }
}

#[derive(Clone, Debug)]
pub struct GroundParams {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub y_jitter: f32,
    pub engraving: Option<Engraving>,
}

impl Default for GroundParams {
    fn default() -> Self {
        Self {
            inner_radius: 25.0,
            outer_radius: 105.0,
            y_jitter: 0.5,
            engraving: None,
        }
    }
}

/// Terrain-following point in the annulus, depressed where the engraving
/// crosses it.
pub fn ground(_index: usize, _total: usize, p: &GroundParams, rng: &mut impl Rng) -> Vec3 {
    let radius = p.inner_radius + rng.gen::<f32>() * (p.outer_radius - p.inner_radius).max(0.0);
    let angle = rng.gen::<f32>() * TAU;
    let x = angle.cos() * radius;
    let z = angle.sin() * radius;
    let engraved = p
        .engraving
        .as_ref()
        .map_or(0.0, |e| e.depth_at(x, z));
    let y = terrain_height(x, z) + engraved + (rng.gen::<f32>() - 0.5) * p.y_jitter;
    Vec3::new(x, y, z)
}

/// Dark accent particles seated in the engraved strokes, below the snow.
#[derive(Clone, Debug)]
pub struct GrooveLayout {
    points: Vec<Vec3>,
}

impl GrooveLayout {
    pub const POINTS_PER_CELL: usize = 6;

    pub fn new(engraving: &Engraving, rng: &mut impl Rng) -> Self {
        let mut points = Vec::with_capacity(engraving.cells().len() * Self::POINTS_PER_CELL);
        for &(cx, cz) in engraving.cells() {
            for _ in 0..Self::POINTS_PER_CELL {
                let x = cx + (rng.gen::<f32>() - 0.5) * 0.7;
                let z = cz + (rng.gen::<f32>() - 0.5) * 0.7;
                let y = terrain_height(x, z) - 1.0 + rng.gen::<f32>() * 0.3;
                points.push(Vec3::new(x, y, z));
            }
        }
        Self { points }
    }

    pub fn preferred_count(&self) -> usize {
        self.points.len()
    }

    /// Target for slot `index`, cycling so any count is valid.
    pub fn generate(&self, index: usize) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points[index % self.points.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_terrain_is_finite_over_field() {
        for i in -20..20 {
            for j in -20..20 {
                let h = terrain_height(i as f32 * 5.0, j as f32 * 5.0);
                assert!(h.is_finite());
                assert!((-30.0..0.0).contains(&h), "implausible height {h}");
            }
        }
    }

    #[test]
    fn test_engraving_depresses_strokes_only() {
        let e = Engraving::new("1", (0.0, 0.0));
        assert!(!e.cells().is_empty());
        let &(cx, cz) = &e.cells()[0];
        assert_eq!(e.depth_at(cx, cz), -1.2);
        assert_eq!(e.depth_at(cx + 50.0, cz), 0.0);
    }

    #[test]
    fn test_groove_points_sit_below_terrain() {
        let mut rng = SmallRng::seed_from_u64(2);
        let e = Engraving::new("7", (-10.0, -40.0));
        let groove = GrooveLayout::new(&e, &mut rng);
        assert_eq!(
            groove.preferred_count(),
            e.cells().len() * GrooveLayout::POINTS_PER_CELL
        );
        for i in 0..groove.preferred_count() {
            let p = groove.generate(i);
            assert!(p.y < terrain_height(p.x, p.z));
        }
    }
}
