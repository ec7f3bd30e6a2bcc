//! Group configuration and device-tier scaling.

use log::warn;

use crate::math::sanitize;
use crate::shapes::dispatcher::Shape;
use crate::volume::BoundingVolume;

/// Palette size used when the caller supplies an empty palette.
pub const FALLBACK_PALETTE_LEN: usize = 4;

/// Sampling bands for per-particle motion parameters, drawn once at group
/// initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionRanges {
    pub wobble_speed: (f32, f32),
    pub float_speed: (f32, f32),
    /// Half-range of the per-axis tumble speed.
    pub rotation_speed: f32,
    /// Per-particle approach-rate multiplier band.
    pub pace: (f32, f32),
    pub scale: (f32, f32),
    pub float_amplitude: f32,
    pub wobble_gain: f32,
}

impl Default for MotionRanges {
    fn default() -> Self {
        Self {
            wobble_speed: (0.3, 0.8),
            float_speed: (0.3, 0.7),
            rotation_speed: 0.25,
            pace: (1.0, 1.0),
            scale: (1.0, 1.0),
            float_amplitude: 0.3,
            wobble_gain: 0.02,
        }
    }
}

/// Exponential approach rates, per transition direction. Groups converge in
/// layers when their rates differ (foliage 1.5, lights 2.0, gifts 1.2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproachRates {
    pub form: f32,
    pub disperse: f32,
}

impl ApproachRates {
    pub fn uniform(rate: f32) -> Self {
        Self {
            form: rate,
            disperse: rate,
        }
    }
}

impl Default for ApproachRates {
    fn default() -> Self {
        Self::uniform(1.5)
    }
}

/// Switches for the formed-state idle motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionToggles {
    pub floating: bool,
    pub wobble: bool,
    pub spin: bool,
}

impl Default for MotionToggles {
    fn default() -> Self {
        Self {
            floating: true,
            wobble: true,
            spin: true,
        }
    }
}

/// How a particle picks its visual variant and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VariantRule {
    /// `id % palette_len`, scale from the group's scale band.
    RoundRobin,
    /// Random palette pick, with a chance of an oversized standout.
    Oversize { chance: f32, scale: f32 },
}

impl Default for VariantRule {
    fn default() -> Self {
        Self::RoundRobin
    }
}

#[derive(Clone, Debug)]
pub struct GroupConfig {
    pub count: usize,
    pub shape: Shape,
    pub volume: BoundingVolume,
    pub palette_len: usize,
    pub motion: MotionRanges,
    pub approach: ApproachRates,
    pub effects: MotionToggles,
    pub variants: VariantRule,
}

impl GroupConfig {
    pub fn new(count: usize, shape: Shape, volume: BoundingVolume) -> Self {
        Self {
            count,
            shape,
            volume,
            palette_len: FALLBACK_PALETTE_LEN,
            motion: MotionRanges::default(),
            approach: ApproachRates::default(),
            effects: MotionToggles::default(),
            variants: VariantRule::default(),
        }
    }

    /// Correct invalid numeric fields in place of rejecting them. A degraded
    /// but running group beats a crash in a decorative system.
    pub fn sanitized(mut self) -> Self {
        self.volume = self.volume.sanitized();
        if self.palette_len == 0 {
            warn!("empty palette, substituting {FALLBACK_PALETTE_LEN}-entry fallback");
            self.palette_len = FALLBACK_PALETTE_LEN;
        }
        for rate in [&mut self.approach.form, &mut self.approach.disperse] {
            let v = sanitize(*rate);
            if v <= 0.0 {
                warn!("non-positive approach rate, using default");
                *rate = ApproachRates::default().form;
            } else {
                *rate = v;
            }
        }
        self.motion.float_amplitude = sanitize(self.motion.float_amplitude);
        self.motion.wobble_gain = sanitize(self.motion.wobble_gain);
        self
    }

    /// Scale the group for a device tier. Applied once at construction,
    /// never re-checked in the frame loop.
    pub fn for_tier(mut self, tier: DeviceTier) -> Self {
        self.count = tier.scaled_count(self.count);
        self.volume = self.volume.scaled(tier.extent_factor());
        self
    }
}

/// Coarse device capability, decided by the host at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeviceTier {
    #[default]
    Full,
    /// Constrained devices: fewer particles, tighter chaos scatter.
    Lite,
}

impl DeviceTier {
    pub fn count_factor(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Lite => 0.4,
        }
    }

    pub fn extent_factor(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Lite => 0.75,
        }
    }

    /// Never reduces a nonzero count to zero.
    pub fn scaled_count(self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        ((count as f32 * self.count_factor()) as usize).max(1)
    }
}
