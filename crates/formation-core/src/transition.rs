//! Two-state transition model.
//!
//! Every particle chases the goal its group's scene state selects, with an
//! exponential-decay step whose factor is clamped so it can never overshoot.
//! Flipping the state mid-flight just swaps the goal; the same step runs in
//! both directions.

use glam::Vec3;

use crate::config::ApproachRates;
use crate::particle::ParticleStore;

/// Shared scene signal. Owned by the host, read once per frame per group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneState {
    Chaos,
    #[default]
    Formed,
}

impl SceneState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Chaos => Self::Formed,
            Self::Formed => Self::Chaos,
        }
    }
}

/// Distance under which a particle snaps onto its goal and stops updating.
pub const SNAP_EPSILON: f32 = 1e-3;

/// One exponential approach step of `current` toward `goal`.
///
/// The interpolation factor `dt * rate` is clamped to `[0, 1]`, so per-axis
/// distance to a held goal decreases monotonically and a huge step lands
/// exactly on the goal instead of past it.
#[inline]
pub fn approach(current: Vec3, goal: Vec3, rate: f32, dt: f32) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }
    let k = (dt * rate).clamp(0.0, 1.0);
    let next = current.lerp(goal, k);
    if next.distance_squared(goal) < SNAP_EPSILON * SNAP_EPSILON {
        goal
    } else {
        next
    }
}

/// Advance every particle toward the state-selected goal.
pub fn advance(store: &mut ParticleStore, state: SceneState, rates: &ApproachRates, dt: f32) {
    let (rate, formed) = match state {
        SceneState::Formed => (rates.form, true),
        SceneState::Chaos => (rates.disperse, false),
    };
    for i in 0..store.count {
        let goal = if formed {
            store.target_pos[i]
        } else {
            store.chaos_pos[i]
        };
        store.current_pos[i] = approach(store.current_pos[i], goal, rate * store.pace[i], dt);
    }
}
