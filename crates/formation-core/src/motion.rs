//! Secondary idle motion, composed on top of the transition step.
//!
//! Formed particles float on a per-particle sine, wobble around x/z and spin
//! slowly around y. Chaos particles tumble on all three axes instead, which
//! reads as drifting debris rather than a settled ornament. Float is a pure
//! display offset written to the output buffer; it never feeds back into
//! `current_pos`, so convergence is unaffected.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::config::{MotionRanges, MotionToggles};
use crate::output::InstanceTransform;
use crate::particle::ParticleStore;
use crate::transition::SceneState;

/// Update rotations and write the finalized transforms for one group.
///
/// `out` must have exactly `store.count` entries; slot `i` always receives
/// particle `i`.
pub fn apply(
    store: &mut ParticleStore,
    out: &mut [InstanceTransform],
    state: SceneState,
    effects: &MotionToggles,
    ranges: &MotionRanges,
    elapsed: f32,
    dt: f32,
) {
    debug_assert_eq!(out.len(), store.count);
    let formed = state == SceneState::Formed;
    let amp = ranges.float_amplitude;
    let gain = ranges.wobble_gain;

    for i in 0..store.count {
        let mut rot = store.rotation[i];
        let mut pos = store.current_pos[i];

        if formed {
            if effects.wobble {
                let phase = elapsed * store.wobble_speed[i] + store.wobble_offset[i];
                rot.x += phase.sin() * gain;
                rot.z += (elapsed * store.wobble_speed[i] * 0.8 + store.wobble_offset[i]).cos()
                    * gain;
            }
            if effects.spin {
                rot.y += dt * store.rotation_speed[i].y;
            }
            if effects.floating {
                pos.y += amp * (elapsed * store.float_speed[i] + store.float_offset[i]).sin();
            }
        } else {
            rot += store.rotation_speed[i] * dt;
        }

        store.rotation[i] = rot;
        out[i] = InstanceTransform {
            position: pos.to_array(),
            scale: store.scale[i],
            rotation: rot.to_array(),
            variant: store.variant[i],
        };
    }
}

/// Circular ground path for roaming mascot groups. The group's sculpture is
/// generated in local space; the host places it at `sample(elapsed)` each
/// frame, facing along the path, bouncing as it runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
    pub start_angle: f32,
    pub y_offset: f32,
    pub bounce_amplitude: f32,
    pub bounce_frequency: f32,
    pub sway: f32,
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            radius: 28.0,
            speed: 0.3,
            start_angle: 0.0,
            y_offset: -16.0,
            bounce_amplitude: 0.3,
            bounce_frequency: 8.0,
            sway: 0.05,
        }
    }
}

/// Anchor transform for a path follower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSample {
    pub position: Vec3,
    /// Heading around y, facing the direction of travel.
    pub yaw: f32,
    /// Side-to-side run sway around z.
    pub roll: f32,
}

impl OrbitPath {
    pub fn sample(&self, elapsed: f32) -> OrbitSample {
        let t = elapsed * self.speed;
        let angle = self.start_angle + t;
        let bounce = (t * self.bounce_frequency).sin().abs() * self.bounce_amplitude;
        OrbitSample {
            position: Vec3::new(
                angle.cos() * self.radius,
                self.y_offset + bounce,
                angle.sin() * self.radius,
            ),
            yaw: -angle + TAU * 0.25,
            roll: (t * self.bounce_frequency).sin() * self.sway,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_stays_on_circle() {
        let path = OrbitPath::default();
        for i in 0..100 {
            let s = path.sample(i as f32 * 0.37);
            let r = (s.position.x * s.position.x + s.position.z * s.position.z).sqrt();
            assert!((r - path.radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_orbit_bounce_never_sinks() {
        let path = OrbitPath::default();
        for i in 0..200 {
            let s = path.sample(i as f32 * 0.11);
            assert!(s.position.y >= path.y_offset - 1e-5);
            assert!(s.position.y <= path.y_offset + path.bounce_amplitude + 1e-5);
        }
    }
}
