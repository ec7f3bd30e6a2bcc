//! Top-level scene: shared state signal, clock and the group list.

use rand::Rng;

use crate::config::GroupConfig;
use crate::group::ParticleGroup;
use crate::math::sanitize;
use crate::transition::SceneState;

/// Owns every group plus the one signal they all follow. The render loop
/// calls [`Scene::step`] once per tick and reads each group's transforms.
pub struct Scene {
    state: SceneState,
    elapsed: f32,
    groups: Vec<ParticleGroup>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_state(SceneState::default())
    }

    pub fn with_state(state: SceneState) -> Self {
        Self {
            state,
            elapsed: 0.0,
            groups: Vec::new(),
        }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Hosts may flip the signal between any two frames; it is only read at
    /// the start of the next step.
    pub fn set_state(&mut self, state: SceneState) {
        self.state = state;
    }

    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    /// Seconds of simulated time since the scene was created.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn add_group(&mut self, config: GroupConfig, rng: &mut impl Rng) -> usize {
        self.groups.push(ParticleGroup::new(config, rng));
        self.groups.len() - 1
    }

    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&ParticleGroup> {
        self.groups.get(index)
    }

    pub fn group_mut(&mut self, index: usize) -> Option<&mut ParticleGroup> {
        self.groups.get_mut(index)
    }

    /// Resample every group under its current configuration, for hosts that
    /// reload with a fresh seed.
    pub fn reinitialize(&mut self, rng: &mut impl Rng) {
        for group in &mut self.groups {
            group.regenerate(rng);
        }
    }

    /// Advance every group by one frame. The state signal is sampled once
    /// here so all groups agree on the goal for this frame.
    pub fn step(&mut self, dt: f32) {
        let dt = sanitize(dt).max(0.0);
        self.elapsed += dt;
        let state = self.state;
        for group in &mut self.groups {
            group.advance(state, self.elapsed, dt);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
