use wasm_bindgen::prelude::*;

use formation_core::config::{ApproachRates, DeviceTier, GroupConfig, MotionToggles};
use formation_core::output::InstanceTransform;
use formation_core::scene::Scene;
use formation_core::shapes::dispatcher::Shape;
use formation_core::shapes::tree::TreeDims;
use formation_core::transition::SceneState;
use formation_core::volume::BoundingVolume;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Browser-facing scene wrapper. JS drives the frame loop, flips the scene
/// state from UI or gesture handlers, and uploads each group's transform
/// buffer straight out of wasm memory.
#[wasm_bindgen]
pub struct FormationWorld {
    scene: Scene,
    rng: SmallRng,
    tier: DeviceTier,
}

#[wasm_bindgen]
impl FormationWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, lite_tier: bool) -> FormationWorld {
        web_sys::console::log_1(&format!("FormationWorld created (seed {seed})").into());

        FormationWorld {
            scene: Scene::new(),
            rng: SmallRng::seed_from_u64(seed as u64),
            tier: if lite_tier {
                DeviceTier::Lite
            } else {
                DeviceTier::Full
            },
        }
    }

    /// Add a cone-family group and return its index. Unknown shape names
    /// fall back to the spiral layout.
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen]
    pub fn add_group(
        &mut self,
        shape: &str,
        count: u32,
        tree_height: f32,
        tree_radius: f32,
        chaos_extent: f32,
        palette_len: u32,
        form_rate: f32,
        disperse_rate: f32,
    ) -> usize {
        let dims = TreeDims::new(tree_height, tree_radius);
        let mut config = GroupConfig::new(
            count as usize,
            Shape::parse(shape, dims),
            BoundingVolume::cube(chaos_extent),
        );
        config.palette_len = palette_len as usize;
        config.approach = ApproachRates {
            form: form_rate,
            disperse: disperse_rate,
        };
        self.scene
            .add_group(config.for_tier(self.tier), &mut self.rng)
    }

    #[wasm_bindgen]
    pub fn set_formed(&mut self, formed: bool) {
        self.scene.set_state(if formed {
            SceneState::Formed
        } else {
            SceneState::Chaos
        });
    }

    #[wasm_bindgen]
    pub fn toggle_state(&mut self) {
        self.scene.toggle();
    }

    #[wasm_bindgen]
    pub fn is_formed(&self) -> bool {
        self.scene.state() == SceneState::Formed
    }

    /// Advance one frame; returns the simulation time spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        self.scene.step(dt);
        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn group_count(&self) -> usize {
        self.scene.groups().len()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self, group: usize) -> usize {
        self.scene.group(group).map_or(0, |g| g.count())
    }

    /// Pointer to the group's transform buffer inside wasm memory.
    #[wasm_bindgen]
    pub fn transforms_ptr(&self, group: usize) -> *const f32 {
        self.scene.group(group).map_or(std::ptr::null(), |g| {
            bytemuck::cast_slice::<InstanceTransform, f32>(g.transforms()).as_ptr()
        })
    }

    #[wasm_bindgen]
    pub fn transforms_byte_len(&self, group: usize) -> usize {
        self.scene.group(group).map_or(0, |g| {
            g.transforms().len() * std::mem::size_of::<InstanceTransform>()
        })
    }

    #[wasm_bindgen]
    pub fn set_effects(&mut self, group: usize, floating: bool, wobble: bool, spin: bool) {
        if let Some(g) = self.scene.group_mut(group) {
            g.set_effects(MotionToggles {
                floating,
                wobble,
                spin,
            });
        }
    }

    /// Resample every group from a fresh seed.
    #[wasm_bindgen]
    pub fn reinitialize(&mut self, seed: u32) {
        self.rng = SmallRng::seed_from_u64(seed as u64);
        self.scene.reinitialize(&mut self.rng);
    }
}
