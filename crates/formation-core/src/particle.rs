use glam::Vec3;

/// SoA particle storage. Every vector has length `count`; slot `i` in one
/// array always describes the same particle as slot `i` in the others.
///
/// `chaos_pos` and `target_pos` are fixed at initialization; only
/// `current_pos` and `rotation` change per frame.
pub struct ParticleStore {
    pub count: usize,
    /// Scatter position inside the group's bounding volume.
    pub chaos_pos: Vec<Vec3>,
    /// Formed position from the group's layout generator.
    pub target_pos: Vec<Vec3>,
    pub current_pos: Vec<Vec3>,
    /// Euler rotation, accumulated by the secondary-motion pass.
    pub rotation: Vec<Vec3>,
    /// Per-axis tumble speed in radians per second.
    pub rotation_speed: Vec<Vec3>,
    pub wobble_offset: Vec<f32>,
    pub wobble_speed: Vec<f32>,
    pub float_offset: Vec<f32>,
    pub float_speed: Vec<f32>,
    /// Per-particle approach-rate multiplier for staggered convergence.
    pub pace: Vec<f32>,
    pub scale: Vec<f32>,
    pub variant: Vec<u32>,
}

impl ParticleStore {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            chaos_pos: vec![Vec3::ZERO; count],
            target_pos: vec![Vec3::ZERO; count],
            current_pos: vec![Vec3::ZERO; count],
            rotation: vec![Vec3::ZERO; count],
            rotation_speed: vec![Vec3::ZERO; count],
            wobble_offset: vec![0.0; count],
            wobble_speed: vec![0.0; count],
            float_offset: vec![0.0; count],
            float_speed: vec![0.0; count],
            pace: vec![1.0; count],
            scale: vec![1.0; count],
            variant: vec![0u32; count],
        }
    }
}
