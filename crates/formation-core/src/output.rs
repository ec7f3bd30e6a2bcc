//! Render-facing output buffer.

/// Finalized per-particle transform: 32 bytes, `Pod` so render adapters can
/// view a `&[InstanceTransform]` as raw bytes for upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceTransform {
    pub position: [f32; 3],
    pub scale: f32,
    /// Euler rotation in radians.
    pub rotation: [f32; 3],
    /// Palette slot for the renderer's visual sub-asset.
    pub variant: u32,
}
