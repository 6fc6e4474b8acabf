use crate::state::Camera;
use glam::Vec2;

/// The renderer-side surface the frame driver talks to each tick.
///
/// Implementations own the actual scene graph (geometry, textures, lights)
/// and present it on `render`. The background and the seal may legitimately
/// be absent (not loaded yet, or already removed); the driver checks before
/// touching them.
pub trait Scene {
    fn has_background(&self) -> bool;
    /// Texture-coordinate shift of the background image.
    fn set_background_offset(&mut self, offset: Vec2);

    fn has_seal(&self) -> bool;
    fn set_seal_scale(&mut self, scale: f32);
    /// Drop the seal from the scene for good.
    fn remove_seal(&mut self);

    /// Flap rotation about X in radians; 0 is fully open.
    fn set_flap_rotation(&mut self, angle: f32);
    fn set_message_opacity(&mut self, opacity: f32);

    /// Particle positions (flat xyz) plus the transform of the whole field.
    fn set_particles(&mut self, positions: &[f32], offset_y: f32, rotation_y: f32);

    fn render(&mut self, camera: &Camera);
}
