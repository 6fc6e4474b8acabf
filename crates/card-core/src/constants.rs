use glam::Vec3;

// Shared animation tuning constants used by both web and native frontends.

// Pointer → camera
pub const POINTER_SENSITIVITY: f32 = 0.1;
pub const POINTER_CAMERA_SCALE: f32 = 5.0; // sensitivity * scale = max camera offset
pub const BACKGROUND_PARALLAX: f32 = 0.0015; // background offset per unit of pointer signal

// Camera
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 5.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_SPAWN_X: (f32, f32) = (-10.0, 10.0);
pub const PARTICLE_SPAWN_Y: (f32, f32) = (10.0, 30.0);
pub const PARTICLE_SPAWN_Z: (f32, f32) = (-5.0, 5.0);
pub const PARTICLE_FALL_STEP: f32 = 0.02; // units per nominal tick
pub const PARTICLE_FLOOR_Y: f32 = -10.0; // below this a particle is recycled
pub const PARTICLE_RECYCLE_Y: f32 = 20.0;
pub const PARTICLE_FOLLOW_CAMERA: f32 = 0.3; // share of camera.y applied to the field
pub const PARTICLE_SPIN_PER_TICK: f32 = 0.0001; // radians about +Y
pub const NOMINAL_TICK_SEC: f64 = 1.0 / 60.0;
pub const MAX_CATCHUP_TICKS: f32 = 4.0; // cap for elapsed-scaled steps after a stall

// Opening sequence (seconds)
pub const SEAL_SHRINK_SEC: f64 = 0.2;
pub const FLAP_OPEN_SEC: f64 = 1.0;
pub const FLAP_CLOSED_ANGLE: f32 = std::f32::consts::PI;
pub const CAMERA_MOVE_SEC: f64 = 1.0;
pub const CAMERA_LIFT: f32 = 3.0;
pub const CAMERA_OPEN_Z: f32 = 3.5;
pub const MESSAGE_FADE_SEC: f64 = 1.0;
pub const MESSAGE_FADE_DELAY_SEC: f64 = 0.5;

// Seed used when a caller does not supply one
pub const DEFAULT_SEED: u64 = 42;

#[inline]
pub fn camera_start_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_START)
}
