// Host-side tests for tuning constants and their relationships.

use card_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_bounds_are_consistent() {
    // Recycled particles land inside the spawn band
    assert!(PARTICLE_RECYCLE_Y >= PARTICLE_SPAWN_Y.0 && PARTICLE_RECYCLE_Y <= PARTICLE_SPAWN_Y.1);
    assert!(PARTICLE_FLOOR_Y < PARTICLE_SPAWN_Y.0);
    assert!(PARTICLE_FALL_STEP > 0.0);
    assert!(PARTICLE_COUNT > 0);
    assert!(MAX_CATCHUP_TICKS >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_camera_range_is_half_a_unit() {
    assert!((POINTER_SENSITIVITY * POINTER_CAMERA_SCALE - 0.5).abs() < 1e-6);
    assert!(BACKGROUND_PARALLAX > 0.0 && BACKGROUND_PARALLAX < 0.01);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opening_schedule_relationships() {
    // The seal is gone well before the flap settles
    assert!(SEAL_SHRINK_SEC < FLAP_OPEN_SEC);
    // The message starts fading while the camera is still moving
    assert!(MESSAGE_FADE_DELAY_SEC < CAMERA_MOVE_SEC);
    assert!(CAMERA_OPEN_Z < CAMERA_START[2]);
    assert!(CAMERA_OPEN_Z > CAMERA_ZNEAR);
}

#[test]
fn default_params_validate() {
    assert_eq!(CardParams::default().validate(), Ok(()));
    let seq = CardSequencer::new(&SequenceParams::default(), CAMERA_START[2]).unwrap();
    assert!((seq.timeline().total_duration() - 1.5).abs() < 1e-9);
}

#[test]
fn camera_defaults_and_resize() {
    let mut cam = Camera::default();
    assert_eq!(cam.eye, camera_start_vec3());
    assert!((cam.fovy_radians - CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);
    cam.set_viewport(1920.0, 1080.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_viewport(1920.0, 0.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    // The origin sits in front of the default camera
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    assert!((clip.x / clip.w).abs() < 1e-6 && (clip.y / clip.w).abs() < 1e-6);
}

#[test]
fn blend_names_parse() {
    assert_eq!(CameraBlend::from_str("sum"), Some(CameraBlend::Sum));
    assert_eq!(
        CameraBlend::from_str("Suppress"),
        Some(CameraBlend::SuppressPointer)
    );
    assert_eq!(CameraBlend::from_str("jitter"), None);
}
