// Host-side tests for the card opening sequence.

use card_core::*;

fn sequencer() -> CardSequencer {
    CardSequencer::new(&SequenceParams::default(), CAMERA_START[2]).unwrap()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn untriggered_sequencer_reports_initial_values() {
    let mut seq = sequencer();
    for now in [0.0, 1.0, 100.0] {
        let v = seq.current_values(now);
        assert_eq!(v.seal_scale, 1.0);
        assert!(!v.seal_removed);
        assert_eq!(v.flap_rotation, FLAP_CLOSED_ANGLE);
        assert_eq!(v.camera_lift, 0.0);
        assert_eq!(v.camera_z, CAMERA_START[2]);
        assert_eq!(v.message_opacity, 0.0);
    }
    assert_eq!(seq.state(), CardState::Closed);
}

#[test]
fn trigger_is_idempotent() {
    let mut once = sequencer();
    assert!(once.trigger(0.0));

    let mut twice = sequencer();
    assert!(twice.trigger(0.0));
    assert!(!twice.trigger(0.3));

    assert_eq!(twice.started_at(), Some(0.0));
    assert_eq!(twice.state(), once.state());
    for now in [0.05, 0.2, 0.6, 1.0, 1.5, 2.0] {
        assert_eq!(once.current_values(now), twice.current_values(now));
        assert_eq!(once.state(), twice.state());
    }
}

#[test]
fn early_query_shows_partial_seal_and_hidden_message() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    let v = seq.current_values(0.05);
    assert!(v.seal_scale > 0.0 && v.seal_scale < 1.0, "seal={}", v.seal_scale);
    // 0.05 / 0.2 = 0.25 progress; quad in-out gives 0.125
    assert!(approx(v.seal_scale, 0.875));
    assert!(!v.seal_removed);
    assert_eq!(v.message_opacity, 0.0);
    assert_eq!(seq.state(), CardState::Opening);
}

#[test]
fn everything_settles_by_one_and_a_half_seconds() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    let v = seq.current_values(1.5);
    assert_eq!(v.seal_scale, 0.0);
    assert!(v.seal_removed);
    assert_eq!(v.flap_rotation, 0.0);
    assert_eq!(v.camera_lift, CAMERA_LIFT);
    assert_eq!(v.camera_z, CAMERA_OPEN_Z);
    assert_eq!(v.message_opacity, 1.0);
    assert_eq!(seq.state(), CardState::Open);

    // Open is terminal
    assert!(!seq.trigger(2.0));
    assert_eq!(seq.state(), CardState::Open);
    assert_eq!(seq.current_values(50.0), v);
}

#[test]
fn state_stays_opening_until_last_track_finishes() {
    let mut seq = sequencer();
    seq.trigger(10.0);
    seq.current_values(11.2);
    assert_eq!(seq.state(), CardState::Opening);
    seq.current_values(11.5);
    assert_eq!(seq.state(), CardState::Open);
}

#[test]
fn seal_is_removed_after_its_shrink() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    assert!(!seq.current_values(0.19).seal_removed);
    assert!(seq.current_values(0.2).seal_removed);
}

#[test]
fn message_waits_for_its_delay() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    assert_eq!(seq.current_values(0.5).message_opacity, 0.0);
    let mid = seq.current_values(1.0).message_opacity;
    assert!(approx(mid, 0.5), "message at midpoint = {mid}");
}

#[test]
fn properties_progress_monotonically_and_never_overshoot() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    let mut prev = seq.current_values(-0.5);
    let mut now = -0.5;
    while now < 2.5 {
        now += 0.01;
        let v = seq.current_values(now);
        assert!(v.seal_scale <= prev.seal_scale && v.seal_scale >= 0.0);
        assert!(v.flap_rotation <= prev.flap_rotation && v.flap_rotation >= 0.0);
        assert!(v.camera_lift >= prev.camera_lift && v.camera_lift <= CAMERA_LIFT);
        assert!(v.camera_z <= prev.camera_z && v.camera_z >= CAMERA_OPEN_Z);
        assert!(v.message_opacity >= prev.message_opacity && v.message_opacity <= 1.0);
        prev = v;
    }
}

#[test]
fn values_strictly_progress_inside_active_window() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    let a = seq.current_values(0.3);
    let b = seq.current_values(0.4);
    assert!(b.flap_rotation < a.flap_rotation);
    assert!(b.camera_lift > a.camera_lift);
    let c = seq.current_values(0.7);
    let d = seq.current_values(0.8);
    assert!(d.message_opacity > c.message_opacity);
}

#[test]
fn sample_does_not_advance_state() {
    let mut seq = sequencer();
    seq.trigger(0.0);
    let v = seq.sample(5.0);
    assert_eq!(v.message_opacity, 1.0);
    assert_eq!(seq.state(), CardState::Opening);
}

#[test]
fn easing_curves_are_bounded_and_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::QuadInOut,
        Easing::QuadOut,
        Easing::CubicInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(-3.0), 0.0);
        assert_eq!(easing.apply(7.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = easing.apply(i as f32 / 100.0);
            assert!(y >= prev, "{} not monotonic at {i}", easing.as_str());
            prev = y;
        }
        assert_eq!(Easing::from_str(easing.as_str()), Some(easing));
    }
    assert_eq!(Easing::from_str("power2.inOut"), Some(Easing::QuadInOut));
}

#[test]
fn invalid_durations_are_rejected() {
    let params = SequenceParams {
        flap: TrackTiming::new(0.0, 0.0),
        ..SequenceParams::default()
    };
    assert!(matches!(
        CardSequencer::new(&params, 5.0),
        Err(CardError::InvalidDuration { track: "flap", .. })
    ));
    let params = SequenceParams {
        message: TrackTiming::new(1.0, -0.5),
        ..SequenceParams::default()
    };
    assert!(matches!(
        CardSequencer::new(&params, 5.0),
        Err(CardError::InvalidDelay { track: "message", .. })
    ));
}
