// Host-side tests for the falling particle field.

use card_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(seed: u64) -> ParticleField {
    ParticleField::seeded(ParticleParams::default(), seed).unwrap()
}

fn in_range(v: f32, (min, max): (f32, f32)) -> bool {
    v >= min && v <= max
}

#[test]
fn initialize_respects_spawn_ranges() {
    let f = field(7);
    assert_eq!(f.len(), PARTICLE_COUNT);
    assert_eq!(f.positions().len(), PARTICLE_COUNT * 3);
    for p in f.points() {
        assert!(in_range(p.x, PARTICLE_SPAWN_X));
        assert!(in_range(p.y, PARTICLE_SPAWN_Y));
        assert!(in_range(p.z, PARTICLE_SPAWN_Z));
    }
}

#[test]
fn flat_view_matches_points_in_order() {
    let f = field(3);
    let flat = f.positions();
    for (i, p) in f.points().iter().enumerate() {
        assert_eq!(flat[i * 3], p.x);
        assert_eq!(flat[i * 3 + 1], p.y);
        assert_eq!(flat[i * 3 + 2], p.z);
    }
}

#[test]
fn tick_moves_every_particle_down_by_one_step() {
    let mut f = field(11);
    let before: Vec<_> = f.points().to_vec();
    let recycled = f.tick();
    // Freshly spawned particles are far above the floor
    assert_eq!(recycled, 0);
    for (a, b) in before.iter().zip(f.points()) {
        assert!((a.y - b.y - PARTICLE_FALL_STEP).abs() < 1e-5);
        assert_eq!(a.x, b.x);
        assert_eq!(a.z, b.z);
    }
}

#[test]
fn count_is_invariant_across_ticks() {
    let mut f = field(5);
    for _ in 0..5_000 {
        f.tick();
        assert_eq!(f.len(), PARTICLE_COUNT);
    }
}

#[test]
fn particle_crossing_floor_is_recycled_to_top() {
    let params = ParticleParams {
        count: 1,
        // Spawn right above the floor so the first tick crosses it
        spawn_y: (PARTICLE_FLOOR_Y, PARTICLE_FLOOR_Y + PARTICLE_FALL_STEP * 0.5),
        ..ParticleParams::default()
    };
    let mut f = ParticleField::new(params, StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(f.tick(), 1);
    let p = f.points()[0];
    assert_eq!(p.y, PARTICLE_RECYCLE_Y);
    assert!(in_range(p.x, PARTICLE_SPAWN_X));
    assert!(in_range(p.z, PARTICLE_SPAWN_Z));
}

#[test]
fn ten_thousand_ticks_stay_within_bounds() {
    let mut f = field(42);
    for tick in 0..10_000 {
        f.tick();
        for p in f.points() {
            assert!(
                p.y >= PARTICLE_FLOOR_Y && p.y <= PARTICLE_SPAWN_Y.1,
                "particle escaped at tick {tick}: y={}",
                p.y
            );
        }
    }
}

#[test]
fn same_seed_reproduces_recycling() {
    let mut a = field(99);
    let mut b = field(99);
    for _ in 0..3_000 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn advance_scales_the_step() {
    let mut f = field(8);
    let y0 = f.points()[0].y;
    f.advance(2.5);
    let y1 = f.points()[0].y;
    assert!((y0 - y1 - PARTICLE_FALL_STEP * 2.5).abs() < 1e-5);
    // Negative steps never push particles upward
    f.advance(-3.0);
    assert_eq!(f.points()[0].y, y1);
}

#[test]
fn empty_spawn_range_is_rejected() {
    let params = ParticleParams {
        spawn_x: (1.0, 1.0),
        ..ParticleParams::default()
    };
    match ParticleField::seeded(params, 0) {
        Err(CardError::EmptySpawnRange { axis, .. }) => assert_eq!(axis, 'x'),
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("expected an error"),
    }
}

#[test]
fn spawn_range_wider_than_f32_is_rejected() {
    let params = ParticleParams {
        spawn_x: (-f32::MAX, f32::MAX),
        ..ParticleParams::default()
    };
    assert_eq!(
        params.validate(),
        Err(CardError::UnboundedSpawnRange {
            axis: 'x',
            min: -f32::MAX,
            max: f32::MAX,
        })
    );
    assert!(matches!(
        ParticleField::seeded(params, 1),
        Err(CardError::UnboundedSpawnRange { axis: 'x', .. })
    ));
}

#[test]
fn field_keeps_the_params_it_was_built_with() {
    let params = ParticleParams {
        count: 7,
        ..ParticleParams::default()
    };
    let f = ParticleField::seeded(params.clone(), 3).unwrap();
    assert_eq!(f.params(), &params);
    assert_eq!(f.len(), 7);
}

#[test]
fn inverted_fall_bounds_are_rejected() {
    let params = ParticleParams {
        floor_y: 25.0,
        recycle_y: 20.0,
        ..ParticleParams::default()
    };
    assert!(matches!(
        ParticleField::seeded(params, 0),
        Err(CardError::InvertedFallBounds { .. })
    ));
}
