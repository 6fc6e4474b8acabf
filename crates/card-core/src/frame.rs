use crate::constants::{
    MAX_CATCHUP_TICKS, NOMINAL_TICK_SEC, PARTICLE_FOLLOW_CAMERA, PARTICLE_SPIN_PER_TICK,
    POINTER_CAMERA_SCALE,
};
use crate::error::CardResult;
use crate::input::{InputTracker, PointerSignal};
use crate::params::{CameraBlend, CardParams};
use crate::particles::ParticleField;
use crate::scene::Scene;
use crate::sequencer::{CardSequencer, CardState, CardValues};
use crate::state::Camera;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Everything a tick reads or mutates, owned in one place.
pub struct CardContext<R: Rng = StdRng> {
    pub input: InputTracker,
    pub sequencer: CardSequencer,
    pub particles: ParticleField<R>,
}

/// Per-tick orchestrator. Call `run` once per display refresh.
pub struct FrameDriver<R: Rng = StdRng> {
    ctx: CardContext<R>,
    camera: Camera,
    params: CardParams,
    particle_rotation: f32,
    last_now: Option<f64>,
    ticks: u64,
}

impl FrameDriver<StdRng> {
    pub fn new(params: CardParams) -> CardResult<Self> {
        let rng = StdRng::seed_from_u64(params.seed);
        Self::with_rng(params, rng)
    }
}

impl<R: Rng> FrameDriver<R> {
    pub fn with_rng(params: CardParams, rng: R) -> CardResult<Self> {
        params.validate()?;
        let camera = Camera::default();
        let ctx = CardContext {
            input: InputTracker::new(),
            sequencer: CardSequencer::new(&params.sequence, camera.eye.z)?,
            particles: ParticleField::new(params.particles.clone(), rng)?,
        };
        log::info!(
            "[frame] driver ready: {} particles, blend={:?}",
            ctx.particles.len(),
            params.camera.blend
        );
        Ok(Self {
            ctx,
            camera,
            params,
            particle_rotation: 0.0,
            last_now: None,
            ticks: 0,
        })
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.ctx.input.on_pointer_move(client_x, client_y, width, height);
    }

    pub fn trigger_open(&mut self, now: f64) -> bool {
        self.ctx.sequencer.trigger(now)
    }

    /// Viewport change: only the projection follows, animation state is untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    /// Advance one tick at `now` (seconds, monotonic) and render into `scene`.
    pub fn run(&mut self, now: f64, scene: &mut impl Scene) {
        let dt = self.last_now.map_or(NOMINAL_TICK_SEC, |prev| (now - prev).max(0.0));
        self.last_now = Some(now);

        let signal = self.ctx.input.current_signal();
        let offset = pointer_offset(signal, self.params.camera.sensitivity);
        let values = self.ctx.sequencer.current_values(now);
        let state = self.ctx.sequencer.state();

        self.camera.eye = compose_camera(offset, &values, state, self.params.camera.blend);

        if scene.has_background() {
            scene.set_background_offset(signal.as_vec2() * self.params.camera.background_parallax);
        }

        let steps = if self.params.scale_fall_by_elapsed {
            (dt / NOMINAL_TICK_SEC).min(MAX_CATCHUP_TICKS as f64) as f32
        } else {
            1.0
        };
        let recycled = self.ctx.particles.advance(steps);

        self.particle_rotation += PARTICLE_SPIN_PER_TICK;
        scene.set_particles(
            self.ctx.particles.positions(),
            self.camera.eye.y * PARTICLE_FOLLOW_CAMERA,
            self.particle_rotation,
        );

        self.camera.look_at(Vec3::ZERO);

        if scene.has_seal() {
            if values.seal_removed {
                scene.remove_seal();
                log::info!("[card] seal removed");
            } else {
                scene.set_seal_scale(values.seal_scale);
            }
        }
        scene.set_flap_rotation(values.flap_rotation);
        scene.set_message_opacity(values.message_opacity);

        scene.render(&self.camera);

        self.ticks += 1;
        log::trace!(
            "[frame] #{} t={:.3} eye=({:.2},{:.2},{:.2}) recycled={}",
            self.ticks,
            now,
            self.camera.eye.x,
            self.camera.eye.y,
            self.camera.eye.z,
            recycled
        );
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn context(&self) -> &CardContext<R> {
        &self.ctx
    }

    pub fn state(&self) -> CardState {
        self.ctx.sequencer.state()
    }

    pub fn particle_rotation(&self) -> f32 {
        self.particle_rotation
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn params(&self) -> &CardParams {
        &self.params
    }
}

/// Camera offset driven by the pointer; each axis stays within ±`sensitivity * 5`.
#[inline]
pub fn pointer_offset(signal: PointerSignal, sensitivity: f32) -> Vec2 {
    signal.as_vec2() * sensitivity * POINTER_CAMERA_SCALE
}

/// Merge the pointer offset with the opening camera move.
///
/// x is pointer-only and z is sequencer-only. For y the two are summed, or the
/// pointer is dropped once opening starts under `SuppressPointer`.
pub fn compose_camera(
    offset: Vec2,
    values: &CardValues,
    state: CardState,
    blend: CameraBlend,
) -> Vec3 {
    let pointer = match (blend, state) {
        (CameraBlend::SuppressPointer, CardState::Opening | CardState::Open) => Vec2::ZERO,
        _ => offset,
    };
    Vec3::new(pointer.x, pointer.y + values.camera_lift, values.camera_z)
}
