use std::time::{Duration, Instant};

use anyhow::Result;
use card_core::{
    Camera, CameraBlend, CameraParams, CardParams, CardState, FrameDriver, ParticleParams, Scene,
    DEFAULT_SEED, PARTICLE_COUNT,
};
use clap::Parser;
use glam::{Vec2, Vec3};

#[derive(Parser, Debug)]
#[command(about = "Run the greeting card animation headless and log what the scene receives", version)]
struct Args {
    /// Simulated session length in seconds
    #[arg(long, default_value_t = 3.0)]
    seconds: f64,
    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// When the simulated click opens the card; omit to keep it closed
    #[arg(long)]
    open_at: Option<f64>,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(long, default_value_t = PARTICLE_COUNT)]
    particles: usize,
    /// Camera composition once opening: "sum" or "suppress"
    #[arg(long, default_value = "sum")]
    blend: String,
    /// Scale the particle fall by frame time instead of a fixed step
    #[arg(long)]
    scale_by_elapsed: bool,
    /// Pace frames against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
}

/// Scene stand-in that keeps the last values pushed by the driver.
struct TraceScene {
    background_offset: Vec2,
    seal: Option<f32>,
    flap_rotation: f32,
    message_opacity: f32,
    lowest_particle: f32,
    highest_particle: f32,
    particle_count: usize,
    frames: u64,
    last_eye: Vec3,
}

impl TraceScene {
    fn new() -> Self {
        Self {
            background_offset: Vec2::ZERO,
            seal: Some(1.0),
            flap_rotation: card_core::FLAP_CLOSED_ANGLE,
            message_opacity: 0.0,
            lowest_particle: f32::MAX,
            highest_particle: f32::MIN,
            particle_count: 0,
            frames: 0,
            last_eye: Vec3::ZERO,
        }
    }
}

impl Scene for TraceScene {
    fn has_background(&self) -> bool {
        true
    }
    fn set_background_offset(&mut self, offset: Vec2) {
        self.background_offset = offset;
    }
    fn has_seal(&self) -> bool {
        self.seal.is_some()
    }
    fn set_seal_scale(&mut self, scale: f32) {
        self.seal = Some(scale);
    }
    fn remove_seal(&mut self) {
        self.seal = None;
    }
    fn set_flap_rotation(&mut self, angle: f32) {
        self.flap_rotation = angle;
    }
    fn set_message_opacity(&mut self, opacity: f32) {
        self.message_opacity = opacity;
    }
    fn set_particles(&mut self, positions: &[f32], _offset_y: f32, _rotation_y: f32) {
        self.particle_count = positions.len() / 3;
        for y in positions.iter().skip(1).step_by(3) {
            self.lowest_particle = self.lowest_particle.min(*y);
            self.highest_particle = self.highest_particle.max(*y);
        }
    }
    fn render(&mut self, camera: &Camera) {
        self.frames += 1;
        self.last_eye = camera.eye;
    }
}

/// Pointer path: a slow circle around the viewport center.
fn pointer_at(t: f64, width: f32, height: f32) -> (f32, f32) {
    let a = (t * 0.8) as f32;
    (
        width * (0.5 + 0.4 * a.cos()),
        height * (0.5 + 0.4 * a.sin()),
    )
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let blend = CameraBlend::from_str(&args.blend)
        .ok_or_else(|| anyhow::anyhow!("unknown blend {:?} (use sum|suppress)", args.blend))?;
    if !(args.fps > 0.0) {
        anyhow::bail!("fps must be positive, got {}", args.fps);
    }

    let params = CardParams {
        particles: ParticleParams {
            count: args.particles,
            ..ParticleParams::default()
        },
        camera: CameraParams {
            blend,
            ..CameraParams::default()
        },
        scale_fall_by_elapsed: args.scale_by_elapsed,
        seed: args.seed,
        ..CardParams::default()
    };
    let mut driver = FrameDriver::new(params)?;
    let (width, height) = (1280.0_f32, 720.0_f32);
    driver.resize(width, height);

    let mut scene = TraceScene::new();
    let frame_dt = 1.0 / args.fps;
    let frames = (args.seconds * args.fps).ceil() as u64;
    let wall_start = Instant::now();
    let mut opened = false;
    let mut last_state = driver.state();

    for i in 0..frames {
        let now = i as f64 * frame_dt;
        let (px, py) = pointer_at(now, width, height);
        driver.on_pointer_move(px, py, width, height);

        if let Some(open_at) = args.open_at {
            if !opened && now >= open_at {
                opened = driver.trigger_open(now);
            }
        }

        driver.run(now, &mut scene);

        if driver.state() != last_state {
            log::info!("[native] t={:.3}s state {:?} -> {:?}", now, last_state, driver.state());
            last_state = driver.state();
        }
        if i % args.fps.round().max(1.0) as u64 == 0 {
            log::info!(
                "[native] t={:.2}s eye=({:.2},{:.2},{:.2}) flap={:.2} seal={:?} message={:.2} bg=({:.4},{:.4})",
                now,
                scene.last_eye.x,
                scene.last_eye.y,
                scene.last_eye.z,
                scene.flap_rotation,
                scene.seal.map(|s| (s * 100.0).round() / 100.0),
                scene.message_opacity,
                scene.background_offset.x,
                scene.background_offset.y,
            );
        }

        if args.realtime {
            let target = Duration::from_secs_f64(now + frame_dt);
            if let Some(wait) = target.checked_sub(wall_start.elapsed()) {
                std::thread::sleep(wait);
            }
        }
    }

    log::info!(
        "[native] {} frames, {} particles, y range [{:.2}, {:.2}], final state {:?}",
        scene.frames,
        scene.particle_count,
        scene.lowest_particle,
        scene.highest_particle,
        driver.state()
    );
    if args.open_at.is_some() && driver.state() != CardState::Open {
        log::warn!("[native] session ended before the card finished opening");
    }
    Ok(())
}
