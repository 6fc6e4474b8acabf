use crate::constants::*;
use crate::easing::Easing;
use crate::error::{CardError, CardResult};

/// How the pointer offset and the opening camera move share the camera.
///
/// Both write the camera every tick once the card opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraBlend {
    /// Pointer offset is added on top of the sequencer's lift.
    #[default]
    Sum,
    /// Pointer offset is dropped as soon as the card leaves `Closed`.
    SuppressPointer,
}

impl CameraBlend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sum" | "add" => Some(Self::Sum),
            "suppress" | "suppress-pointer" => Some(Self::SuppressPointer),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub spawn_x: (f32, f32),
    pub spawn_y: (f32, f32),
    pub spawn_z: (f32, f32),
    pub fall_step: f32,
    pub floor_y: f32,
    pub recycle_y: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spawn_x: PARTICLE_SPAWN_X,
            spawn_y: PARTICLE_SPAWN_Y,
            spawn_z: PARTICLE_SPAWN_Z,
            fall_step: PARTICLE_FALL_STEP,
            floor_y: PARTICLE_FLOOR_Y,
            recycle_y: PARTICLE_RECYCLE_Y,
        }
    }
}

impl ParticleParams {
    pub fn validate(&self) -> CardResult<()> {
        for (axis, (min, max)) in [('x', self.spawn_x), ('y', self.spawn_y), ('z', self.spawn_z)] {
            // gen_range panics on an empty range or one wider than f32 can hold
            if !(min < max) || !min.is_finite() || !max.is_finite() {
                return Err(CardError::EmptySpawnRange { axis, min, max });
            }
            if !(max - min).is_finite() {
                return Err(CardError::UnboundedSpawnRange { axis, min, max });
            }
        }
        if !(self.fall_step > 0.0) || !self.fall_step.is_finite() {
            return Err(CardError::InvalidFallStep(self.fall_step));
        }
        if !(self.recycle_y > self.floor_y) {
            return Err(CardError::InvertedFallBounds {
                floor_y: self.floor_y,
                recycle_y: self.recycle_y,
            });
        }
        Ok(())
    }
}

/// Timing of one animated property, relative to the moment the card opens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackTiming {
    pub duration: f64,
    pub delay: f64,
}

impl TrackTiming {
    pub const fn new(duration: f64, delay: f64) -> Self {
        Self { duration, delay }
    }

    fn validate(&self, track: &'static str) -> CardResult<()> {
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(CardError::InvalidDuration {
                track,
                duration: self.duration,
            });
        }
        if !(self.delay >= 0.0) || !self.delay.is_finite() {
            return Err(CardError::InvalidDelay {
                track,
                delay: self.delay,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SequenceParams {
    pub seal: TrackTiming,
    pub flap: TrackTiming,
    pub camera: TrackTiming,
    pub message: TrackTiming,
    pub flap_closed_angle: f32,
    pub camera_lift: f32,
    pub camera_open_z: f32,
    pub easing: Easing,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            seal: TrackTiming::new(SEAL_SHRINK_SEC, 0.0),
            flap: TrackTiming::new(FLAP_OPEN_SEC, 0.0),
            camera: TrackTiming::new(CAMERA_MOVE_SEC, 0.0),
            message: TrackTiming::new(MESSAGE_FADE_SEC, MESSAGE_FADE_DELAY_SEC),
            flap_closed_angle: FLAP_CLOSED_ANGLE,
            camera_lift: CAMERA_LIFT,
            camera_open_z: CAMERA_OPEN_Z,
            easing: Easing::QuadInOut,
        }
    }
}

impl SequenceParams {
    pub fn validate(&self) -> CardResult<()> {
        self.seal.validate("seal")?;
        self.flap.validate("flap")?;
        self.camera.validate("camera")?;
        self.message.validate("message")?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub sensitivity: f32,
    pub blend: CameraBlend,
    pub background_parallax: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            sensitivity: POINTER_SENSITIVITY,
            blend: CameraBlend::Sum,
            background_parallax: BACKGROUND_PARALLAX,
        }
    }
}

/// Top-level tuning for a card session.
#[derive(Clone, Debug, PartialEq)]
pub struct CardParams {
    pub particles: ParticleParams,
    pub sequence: SequenceParams,
    pub camera: CameraParams,
    /// Scale the particle fall by measured frame time instead of one step per tick.
    pub scale_fall_by_elapsed: bool,
    pub seed: u64,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            particles: ParticleParams::default(),
            sequence: SequenceParams::default(),
            camera: CameraParams::default(),
            scale_fall_by_elapsed: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl CardParams {
    pub fn validate(&self) -> CardResult<()> {
        self.particles.validate()?;
        self.sequence.validate()
    }
}
