pub mod constants;
pub mod easing;
pub mod error;
pub mod frame;
pub mod input;
pub mod params;
pub mod particles;
pub mod scene;
pub mod sequencer;
pub mod state;

pub use constants::*;
pub use easing::Easing;
pub use error::{CardError, CardResult};
pub use frame::{compose_camera, pointer_offset, CardContext, FrameDriver};
pub use input::{normalize_pointer, InputTracker, PointerSignal};
pub use params::{CameraBlend, CameraParams, CardParams, ParticleParams, SequenceParams, TrackTiming};
pub use particles::ParticleField;
pub use scene::Scene;
pub use sequencer::{CardSequencer, CardState, CardTimeline, CardValues, Track};
pub use state::Camera;
