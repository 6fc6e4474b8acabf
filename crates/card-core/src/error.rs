use thiserror::Error;

/// Invalid tuning detected when the animation core is constructed.
///
/// Everything that runs per tick is infallible; bad parameters are rejected
/// up front so a running loop never has to handle them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CardError {
    #[error("empty spawn range on {axis} axis: [{min}, {max})")]
    EmptySpawnRange { axis: char, min: f32, max: f32 },

    #[error("spawn range on {axis} axis is too wide to sample: [{min}, {max})")]
    UnboundedSpawnRange { axis: char, min: f32, max: f32 },

    #[error("fall step must be positive and finite, got {0}")]
    InvalidFallStep(f32),

    #[error("recycle height {recycle_y} must lie above the floor {floor_y}")]
    InvertedFallBounds { floor_y: f32, recycle_y: f32 },

    #[error("{track} duration must be positive and finite, got {duration}")]
    InvalidDuration { track: &'static str, duration: f64 },

    #[error("{track} delay must be non-negative and finite, got {delay}")]
    InvalidDelay { track: &'static str, delay: f64 },
}

pub type CardResult<T> = Result<T, CardError>;
