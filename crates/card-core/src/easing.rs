/// Easing curves for the opening sequence.
///
/// Every curve maps [0, 1] onto [0, 1], is monotonic and never overshoots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out (a.k.a. "power2.inOut").
    #[default]
    QuadInOut,
    QuadOut,
    CubicInOut,
}

impl Easing {
    /// Apply easing to a normalized time parameter; input is clamped first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::QuadOut => 1.0 - (1.0 - t).powi(2),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "linear" | "none" => Some(Self::Linear),
            "quad-in-out" | "power2.inout" | "ease-in-out" => Some(Self::QuadInOut),
            "quad-out" | "power2.out" | "ease-out" => Some(Self::QuadOut),
            "cubic-in-out" | "power3.inout" => Some(Self::CubicInOut),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::QuadInOut => "quad-in-out",
            Self::QuadOut => "quad-out",
            Self::CubicInOut => "cubic-in-out",
        }
    }
}
