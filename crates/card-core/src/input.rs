use glam::Vec2;

/// Normalized pointer offset from the viewport center, both axes in [-1, 1].
///
/// `y` grows upward, matching world space rather than screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Last-write-wins holder for the pointer signal.
///
/// Written by the pointer-move handler, read once per tick by the frame driver.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    signal: PointerSignal,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(
        &mut self,
        client_x: f32,
        client_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        match normalize_pointer(client_x, client_y, viewport_width, viewport_height) {
            Some(signal) => self.signal = signal,
            None => log::warn!(
                "[input] dropping pointer event for viewport {}x{}",
                viewport_width,
                viewport_height
            ),
        }
    }

    #[inline]
    pub fn current_signal(&self) -> PointerSignal {
        self.signal
    }
}

/// Map client coordinates to [-1, 1]² with +Y up.
///
/// Returns `None` when the viewport cannot be normalized against.
#[inline]
pub fn normalize_pointer(
    client_x: f32,
    client_y: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Option<PointerSignal> {
    let usable = |v: f32| v > 0.0 && v.is_finite();
    if !usable(viewport_width) || !usable(viewport_height) {
        return None;
    }
    if !client_x.is_finite() || !client_y.is_finite() {
        return None;
    }
    let x = (client_x / viewport_width) * 2.0 - 1.0;
    let y = -((client_y / viewport_height) * 2.0 - 1.0);
    Some(PointerSignal {
        x: x.clamp(-1.0, 1.0),
        y: y.clamp(-1.0, 1.0),
    })
}
