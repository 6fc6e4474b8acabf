// Inline CSS values for the message text overlay.
// Kept free of web-sys so host tests can include this file directly.

/// CSS `opacity` for the overlay, or `None` while it should be hidden and
/// click-through.
#[inline]
pub fn text_opacity_value(opacity: f32) -> Option<String> {
    if opacity.is_nan() || opacity <= 0.0 {
        None
    } else {
        Some(format!("{:.3}", opacity.min(1.0)))
    }
}
