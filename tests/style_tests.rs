// Host-side tests for the message overlay's CSS values.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn hidden_until_the_message_starts_fading_in() {
    assert_eq!(text_opacity_value(0.0), None);
    assert_eq!(text_opacity_value(-0.5), None);
    assert_eq!(text_opacity_value(f32::NAN), None);
}

#[test]
fn opacity_is_rounded_and_clamped() {
    assert_eq!(text_opacity_value(0.25).as_deref(), Some("0.250"));
    assert_eq!(text_opacity_value(0.12345).as_deref(), Some("0.123"));
    assert_eq!(text_opacity_value(1.0).as_deref(), Some("1.000"));
    assert_eq!(text_opacity_value(3.0).as_deref(), Some("1.000"));
}
