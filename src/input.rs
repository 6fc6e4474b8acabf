// Pure keyboard helpers; kept free of web-sys so host tests can include them.

/// Keys that open the card, in addition to a click anywhere.
#[inline]
pub fn is_open_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
