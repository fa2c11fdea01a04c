// Small color helpers over 6-digit hex strings. Theme colors are authored
// data, so parsing is lenient: a malformed digit reads as zero rather than
// failing the projection.

fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

/// Picks black or white text for the given background using the weighted
/// luminance `(299r + 587g + 114b) / 1000`. Luminance of 128 or more gets
/// black text, anything below gets white. Integer division keeps the
/// mid-gray boundary exact: `#808080` lands on 128 and reads black.
pub fn contrast_color(hex: &str) -> &'static str {
    let (r, g, b) = parse_hex(hex);
    let luminance = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    if luminance >= 128 {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Shifts every channel by `delta`, clamping each independently to [0, 255].
pub fn adjust_brightness(hex: &str, delta: i32) -> String {
    let (r, g, b) = parse_hex(hex);
    let shift = |c: u8| (i32::from(c) + delta).clamp(0, 255) as u8;
    format!("#{:02x}{:02x}{:02x}", shift(r), shift(g), shift(b))
}

/// Renders a hex color as an `rgba()` expression with the given alpha.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex(hex);
    format!("rgba({r}, {g}, {b}, {alpha})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_extremes() {
        assert_eq!(contrast_color("#000000"), "#ffffff");
        assert_eq!(contrast_color("#ffffff"), "#000000");
    }

    #[test]
    fn contrast_mid_gray_is_black() {
        // 0x80 on every channel: 128 * (299 + 587 + 114) / 1000 == 128,
        // exactly at the cutoff, so the "light background" branch wins.
        assert_eq!(contrast_color("#808080"), "#000000");
        assert_eq!(contrast_color("#7f7f7f"), "#ffffff");
    }

    #[test]
    fn brightness_clamps_per_channel() {
        assert_eq!(adjust_brightness("#000000", 300), "#ffffff");
        assert_eq!(adjust_brightness("#ffffff", -300), "#000000");
        assert_eq!(adjust_brightness("#102030", 16), "#203040");
        assert_eq!(adjust_brightness("#f01020", 32), "#ff3040");
    }

    #[test]
    fn rgba_passes_channels_through() {
        assert_eq!(hex_to_rgba("#112233", 0.5), "rgba(17, 34, 51, 0.5)");
        assert_eq!(hex_to_rgba("ff0000", 1.0), "rgba(255, 0, 0, 1)");
    }
}
