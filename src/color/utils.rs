use crate::color::{Hsv, Rgb, hsv2rgb};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Build a color from unchecked integer channels, clamping each to 0-255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_clamped(r: i32, g: i32, b: i32) -> Rgb {
    Rgb {
        r: r.clamp(0, 255) as u8,
        g: g.clamp(0, 255) as u8,
        b: b.clamp(0, 255) as u8,
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex(value: &str) -> Option<Rgb> {
    let digits = value.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().map(rgb_from_u32)
}

/// Multiply every channel by `scale`, rounding and clamping to 0-255.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_color(color: Rgb, scale: f32) -> Rgb {
    let scale = crate::math::clamp_unit(scale);
    let channel = |value: u8| libm::roundf(f32::from(value) * scale).clamp(0.0, 255.0) as u8;
    Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Fully saturated, full value color for a hue given in degrees.
///
/// The hue circle is folded onto the 0-255 range used by
/// `smart_leds::hsv::Hsv`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_to_rgb(degrees: f32) -> Rgb {
    let degrees = if degrees.is_finite() {
        degrees.rem_euclid(360.0)
    } else {
        0.0
    };
    let hue = ((degrees / 360.0) * 256.0).min(255.0) as u8;
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    })
}
