//! Bounded interpolation helpers shared by every animation.
//!
//! All blends clamp their factor to `[0, 1]` and every integer result is
//! clamped to the channel range `[0, 255]`.

use crate::color::{BLACK, Rgb};

/// Distance below which [`lerp_int`] lands exactly on the target.
pub const SNAP_DISTANCE: f32 = 1.0;

/// Clamp to `[0, 1]`, mapping `NaN` to zero.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamp an integer to the channel range.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Linear ramp between `min` and `max` driven by a `[0, 1]` knob.
#[inline]
pub fn ramp(min: f32, max: f32, knob: f32) -> f32 {
    min + (max - min) * clamp_unit(knob)
}

/// Blend two channel values.
///
/// Lands exactly on `to` once the blended value is within
/// [`SNAP_DISTANCE`]. A non-zero factor always moves at least one unit, so
/// repeated application reaches `to` in at most 255 steps.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn lerp_int(from: i32, to: i32, factor: f32) -> u8 {
    if from == to {
        return clamp_channel(from);
    }
    let factor = clamp_unit(factor);
    let raw = from as f32 + (to - from) as f32 * factor;

    let mut result = if libm::fabsf(to as f32 - raw) < SNAP_DISTANCE {
        to
    } else {
        libm::roundf(raw) as i32
    };
    if result == from && factor > 0.0 {
        result += (to - from).signum();
    }

    clamp_channel(result)
}

/// Plain clamped linear blend, no snapping.
#[inline]
pub fn lerp_float(from: f32, to: f32, factor: f32) -> f32 {
    from + (to - from) * clamp_unit(factor)
}

/// Per-channel [`lerp_int`].
pub fn lerp_color(from: Rgb, to: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: lerp_int(i32::from(from.r), i32::from(to.r), factor),
        g: lerp_int(i32::from(from.g), i32::from(to.g), factor),
        b: lerp_int(i32::from(from.b), i32::from(to.b), factor),
    }
}

/// True for the reserved "no signal" color.
#[inline]
pub fn is_black(color: Rgb) -> bool {
    color == BLACK
}

/// Push every channel away from the color's average by `1 + 2 * boost`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn boost_saturation(color: Rgb, boost: f32) -> Rgb {
    let boost = clamp_unit(boost);
    if boost <= 0.0 {
        return color;
    }

    let (r, g, b) = (f32::from(color.r), f32::from(color.g), f32::from(color.b));
    let average = (r + g + b) / 3.0;
    let factor = 1.0 + boost * 2.0;
    let push = |channel: f32| (average + (channel - average) * factor).clamp(0.0, 255.0) as u8;

    Rgb {
        r: push(r),
        g: push(g),
        b: push(b),
    }
}
