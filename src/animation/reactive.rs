//! Smoothing pipelines shared by the capture-driven animations.

use tracing::debug;

use crate::color::BLACK;
use crate::math::{boost_saturation, clamp_unit, is_black, lerp_color, lerp_float, lerp_int, ramp};
use crate::params::AnimationParameters;
use crate::zone::{ZoneColorSample, ZoneColorState, ZoneLayout};

/// Output scale below which [`perceptual_scale`] cuts to dark.
const PERCEPTUAL_CUTOFF: f32 = 0.02;

/// Raw intensity at or below which the signal counts as silence.
pub fn noise_floor(sensitivity: f32) -> f32 {
    0.05 + 0.25 * (1.0 - clamp_unit(sensitivity))
}

/// Gain applied after noise-floor normalization.
pub fn audio_gain(sensitivity: f32) -> f32 {
    ramp(0.5, 2.0, sensitivity)
}

/// Noise-floor plus gain map from raw loudness to `[0, 1]`.
pub fn map_intensity(raw: f32, sensitivity: f32) -> f32 {
    let floor = noise_floor(sensitivity);
    let raw = clamp_unit(raw);
    if raw <= floor {
        return 0.0;
    }
    let normalized = clamp_unit((raw - floor) / (1.0 - floor));
    clamp_unit(normalized * audio_gain(sensitivity))
}

/// Blend factor while intensity is climbing.
pub fn rise_factor(response: f32) -> f32 {
    ramp(0.2, 0.9, response)
}

/// Blend factor while intensity is falling; always below [`rise_factor`].
pub fn fall_factor(response: f32) -> f32 {
    ramp(0.07, 0.7, response)
}

pub fn brightness_factor(response: f32) -> f32 {
    ramp(0.25, 1.0, response)
}

/// Per-zone color blend factor for screen-driven animations.
pub fn color_factor(response: f32) -> f32 {
    ramp(0.1, 0.9, response)
}

/// Squared output curve that emphasizes peaks and drops near-silence.
pub fn perceptual_scale(brightness: u8) -> f32 {
    let linear = f32::from(brightness) / 255.0;
    if linear < PERCEPTUAL_CUTOFF {
        0.0
    } else {
        linear * linear
    }
}

/// Per-zone colors chasing screen samples
#[derive(Debug, Clone)]
pub struct ZoneFollower {
    zones: ZoneColorState,
}

impl ZoneFollower {
    /// All zones start black.
    pub const fn new(layout: ZoneLayout) -> Self {
        Self {
            zones: ZoneColorState::new(layout),
        }
    }

    /// Blend every zone toward `sample`.
    ///
    /// Black sample components snap their zone to black. Samples for another
    /// layout are ignored. Returns `true` if the sample was applied.
    pub fn apply(&mut self, sample: &ZoneColorSample, factor: f32, boost: f32) -> bool {
        if sample.layout() != self.zones.layout() {
            debug!(
                expected = ?self.zones.layout(),
                got = ?sample.layout(),
                "sample layout mismatch"
            );
            return false;
        }

        for (zone, &target) in self.zones.zones_mut().iter_mut().zip(sample.colors()) {
            zone.color = if is_black(target) {
                BLACK
            } else {
                lerp_color(zone.color, boost_saturation(target, boost), factor)
            };
        }
        true
    }

    pub const fn zones(&self) -> &ZoneColorState {
        &self.zones
    }
}

/// Loudness-to-brightness pipeline
///
/// Raw intensity is smoothed with asymmetric rise/fall factors, passed
/// through the noise-floor map, then the brightness chases
/// `target_brightness * mapped`.
#[derive(Debug, Clone, Default)]
pub struct IntensityFollower {
    smoothed: f32,
    brightness: u8,
}

impl IntensityFollower {
    pub const fn new(brightness: u8) -> Self {
        Self {
            smoothed: 0.0,
            brightness,
        }
    }

    /// Feed one raw intensity and return the new brightness.
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(&mut self, raw: f32, params: &AnimationParameters) -> u8 {
        let raw = clamp_unit(raw);
        let response = params.response();
        let factor = if raw > self.smoothed {
            rise_factor(response)
        } else {
            fall_factor(response)
        };
        self.smoothed = lerp_float(self.smoothed, raw, factor);

        let mapped = map_intensity(self.smoothed, params.sensitivity());
        let target = libm::roundf(f32::from(params.target_brightness()) * mapped) as i32;
        self.brightness = lerp_int(
            i32::from(self.brightness),
            target,
            brightness_factor(response),
        );
        self.brightness
    }

    pub const fn smoothed(&self) -> f32 {
        self.smoothed
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}
