//! Tunable animation parameters.
//!
//! Every setter clamps its input into range; nothing here ever fails.

use tracing::debug;

use crate::animation::Capabilities;
use crate::color::{CYAN, Rgb, WHITE};
use crate::intent::ParameterIntent;
use crate::math::{clamp_channel, clamp_unit};

/// Parameters shared by every animation variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParameters {
    target_color: Rgb,
    target_brightness: u8,
    response: f32,
    speed: f32,
    sensitivity: f32,
    saturation_boost: f32,
    secondary_color: Rgb,
}

impl Default for AnimationParameters {
    fn default() -> Self {
        Self {
            target_color: WHITE,
            target_brightness: 255,
            response: 0.5,
            speed: 0.5,
            sensitivity: 0.5,
            saturation_boost: 0.0,
            secondary_color: CYAN,
        }
    }
}

impl AnimationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_color(mut self, color: Rgb) -> Self {
        self.set_target_color(color);
        self
    }

    pub fn with_target_brightness(mut self, brightness: i32) -> Self {
        self.set_target_brightness(brightness);
        self
    }

    pub fn with_response(mut self, response: f32) -> Self {
        self.set_response(response);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.set_speed(speed);
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.set_sensitivity(sensitivity);
        self
    }

    pub fn with_saturation_boost(mut self, boost: f32) -> Self {
        self.set_saturation_boost(boost);
        self
    }

    pub fn with_secondary_color(mut self, color: Rgb) -> Self {
        self.secondary_color = color;
        self
    }

    pub fn set_target_color(&mut self, color: Rgb) {
        self.target_color = color;
    }

    /// Clamped to `0..=255`.
    pub fn set_target_brightness(&mut self, brightness: i32) {
        self.target_brightness = clamp_channel(brightness);
    }

    pub fn set_response(&mut self, response: f32) {
        self.response = clamp_unit(response);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = clamp_unit(speed);
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = clamp_unit(sensitivity);
    }

    pub fn set_saturation_boost(&mut self, boost: f32) {
        self.saturation_boost = clamp_unit(boost);
    }

    pub fn set_secondary_color(&mut self, color: Rgb) {
        self.secondary_color = color;
    }

    pub const fn target_color(&self) -> Rgb {
        self.target_color
    }

    pub const fn target_brightness(&self) -> u8 {
        self.target_brightness
    }

    /// Smoothing strength, also called lerp strength.
    pub const fn response(&self) -> f32 {
        self.response
    }

    pub const fn speed(&self) -> f32 {
        self.speed
    }

    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub const fn saturation_boost(&self) -> f32 {
        self.saturation_boost
    }

    /// Second endpoint of the fade transition.
    pub const fn secondary_color(&self) -> Rgb {
        self.secondary_color
    }

    /// Apply an intent if `capabilities` allow it.
    ///
    /// Capture-driven variants have a single response knob, so speed and
    /// response intents both move `response` and `speed` together there.
    /// Returns `true` when a value changed.
    pub fn apply(&mut self, intent: ParameterIntent, capabilities: Capabilities) -> bool {
        let before = *self;
        let shared_knob = capabilities.needs_external_capture;

        match intent {
            ParameterIntent::TargetColor(color) if capabilities.needs_color_selection => {
                self.set_target_color(color);
            }
            ParameterIntent::TargetBrightness(brightness) => {
                self.target_brightness = brightness;
            }
            ParameterIntent::Response(value) if capabilities.supports_smoothness => {
                self.set_response(value);
                if shared_knob {
                    self.set_speed(value);
                }
            }
            ParameterIntent::Speed(value) if capabilities.supports_speed => {
                self.set_speed(value);
                if shared_knob {
                    self.set_response(value);
                }
            }
            ParameterIntent::Sensitivity(value) if capabilities.supports_audio_sensitivity => {
                self.set_sensitivity(value);
            }
            ParameterIntent::SaturationBoost(value) if capabilities.supports_saturation_boost => {
                self.set_saturation_boost(value);
            }
            ignored => {
                debug!(intent = ?ignored, "parameter not supported by animation");
                return false;
            }
        }

        let changed = *self != before;
        if changed {
            debug!(intent = ?intent, "parameter updated");
        }
        changed
    }
}
