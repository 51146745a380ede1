//! Sine breathing

use core::f32::consts::TAU;

use super::{Animation, TickInput};
use crate::color::Rgb;
use crate::math::{lerp_color, ramp};
use crate::params::AnimationParameters;
use crate::zone::Frame;

const MIN_FACTOR: f32 = 0.1;

/// Brightness follows `0.1 + 0.9 * (sin(phase) + 1) / 2`; the color eases
/// toward the target.
#[derive(Debug, Clone)]
pub struct BreathAnimation {
    phase: f32,
    color: Rgb,
}

impl BreathAnimation {
    pub const fn new(color: Rgb) -> Self {
        Self { phase: 0.0, color }
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }
}

impl Animation for BreathAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        let speed = params.speed();
        self.color = lerp_color(self.color, params.target_color(), ramp(0.05, 0.5, speed));

        let breath = ((libm::sinf(self.phase) + 1.0) / 2.0).clamp(0.0, 1.0);
        let factor = MIN_FACTOR + (1.0 - MIN_FACTOR) * breath;
        let frame = Frame {
            scale: factor,
            ..Frame::uniform(self.color, params.target_brightness())
        };

        self.phase = (self.phase + ramp(0.02, 0.2, speed)) % TAU;
        Some(frame)
    }
}
