//! Rainbow hue cycling

use super::{Animation, TickInput};
use crate::color::hue_to_rgb;
use crate::math::ramp;
use crate::params::AnimationParameters;
use crate::zone::Frame;

/// Walks the hue circle by `0.5 + 4.5 * speed` degrees per tick.
#[derive(Debug, Clone, Default)]
pub struct RainbowAnimation {
    /// Degrees in `[0, 360)`
    hue: f32,
}

impl RainbowAnimation {
    pub const fn new() -> Self {
        Self { hue: 0.0 }
    }

    pub const fn hue(&self) -> f32 {
        self.hue
    }
}

impl Animation for RainbowAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        let frame = Frame::uniform(hue_to_rgb(self.hue), params.target_brightness());
        self.hue = (self.hue + ramp(0.5, 5.0, params.speed())) % 360.0;
        Some(frame)
    }
}
