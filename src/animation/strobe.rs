//! Strobe
//!
//! Toggles between on and off every tick, with the tick delay shrinking as
//! speed grows.

use embassy_time::Duration;

use super::{Animation, TickInput, speed_delay};
use crate::color::Rgb;
use crate::math::{lerp_color, ramp};
use crate::params::AnimationParameters;
use crate::zone::Frame;

#[derive(Debug, Clone)]
pub struct StrobeAnimation {
    color: Rgb,
    on: bool,
}

impl StrobeAnimation {
    pub const fn new(color: Rgb) -> Self {
        Self { color, on: false }
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }
}

impl Animation for StrobeAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        self.color = lerp_color(
            self.color,
            params.target_color(),
            ramp(0.05, 0.5, params.speed()),
        );
        self.on = !self.on;

        Some(Frame {
            scale: if self.on { 1.0 } else { 0.0 },
            ..Frame::uniform(self.color, params.target_brightness())
        })
    }

    fn next_delay(&self, params: &AnimationParameters, _base: Duration) -> Duration {
        speed_delay(100.0, 70.0, params.speed())
    }
}
