//! Square-wave pulse

use super::{Animation, TickInput};
use crate::color::Rgb;
use crate::math::{lerp_color, ramp};
use crate::params::AnimationParameters;
use crate::zone::Frame;

/// Holds fully on, then fully off, for `40 - 30 * speed` ticks each.
#[derive(Debug, Clone)]
pub struct PulseAnimation {
    color: Rgb,
    on: bool,
    counter: u32,
}

impl PulseAnimation {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            on: false,
            counter: 0,
        }
    }

    pub const fn is_on(&self) -> bool {
        self.on
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn duration(speed: f32) -> u32 {
        (40.0 - 30.0 * speed) as u32
    }
}

impl Animation for PulseAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        let speed = params.speed();
        self.color = lerp_color(self.color, params.target_color(), ramp(0.05, 0.5, speed));

        let frame = Frame {
            scale: if self.on { 1.0 } else { 0.0 },
            ..Frame::uniform(self.color, params.target_brightness())
        };

        self.counter += 1;
        if self.counter >= Self::duration(speed) {
            self.on = !self.on;
            self.counter = 0;
        }
        Some(frame)
    }
}
