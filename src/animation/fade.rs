//! Ping-pong fade between the target color and a second color

use super::{Animation, TickInput};
use crate::math::{lerp_color, ramp};
use crate::params::AnimationParameters;
use crate::zone::Frame;

/// Progress within this distance of a bound counts as reaching it.
const BOUND_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone)]
pub struct FadeAnimation {
    /// Position between the two colors in `[0, 1]`
    progress: f32,
    /// `1` toward the second color, `-1` back
    direction: i8,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub const fn new() -> Self {
        Self {
            progress: 0.0,
            direction: 1,
        }
    }

    pub const fn progress(&self) -> f32 {
        self.progress
    }

    pub const fn direction(&self) -> i8 {
        self.direction
    }
}

impl Animation for FadeAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        let color = lerp_color(
            params.target_color(),
            params.secondary_color(),
            self.progress,
        );
        let frame = Frame::uniform(color, params.target_brightness());

        let step = ramp(0.01, 0.05, params.speed());
        self.progress += step * f32::from(self.direction);
        if self.progress >= 1.0 - BOUND_EPSILON {
            self.progress = 1.0;
            self.direction = -1;
        } else if self.progress <= BOUND_EPSILON {
            self.progress = 0.0;
            self.direction = 1;
        }

        Some(frame)
    }
}
