//! Loudness-driven single color
//!
//! Brightness follows audio intensity with a fast attack and slower decay.
//! While lit, the animation keeps decaying toward the last intensity even
//! without new samples.

use super::reactive::{IntensityFollower, perceptual_scale};
use super::{Animation, TickInput};
use crate::params::AnimationParameters;
use crate::zone::Frame;

#[derive(Debug, Clone, Default)]
pub struct AudioReactiveAnimation {
    follower: IntensityFollower,
    last_intensity: f32,
}

impl AudioReactiveAnimation {
    pub const fn new() -> Self {
        Self {
            follower: IntensityFollower::new(0),
            last_intensity: 0.0,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.follower.brightness()
    }

    pub const fn smoothed_intensity(&self) -> f32 {
        self.follower.smoothed()
    }
}

impl Animation for AudioReactiveAnimation {
    fn update(&mut self, params: &AnimationParameters, input: &TickInput) -> Option<Frame> {
        if let Some(intensity) = input.intensity {
            self.last_intensity = intensity;
        } else if self.follower.brightness() == 0 {
            return None;
        }

        let brightness = self.follower.step(self.last_intensity, params);
        Some(Frame {
            scale: perceptual_scale(brightness),
            ..Frame::uniform(params.target_color(), u8::MAX)
        })
    }
}
