//! Screen colors with audio-driven brightness
//!
//! Runs the screen color pipeline and the loudness pipeline side by side;
//! each advances only when its own sample arrives. The two combine
//! multiplicatively at render time.

use super::reactive::{IntensityFollower, ZoneFollower, color_factor};
use super::{Animation, TickInput};
use crate::params::AnimationParameters;
use crate::zone::{Frame, ZoneLayout};

#[derive(Debug, Clone)]
pub struct AmbiauroraAnimation {
    colors: ZoneFollower,
    intensity: IntensityFollower,
}

impl AmbiauroraAnimation {
    pub const fn new(layout: ZoneLayout) -> Self {
        Self {
            colors: ZoneFollower::new(layout),
            intensity: IntensityFollower::new(0),
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.intensity.brightness()
    }
}

impl Animation for AmbiauroraAnimation {
    fn update(&mut self, params: &AnimationParameters, input: &TickInput) -> Option<Frame> {
        let mut changed = false;

        // Colors first, then brightness
        if let Some(sample) = &input.colors {
            changed |= self
                .colors
                .apply(sample, color_factor(params.response()), 0.0);
        }
        if let Some(raw) = input.intensity {
            self.intensity.step(raw, params);
            changed = true;
        }

        changed.then(|| {
            Frame::new(
                *self.colors.zones(),
                f32::from(self.intensity.brightness()) / 255.0,
            )
        })
    }
}
