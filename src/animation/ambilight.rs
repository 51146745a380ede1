//! Screen-following ambient light
//!
//! Zone colors chase the latest screen sample, optionally with a saturation
//! boost; brightness eases toward the target. Nothing happens between
//! samples.

use super::reactive::{ZoneFollower, color_factor};
use super::{Animation, TickInput};
use crate::math::lerp_int;
use crate::params::AnimationParameters;
use crate::zone::{FULL_BRIGHTNESS, Frame, ZoneLayout};

#[derive(Debug, Clone)]
pub struct AmbilightAnimation {
    colors: ZoneFollower,
    brightness: u8,
}

impl AmbilightAnimation {
    pub const fn new(layout: ZoneLayout) -> Self {
        Self {
            colors: ZoneFollower::new(layout),
            brightness: FULL_BRIGHTNESS,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Animation for AmbilightAnimation {
    fn update(&mut self, params: &AnimationParameters, input: &TickInput) -> Option<Frame> {
        let sample = input.colors.as_ref()?;
        let factor = color_factor(params.response());

        if !self
            .colors
            .apply(sample, factor, params.saturation_boost())
        {
            return None;
        }
        self.brightness = lerp_int(
            i32::from(self.brightness),
            i32::from(params.target_brightness()),
            factor,
        );

        Some(Frame::new(
            *self.colors.zones(),
            f32::from(self.brightness) / 255.0,
        ))
    }
}
