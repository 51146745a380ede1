//! Random per-zone sparkles
//!
//! Each tick every corner either relights at a random level or decays.

use embassy_time::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Animation, TickInput, speed_delay};
use crate::color::Rgb;
use crate::math::{lerp_color, ramp};
use crate::params::AnimationParameters;
use crate::zone::{Frame, MAX_ZONES, ZoneColorState, ZoneLayout, ZoneState};

const DECAY: f32 = 0.9;

#[derive(Debug, Clone)]
pub struct SparkleAnimation {
    color: Rgb,
    levels: [f32; MAX_ZONES],
    rng: StdRng,
}

impl SparkleAnimation {
    pub fn new(color: Rgb) -> Self {
        Self::with_rng(color, StdRng::from_entropy())
    }

    /// Deterministic sparkles for a given seed.
    pub fn with_seed(color: Rgb, seed: u64) -> Self {
        Self::with_rng(color, StdRng::seed_from_u64(seed))
    }

    fn with_rng(color: Rgb, rng: StdRng) -> Self {
        Self {
            color,
            levels: [0.0; MAX_ZONES],
            rng,
        }
    }

    /// Current per-zone levels in `[0, 1]`.
    pub const fn levels(&self) -> &[f32; MAX_ZONES] {
        &self.levels
    }
}

impl Animation for SparkleAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        let response = params.response();
        self.color = lerp_color(self.color, params.target_color(), ramp(0.05, 0.5, response));

        let chance = ramp(0.02, 0.1, response);
        for level in &mut self.levels {
            if self.rng.gen_range(0.0f32..1.0) < chance {
                *level = self.rng.gen_range(0.0f32..=1.0);
            } else {
                *level *= DECAY;
            }
        }

        let mut zones = ZoneColorState::new(ZoneLayout::FourZone);
        for (state, level) in zones.zones_mut().iter_mut().zip(self.levels) {
            let brightness = libm::roundf(level * 255.0).clamp(0.0, 255.0) as u8;
            *state = ZoneState::new(self.color, brightness);
        }

        Some(Frame::new(
            zones,
            f32::from(params.target_brightness()) / 255.0,
        ))
    }

    fn next_delay(&self, params: &AnimationParameters, _base: Duration) -> Duration {
        speed_delay(75.0, 50.0, params.speed())
    }
}
