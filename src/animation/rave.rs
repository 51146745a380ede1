//! Random color flashes

use embassy_time::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Animation, TickInput, speed_delay};
use crate::color::Rgb;
use crate::params::AnimationParameters;
use crate::zone::Frame;

/// A uniformly random color every tick
#[derive(Debug, Clone)]
pub struct RaveAnimation {
    rng: StdRng,
}

impl Default for RaveAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl RaveAnimation {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Animation for RaveAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        let color = Rgb {
            r: self.rng.gen_range(0..=255),
            g: self.rng.gen_range(0..=255),
            b: self.rng.gen_range(0..=255),
        };
        Some(Frame::uniform(color, params.target_brightness()))
    }

    fn next_delay(&self, params: &AnimationParameters, _base: Duration) -> Duration {
        speed_delay(150.0, 100.0, params.speed())
    }
}
