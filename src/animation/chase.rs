//! Chase around the four corners
//!
//! A lit head walks the ring left-top, left-bottom, right-top, right-bottom
//! and leaves a fading trail behind it.

use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, TickInput, speed_delay};
use crate::color::Rgb;
use crate::math::{lerp_color, ramp};
use crate::params::AnimationParameters;
use crate::zone::{Frame, MAX_ZONES, ZoneColorState, ZoneLayout, ZoneState};

/// Number of zones lit at once, head included
pub const TRAIL_LENGTH: usize = 2;

#[allow(clippy::cast_possible_truncation)]
const RING_SIZE: u8 = MAX_ZONES as u8;

#[derive(Debug, Clone)]
pub struct ChaseAnimation {
    color: Rgb,
    /// Zone lit on the next tick
    index: u8,
    /// Most recent first
    trail: Vec<u8, TRAIL_LENGTH>,
}

impl ChaseAnimation {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            index: 0,
            trail: Vec::new(),
        }
    }

    pub const fn ring_index(&self) -> u8 {
        self.index
    }

    pub fn trail(&self) -> &[u8] {
        &self.trail
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn trail_brightness(&self, zone: u8) -> u8 {
        self.trail
            .iter()
            .position(|&visited| visited == zone)
            .map_or(0, |position| {
                let level = 1.0 - position as f32 / TRAIL_LENGTH as f32;
                libm::roundf(level * 255.0) as u8
            })
    }
}

impl Animation for ChaseAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        self.color = lerp_color(
            self.color,
            params.target_color(),
            ramp(0.05, 0.5, params.speed()),
        );

        if self.trail.is_full() {
            self.trail.pop();
        }
        // Room was made above
        let _ = self.trail.insert(0, self.index);

        let mut zones = ZoneColorState::new(ZoneLayout::FourZone);
        for (zone, state) in (0..RING_SIZE).zip(zones.zones_mut()) {
            *state = ZoneState::new(self.color, self.trail_brightness(zone));
        }

        self.index = (self.index + 1) % RING_SIZE;
        Some(Frame::new(
            zones,
            f32::from(params.target_brightness()) / 255.0,
        ))
    }

    fn next_delay(&self, params: &AnimationParameters, _base: Duration) -> Duration {
        speed_delay(150.0, 100.0, params.speed())
    }
}
