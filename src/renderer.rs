use embassy_time::Instant;
use heapless::Vec;
use tracing::trace;

use crate::color::scale_color;
use crate::rate_limit::RateLimiter;
use crate::zone::{FULL_BRIGHTNESS, Frame, MAX_ZONES, ZoneCommand};

/// Turns a smoothed [`Frame`] into one hardware write per zone.
///
/// No smoothing happens here; each zone color is multiplied by the frame
/// scale and the zone brightness, then clamped.
pub struct ZoneMapper;

impl ZoneMapper {
    pub fn render(frame: &Frame) -> Vec<ZoneCommand, MAX_ZONES> {
        let layout = frame.zones.layout();
        let mut commands = Vec::new();

        for (mask, zone) in layout.masks().iter().zip(frame.zones.zones()) {
            let scale = frame.scale * f32::from(zone.brightness) / 255.0;
            let color = scale_color(zone.color, scale);
            // Zone count never exceeds MAX_ZONES
            let _ = commands.push(ZoneCommand::new(*mask, color, FULL_BRIGHTNESS));
        }

        commands
    }
}

/// Renders frames through the rate limiter, skipping unchanged frames
pub struct Renderer {
    limiter: RateLimiter,
    last_frame: Option<Frame>,
}

impl Renderer {
    pub const fn new(limiter: RateLimiter) -> Self {
        Self {
            limiter,
            last_frame: None,
        }
    }

    /// Render `frame` unless it matches the last rendered one.
    ///
    /// Returns `true` when commands were handed to the limiter.
    pub fn render(&mut self, frame: Frame, now: Instant) -> bool {
        if self.last_frame == Some(frame) {
            return false;
        }
        for command in ZoneMapper::render(&frame) {
            self.limiter.submit(command, now);
        }
        trace!(scale = frame.scale, "frame rendered");
        self.last_frame = Some(frame);
        true
    }

    /// Unconditionally write the off command.
    pub fn render_off(&mut self, now: Instant) {
        self.limiter.force(ZoneCommand::off(), now);
        self.last_frame = None;
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}
