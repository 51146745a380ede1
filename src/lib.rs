pub mod animation;
pub mod bridge;
pub mod channel;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod intent;
pub mod math;
pub mod params;
pub mod rate_limit;
pub mod renderer;
pub mod sampler;
pub mod scheduler;
pub mod zone;

pub use animation::{Animation, AnimationKind, AnimationSlot, Capabilities, TickInput};
pub use bridge::{SamplePublisher, SampleReceiver, sample_bridge};
pub use config::EngineConfig;
pub use engine::AnimationEngine;
pub use error::{ConfigError, EngineError, SamplerError, SinkError};
pub use intent::{IntentChannel, IntentProcessor, IntentReceiver, IntentSender, ParameterIntent};
pub use params::AnimationParameters;
pub use rate_limit::RateLimiter;
pub use renderer::{Renderer, ZoneMapper};
pub use sampler::{AudioSampler, IntervalProfile, SampleThrottle, ScreenSampler, rms_intensity};
pub use scheduler::{FrameScheduler, TickResult};
pub use zone::{
    Frame, ZoneColorSample, ZoneColorState, ZoneCommand, ZoneLayout, ZoneMask, ZoneState,
};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Shared hardware sink for zone writes
///
/// Implement this trait for the concrete LED transport. Writes are
/// fire-and-forget from the engine's point of view: errors are logged by the
/// rate limiter and never retried.
pub trait LedSink: Send + Sync {
    /// Set color and brightness for every region in `command.mask`
    fn write(&self, command: ZoneCommand) -> Result<(), SinkError>;
}
