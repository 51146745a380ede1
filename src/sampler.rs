//! External sample producers.
//!
//! Capture mechanics live outside this crate. A sampler is started with a
//! callback and calls it from its own thread whenever it has a new sample.

use embassy_time::{Duration, Instant};
use serde::Deserialize;

use crate::error::SamplerError;
use crate::zone::{ZoneColorSample, ZoneLayout};

/// Tick interval used when the profile asks for every sample.
pub const UNLIMITED_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// PCM RMS multiplier that maps normal listening levels near full scale
const RMS_GAIN: f32 = 5.0;

/// Sampling cadence shared by samplers and reactive ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalProfile {
    Low,
    Medium,
    #[default]
    High,
    /// Process every sample
    Unlimited,
}

impl IntervalProfile {
    /// Minimum spacing between samples; zero for [`IntervalProfile::Unlimited`].
    pub const fn interval(self) -> Duration {
        match self {
            Self::Low => Duration::from_millis(500),
            Self::Medium => Duration::from_millis(100),
            Self::High => Duration::from_millis(33),
            Self::Unlimited => Duration::from_ticks(0),
        }
    }

    /// Tick interval for reactive animations.
    pub const fn tick_interval(self) -> Duration {
        match self {
            Self::Unlimited => UNLIMITED_TICK_INTERVAL,
            profile => profile.interval(),
        }
    }
}

pub type ColorCallback = Box<dyn FnMut(ZoneColorSample) + Send>;
pub type IntensityCallback = Box<dyn FnMut(f32) + Send>;

/// Screen color capture
pub trait ScreenSampler: Send {
    /// Begin emitting per-zone colors for `layout` at most once per
    /// `profile` interval.
    fn start(
        &mut self,
        layout: ZoneLayout,
        profile: IntervalProfile,
        on_sample: ColorCallback,
    ) -> Result<(), SamplerError>;

    /// Release capture resources. No callback runs after this returns.
    fn stop(&mut self);
}

/// Audio loudness capture
pub trait AudioSampler: Send {
    /// Begin emitting loudness in `[0, 1]`.
    fn start(
        &mut self,
        profile: IntervalProfile,
        on_sample: IntensityCallback,
    ) -> Result<(), SamplerError>;

    /// Release capture resources. No callback runs after this returns.
    fn stop(&mut self);
}

/// Emission gate for sampler implementations.
///
/// Lets a sample through at most once per profile interval and only when it
/// differs from the last one emitted.
#[derive(Debug, Clone)]
pub struct SampleThrottle<T> {
    interval: Duration,
    last: Option<(T, Instant)>,
}

impl<T: PartialEq + Clone> SampleThrottle<T> {
    pub const fn new(profile: IntervalProfile) -> Self {
        Self {
            interval: profile.interval(),
            last: None,
        }
    }

    /// Returns `true` if `sample` should be emitted, recording it if so.
    pub fn admit(&mut self, sample: &T, now: Instant) -> bool {
        if let Some((previous, at)) = &self.last {
            if previous == sample {
                return false;
            }
            if now.saturating_duration_since(*at) < self.interval {
                return false;
            }
        }
        self.last = Some((sample.clone(), now));
        true
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Loudness of a signed 16-bit PCM buffer in `[0, 1]`.
#[allow(clippy::cast_precision_loss)]
pub fn rms_intensity(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples
        .iter()
        .map(|&sample| {
            let normalized = f64::from(sample) / 32768.0;
            normalized * normalized
        })
        .sum();
    #[allow(clippy::cast_possible_truncation)]
    let rms = libm::sqrtf((sum / samples.len() as f64) as f32);
    (rms * RMS_GAIN).clamp(0.0, 1.0)
}
