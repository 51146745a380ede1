//! Tick scheduling for a running animation.
//!
//! Provides portable tick pacing without async/await or platform timers.
//! The caller is responsible for sleeping between ticks.

use embassy_time::{Duration, Instant};
use tracing::trace;

use crate::animation::{AnimationKind, AnimationSlot, Capabilities, TickInput};
use crate::bridge::SampleReceiver;
use crate::intent::{IntentProcessor, IntentReceiver};
use crate::params::AnimationParameters;
use crate::renderer::Renderer;
use crate::sampler::IntervalProfile;
use crate::zone::{ZoneColorSample, ZoneLayout};

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Whether a frame was handed to the renderer.
    pub rendered: bool,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives one animation instance.
///
/// Each tick:
/// 1. Applies queued parameter intents
/// 2. Takes at most one pending sample from each bridge
/// 3. Updates the animation (colors before brightness)
/// 4. Renders the resulting frame, if any
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(kind, layout, profile, params, intents, renderer);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler {
    kind: AnimationKind,
    capabilities: Capabilities,
    animation: AnimationSlot,
    params: AnimationParameters,
    intents: IntentProcessor,
    colors: Option<SampleReceiver<ZoneColorSample>>,
    intensity: Option<SampleReceiver<f32>>,
    renderer: Renderer,
    base_interval: Duration,
    next_tick: Instant,
    ticks: u64,
}

impl FrameScheduler {
    pub fn new(
        kind: AnimationKind,
        layout: ZoneLayout,
        profile: IntervalProfile,
        params: AnimationParameters,
        intents: IntentReceiver,
        renderer: Renderer,
    ) -> Self {
        Self {
            kind,
            capabilities: kind.capabilities(),
            animation: kind.to_slot(layout, &params),
            params,
            intents: IntentProcessor::new(intents),
            colors: None,
            intensity: None,
            renderer,
            base_interval: kind.base_interval(profile),
            next_tick: Instant::from_millis(0),
            ticks: 0,
        }
    }

    /// Attach the screen color bridge.
    #[must_use]
    pub fn with_color_samples(mut self, receiver: SampleReceiver<ZoneColorSample>) -> Self {
        self.colors = Some(receiver);
        self
    }

    /// Attach the audio intensity bridge.
    #[must_use]
    pub fn with_intensity_samples(mut self, receiver: SampleReceiver<f32>) -> Self {
        self.intensity = Some(receiver);
        self
    }

    /// Run one tick and return timing information.
    ///
    /// The caller waits until `next_deadline` before calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        self.intents
            .process_pending(&mut self.params, self.capabilities);

        let input = TickInput {
            colors: self.colors.as_ref().and_then(SampleReceiver::take),
            intensity: self.intensity.as_ref().and_then(SampleReceiver::take),
        };

        let rendered = self
            .animation
            .update(&self.params, &input)
            .is_some_and(|frame| self.renderer.render(frame, now));
        self.ticks += 1;

        let delay = self.animation.next_delay(&self.params, self.base_interval);

        // Skip the backlog after a stall instead of bursting to catch up
        let max_drift = Duration::from_ticks(delay.as_ticks().saturating_mul(2));
        if now > self.next_tick + max_drift {
            self.next_tick = now;
        }
        self.next_tick += delay;

        trace!(tick = self.ticks, rendered, "tick");

        TickResult {
            rendered,
            next_deadline: self.next_tick,
            sleep_duration: self.next_tick.saturating_duration_since(now),
        }
    }

    /// Write the off command. Called once, after the last tick.
    pub fn shutdown(&mut self, now: Instant) {
        self.renderer.render_off(now);
    }

    pub const fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub const fn params(&self) -> &AnimationParameters {
        &self.params
    }

    pub const fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Ticks run so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}
