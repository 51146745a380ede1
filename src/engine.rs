//! Running animation handle.
//!
//! [`AnimationEngine`] owns the lifecycle of one animation: the tick thread,
//! the sampler subscriptions and the final off command. Every method takes
//! `&self` and may be called from any thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use embassy_time::Instant;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::LedSink;
use crate::animation::AnimationKind;
use crate::bridge::{SamplePublisher, sample_bridge};
use crate::color::Rgb;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::intent::{IntentChannel, IntentSender, ParameterIntent, submit_intent};
use crate::math::{clamp_channel, clamp_unit};
use crate::params::AnimationParameters;
use crate::rate_limit::RateLimiter;
use crate::renderer::Renderer;
use crate::sampler::{AudioSampler, ScreenSampler};
use crate::scheduler::FrameScheduler;
use crate::zone::{ZoneColorSample, ZoneCommand};

struct Running {
    stop: Sender<()>,
    intents: IntentSender,
    thread: JoinHandle<FrameScheduler>,
    screen_started: bool,
    audio_started: bool,
}

struct EngineState {
    params: AnimationParameters,
    screen: Option<Box<dyn ScreenSampler>>,
    audio: Option<Box<dyn AudioSampler>>,
    running: Option<Running>,
}

/// Handle to a single animation instance
///
/// `start` spawns a dedicated tick thread; `stop` joins it and writes one
/// off command. Both are idempotent. Dropping a running engine stops it.
pub struct AnimationEngine {
    config: EngineConfig,
    sink: Arc<dyn LedSink>,
    state: Mutex<EngineState>,
}

impl AnimationEngine {
    /// Engine for `kind` with default settings.
    pub fn new(kind: AnimationKind, sink: Arc<dyn LedSink>) -> Self {
        Self::from_config(
            EngineConfig {
                animation: kind,
                ..EngineConfig::default()
            },
            sink,
        )
    }

    pub fn from_config(config: EngineConfig, sink: Arc<dyn LedSink>) -> Self {
        Self {
            state: Mutex::new(EngineState {
                params: config.parameters,
                screen: None,
                audio: None,
                running: None,
            }),
            config,
            sink,
        }
    }

    /// Engine configured from a TOML document.
    pub fn from_toml_str(source: &str, sink: Arc<dyn LedSink>) -> Result<Self, EngineError> {
        let config = EngineConfig::from_toml_str(source)?;
        Ok(Self::from_config(config, sink))
    }

    /// Screen sampler used by screen-driven animations.
    #[must_use]
    pub fn with_screen_sampler(mut self, sampler: impl ScreenSampler + 'static) -> Self {
        self.state.get_mut().screen = Some(Box::new(sampler));
        self
    }

    /// Audio sampler used by audio-driven animations.
    #[must_use]
    pub fn with_audio_sampler(mut self, sampler: impl AudioSampler + 'static) -> Self {
        self.state.get_mut().audio = Some(Box::new(sampler));
        self
    }

    /// Start ticking. A second call while running does nothing.
    ///
    /// A sampler that fails to start is logged and skipped; the animation
    /// keeps running without its samples.
    pub fn start(&self) -> Result<(), EngineError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if state.running.is_some() {
            debug!(animation = self.kind().as_str(), "already running");
            return Ok(());
        }

        let kind = self.config.animation;
        let (intents, intent_receiver) = IntentChannel::new().split();
        let renderer = Renderer::new(RateLimiter::new(
            Arc::clone(&self.sink),
            self.config.rate_limit,
        ));
        let mut scheduler = FrameScheduler::new(
            kind,
            self.config.layout,
            self.config.profile,
            state.params,
            intent_receiver,
            renderer,
        );

        let mut colors = None;
        if kind.uses_screen_sampler() && state.screen.is_some() {
            let (publisher, receiver) = sample_bridge::<ZoneColorSample>();
            scheduler = scheduler.with_color_samples(receiver);
            colors = Some(publisher);
        }
        let mut intensity = None;
        if kind.uses_audio_sampler() && state.audio.is_some() {
            let (publisher, receiver) = sample_bridge::<f32>();
            scheduler = scheduler.with_intensity_samples(receiver);
            intensity = Some(publisher);
        }

        let (stop, stop_signal) = crossbeam_channel::bounded(1);
        let thread = thread::Builder::new()
            .name(format!("zone-{}", kind.as_str()))
            .spawn(move || run_ticks(scheduler, &stop_signal))?;

        let screen_started = match (colors, state.screen.as_deref_mut()) {
            (Some(publisher), Some(sampler)) => self.start_screen(sampler, publisher),
            _ => false,
        };
        let audio_started = match (intensity, state.audio.as_deref_mut()) {
            (Some(publisher), Some(sampler)) => self.start_audio(sampler, publisher),
            _ => false,
        };

        state.running = Some(Running {
            stop,
            intents,
            thread,
            screen_started,
            audio_started,
        });
        info!(
            animation = kind.as_str(),
            layout = ?self.config.layout,
            profile = ?self.config.profile,
            "animation started"
        );
        Ok(())
    }

    fn start_screen(
        &self,
        sampler: &mut dyn ScreenSampler,
        publisher: SamplePublisher<ZoneColorSample>,
    ) -> bool {
        let callback = Box::new(move |sample: ZoneColorSample| publisher.publish(sample));
        match sampler.start(self.config.layout, self.config.profile, callback) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "screen sampler failed to start, running without screen samples");
                false
            }
        }
    }

    fn start_audio(
        &self,
        sampler: &mut dyn AudioSampler,
        publisher: SamplePublisher<f32>,
    ) -> bool {
        let callback = Box::new(move |raw: f32| publisher.publish(clamp_unit(raw)));
        match sampler.start(self.config.profile, callback) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "audio sampler failed to start, running without audio samples");
                false
            }
        }
    }

    /// Stop ticking and turn every zone off. Does nothing when stopped.
    pub fn stop(&self) {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let Some(running) = state.running.take() else {
            return;
        };

        // The thread may already be gone; joining below covers both cases
        let _ = running.stop.try_send(());

        if running.screen_started {
            if let Some(sampler) = state.screen.as_deref_mut() {
                sampler.stop();
            }
        }
        if running.audio_started {
            if let Some(sampler) = state.audio.as_deref_mut() {
                sampler.stop();
            }
        }

        match running.thread.join() {
            Ok(mut scheduler) => {
                scheduler.shutdown(Instant::now());
                debug!(ticks = scheduler.ticks(), "tick thread joined");
            }
            Err(_) => {
                warn!("tick thread panicked, writing off command directly");
                if let Err(err) = self.sink.write(ZoneCommand::off()) {
                    warn!(error = %err, "LED sink write failed");
                }
            }
        }
        info!(animation = self.kind().as_str(), "animation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().running.is_some()
    }

    pub const fn kind(&self) -> AnimationKind {
        self.config.animation
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current parameter values as seen by the application.
    pub fn parameters(&self) -> AnimationParameters {
        self.state.lock().params
    }

    pub fn set_target_color(&self, color: Rgb) {
        self.update(ParameterIntent::TargetColor(color));
    }

    /// Clamped to `0..=255`.
    pub fn set_target_brightness(&self, brightness: i32) {
        self.update(ParameterIntent::TargetBrightness(clamp_channel(brightness)));
    }

    pub fn set_response(&self, response: f32) {
        self.update(ParameterIntent::Response(clamp_unit(response)));
    }

    /// Same knob as [`AnimationEngine::set_response`].
    pub fn set_lerp_strength(&self, strength: f32) {
        self.set_response(strength);
    }

    pub fn set_speed(&self, speed: f32) {
        self.update(ParameterIntent::Speed(clamp_unit(speed)));
    }

    pub fn set_sensitivity(&self, sensitivity: f32) {
        self.update(ParameterIntent::Sensitivity(clamp_unit(sensitivity)));
    }

    pub fn set_saturation_boost(&self, boost: f32) {
        self.update(ParameterIntent::SaturationBoost(clamp_unit(boost)));
    }

    fn update(&self, intent: ParameterIntent) {
        let mut state = self.state.lock();
        if !state.params.apply(intent, self.kind().capabilities()) {
            return;
        }
        if let Some(running) = &state.running {
            submit_intent(&running.intents, intent);
        }
    }
}

impl Drop for AnimationEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Tick loop body of the animation thread. Returns the scheduler so the
/// caller can render the off command after the last tick.
fn run_ticks(mut scheduler: FrameScheduler, stop: &Receiver<()>) -> FrameScheduler {
    loop {
        let result = scheduler.tick(Instant::now());
        let timeout = std::time::Duration::from_micros(result.sleep_duration.as_micros());
        match stop.recv_timeout(timeout) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    scheduler
}
