#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use myrtio_zone_composer::sampler::{ColorCallback, IntensityCallback};
use myrtio_zone_composer::{
    AudioSampler, IntervalProfile, LedSink, SamplerError, ScreenSampler, SinkError,
    ZoneColorSample, ZoneCommand, ZoneLayout,
};
use parking_lot::Mutex;

/// Sink that records every write
#[derive(Default)]
pub struct RecordingSink {
    writes: Mutex<Vec<ZoneCommand>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn writes(&self) -> Vec<ZoneCommand> {
        self.writes.lock().clone()
    }

    pub fn off_count(&self) -> usize {
        self.writes.lock().iter().filter(|c| c.is_off()).count()
    }

    pub fn clear(&self) {
        self.writes.lock().clear();
    }
}

impl LedSink for RecordingSink {
    fn write(&self, command: ZoneCommand) -> Result<(), SinkError> {
        self.writes.lock().push(command);
        Ok(())
    }
}

/// Sink that rejects every write
#[derive(Default)]
pub struct FailingSink {
    attempts: AtomicUsize,
}

impl FailingSink {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl LedSink for FailingSink {
    fn write(&self, _command: ZoneCommand) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::Unreachable)
    }
}

#[derive(Default)]
struct ScreenShared {
    callback: Option<ColorCallback>,
    layout: Option<ZoneLayout>,
    starts: usize,
    stops: usize,
}

/// Screen sampler driven by the test through a [`ScreenFeed`]
pub struct ManualScreenSampler {
    shared: Arc<Mutex<ScreenShared>>,
}

/// Test-side handle of a [`ManualScreenSampler`]
#[derive(Clone)]
pub struct ScreenFeed {
    shared: Arc<Mutex<ScreenShared>>,
}

pub fn manual_screen() -> (ManualScreenSampler, ScreenFeed) {
    let shared = Arc::new(Mutex::new(ScreenShared::default()));
    (
        ManualScreenSampler {
            shared: Arc::clone(&shared),
        },
        ScreenFeed { shared },
    )
}

impl ScreenFeed {
    /// Deliver a sample if the sampler is started.
    pub fn push(&self, sample: ZoneColorSample) -> bool {
        let mut shared = self.shared.lock();
        match shared.callback.as_mut() {
            Some(callback) => {
                callback(sample);
                true
            }
            None => false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.shared.lock().callback.is_some()
    }

    pub fn layout(&self) -> Option<ZoneLayout> {
        self.shared.lock().layout
    }

    pub fn starts(&self) -> usize {
        self.shared.lock().starts
    }

    pub fn stops(&self) -> usize {
        self.shared.lock().stops
    }
}

impl ScreenSampler for ManualScreenSampler {
    fn start(
        &mut self,
        layout: ZoneLayout,
        _profile: IntervalProfile,
        on_sample: ColorCallback,
    ) -> Result<(), SamplerError> {
        let mut shared = self.shared.lock();
        shared.callback = Some(on_sample);
        shared.layout = Some(layout);
        shared.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        let mut shared = self.shared.lock();
        shared.callback = None;
        shared.stops += 1;
    }
}

#[derive(Default)]
struct AudioShared {
    callback: Option<IntensityCallback>,
    starts: usize,
    stops: usize,
}

/// Audio sampler driven by the test through an [`AudioFeed`]
pub struct ManualAudioSampler {
    shared: Arc<Mutex<AudioShared>>,
}

#[derive(Clone)]
pub struct AudioFeed {
    shared: Arc<Mutex<AudioShared>>,
}

pub fn manual_audio() -> (ManualAudioSampler, AudioFeed) {
    let shared = Arc::new(Mutex::new(AudioShared::default()));
    (
        ManualAudioSampler {
            shared: Arc::clone(&shared),
        },
        AudioFeed { shared },
    )
}

impl AudioFeed {
    pub fn push(&self, intensity: f32) -> bool {
        let mut shared = self.shared.lock();
        match shared.callback.as_mut() {
            Some(callback) => {
                callback(intensity);
                true
            }
            None => false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.shared.lock().callback.is_some()
    }

    pub fn starts(&self) -> usize {
        self.shared.lock().starts
    }

    pub fn stops(&self) -> usize {
        self.shared.lock().stops
    }
}

impl AudioSampler for ManualAudioSampler {
    fn start(
        &mut self,
        _profile: IntervalProfile,
        on_sample: IntensityCallback,
    ) -> Result<(), SamplerError> {
        let mut shared = self.shared.lock();
        shared.callback = Some(on_sample);
        shared.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        let mut shared = self.shared.lock();
        shared.callback = None;
        shared.stops += 1;
    }
}

/// Sampler whose start always fails
pub struct RefusingSampler {
    pub stops: Arc<AtomicUsize>,
}

impl RefusingSampler {
    pub fn new() -> Self {
        Self {
            stops: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ScreenSampler for RefusingSampler {
    fn start(
        &mut self,
        _layout: ZoneLayout,
        _profile: IntervalProfile,
        _on_sample: ColorCallback,
    ) -> Result<(), SamplerError> {
        Err(SamplerError::PermissionDenied)
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

impl AudioSampler for RefusingSampler {
    fn start(
        &mut self,
        _profile: IntervalProfile,
        _on_sample: IntensityCallback,
    ) -> Result<(), SamplerError> {
        Err(SamplerError::Unsupported("no capture device".into()))
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}
