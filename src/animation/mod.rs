//! Animation system with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations and
//! dynamic dispatch. Each animation implements the `Animation` trait.

mod ambiaurora;
mod ambilight;
mod audio_reactive;
mod breath;
mod chase;
mod fade;
mod pulse;
mod rainbow;
mod rave;
pub mod reactive;
mod sparkle;
mod static_color;
mod strobe;

use embassy_time::Duration;

pub use ambiaurora::AmbiauroraAnimation;
pub use ambilight::AmbilightAnimation;
pub use audio_reactive::AudioReactiveAnimation;
pub use breath::BreathAnimation;
pub use chase::{ChaseAnimation, TRAIL_LENGTH};
pub use fade::FadeAnimation;
pub use pulse::PulseAnimation;
pub use rainbow::RainbowAnimation;
pub use rave::RaveAnimation;
pub use sparkle::SparkleAnimation;
pub use static_color::StaticColorAnimation;
pub use strobe::StrobeAnimation;

use crate::params::AnimationParameters;
use crate::sampler::IntervalProfile;
use crate::zone::{Frame, ZoneColorSample, ZoneLayout};

/// Tick interval of the procedural fixed-cadence animations
pub const PROCEDURAL_INTERVAL: Duration = Duration::from_millis(30);

const ANIMATION_NAME_AMBILIGHT: &str = "ambilight";
const ANIMATION_NAME_AMBIAURORA: &str = "ambiaurora";
const ANIMATION_NAME_AUDIO_REACTIVE: &str = "audio_reactive";
const ANIMATION_NAME_STATIC: &str = "static";
const ANIMATION_NAME_BREATH: &str = "breath";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_PULSE: &str = "pulse";
const ANIMATION_NAME_STROBE: &str = "strobe";
const ANIMATION_NAME_SPARKLE: &str = "sparkle";
const ANIMATION_NAME_FADE_TRANSITION: &str = "fade_transition";
const ANIMATION_NAME_RAVE: &str = "rave";
const ANIMATION_NAME_CHASE: &str = "chase";

const ANIMATION_ID_AMBILIGHT: u8 = 0;
const ANIMATION_ID_AMBIAURORA: u8 = 1;
const ANIMATION_ID_AUDIO_REACTIVE: u8 = 2;
const ANIMATION_ID_STATIC: u8 = 3;
const ANIMATION_ID_BREATH: u8 = 4;
const ANIMATION_ID_RAINBOW: u8 = 5;
const ANIMATION_ID_PULSE: u8 = 6;
const ANIMATION_ID_STROBE: u8 = 7;
const ANIMATION_ID_SPARKLE: u8 = 8;
const ANIMATION_ID_FADE_TRANSITION: u8 = 9;
const ANIMATION_ID_RAVE: u8 = 10;
const ANIMATION_ID_CHASE: u8 = 11;

/// Samples delivered to an animation for one tick
///
/// Each field holds the sample taken from its bridge this tick, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub colors: Option<ZoneColorSample>,
    pub intensity: Option<f32>,
}

impl TickInput {
    pub const EMPTY: Self = Self {
        colors: None,
        intensity: None,
    };

    pub const fn from_colors(sample: ZoneColorSample) -> Self {
        Self {
            colors: Some(sample),
            intensity: None,
        }
    }

    pub const fn from_intensity(intensity: f32) -> Self {
        Self {
            colors: None,
            intensity: Some(intensity),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.colors.is_none() && self.intensity.is_none()
    }
}

pub trait Animation {
    /// Advance one tick.
    ///
    /// Returns the frame to render, or `None` when nothing changed and the
    /// previous output stands.
    fn update(&mut self, params: &AnimationParameters, input: &TickInput) -> Option<Frame>;

    /// Delay before the next tick, given the variant's base interval.
    fn next_delay(&self, _params: &AnimationParameters, base: Duration) -> Duration {
        base
    }
}

/// Fixed per-variant feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub needs_external_capture: bool,
    pub needs_color_selection: bool,
    pub supports_speed: bool,
    pub supports_smoothness: bool,
    pub supports_audio_sensitivity: bool,
    pub supports_saturation_boost: bool,
}

impl Capabilities {
    const PROCEDURAL: Self = Self {
        needs_external_capture: false,
        needs_color_selection: true,
        supports_speed: true,
        supports_smoothness: false,
        supports_audio_sensitivity: false,
        supports_saturation_boost: false,
    };

    const CAPTURE: Self = Self {
        needs_external_capture: true,
        needs_color_selection: false,
        supports_speed: true,
        supports_smoothness: true,
        supports_audio_sensitivity: false,
        supports_saturation_boost: false,
    };
}

/// Indexed by animation id
static CAPABILITIES: [Capabilities; 12] = [
    // Ambilight
    Capabilities {
        supports_saturation_boost: true,
        ..Capabilities::CAPTURE
    },
    // Ambiaurora
    Capabilities {
        supports_audio_sensitivity: true,
        ..Capabilities::CAPTURE
    },
    // AudioReactive
    Capabilities {
        needs_color_selection: true,
        supports_audio_sensitivity: true,
        ..Capabilities::CAPTURE
    },
    // Static
    Capabilities {
        supports_speed: false,
        ..Capabilities::PROCEDURAL
    },
    // Breath
    Capabilities::PROCEDURAL,
    // Rainbow
    Capabilities {
        needs_color_selection: false,
        ..Capabilities::PROCEDURAL
    },
    // Pulse
    Capabilities::PROCEDURAL,
    // Strobe
    Capabilities::PROCEDURAL,
    // Sparkle
    Capabilities {
        supports_smoothness: true,
        ..Capabilities::PROCEDURAL
    },
    // FadeTransition
    Capabilities::PROCEDURAL,
    // Rave
    Capabilities {
        needs_color_selection: false,
        ..Capabilities::PROCEDURAL
    },
    // Chase
    Capabilities::PROCEDURAL,
];

/// Known animation variants that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimationKind {
    Ambilight = ANIMATION_ID_AMBILIGHT,
    Ambiaurora = ANIMATION_ID_AMBIAURORA,
    AudioReactive = ANIMATION_ID_AUDIO_REACTIVE,
    Static = ANIMATION_ID_STATIC,
    Breath = ANIMATION_ID_BREATH,
    Rainbow = ANIMATION_ID_RAINBOW,
    Pulse = ANIMATION_ID_PULSE,
    Strobe = ANIMATION_ID_STROBE,
    Sparkle = ANIMATION_ID_SPARKLE,
    FadeTransition = ANIMATION_ID_FADE_TRANSITION,
    Rave = ANIMATION_ID_RAVE,
    Chase = ANIMATION_ID_CHASE,
}

impl AnimationKind {
    pub const ALL: [Self; 12] = [
        Self::Ambilight,
        Self::Ambiaurora,
        Self::AudioReactive,
        Self::Static,
        Self::Breath,
        Self::Rainbow,
        Self::Pulse,
        Self::Strobe,
        Self::Sparkle,
        Self::FadeTransition,
        Self::Rave,
        Self::Chase,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_AMBILIGHT => Self::Ambilight,
            ANIMATION_ID_AMBIAURORA => Self::Ambiaurora,
            ANIMATION_ID_AUDIO_REACTIVE => Self::AudioReactive,
            ANIMATION_ID_STATIC => Self::Static,
            ANIMATION_ID_BREATH => Self::Breath,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_PULSE => Self::Pulse,
            ANIMATION_ID_STROBE => Self::Strobe,
            ANIMATION_ID_SPARKLE => Self::Sparkle,
            ANIMATION_ID_FADE_TRANSITION => Self::FadeTransition,
            ANIMATION_ID_RAVE => Self::Rave,
            ANIMATION_ID_CHASE => Self::Chase,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ambilight => ANIMATION_NAME_AMBILIGHT,
            Self::Ambiaurora => ANIMATION_NAME_AMBIAURORA,
            Self::AudioReactive => ANIMATION_NAME_AUDIO_REACTIVE,
            Self::Static => ANIMATION_NAME_STATIC,
            Self::Breath => ANIMATION_NAME_BREATH,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::Pulse => ANIMATION_NAME_PULSE,
            Self::Strobe => ANIMATION_NAME_STROBE,
            Self::Sparkle => ANIMATION_NAME_SPARKLE,
            Self::FadeTransition => ANIMATION_NAME_FADE_TRANSITION,
            Self::Rave => ANIMATION_NAME_RAVE,
            Self::Chase => ANIMATION_NAME_CHASE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_AMBILIGHT => Some(Self::Ambilight),
            ANIMATION_NAME_AMBIAURORA => Some(Self::Ambiaurora),
            ANIMATION_NAME_AUDIO_REACTIVE => Some(Self::AudioReactive),
            ANIMATION_NAME_STATIC => Some(Self::Static),
            ANIMATION_NAME_BREATH => Some(Self::Breath),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            ANIMATION_NAME_PULSE => Some(Self::Pulse),
            ANIMATION_NAME_STROBE => Some(Self::Strobe),
            ANIMATION_NAME_SPARKLE => Some(Self::Sparkle),
            ANIMATION_NAME_FADE_TRANSITION => Some(Self::FadeTransition),
            ANIMATION_NAME_RAVE => Some(Self::Rave),
            ANIMATION_NAME_CHASE => Some(Self::Chase),
            _ => None,
        }
    }

    pub fn capabilities(self) -> Capabilities {
        CAPABILITIES[usize::from(self.id())]
    }

    /// Whether the variant consumes screen color samples.
    pub const fn uses_screen_sampler(self) -> bool {
        matches!(self, Self::Ambilight | Self::Ambiaurora)
    }

    /// Whether the variant consumes audio intensity samples.
    pub const fn uses_audio_sampler(self) -> bool {
        matches!(self, Self::AudioReactive | Self::Ambiaurora)
    }

    /// Tick interval before any per-variant timing is applied.
    pub const fn base_interval(self, profile: IntervalProfile) -> Duration {
        if self.uses_screen_sampler() || self.uses_audio_sampler() {
            profile.tick_interval()
        } else {
            PROCEDURAL_INTERVAL
        }
    }

    /// Build a fresh instance. `layout` only matters for screen-driven
    /// variants.
    pub fn to_slot(self, layout: ZoneLayout, params: &AnimationParameters) -> AnimationSlot {
        let color = params.target_color();
        match self {
            Self::Ambilight => AnimationSlot::Ambilight(AmbilightAnimation::new(layout)),
            Self::Ambiaurora => AnimationSlot::Ambiaurora(AmbiauroraAnimation::new(layout)),
            Self::AudioReactive => AnimationSlot::AudioReactive(AudioReactiveAnimation::new()),
            Self::Static => AnimationSlot::Static(StaticColorAnimation::new()),
            Self::Breath => AnimationSlot::Breath(BreathAnimation::new(color)),
            Self::Rainbow => AnimationSlot::Rainbow(RainbowAnimation::new()),
            Self::Pulse => AnimationSlot::Pulse(PulseAnimation::new(color)),
            Self::Strobe => AnimationSlot::Strobe(StrobeAnimation::new(color)),
            Self::Sparkle => AnimationSlot::Sparkle(SparkleAnimation::new(color)),
            Self::FadeTransition => AnimationSlot::FadeTransition(FadeAnimation::new()),
            Self::Rave => AnimationSlot::Rave(RaveAnimation::new()),
            Self::Chase => AnimationSlot::Chase(ChaseAnimation::new(color)),
        }
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Ambilight(AmbilightAnimation),
    Ambiaurora(AmbiauroraAnimation),
    AudioReactive(AudioReactiveAnimation),
    Static(StaticColorAnimation),
    Breath(BreathAnimation),
    Rainbow(RainbowAnimation),
    Pulse(PulseAnimation),
    Strobe(StrobeAnimation),
    Sparkle(SparkleAnimation),
    FadeTransition(FadeAnimation),
    Rave(RaveAnimation),
    Chase(ChaseAnimation),
}

impl AnimationSlot {
    /// Advance the current animation by one tick
    pub fn update(&mut self, params: &AnimationParameters, input: &TickInput) -> Option<Frame> {
        match self {
            Self::Ambilight(animation) => animation.update(params, input),
            Self::Ambiaurora(animation) => animation.update(params, input),
            Self::AudioReactive(animation) => animation.update(params, input),
            Self::Static(animation) => animation.update(params, input),
            Self::Breath(animation) => animation.update(params, input),
            Self::Rainbow(animation) => animation.update(params, input),
            Self::Pulse(animation) => animation.update(params, input),
            Self::Strobe(animation) => animation.update(params, input),
            Self::Sparkle(animation) => animation.update(params, input),
            Self::FadeTransition(animation) => animation.update(params, input),
            Self::Rave(animation) => animation.update(params, input),
            Self::Chase(animation) => animation.update(params, input),
        }
    }

    /// Delay until the next tick
    pub fn next_delay(&self, params: &AnimationParameters, base: Duration) -> Duration {
        match self {
            Self::Ambilight(animation) => animation.next_delay(params, base),
            Self::Ambiaurora(animation) => animation.next_delay(params, base),
            Self::AudioReactive(animation) => animation.next_delay(params, base),
            Self::Static(animation) => animation.next_delay(params, base),
            Self::Breath(animation) => animation.next_delay(params, base),
            Self::Rainbow(animation) => animation.next_delay(params, base),
            Self::Pulse(animation) => animation.next_delay(params, base),
            Self::Strobe(animation) => animation.next_delay(params, base),
            Self::Sparkle(animation) => animation.next_delay(params, base),
            Self::FadeTransition(animation) => animation.next_delay(params, base),
            Self::Rave(animation) => animation.next_delay(params, base),
            Self::Chase(animation) => animation.next_delay(params, base),
        }
    }

    /// Get the animation kind for external observation
    pub fn kind(&self) -> AnimationKind {
        match self {
            Self::Ambilight(_) => AnimationKind::Ambilight,
            Self::Ambiaurora(_) => AnimationKind::Ambiaurora,
            Self::AudioReactive(_) => AnimationKind::AudioReactive,
            Self::Static(_) => AnimationKind::Static,
            Self::Breath(_) => AnimationKind::Breath,
            Self::Rainbow(_) => AnimationKind::Rainbow,
            Self::Pulse(_) => AnimationKind::Pulse,
            Self::Strobe(_) => AnimationKind::Strobe,
            Self::Sparkle(_) => AnimationKind::Sparkle,
            Self::FadeTransition(_) => AnimationKind::FadeTransition,
            Self::Rave(_) => AnimationKind::Rave,
            Self::Chase(_) => AnimationKind::Chase,
        }
    }
}

/// Milliseconds from a `[0, 1]` speed knob: `slowest - span * speed`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn speed_delay(slowest_ms: f32, span_ms: f32, speed: f32) -> Duration {
    let millis = slowest_ms - span_ms * crate::math::clamp_unit(speed);
    Duration::from_millis(millis.max(0.0) as u64)
}
