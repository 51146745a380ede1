//! TOML engine configuration.
//!
//! ```toml
//! animation = "ambilight"
//! layout = "four_zone"
//! profile = "high"
//! rate_limit_ms = 25
//!
//! [parameters]
//! color = "#FF8800"
//! brightness = 200
//! response = 0.7
//! ```

use embassy_time::Duration;
use serde::Deserialize;

use crate::animation::AnimationKind;
use crate::color::parse_hex;
use crate::error::ConfigError;
use crate::params::AnimationParameters;
use crate::rate_limit::DEFAULT_MIN_INTERVAL;
use crate::sampler::IntervalProfile;
use crate::zone::ZoneLayout;

/// Validated engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub animation: AnimationKind,
    /// Layout requested from the screen sampler
    pub layout: ZoneLayout,
    pub profile: IntervalProfile,
    /// Minimum interval between identical hardware writes
    pub rate_limit: Duration,
    pub parameters: AnimationParameters,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            animation: AnimationKind::Static,
            layout: ZoneLayout::default(),
            profile: IntervalProfile::default(),
            rate_limit: DEFAULT_MIN_INTERVAL,
            parameters: AnimationParameters::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    animation: Option<String>,
    layout: ZoneLayout,
    profile: IntervalProfile,
    rate_limit_ms: Option<u64>,
    parameters: RawParameters,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawParameters {
    color: Option<String>,
    brightness: Option<i64>,
    response: Option<f32>,
    speed: Option<f32>,
    sensitivity: Option<f32>,
    saturation_boost: Option<f32>,
    secondary_color: Option<String>,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// Numeric parameters are clamped into range. Unknown animation names and
    /// malformed colors are errors.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(source)?;
        let defaults = Self::default();

        let animation = match raw.animation {
            Some(name) => AnimationKind::parse_from_str(&name)
                .ok_or(ConfigError::UnknownAnimation(name))?,
            None => defaults.animation,
        };

        Ok(Self {
            animation,
            layout: raw.layout,
            profile: raw.profile,
            rate_limit: raw
                .rate_limit_ms
                .map_or(defaults.rate_limit, Duration::from_millis),
            parameters: raw.parameters.into_parameters()?,
        })
    }
}

impl RawParameters {
    fn into_parameters(self) -> Result<AnimationParameters, ConfigError> {
        let mut params = AnimationParameters::default();

        if let Some(color) = self.color {
            params.set_target_color(parse_color(&color)?);
        }
        if let Some(color) = self.secondary_color {
            params.set_secondary_color(parse_color(&color)?);
        }
        if let Some(brightness) = self.brightness {
            params.set_target_brightness(i32::try_from(brightness.clamp(0, 255)).unwrap_or(255));
        }
        if let Some(response) = self.response {
            params.set_response(response);
        }
        if let Some(speed) = self.speed {
            params.set_speed(speed);
        }
        if let Some(sensitivity) = self.sensitivity {
            params.set_sensitivity(sensitivity);
        }
        if let Some(boost) = self.saturation_boost {
            params.set_saturation_boost(boost);
        }

        Ok(params)
    }
}

fn parse_color(value: &str) -> Result<crate::color::Rgb, ConfigError> {
    parse_hex(value).ok_or_else(|| ConfigError::InvalidColor(value.to_string()))
}
