//! Error types for the zone composer
use thiserror::Error;

/// Engine lifecycle errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The tick thread could not be created
    #[error("failed to spawn tick thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// Invalid engine configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML syntax or type error
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Color string is not `#RRGGBB`
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Unknown animation name
    #[error("unknown animation: {0}")]
    UnknownAnimation(String),
}

/// Sampler start failures
///
/// The engine logs these and keeps running without samples.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("capture permission denied")]
    PermissionDenied,

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("device error: {0}")]
    Device(String),
}

/// LED sink write failures, swallowed by the rate limiter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("LED transport unreachable")]
    Unreachable,

    #[error("transport error: {0}")]
    Transport(String),
}
