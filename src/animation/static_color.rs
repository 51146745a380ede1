//! Static color fill
//!
//! Every zone shows the target color at the target brightness. No smoothing.

use super::{Animation, TickInput};
use crate::params::AnimationParameters;
use crate::zone::Frame;

#[derive(Debug, Clone, Default)]
pub struct StaticColorAnimation;

impl StaticColorAnimation {
    pub const fn new() -> Self {
        Self
    }
}

impl Animation for StaticColorAnimation {
    fn update(&mut self, params: &AnimationParameters, _input: &TickInput) -> Option<Frame> {
        Some(Frame::uniform(
            params.target_color(),
            params.target_brightness(),
        ))
    }
}
