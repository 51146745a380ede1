//! Intent processing module
//!
//! Parameter changes made by the application travel to the tick thread as
//! intents over a bounded channel and are applied at the start of a tick.

use crate::animation::Capabilities;
use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::params::AnimationParameters;

/// Capacity of the intent channel, one slot per intent kind plus headroom.
pub const INTENT_CHANNEL_SIZE: usize = 8;

/// A single parameter change requested by the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterIntent {
    TargetColor(Rgb),
    TargetBrightness(u8),
    Response(f32),
    Speed(f32),
    Sensitivity(f32),
    SaturationBoost(f32),
}

impl ParameterIntent {
    /// Whether both intents target the same parameter.
    pub fn same_kind(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

/// Type alias for intent sender
pub type IntentSender = Sender<ParameterIntent, INTENT_CHANNEL_SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver = Receiver<ParameterIntent, INTENT_CHANNEL_SIZE>;

/// Type alias for the intent channel
pub type IntentChannel = Channel<ParameterIntent, INTENT_CHANNEL_SIZE>;

/// Queue an intent, replacing a pending intent for the same parameter.
///
/// Never fails: there are fewer intent kinds than channel slots.
pub fn submit_intent(sender: &IntentSender, intent: ParameterIntent) {
    let _ = sender.send_coalescing(intent, ParameterIntent::same_kind);
}

/// Applies queued intents to the running animation's parameters
pub struct IntentProcessor {
    intents: IntentReceiver,
}

impl IntentProcessor {
    pub const fn new(intents: IntentReceiver) -> Self {
        Self { intents }
    }

    /// Drain every pending intent (non-blocking).
    ///
    /// Returns `true` if any parameter changed.
    pub fn process_pending(
        &mut self,
        params: &mut AnimationParameters,
        capabilities: Capabilities,
    ) -> bool {
        let mut changed = false;
        while let Ok(intent) = self.intents.try_receive() {
            changed |= params.apply(intent, capabilities);
        }
        changed
    }
}
