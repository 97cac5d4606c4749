// Minspeed Processor Layer
// Host call contract for a single stage in an input processor chain

use std::fmt;

use crate::input::InputEvent;

pub mod min_speed;
pub mod registry;

pub use min_speed::{MinSpeedConfig, MinSpeedProcessor};
pub use registry::{create_processor, instantiate, DeclarationStatus, ProcessorDeclaration};

/// Tells the chain whether to hand the event to the next processor.
///
/// Values match the firmware constants:
///   0 == continue
///   1 == stop (event consumed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ProcessStatus {
    Continue = 0,
    Stop = 1,
}

impl ProcessStatus {
    /// Returns true if the event should flow to the next processor
    pub fn is_continue(self) -> bool {
        matches!(self, ProcessStatus::Continue)
    }

    /// Create a status from the host's integer return code
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(ProcessStatus::Continue),
            1 => Some(ProcessStatus::Stop),
            _ => None,
        }
    }

    /// Convert to the host's integer return code
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessStatus::Continue => write!(f, "continue"),
            ProcessStatus::Stop => write!(f, "stop"),
        }
    }
}

/// Bookkeeping the host carries alongside one event through the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessorState {
    /// Index of the input device that produced the event
    pub input_device_index: u8,

    /// Fractional carry used by scaling processors
    pub remainder: i16,
}

/// A stage in an input processor chain.
///
/// The host invokes `handle_event` synchronously once per routed event.
/// Implementations mutate `event` in place and report whether the chain
/// should continue.
pub trait InputProcessor: Send + Sync {
    /// Instance label used in diagnostics
    fn name(&self) -> &str;

    /// Process one event.
    ///
    /// `param1` and `param2` are the per-binding parameters supplied by the
    /// host for this chain entry.
    fn handle_event(
        &self,
        event: &mut InputEvent,
        param1: u32,
        param2: u32,
        state: &mut ProcessorState,
    ) -> ProcessStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ProcessStatus::Continue.to_i32(), 0);
        assert_eq!(ProcessStatus::Stop.to_i32(), 1);
        assert_eq!(ProcessStatus::from_i32(0), Some(ProcessStatus::Continue));
        assert_eq!(ProcessStatus::from_i32(1), Some(ProcessStatus::Stop));
        assert_eq!(ProcessStatus::from_i32(-22), None);
    }

    #[test]
    fn test_status_is_continue() {
        assert!(ProcessStatus::Continue.is_continue());
        assert!(!ProcessStatus::Stop.is_continue());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ProcessStatus::Continue.to_string(), "continue");
        assert_eq!(ProcessStatus::Stop.to_string(), "stop");
    }

    #[test]
    fn test_processor_state_default() {
        let state = ProcessorState::default();
        assert_eq!(state.input_device_index, 0);
        assert_eq!(state.remainder, 0);
    }
}
