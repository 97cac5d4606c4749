// Minspeed Input Layer - Event Record
// The event passed by mutable reference through each processor in a chain

use super::codes::EV_REL;

/// A single reported input occurrence.
///
/// Field layout follows the Linux/Zephyr `input_event` record: a category
/// (`event_type`), a signal within that category (`code`) and a signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputEvent {
    /// Event category (EV_REL = 0x02)
    pub event_type: u16,

    /// Signal within the category (REL_X, REL_WHEEL, ...)
    pub code: u16,

    /// Signed magnitude
    pub value: i32,

    /// Marks the last event of a report
    pub sync: bool,
}

impl InputEvent {
    /// Create an event with `sync` cleared
    pub fn new(event_type: u16, code: u16, value: i32) -> Self {
        Self {
            event_type,
            code,
            value,
            sync: false,
        }
    }

    /// Same event with the sync flag set
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Check if this is a relative motion event
    pub fn is_relative(&self) -> bool {
        self.event_type == EV_REL
    }
}

#[cfg(feature = "evdev")]
impl From<evdev::InputEvent> for InputEvent {
    fn from(event: evdev::InputEvent) -> Self {
        // evdev reports end-of-frame as a separate SYN_REPORT event
        Self::new(event.event_type().0, event.code(), event.value())
    }
}

#[cfg(feature = "evdev")]
impl From<InputEvent> for evdev::InputEvent {
    fn from(event: InputEvent) -> Self {
        evdev::InputEvent::new(evdev::EventType(event.event_type), event.code, event.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::codes::{EV_KEY, REL_WHEEL};

    #[test]
    fn test_new_clears_sync() {
        let event = InputEvent::new(EV_REL, REL_WHEEL, -1);
        assert!(!event.sync);
        assert_eq!(event.value, -1);
    }

    #[test]
    fn test_with_sync() {
        let event = InputEvent::new(EV_REL, REL_WHEEL, 1).with_sync(true);
        assert!(event.sync);
    }

    #[test]
    fn test_is_relative() {
        assert!(InputEvent::new(EV_REL, 0, 3).is_relative());
        assert!(!InputEvent::new(EV_KEY, 30, 1).is_relative());
    }

    #[test]
    #[cfg(feature = "evdev")]
    fn test_evdev_conversion() {
        let raw = evdev::InputEvent::new(evdev::EventType::RELATIVE, REL_WHEEL, -2);
        let event = InputEvent::from(raw);
        assert_eq!(event, InputEvent::new(EV_REL, REL_WHEEL, -2));

        let back: evdev::InputEvent = event.into();
        assert_eq!(back.event_type(), evdev::EventType::RELATIVE);
        assert_eq!(back.code(), REL_WHEEL);
        assert_eq!(back.value(), -2);
    }
}
