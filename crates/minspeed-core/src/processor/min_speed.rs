// Minspeed Processor - Minimum Speed
// Raises small nonzero values on matching events up to a floor, keeping their sign

use smallvec::SmallVec;

use super::{InputProcessor, ProcessStatus, ProcessorState};
use crate::config::ConfigError;
use crate::input::InputEvent;

/// Instance label used when the host does not name the processor
pub const DEFAULT_NAME: &str = "min_speed";

/// Immutable configuration of one minimum speed processor.
///
/// Only obtainable through [`MinSpeedConfig::new`] or
/// [`MinSpeedConfig::with_name`], so a negative threshold can never reach
/// [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinSpeedConfig {
    name: String,
    event_type: u16,
    /// Membership-only; sets are a handful of axis codes
    codes: SmallVec<[u16; 8]>,
    min_value: i32,
}

impl MinSpeedConfig {
    /// Create a configuration with the default instance name
    pub fn new(event_type: u16, codes: &[u16], min_value: i32) -> Result<Self, ConfigError> {
        Self::with_name(DEFAULT_NAME, event_type, codes, min_value)
    }

    /// Create a named configuration.
    ///
    /// # Errors
    /// * `ConfigError::NegativeMinValue` if `min_value < 0`
    ///
    /// An empty `codes` slice is accepted with a warning; such a processor
    /// matches nothing.
    pub fn with_name(
        name: impl Into<String>,
        event_type: u16,
        codes: &[u16],
        min_value: i32,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        if min_value < 0 {
            return Err(ConfigError::NegativeMinValue {
                name,
                value: min_value,
            });
        }

        if codes.is_empty() {
            log::warn!(
                "Min speed processor '{}' has no codes configured; it will match no events",
                name
            );
        }

        Ok(Self {
            name,
            event_type,
            codes: SmallVec::from_slice(codes),
            min_value,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn event_type(&self) -> u16 {
        self.event_type
    }

    pub fn codes(&self) -> &[u16] {
        &self.codes
    }

    /// Minimum magnitude; always non-negative
    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    /// Check if an event is in scope (same type, code in the set)
    pub fn matches(&self, event: &InputEvent) -> bool {
        event.event_type == self.event_type && self.codes.contains(&event.code)
    }
}

/// Apply the minimum speed policy to one event.
///
/// Out-of-scope and zero-valued events are left alone. An in-scope value whose
/// magnitude is below `min_value` becomes `+min_value` or `-min_value`
/// according to its sign. The chain always continues.
pub fn process(config: &MinSpeedConfig, event: &mut InputEvent) -> ProcessStatus {
    if !config.matches(event) {
        return ProcessStatus::Continue;
    }

    let value = event.value;
    if value == 0 {
        return ProcessStatus::Continue;
    }

    // i32::MIN has no positive counterpart; it is boosted like any negative value
    let below_floor = value
        .checked_abs()
        .map_or(true, |abs_value| abs_value < config.min_value);

    if below_floor {
        event.value = if value < 0 {
            -config.min_value
        } else {
            config.min_value
        };

        log::debug!(
            "Min speed applied by '{}': original={}, new={} (min={})",
            config.name,
            value,
            event.value,
            config.min_value
        );
    }

    ProcessStatus::Continue
}

/// Chain stage wrapping a [`MinSpeedConfig`].
///
/// Holds no per-event state, so a single instance can be shared across
/// threads and invoked concurrently on distinct events.
#[derive(Debug, Clone)]
pub struct MinSpeedProcessor {
    config: MinSpeedConfig,
}

impl MinSpeedProcessor {
    pub fn new(config: MinSpeedConfig) -> Self {
        log::debug!(
            "Initializing minimum speed input processor: {}",
            config.name()
        );
        Self { config }
    }

    pub fn config(&self) -> &MinSpeedConfig {
        &self.config
    }

    /// Process one event without host parameters
    pub fn process(&self, event: &mut InputEvent) -> ProcessStatus {
        process(&self.config, event)
    }
}

impl InputProcessor for MinSpeedProcessor {
    fn name(&self) -> &str {
        self.config.name()
    }

    fn handle_event(
        &self,
        event: &mut InputEvent,
        _param1: u32,
        _param2: u32,
        _state: &mut ProcessorState,
    ) -> ProcessStatus {
        process(&self.config, event)
    }
}
