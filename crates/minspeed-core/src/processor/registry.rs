// Minspeed Processor Registry
// Builds chain stages from declarations at startup

use strum_macros::{Display, EnumString};

use super::min_speed::{MinSpeedConfig, MinSpeedProcessor};
use super::InputProcessor;
use crate::config::ConfigError;

/// Whether a declared instance should be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DeclarationStatus {
    #[default]
    Okay,
    Disabled,
}

/// One declared minimum speed processor, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorDeclaration {
    /// Instance label
    pub name: String,
    /// Skip the instance when disabled
    pub status: DeclarationStatus,
    /// Event type to act on
    pub event_type: u16,
    /// Codes within `event_type` to act on
    pub codes: Vec<u16>,
    /// Minimum magnitude
    pub min_value: i32,
}

impl ProcessorDeclaration {
    /// Create an enabled declaration
    pub fn new(name: impl Into<String>, event_type: u16, codes: Vec<u16>, min_value: i32) -> Self {
        Self {
            name: name.into(),
            status: DeclarationStatus::Okay,
            event_type,
            codes,
            min_value,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status == DeclarationStatus::Okay
    }

    /// Validate into a configuration
    pub fn to_config(&self) -> Result<MinSpeedConfig, ConfigError> {
        MinSpeedConfig::with_name(
            self.name.as_str(),
            self.event_type,
            &self.codes,
            self.min_value,
        )
    }
}

/// Wrap a validated configuration as a chain stage
pub fn create_processor(config: MinSpeedConfig) -> Box<dyn InputProcessor> {
    Box::new(MinSpeedProcessor::new(config))
}

/// Build a processor for every enabled declaration, in declaration order.
///
/// Disabled declarations are skipped without validation. The first invalid
/// enabled declaration fails the whole call, so a host never starts with a
/// partially built set.
pub fn instantiate(
    declarations: &[ProcessorDeclaration],
) -> Result<Vec<Box<dyn InputProcessor>>, ConfigError> {
    let mut processors = Vec::with_capacity(declarations.len());

    for declaration in declarations {
        if !declaration.is_enabled() {
            log::debug!("Skipping disabled processor '{}'", declaration.name);
            continue;
        }
        processors.push(create_processor(declaration.to_config()?));
    }

    log::debug!(
        "Instantiated {} of {} declared processors",
        processors.len(),
        declarations.len()
    );

    Ok(processors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::codes::{EV_REL, REL_WHEEL, REL_X, REL_Y};
    use crate::input::InputEvent;
    use crate::processor::{ProcessStatus, ProcessorState};
    use std::str::FromStr;

    #[test]
    fn test_status_parse() {
        assert_eq!(DeclarationStatus::from_str("okay").unwrap(), DeclarationStatus::Okay);
        assert_eq!(DeclarationStatus::from_str("Disabled").unwrap(), DeclarationStatus::Disabled);
        assert!(DeclarationStatus::from_str("maybe").is_err());
        assert_eq!(DeclarationStatus::default().to_string(), "okay");
    }

    #[test]
    fn test_instantiate_preserves_order() {
        let declarations = vec![
            ProcessorDeclaration::new("pointer", EV_REL, vec![REL_X, REL_Y], 2),
            ProcessorDeclaration::new("scroll", EV_REL, vec![REL_WHEEL], 1),
        ];

        let processors = instantiate(&declarations).unwrap();
        let names: Vec<&str> = processors.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["pointer", "scroll"]);
    }

    #[test]
    fn test_instantiate_skips_disabled() {
        let mut disabled = ProcessorDeclaration::new("broken", EV_REL, vec![REL_X], -5);
        disabled.status = DeclarationStatus::Disabled;
        let declarations = vec![disabled, ProcessorDeclaration::new("scroll", EV_REL, vec![REL_WHEEL], 1)];

        let processors = instantiate(&declarations).unwrap();
        assert_eq!(processors.len(), 1);
        assert_eq!(processors[0].name(), "scroll");
    }

    #[test]
    fn test_instantiate_rejects_negative_min_value() {
        let declarations = vec![
            ProcessorDeclaration::new("pointer", EV_REL, vec![REL_X], 2),
            ProcessorDeclaration::new("scroll", EV_REL, vec![REL_WHEEL], -1),
        ];

        let err = instantiate(&declarations).err().unwrap();
        assert!(matches!(err, ConfigError::NegativeMinValue { ref name, value: -1 } if name == "scroll"));
    }

    #[test]
    fn test_instantiate_empty() {
        assert!(instantiate(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_created_processor_applies_floor() {
        let processor = create_processor(MinSpeedConfig::new(EV_REL, &[REL_WHEEL], 3).unwrap());
        let mut event = InputEvent::new(EV_REL, REL_WHEEL, -1);
        let mut state = ProcessorState::default();

        assert_eq!(
            processor.handle_event(&mut event, 0, 0, &mut state),
            ProcessStatus::Continue
        );
        assert_eq!(event.value, -3);
    }
}
