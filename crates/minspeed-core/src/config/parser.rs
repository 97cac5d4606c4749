// Minspeed Config Parser - TOML with Serde
// Parses processor declarations from TOML files

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::ConfigError;
use crate::input::{EventTypeName, RelCodeName};
use crate::processor::{instantiate, DeclarationStatus, InputProcessor, ProcessorDeclaration};

/// Root TOML table
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ProcessorsToml {
    #[serde(default)]
    processor: Vec<ProcessorToml>,
}

/// One `[[processor]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessorToml {
    /// Instance label
    pub name: String,

    /// "okay" (default) or "disabled"
    pub status: Option<String>,

    /// Event type, by name or number
    #[serde(rename = "type")]
    pub event_type: NameOrNumber,

    /// Codes within the type, by name or number
    #[serde(default)]
    pub codes: Vec<NameOrNumber>,

    /// Minimum magnitude
    pub min_value: i32,
}

/// A type or code given either symbolically or as a raw value
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NameOrNumber {
    Number(u16),
    Name(String),
}

impl ProcessorToml {
    fn to_declaration(&self) -> Result<ProcessorDeclaration, ConfigError> {
        let status = match &self.status {
            Some(s) => DeclarationStatus::from_str(s)
                .map_err(|_| ConfigError::InvalidStatus(format!("{} (processor '{}')", s, self.name)))?,
            None => DeclarationStatus::Okay,
        };

        let event_type = match &self.event_type {
            NameOrNumber::Number(n) => *n,
            NameOrNumber::Name(s) => EventTypeName::from_str(s)
                .map_err(|_| ConfigError::UnknownEventType(s.clone()))?
                .code(),
        };

        let codes = self
            .codes
            .iter()
            .map(|code| match code {
                NameOrNumber::Number(n) => Ok(*n),
                NameOrNumber::Name(s) => RelCodeName::from_str(s)
                    .map(RelCodeName::code)
                    .map_err(|_| ConfigError::UnknownCode(s.clone())),
            })
            .collect::<Result<Vec<u16>, ConfigError>>()?;

        log::trace!(
            "Declared processor '{}': type={} codes={:?} min_value={} status={}",
            self.name,
            event_type,
            codes,
            self.min_value,
            status
        );

        Ok(ProcessorDeclaration {
            name: self.name.clone(),
            status,
            event_type,
            codes,
            min_value: self.min_value,
        })
    }
}

/// All processor declarations from one configuration source
#[derive(Debug, Clone, Default)]
pub struct ProcessorsConfig {
    pub declarations: Vec<ProcessorDeclaration>,
}

impl ProcessorsConfig {
    /// Parse a TOML configuration file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string.
    ///
    /// Names are resolved here; thresholds are checked by [`Self::build`].
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let toml_config: ProcessorsToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        let declarations = toml_config
            .processor
            .iter()
            .map(ProcessorToml::to_declaration)
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Parsed {} processor declarations", declarations.len());

        Ok(Self { declarations })
    }

    /// Instantiate every enabled declaration
    pub fn build(&self) -> Result<Vec<Box<dyn InputProcessor>>, ConfigError> {
        instantiate(&self.declarations)
    }
}
