// Minspeed Config
// Error type and (optionally) TOML declaration parsing

mod error;

#[cfg(feature = "toml-config")]
pub mod parser;

pub use error::ConfigError;

#[cfg(feature = "toml-config")]
pub use parser::{ProcessorToml, ProcessorsConfig};
