// Minspeed Core Library
// Minimum speed input processor for chained event pipelines

pub mod config;
pub mod input;
pub mod processor;

pub use config::ConfigError;
pub use input::{EventTypeName, InputEvent, RelCodeName};
pub use processor::min_speed::process;
pub use processor::{
    create_processor, instantiate, DeclarationStatus, InputProcessor, MinSpeedConfig,
    MinSpeedProcessor, ProcessStatus, ProcessorDeclaration, ProcessorState,
};

#[cfg(feature = "toml-config")]
pub use config::{ProcessorToml, ProcessorsConfig};
