// Minspeed
// Re-exports the core processor crate; enable `toml-config` or `evdev` to pull in those integrations

pub use minspeed_core::*;
