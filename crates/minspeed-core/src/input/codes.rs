// Minspeed Input Layer - Event Codes
// Numeric values match Linux input-event-codes.h (and Zephyr's INPUT_EV_*/INPUT_REL_*)

use strum_macros::{Display, EnumIter, EnumString};

/// EV_SYN event type code
pub const EV_SYN: u16 = 0x00;
/// EV_KEY event type code
pub const EV_KEY: u16 = 0x01;
/// EV_REL event type code
pub const EV_REL: u16 = 0x02;
/// EV_ABS event type code
pub const EV_ABS: u16 = 0x03;

pub const REL_X: u16 = 0x00;
pub const REL_Y: u16 = 0x01;
pub const REL_HWHEEL: u16 = 0x06;
pub const REL_WHEEL: u16 = 0x08;

/// Event types that can be named in configuration.
///
/// Parsing is case-insensitive and accepts the short form ("rel"), the
/// Linux name ("EV_REL") and the Zephyr name ("INPUT_EV_REL").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
#[repr(u16)]
pub enum EventTypeName {
    #[strum(to_string = "EV_SYN", serialize = "syn", serialize = "INPUT_EV_SYN")]
    Syn = EV_SYN,
    #[strum(to_string = "EV_KEY", serialize = "key", serialize = "INPUT_EV_KEY")]
    Key = EV_KEY,
    #[strum(to_string = "EV_REL", serialize = "rel", serialize = "INPUT_EV_REL")]
    Rel = EV_REL,
    #[strum(to_string = "EV_ABS", serialize = "abs", serialize = "INPUT_EV_ABS")]
    Abs = EV_ABS,
}

impl EventTypeName {
    /// Get the raw numeric type value
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Relative axis codes that can be named in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
#[repr(u16)]
pub enum RelCodeName {
    #[strum(to_string = "REL_X", serialize = "x", serialize = "INPUT_REL_X")]
    X = REL_X,
    #[strum(to_string = "REL_Y", serialize = "y", serialize = "INPUT_REL_Y")]
    Y = REL_Y,
    #[strum(
        to_string = "REL_HWHEEL",
        serialize = "hwheel",
        serialize = "INPUT_REL_HWHEEL"
    )]
    HWheel = REL_HWHEEL,
    #[strum(
        to_string = "REL_WHEEL",
        serialize = "wheel",
        serialize = "INPUT_REL_WHEEL"
    )]
    Wheel = REL_WHEEL,
}

impl RelCodeName {
    /// Get the raw numeric code value
    pub fn code(self) -> u16 {
        self as u16
    }
}
