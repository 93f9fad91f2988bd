//! Controller naming tables shared by config rendering and binding display
//!
//! Everything in here is a read only constant, lookups never fail and tokens the tables do not
//! know about are handed back untouched

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

pub mod field;
pub mod gamepad;
pub mod label;

pub use field::control_code_for_field;
pub use gamepad::{GamepadButton, translate_sequence, translate_token};
pub use label::display_label;

/// Highest player number the fixed tables cover
pub const MAX_PLAYERS: u8 = 4;

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    Display,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
/// Which controller naming convention is active for display
pub enum Convention {
    /// `BUTTON1`, `BUTTON2`, `HATUP`
    Numeric,
    #[default]
    /// `A`, `B`, `DPAD_UP`
    Named,
}
