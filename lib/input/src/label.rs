use crate::{Convention, GamepadButton, MAX_PLAYERS};
use std::{collections::HashMap, sync::LazyLock};
use strum::IntoEnumIterator;

struct LabelPair {
    numeric: String,
    named: String,
}

/// Canonical control code -> phrase under each convention
static DISPLAY_LABELS: LazyLock<HashMap<String, LabelPair>> = LazyLock::new(|| {
    (1..=MAX_PLAYERS)
        .flat_map(|player| {
            GamepadButton::iter().map(move |button| {
                (
                    format!("P{}_{}", player, button.control_suffix()),
                    LabelPair {
                        numeric: format!("P{} {}", player, numeric_phrase(button)),
                        named: format!("P{} {}", player, named_phrase(button)),
                    },
                )
            })
        })
        .collect()
});

fn numeric_phrase(button: GamepadButton) -> String {
    match button {
        GamepadButton::Start => "Start".to_string(),
        GamepadButton::Back => "Select".to_string(),
        GamepadButton::DPadUp => "Joystick Up".to_string(),
        GamepadButton::DPadDown => "Joystick Down".to_string(),
        GamepadButton::DPadLeft => "Joystick Left".to_string(),
        GamepadButton::DPadRight => "Joystick Right".to_string(),
        other => {
            let number = other.numeric().trim_start_matches("BUTTON");
            format!("Button {}", number)
        }
    }
}

fn named_phrase(button: GamepadButton) -> &'static str {
    match button {
        GamepadButton::FaceSouth => "A Button",
        GamepadButton::FaceEast => "B Button",
        GamepadButton::FaceWest => "X Button",
        GamepadButton::FaceNorth => "Y Button",
        GamepadButton::LeftBumper => "Left Bumper",
        GamepadButton::RightBumper => "Right Bumper",
        GamepadButton::LeftTrigger => "Left Trigger",
        GamepadButton::RightTrigger => "Right Trigger",
        GamepadButton::LeftThumb => "Left Stick Click",
        GamepadButton::RightThumb => "Right Stick Click",
        GamepadButton::Start => "Start",
        GamepadButton::Back => "Back",
        GamepadButton::DPadUp => "D-Pad Up",
        GamepadButton::DPadDown => "D-Pad Down",
        GamepadButton::DPadLeft => "D-Pad Left",
        GamepadButton::DPadRight => "D-Pad Right",
    }
}

/// Human readable phrase for a canonical control code, unknown codes are returned as is
pub fn display_label(code: &str, convention: Convention) -> &str {
    match DISPLAY_LABELS.get(code) {
        Some(pair) => match convention {
            Convention::Numeric => &pair.numeric,
            Convention::Named => &pair.named,
        },
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_convention() {
        assert_eq!(display_label("P1_BUTTON1", Convention::Numeric), "P1 Button 1");
        assert_eq!(display_label("P1_BUTTON1", Convention::Named), "P1 A Button");
        assert_eq!(display_label("P2_BUTTON10", Convention::Numeric), "P2 Button 10");
        assert_eq!(display_label("P4_JOYSTICK_LEFT", Convention::Named), "P4 D-Pad Left");
        assert_eq!(display_label("P3_SELECT", Convention::Named), "P3 Back");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(display_label("P5_BUTTON1", Convention::Named), "P5_BUTTON1");
        assert_eq!(display_label("COIN1", Convention::Numeric), "COIN1");
    }
}
