use crate::Convention;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::LazyLock};
use strum::{EnumIter, IntoEnumIterator};

#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter,
)]
/// Physical inputs on a twin stick gamepad that both naming conventions agree on
pub enum GamepadButton {
    FaceSouth,
    FaceEast,
    FaceWest,
    FaceNorth,
    LeftBumper,
    RightBumper,
    LeftTrigger,
    RightTrigger,
    LeftThumb,
    RightThumb,
    Start,
    Back,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
}

impl GamepadButton {
    /// Token for this input under the numeric joystick convention
    pub const fn numeric(self) -> &'static str {
        match self {
            GamepadButton::FaceSouth => "BUTTON1",
            GamepadButton::FaceEast => "BUTTON2",
            GamepadButton::FaceWest => "BUTTON3",
            GamepadButton::FaceNorth => "BUTTON4",
            GamepadButton::LeftBumper => "BUTTON5",
            GamepadButton::RightBumper => "BUTTON6",
            GamepadButton::LeftTrigger => "BUTTON7",
            GamepadButton::RightTrigger => "BUTTON8",
            GamepadButton::LeftThumb => "BUTTON9",
            GamepadButton::RightThumb => "BUTTON10",
            GamepadButton::Start => "START",
            GamepadButton::Back => "SELECT",
            GamepadButton::DPadUp => "HATUP",
            GamepadButton::DPadDown => "HATDOWN",
            GamepadButton::DPadLeft => "HATLEFT",
            GamepadButton::DPadRight => "HATRIGHT",
        }
    }

    /// Token for this input under the named (face button) convention
    pub const fn named(self) -> &'static str {
        match self {
            GamepadButton::FaceSouth => "A",
            GamepadButton::FaceEast => "B",
            GamepadButton::FaceWest => "X",
            GamepadButton::FaceNorth => "Y",
            GamepadButton::LeftBumper => "LB",
            GamepadButton::RightBumper => "RB",
            GamepadButton::LeftTrigger => "LT",
            GamepadButton::RightTrigger => "RT",
            GamepadButton::LeftThumb => "LSB",
            GamepadButton::RightThumb => "RSB",
            GamepadButton::Start => "START",
            GamepadButton::Back => "BACK",
            GamepadButton::DPadUp => "DPAD_UP",
            GamepadButton::DPadDown => "DPAD_DOWN",
            GamepadButton::DPadLeft => "DPAD_LEFT",
            GamepadButton::DPadRight => "DPAD_RIGHT",
        }
    }

    /// Token under a given convention
    pub const fn token(self, convention: Convention) -> &'static str {
        match convention {
            Convention::Numeric => self.numeric(),
            Convention::Named => self.named(),
        }
    }

    /// Suffix of the canonical control code this input stands in for, e.g. `BUTTON1` or `JOYSTICK_UP`
    pub const fn control_suffix(self) -> &'static str {
        match self {
            GamepadButton::DPadUp => "JOYSTICK_UP",
            GamepadButton::DPadDown => "JOYSTICK_DOWN",
            GamepadButton::DPadLeft => "JOYSTICK_LEFT",
            GamepadButton::DPadRight => "JOYSTICK_RIGHT",
            other => other.numeric(),
        }
    }

    pub fn from_numeric(token: &str) -> Option<Self> {
        NUMERIC_TOKENS.get(token).copied()
    }

    pub fn from_named(token: &str) -> Option<Self> {
        NAMED_TOKENS.get(token).copied()
    }
}

static NUMERIC_TOKENS: LazyLock<HashMap<&'static str, GamepadButton>> = LazyLock::new(|| {
    GamepadButton::iter()
        .map(|button| (button.numeric(), button))
        .collect()
});

static NAMED_TOKENS: LazyLock<HashMap<&'static str, GamepadButton>> = LazyLock::new(|| {
    GamepadButton::iter()
        .map(|button| (button.named(), button))
        .collect()
});

/// Translate a numeric token (`BUTTON1`) into its named counterpart (`A`)
///
/// Tokens the table does not know are returned unchanged
pub fn to_named(token: &str) -> &str {
    GamepadButton::from_numeric(token).map_or(token, |button| button.named())
}

/// Translate a named token (`A`) into its numeric counterpart (`BUTTON1`)
///
/// Tokens the table does not know are returned unchanged
pub fn to_numeric(token: &str) -> &str {
    GamepadButton::from_named(token).map_or(token, |button| button.numeric())
}

/// Translate a single token into the requested convention, whichever convention it started in
pub fn translate_token(token: &str, convention: Convention) -> &str {
    match convention {
        Convention::Named => to_named(token),
        Convention::Numeric => to_numeric(token),
    }
}

/// Rewrite every `JOYCODE_<n>_<token>` inside an input sequence into the requested convention
///
/// Everything else in the sequence (keyboard codes, `OR`, `NOT`) passes through, as does
/// whitespace between tokens
pub fn translate_sequence(sequence: &str, convention: Convention) -> String {
    let mut translated = String::with_capacity(sequence.len());
    let mut rest = sequence;

    while !rest.is_empty() {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        let space_end = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        let (space, tail) = tail.split_at(space_end);

        translated.push_str(&translate_joycode(word, convention));
        translated.push_str(space);
        rest = tail;
    }

    translated
}

fn translate_joycode(word: &str, convention: Convention) -> String {
    let Some(body) = word.strip_prefix("JOYCODE_") else {
        return word.to_string();
    };

    let Some((index, token)) = body.split_once('_') else {
        return word.to_string();
    };

    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return word.to_string();
    }

    format!("JOYCODE_{}_{}", index, translate_token(token, convention))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_button_round_trips() {
        for button in GamepadButton::iter() {
            assert_eq!(to_numeric(to_named(button.numeric())), button.numeric());
            assert_eq!(to_named(to_numeric(button.named())), button.named());
        }
    }

    #[test]
    fn face_buttons() {
        assert_eq!(to_named("BUTTON1"), "A");
        assert_eq!(to_named("BUTTON4"), "Y");
        assert_eq!(to_named("SELECT"), "BACK");
        assert_eq!(to_numeric("RT"), "BUTTON8");
        assert_eq!(to_numeric("DPAD_LEFT"), "HATLEFT");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(to_named("BUTTON42"), "BUTTON42");
        assert_eq!(to_numeric("KEYCODE_LCONTROL"), "KEYCODE_LCONTROL");
        assert_eq!(translate_token("", Convention::Named), "");
    }

    #[test]
    fn sequence_translation() {
        assert_eq!(
            translate_sequence("JOYCODE_1_BUTTON3 OR KEYCODE_LSHIFT", Convention::Named),
            "JOYCODE_1_X OR KEYCODE_LSHIFT"
        );
        assert_eq!(
            translate_sequence("JOYCODE_2_RB  OR JOYCODE_2_HATUP", Convention::Numeric),
            "JOYCODE_2_BUTTON6  OR JOYCODE_2_HATUP"
        );
        assert_eq!(
            translate_sequence("JOYCODE_X_BUTTON1", Convention::Named),
            "JOYCODE_X_BUTTON1"
        );
        assert_eq!(translate_sequence("", Convention::Named), "");
    }

    #[test]
    fn dpad_maps_to_joystick_codes() {
        assert_eq!(GamepadButton::DPadUp.control_suffix(), "JOYSTICK_UP");
        assert_eq!(GamepadButton::FaceSouth.control_suffix(), "BUTTON1");
    }
}
