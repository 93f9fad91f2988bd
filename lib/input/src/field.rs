use crate::{GamepadButton, MAX_PLAYERS};
use std::{collections::HashMap, sync::LazyLock};
use strum::IntoEnumIterator;

/// Template field name -> canonical control code
///
/// Field names follow `input_player<n>_<named token>`, e.g. `input_player1_a` is `P1_BUTTON1`
static FIELD_CODES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    (1..=MAX_PLAYERS)
        .flat_map(|player| {
            GamepadButton::iter().map(move |button| {
                (
                    field_name(player, button),
                    format!("P{}_{}", player, button.control_suffix()),
                )
            })
        })
        .collect()
});

/// Template field name used for a player's input
pub fn field_name(player: u8, button: GamepadButton) -> String {
    format!(
        "input_player{}_{}",
        player,
        button.named().to_ascii_lowercase()
    )
}

/// Canonical control code a template field stands for, if any
pub fn control_code_for_field(field: &str) -> Option<&'static str> {
    FIELD_CODES.get(field.trim()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_to_codes() {
        assert_eq!(control_code_for_field("input_player1_a"), Some("P1_BUTTON1"));
        assert_eq!(control_code_for_field("input_player2_rb"), Some("P2_BUTTON6"));
        assert_eq!(
            control_code_for_field("input_player3_dpad_up"),
            Some("P3_JOYSTICK_UP")
        );
        assert_eq!(control_code_for_field("input_player1_back"), Some("P1_SELECT"));
        assert_eq!(control_code_for_field("  input_player4_start "), Some("P4_START"));
    }

    #[test]
    fn unknown_fields() {
        assert_eq!(control_code_for_field("field t"), None);
        assert_eq!(control_code_for_field("input_player5_a"), None);
    }

    #[test]
    fn field_name_shape() {
        assert_eq!(field_name(1, GamepadButton::LeftThumb), "input_player1_lsb");
    }
}
