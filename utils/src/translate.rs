use ctrlmap_input::{Convention, translate_sequence, translate_token};

/// A bare token (`LB`) or a whole input sequence (`JOYCODE_1_BUTTON5 OR KEYCODE_Q`)
fn translate_input(input: &str, convention: Convention) -> String {
    let input = input.trim();

    if input.contains(char::is_whitespace) || input.starts_with("JOYCODE_") {
        translate_sequence(input, convention)
    } else {
        translate_token(input, convention).to_string()
    }
}

pub fn translate(inputs: &[String], convention: Convention) {
    for input in inputs {
        println!("{}", translate_input(input, convention));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tokens() {
        assert_eq!(translate_input("A", Convention::Numeric), "BUTTON1");
        assert_eq!(translate_input("BUTTON5", Convention::Named), "LB");
        assert_eq!(translate_input(" HATUP ", Convention::Named), "DPAD_UP");
        assert_eq!(translate_input("KEYCODE_Q", Convention::Named), "KEYCODE_Q");
    }

    #[test]
    fn sequences() {
        assert_eq!(
            translate_input("JOYCODE_1_BUTTON5 OR KEYCODE_Q", Convention::Named),
            "JOYCODE_1_LB OR KEYCODE_Q"
        );
        assert_eq!(
            translate_input("JOYCODE_2_A", Convention::Numeric),
            "JOYCODE_2_BUTTON1"
        );
    }
}
