//! Reading the per ROM custom binding documents an emulator writes when inputs are remapped

use crate::descriptor::ControlDescriptor;
use ctrlmap_input::{Convention, display_label, translate_sequence};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Control code -> bound input sequence, in document order
pub type Bindings = IndexMap<String, String>;

#[derive(Debug, Deserialize)]
struct MameConfig {
    #[serde(default)]
    system: Vec<SystemConfig>,
}

#[derive(Debug, Deserialize)]
struct SystemConfig {
    #[serde(default)]
    input: Option<InputConfig>,
}

#[derive(Debug, Deserialize)]
struct InputConfig {
    #[serde(default)]
    port: Vec<PortConfig>,
}

#[derive(Debug, Deserialize)]
struct PortConfig {
    #[serde(rename = "@type")]
    control: String,
    #[serde(default)]
    newseq: Vec<NewSequence>,
}

#[derive(Debug, Deserialize)]
struct NewSequence {
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "$text", default)]
    sequence: String,
}

impl PortConfig {
    /// The standard sequence, or the first one when nothing is tagged standard
    fn sequence(&self) -> Option<&str> {
        self.newseq
            .iter()
            .find(|sequence| sequence.kind.as_deref() == Some("standard"))
            .or_else(|| self.newseq.first())
            .map(|sequence| sequence.sequence.trim())
    }
}

/// Parse a custom binding document
///
/// Anything that is not a well formed config yields an empty map, which callers treat the same
/// as there being no custom bindings at all
pub fn extract(document: &str) -> Bindings {
    let config: MameConfig = match quick_xml::de::from_str(document) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Ignoring malformed binding document: {}", err);
            return Bindings::default();
        }
    };

    let mut bindings = Bindings::default();

    for port in config
        .system
        .iter()
        .filter_map(|system| system.input.as_ref())
        .flat_map(|input| input.port.iter())
    {
        if let Some(sequence) = port.sequence() {
            bindings
                .entry(port.control.clone())
                .or_insert_with(|| sequence.to_string());
        }
    }

    bindings
}

/// Read and parse the binding document at `path`, a missing file has no bindings
pub fn load_bindings(path: impl AsRef<Path>) -> Bindings {
    let path = path.as_ref();

    match fs::read_to_string(path) {
        Ok(document) => extract(&document),
        Err(err) => {
            tracing::debug!("No binding document at \"{}\": {}", path.display(), err);
            Bindings::default()
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// One line of the "what does this button do, and what is it bound to" comparison
pub struct BindingRow {
    pub code: String,
    /// Human readable name of the control under the active convention
    pub control: String,
    pub action: String,
    /// Custom binding in the active convention, absent when the default is in use
    pub bound: Option<String>,
}

/// Line up every label of a descriptor with any custom binding for it
pub fn compare(
    descriptor: &ControlDescriptor,
    bindings: &Bindings,
    convention: Convention,
) -> Vec<BindingRow> {
    descriptor
        .labels()
        .map(|label| BindingRow {
            code: label.code.clone(),
            control: display_label(&label.code, convention).to_string(),
            action: label.action.clone(),
            bound: bindings
                .get(&label.code)
                .map(|sequence| translate_sequence(sequence, convention)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ControlLabel, PlayerControls};

    const DOCUMENT: &str = r#"<?xml version="1.0"?>
<mameconfig version="10">
    <system name="sf2">
        <input>
            <port tag=":IN1" type="P1_BUTTON1" mask="16" defvalue="16">
                <newseq type="standard">
                    JOYCODE_1_BUTTON3
                </newseq>
            </port>
            <port tag=":IN1" type="P1_BUTTON2" mask="32" defvalue="32">
                <newseq type="increment">KEYCODE_A</newseq>
                <newseq type="standard">JOYCODE_1_BUTTON4 OR KEYCODE_LALT</newseq>
            </port>
            <port tag=":IN0" type="COIN1" mask="1" defvalue="1">
                <newseq>KEYCODE_5</newseq>
            </port>
        </input>
    </system>
</mameconfig>
"#;

    #[test]
    fn extracts_standard_sequences() {
        let bindings = extract(DOCUMENT);

        assert_eq!(
            bindings.into_iter().collect::<Vec<_>>(),
            [
                ("P1_BUTTON1".to_string(), "JOYCODE_1_BUTTON3".to_string()),
                (
                    "P1_BUTTON2".to_string(),
                    "JOYCODE_1_BUTTON4 OR KEYCODE_LALT".to_string()
                ),
                ("COIN1".to_string(), "KEYCODE_5".to_string()),
            ]
        );
    }

    #[test]
    fn other_elements_between_ports() {
        let bindings = extract(
            r#"<mameconfig version="10">
    <system name="sf2">
        <input>
            <port tag=":IN1" type="P1_BUTTON1" mask="16" defvalue="16">
                <newseq type="standard">JOYCODE_1_BUTTON3</newseq>
            </port>
            <keyboard tag=":kbd" enabled="1"/>
            <mapdevice device="JOYCODE_1" controller="JOYCODE_2"/>
            <port tag=":IN1" type="P1_BUTTON2" mask="32" defvalue="32">
                <newseq type="standard">JOYCODE_1_BUTTON4</newseq>
            </port>
        </input>
    </system>
</mameconfig>"#,
        );

        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings["P1_BUTTON1"], "JOYCODE_1_BUTTON3");
        assert_eq!(bindings["P1_BUTTON2"], "JOYCODE_1_BUTTON4");
    }

    #[test]
    fn malformed_documents_are_empty() {
        assert!(extract("").is_empty());
        assert!(extract("<mameconfig><system name=\"sf2\"><input>").is_empty());
        assert!(extract("not xml at all").is_empty());
        assert!(extract("<mameconfig version=\"10\"/>").is_empty());
        assert!(load_bindings("/nonexistent/sf2.cfg").is_empty());
    }

    #[test]
    fn comparison_translates_bindings() {
        let descriptor = ControlDescriptor {
            romname: "sf2".to_string(),
            display_name: "Street Fighter II".to_string(),
            num_players: 2,
            alternating: false,
            mirrored: false,
            misc_details: None,
            players: vec![PlayerControls {
                number: 1,
                labels: vec![
                    ControlLabel {
                        code: "P1_BUTTON1".to_string(),
                        action: "Jab Punch".to_string(),
                    },
                    ControlLabel {
                        code: "P1_BUTTON3".to_string(),
                        action: "Fierce Punch".to_string(),
                    },
                ],
            }],
        };

        let rows = compare(&descriptor, &extract(DOCUMENT), Convention::Named);

        assert_eq!(
            rows,
            [
                BindingRow {
                    code: "P1_BUTTON1".to_string(),
                    control: "P1 A Button".to_string(),
                    action: "Jab Punch".to_string(),
                    bound: Some("JOYCODE_1_X".to_string()),
                },
                BindingRow {
                    code: "P1_BUTTON3".to_string(),
                    control: "P1 X Button".to_string(),
                    action: "Fierce Punch".to_string(),
                    bound: None,
                },
            ]
        );
    }
}
