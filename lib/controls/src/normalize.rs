//! Turns every raw source schema into a [ControlDescriptor]
//!
//! Nothing in here fails, a field that is missing or nonsensical degrades to its default since
//! half a layout is more useful to the emitter than none

use crate::{
    descriptor::{ControlDescriptor, ControlLabel, PlayerControls},
    source::{Category, FastControl, FastPayload, PrimaryRecord},
};
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
/// A raw record from any of the supported sources
pub enum RawRecord<'a> {
    /// Record of the primary source
    Primary(&'a PrimaryRecord),
    /// Fast source payload, `parent` is the entry the payload was found under when it came from a clone
    Fast {
        payload: &'a FastPayload,
        parent: Option<&'a FastPayload>,
    },
    /// Built in cabinet default
    Category(Category),
}

/// Normalize a raw record into the canonical descriptor for `romname`
pub fn normalize(romname: &str, record: RawRecord<'_>) -> ControlDescriptor {
    match record {
        RawRecord::Primary(record) => ControlDescriptor {
            romname: romname.to_string(),
            display_name: display_name(record.gamename.as_deref(), romname),
            num_players: player_count(record.num_players.as_ref()),
            alternating: flag(record.alternating.as_ref()),
            mirrored: flag(record.mirrored.as_ref()),
            misc_details: non_empty(record.misc_details.as_deref()),
            players: record
                .players
                .iter()
                .enumerate()
                .map(|(index, player)| PlayerControls {
                    number: player
                        .number
                        .as_ref()
                        .and_then(integer)
                        .unwrap_or(index as u32 + 1),
                    labels: player
                        .labels
                        .iter()
                        .map(|label| ControlLabel {
                            code: label.name.clone(),
                            action: label.value.clone(),
                        })
                        .collect(),
                })
                .collect(),
        },
        RawRecord::Fast { payload, parent } => {
            let inherited = |field: fn(&FastPayload) -> Option<&Value>| {
                field(payload).or_else(|| parent.and_then(field))
            };

            // The parent names the game, the clone only lends its controls
            let description = parent
                .and_then(|parent| non_empty(parent.description.as_deref()))
                .or_else(|| non_empty(payload.description.as_deref()));

            ControlDescriptor {
                romname: romname.to_string(),
                display_name: display_name(description.as_deref(), romname),
                num_players: player_count(inherited(|payload| payload.playercount.as_ref())),
                alternating: flag(inherited(|payload| payload.alternating.as_ref())),
                mirrored: flag(inherited(|payload| payload.mirrored.as_ref())),
                misc_details: non_empty(payload.misc.as_deref())
                    .or_else(|| parent.and_then(|parent| non_empty(parent.misc.as_deref()))),
                players: group_by_player(&payload.controls),
            }
        }
        RawRecord::Category(category) => ControlDescriptor {
            romname: romname.to_string(),
            display_name: display_name(None, romname),
            num_players: 1,
            alternating: false,
            mirrored: false,
            misc_details: Some(category.details().to_string()),
            players: vec![PlayerControls {
                number: 1,
                labels: category
                    .labels()
                    .iter()
                    .map(|(code, action)| ControlLabel {
                        code: code.to_string(),
                        action: action.to_string(),
                    })
                    .collect(),
            }],
        },
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn display_name(description: Option<&str>, romname: &str) -> String {
    non_empty(description).unwrap_or_else(|| romname.to_string())
}

fn integer(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0 && *float >= 0.0)
                    .map(|float| float as u64)
            })
            .and_then(|number| u32::try_from(number).ok()),
        Value::String(string) => string.trim().parse().ok(),
        _ => None,
    }
}

fn player_count(value: Option<&Value>) -> u32 {
    value.and_then(integer).unwrap_or(1)
}

fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|number| number != 0.0),
        Some(Value::String(string)) => matches!(
            string.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    }
}

/// Player number encoded in a `P<n>_` code prefix
fn player_of(code: &str) -> Option<u32> {
    let rest = code.strip_prefix('P')?;
    let (number, _) = rest.split_once('_')?;

    number.parse().ok()
}

/// Group flat controls into players in order of first appearance, unprefixed codes go to player 1
fn group_by_player(controls: &[FastControl]) -> Vec<PlayerControls> {
    let mut players: Vec<PlayerControls> = Vec::new();

    for control in controls {
        let number = player_of(&control.name).unwrap_or(1);
        let label = ControlLabel {
            code: control.name.clone(),
            action: control.desc.clone(),
        };

        match players.iter_mut().find(|player| player.number == number) {
            Some(player) => player.labels.push(label),
            None => players.push(PlayerControls {
                number,
                labels: vec![label],
            }),
        }
    }

    players
}
