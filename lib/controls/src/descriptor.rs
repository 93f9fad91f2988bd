use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// What a single physical input does in a game
pub struct ControlLabel {
    /// Canonical control code, e.g. `P1_BUTTON1`
    pub code: String,
    /// Free text, copied verbatim from the source
    pub action: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Labels belonging to one player, in source order
pub struct PlayerControls {
    pub number: u32,
    pub labels: Vec<ControlLabel>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// Canonical control layout of a ROM, whichever source it came from
pub struct ControlDescriptor {
    pub romname: String,
    pub display_name: String,
    pub num_players: u32,
    pub alternating: bool,
    pub mirrored: bool,
    pub misc_details: Option<String>,
    pub players: Vec<PlayerControls>,
}

impl ControlDescriptor {
    /// Every label across every player, players in order
    pub fn labels(&self) -> impl Iterator<Item = &ControlLabel> {
        self.players.iter().flat_map(|player| player.labels.iter())
    }

    /// First label carrying this control code
    pub fn label_for(&self, code: &str) -> Option<&ControlLabel> {
        self.labels().find(|label| label.code == code)
    }

    /// Re-home a copy of another ROM's layout under `romname`, tagging the display name
    pub(crate) fn borrowed_by(mut self, romname: &str, suffix: &str) -> Self {
        self.romname = romname.to_string();
        self.display_name.push_str(suffix);
        self
    }
}
