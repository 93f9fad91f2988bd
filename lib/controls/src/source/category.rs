use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::LazyLock};
use strum::{Display, EnumIter};

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display,
)]
/// Cabinet styles with a layout common enough to fall back on
pub enum Category {
    Racing,
    LightGun,
    Trackball,
}

impl Category {
    /// Control code and action pairs of the default player 1 layout
    pub fn labels(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Category::Racing => &[
                ("P1_BUTTON1", "Accelerate"),
                ("P1_BUTTON2", "Brake"),
                ("P1_BUTTON3", "Shift Gear"),
                ("P1_JOYSTICK_LEFT", "Steer Left"),
                ("P1_JOYSTICK_RIGHT", "Steer Right"),
            ],
            Category::LightGun => &[
                ("P1_BUTTON1", "Fire"),
                ("P1_BUTTON2", "Reload"),
                ("P1_JOYSTICK_UP", "Aim Up"),
                ("P1_JOYSTICK_DOWN", "Aim Down"),
                ("P1_JOYSTICK_LEFT", "Aim Left"),
                ("P1_JOYSTICK_RIGHT", "Aim Right"),
            ],
            Category::Trackball => &[
                ("P1_BUTTON1", "Fire"),
                ("P1_JOYSTICK_UP", "Trackball Up"),
                ("P1_JOYSTICK_DOWN", "Trackball Down"),
                ("P1_JOYSTICK_LEFT", "Trackball Left"),
                ("P1_JOYSTICK_RIGHT", "Trackball Right"),
            ],
        }
    }

    pub fn details(self) -> &'static str {
        match self {
            Category::Racing => "Default racing cabinet layout",
            Category::LightGun => "Default light gun cabinet layout",
            Category::Trackball => "Default trackball cabinet layout",
        }
    }
}

/// ROMs known to run on one of the default cabinet styles
pub static CATEGORY_DEFAULTS: LazyLock<HashMap<String, Category>> = LazyLock::new(|| {
    [
        ("outrun", Category::Racing),
        ("hangon", Category::Racing),
        ("chasehq", Category::Racing),
        ("polepos", Category::Racing),
        ("daytona", Category::Racing),
        ("crusnusa", Category::Racing),
        ("sf2049", Category::Racing),
        ("opwolf", Category::LightGun),
        ("term2", Category::LightGun),
        ("lethalen", Category::LightGun),
        ("timecris", Category::LightGun),
        ("centiped", Category::Trackball),
        ("missile", Category::Trackball),
        ("marble", Category::Trackball),
        ("gtg", Category::Trackball),
    ]
    .into_iter()
    .map(|(romname, category)| (romname.to_string(), category))
    .collect()
});
