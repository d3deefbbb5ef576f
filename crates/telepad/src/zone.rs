use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// One of the five selectable regions of the pad.
///
/// Variants are declared in hit-test priority order, so `Zone::iter()` walks
/// them the same way classification does. "No zone" is `Option::<Zone>::None`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    #[strum(to_string = "center", serialize = "c")]
    Center,
    #[strum(to_string = "up", serialize = "u", serialize = "north", serialize = "n")]
    Up,
    #[strum(to_string = "right", serialize = "r", serialize = "east", serialize = "e")]
    Right,
    #[strum(to_string = "down", serialize = "d", serialize = "south", serialize = "s")]
    Down,
    #[strum(to_string = "left", serialize = "l", serialize = "west", serialize = "w")]
    Left,
}

impl Zone {
    pub const SECTORS: [Zone; 4] = [Zone::Up, Zone::Right, Zone::Down, Zone::Left];

    /// Direction of the sector's midline in degrees: 0 along +x, growing
    /// clockwise on a y-down screen. The center has no direction.
    pub fn base_angle(&self) -> Option<f64> {
        match self {
            Self::Center => None,
            Self::Right => Some(0.0),
            Self::Down => Some(90.0),
            Self::Left => Some(180.0),
            Self::Up => Some(270.0),
        }
    }

    pub fn is_sector(&self) -> bool {
        self.base_angle().is_some()
    }
}
