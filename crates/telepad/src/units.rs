use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CENTER_RADIUS: Dp = Dp(5.0);
pub const DEFAULT_CENTER_MARGIN: Dp = Dp(5.0);
pub const DEFAULT_MENU_WIDTH: Dp = Dp(5.0);
pub const DEFAULT_MENU_ANGLE: f64 = 80.0;

/// A length in physical pixels, the unit every geometry computation uses.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, Display, Deref, From, Into,
)]
#[serde(transparent)]
pub struct Px(f64);

crate::impl_unit_newtype!(Px);

/// A device-independent length.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, Display, Deref, From, Into,
)]
#[serde(transparent)]
pub struct Dp(f64);

crate::impl_unit_newtype!(Dp);

impl Dp {
    /// Rounds half-up to whole pixels.
    pub fn to_px(self, density: Density) -> Px {
        Px((self.0 * density.0 + 0.5).floor())
    }
}

/// Pixels per dp.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display, Deref, From, Into)]
#[serde(transparent)]
pub struct Density(f64);

crate::impl_unit_newtype!(Density);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
