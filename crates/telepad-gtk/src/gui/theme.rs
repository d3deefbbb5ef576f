use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use telepad::ZoneState;

/// Fill colors of the pad. Each can be overridden from GTK CSS with
/// `@define-color telepad_idle_color ...` and friends.
pub struct ThemeColors {
    pub idle: Srgba<f64>,
    pub armed: Srgba<f64>,
    pub pressed: Srgba<f64>,
}

fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Srgba<f64> {
    Srgba::new(r, g, b, a).into_format()
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            idle: rgba8(0x4E, 0x52, 0x68, 0xFF),
            armed: rgba8(0xDF, 0x9C, 0x81, 0x80),
            pressed: rgba8(0xDF, 0x9C, 0x81, 0xFF),
        }
    }
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let fallback = Self::default();
        Self {
            idle: Self::lookup_color(context, "telepad_idle_color", fallback.idle),
            armed: Self::lookup_color(context, "telepad_armed_color", fallback.armed),
            pressed: Self::lookup_color(context, "telepad_pressed_color", fallback.pressed),
        }
    }

    pub fn fill(&self, state: ZoneState) -> Srgba<f64> {
        match state {
            ZoneState::Idle => self.idle,
            ZoneState::Armed => self.armed,
            ZoneState::Pressed => self.pressed,
        }
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_palette() {
        let colors = ThemeColors::default();
        let (r, g, b, a) = colors.fill(ZoneState::Pressed).into_components();
        assert!((r - 0xDF as f64 / 255.0).abs() < 1e-9);
        assert!((g - 0x9C as f64 / 255.0).abs() < 1e-9);
        assert!((b - 0x81 as f64 / 255.0).abs() < 1e-9);
        assert_eq!(a, 1.0);
        assert_eq!(colors.fill(ZoneState::Idle), colors.idle);
        assert!(colors.fill(ZoneState::Armed).alpha < 1.0);
    }
}
