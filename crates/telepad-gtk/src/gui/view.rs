use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;
use strum::IntoEnumIterator;
use telepad::kurbo::{BezPath, PathEl, Point};
use telepad::{Boundaries, RemotePad, Zone};

/// Curve tolerance for outlines handed to cairo.
const OUTLINE_TOLERANCE: f64 = 0.1;

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Replays a kurbo path into cairo's current path.
fn trace(cr: &Context, path: &BezPath) {
    let mut last = Point::ORIGIN;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                cr.move_to(p.x, p.y);
                last = p;
            }
            PathEl::LineTo(p) => {
                cr.line_to(p.x, p.y);
                last = p;
            }
            PathEl::QuadTo(p1, p2) => {
                // cairo only speaks cubics
                let c1 = last.lerp(p1, 2.0 / 3.0);
                let c2 = p2.lerp(p1, 2.0 / 3.0);
                cr.curve_to(c1.x, c1.y, c2.x, c2.y, p2.x, p2.y);
                last = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                cr.curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
                last = p3;
            }
            PathEl::ClosePath => cr.close_path(),
        }
    }
}

fn fill_zone(
    cr: &Context,
    boundaries: &Boundaries,
    zone: Zone,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    cr.new_path();
    match boundaries.sector(zone) {
        Some(sector) => trace(cr, &sector.to_path(OUTLINE_TOLERANCE)),
        None => {
            let center = boundaries.center;
            cr.arc(center.center.x, center.center.y, center.radius, 0.0, 2.0 * PI);
        }
    }
    set_source(cr, color);
    cr.fill()
}

/// Paints all five zones around the middle of the surface.
pub fn draw(cr: &Context, pad: &RemotePad, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let Some(boundaries) = pad.boundaries() else {
        return Ok(());
    };
    let middle = boundaries.bounds().center();

    cr.save()?;
    cr.translate(middle.x, middle.y);
    let painted = Zone::iter()
        .try_for_each(|zone| fill_zone(cr, boundaries, zone, colors.fill(pad.zone_state(zone))));
    cr.restore()?;
    painted
}
