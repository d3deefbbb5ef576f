use crate::error::GeometryError;
use crate::units::{DEFAULT_CENTER_MARGIN, DEFAULT_CENTER_RADIUS, DEFAULT_MENU_ANGLE, DEFAULT_MENU_WIDTH, Density, Px};
use crate::zone::Zone;
use kurbo::{Arc, BezPath, Circle, Point, Rect, Vec2};

pub const MAX_MENU_ANGLE: f64 = 90.0;
/// Largest outer radius accepted, in pixels. Flattening cost grows with the
/// radius, so anything beyond screen scale is refused up front.
pub const MAX_OUTER_RADIUS: f64 = 100_000.0;
/// Degrees trimmed off each end of a sector's inner edge.
pub const INNER_INSET: f64 = 2.0;

/// Sizes of the pad, already resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    center_radius: Px,
    center_margin: Px,
    menu_width: Px,
    menu_angle: f64,
}

impl GeometryConfig {
    pub fn new(
        center_radius: Px,
        center_margin: Px,
        menu_width: Px,
        menu_angle: f64,
    ) -> Result<Self, GeometryError> {
        if !(0.0..=MAX_MENU_ANGLE).contains(&menu_angle) {
            return Err(GeometryError::MenuAngleOutOfRange(menu_angle));
        }
        positive("center radius", center_radius)?;
        positive("menu width", menu_width)?;
        finite("center margin", center_margin)?;
        if *center_margin < 0.0 {
            return Err(GeometryError::Negative {
                name: "center margin",
                value: *center_margin,
            });
        }
        let outer_radius = *center_radius + *center_margin + *menu_width;
        if !outer_radius.is_finite() || outer_radius > MAX_OUTER_RADIUS {
            return Err(GeometryError::TooLarge {
                value: outer_radius,
                max: MAX_OUTER_RADIUS,
            });
        }

        Ok(Self {
            center_radius,
            center_margin,
            menu_width,
            menu_angle,
        })
    }

    /// The stock sizes of the control at the given density.
    pub fn defaults(density: Density) -> Result<Self, GeometryError> {
        Self::new(
            DEFAULT_CENTER_RADIUS.to_px(density),
            DEFAULT_CENTER_MARGIN.to_px(density),
            DEFAULT_MENU_WIDTH.to_px(density),
            DEFAULT_MENU_ANGLE,
        )
    }

    pub fn center_radius(&self) -> Px {
        self.center_radius
    }

    pub fn center_margin(&self) -> Px {
        self.center_margin
    }

    pub fn menu_width(&self) -> Px {
        self.menu_width
    }

    pub fn menu_angle(&self) -> f64 {
        self.menu_angle
    }

    /// Distance from the origin to the inner edge of every sector.
    pub fn inner_radius(&self) -> f64 {
        *self.center_radius + *self.center_margin
    }

    pub fn outer_radius(&self) -> f64 {
        self.inner_radius() + *self.menu_width
    }
}

fn finite(name: &'static str, value: Px) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NotFinite { name })
    }
}

fn positive(name: &'static str, value: Px) -> Result<(), GeometryError> {
    finite(name, value)?;
    if *value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NotPositive {
            name,
            value: *value,
        })
    }
}

/// Size of the control's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Midpoint of the surface in device coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Moves a device point into the frame centered on the surface midpoint.
    pub fn to_centered(&self, device: Point) -> Point {
        device - self.center().to_vec2()
    }

    /// Hit-test clip in centered coordinates. It spans twice the visible
    /// surface on purpose, so presses slightly outside still land.
    pub fn clip(&self) -> Rect {
        Rect::new(-self.width, -self.height, self.width, self.height)
    }
}

/// Outline of one of the four pie-wedge zones.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorBoundary {
    zone: Zone,
    inner: Rect,
    outer: Rect,
    start_angle: f64,
    sweep: f64,
    inset: f64,
}

impl SectorBoundary {
    fn new(zone: Zone, base_angle: f64, inner: Rect, outer: Rect, menu_angle: f64) -> Self {
        Self {
            zone,
            inner,
            outer,
            start_angle: base_angle - menu_angle / 2.0,
            sweep: menu_angle,
            // narrow wedges would otherwise trace their inner edge backwards
            inset: INNER_INSET.min(menu_angle / 2.0),
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn inner_rect(&self) -> Rect {
        self.inner
    }

    pub fn outer_rect(&self) -> Rect {
        self.outer
    }

    /// Start of the outer arc, in degrees.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    pub fn inner_start_angle(&self) -> f64 {
        self.start_angle + self.sweep - self.inset
    }

    /// Always `<= 0`: the inner edge runs against the outer one.
    pub fn inner_sweep(&self) -> f64 {
        -(self.sweep - 2.0 * self.inset)
    }

    pub fn outer_arc(&self) -> Arc {
        arc_in(self.outer, self.start_angle, self.sweep)
    }

    pub fn inner_arc(&self) -> Arc {
        arc_in(self.inner, self.inner_start_angle(), self.inner_sweep())
    }

    /// Point halfway between the two edges on the wedge's midline.
    pub fn mid_point(&self) -> Point {
        let radius = (self.inner.width() + self.outer.width()) / 4.0;
        let angle = (self.start_angle + self.sweep / 2.0).to_radians();
        self.outer.center() + Vec2::from_angle(angle) * radius
    }

    /// Closed outline: outer arc forward, a line down to the inner arc,
    /// the inner arc backwards, then back up to the start.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        trace_arc(&mut path, &self.outer_arc(), tolerance);
        trace_arc(&mut path, &self.inner_arc(), tolerance);
        path.close_path();
        path
    }
}

fn arc_in(rect: Rect, start_deg: f64, sweep_deg: f64) -> Arc {
    Arc {
        center: rect.center(),
        radii: Vec2::new(rect.width() / 2.0, rect.height() / 2.0),
        start_angle: start_deg.to_radians(),
        sweep_angle: sweep_deg.to_radians(),
        x_rotation: 0.0,
    }
}

fn arc_start(arc: &Arc) -> Point {
    let (sin, cos) = arc.start_angle.sin_cos();
    arc.center + Vec2::new(arc.radii.x * cos, arc.radii.y * sin)
}

/// Starts a subpath at the arc (or joins it with a line) and follows it.
fn trace_arc(path: &mut BezPath, arc: &Arc, tolerance: f64) {
    let start = arc_start(arc);
    if path.elements().is_empty() {
        path.move_to(start);
    } else {
        path.line_to(start);
    }
    if arc.sweep_angle != 0.0 {
        path.extend(arc.append_iter(tolerance));
    }
}

/// The five outlines of the pad, centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries {
    pub center: Circle,
    pub up: SectorBoundary,
    pub right: SectorBoundary,
    pub down: SectorBoundary,
    pub left: SectorBoundary,
    bounds: Bounds,
}

impl Boundaries {
    pub fn build(config: &GeometryConfig, bounds: Bounds) -> Self {
        let inner_extent = config.inner_radius();
        let inner = Rect::new(-inner_extent, -inner_extent, inner_extent, inner_extent);
        let outer = inner.inflate(*config.menu_width(), *config.menu_width());
        let sector = |zone: Zone, base: f64| {
            SectorBoundary::new(zone, base, inner, outer, config.menu_angle())
        };

        Self {
            center: Circle::new(Point::ORIGIN, *config.center_radius()),
            up: sector(Zone::Up, 270.0),
            right: sector(Zone::Right, 0.0),
            down: sector(Zone::Down, 90.0),
            left: sector(Zone::Left, 180.0),
            bounds,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn sector(&self, zone: Zone) -> Option<&SectorBoundary> {
        match zone {
            Zone::Center => None,
            Zone::Up => Some(&self.up),
            Zone::Right => Some(&self.right),
            Zone::Down => Some(&self.down),
            Zone::Left => Some(&self.left),
        }
    }

    pub fn sectors(&self) -> [&SectorBoundary; 4] {
        [&self.up, &self.right, &self.down, &self.left]
    }
}
