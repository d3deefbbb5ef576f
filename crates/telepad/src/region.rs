use crate::geometry::{Boundaries, SectorBoundary};
use crate::zone::Zone;
use kurbo::{BezPath, Circle, Point, Rect, Shape};
use strum::IntoEnumIterator;

/// Maximum distance between a sector's curved edges and their flattened
/// line segments, in pixels.
pub const FLATTEN_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone)]
enum Area {
    Empty,
    Disc(Circle),
    Polygon(BezPath),
}

/// A zone's fillable area, ready for point queries.
#[derive(Debug, Clone)]
pub struct Region {
    zone: Zone,
    area: Area,
    // already intersected with the clip
    bbox: Rect,
}

impl Region {
    fn disc(zone: Zone, circle: Circle, clip: Rect) -> Self {
        Self {
            zone,
            area: Area::Disc(circle),
            bbox: circle.bounding_box().intersect(clip),
        }
    }

    fn sector(boundary: &SectorBoundary, clip: Rect) -> Self {
        // a wedge without sweep has no area to press
        if boundary.sweep() <= 0.0 {
            return Self {
                zone: boundary.zone(),
                area: Area::Empty,
                bbox: Rect::ZERO,
            };
        }

        let mut polygon = BezPath::new();
        kurbo::flatten(
            boundary.to_path(FLATTEN_TOLERANCE).iter(),
            FLATTEN_TOLERANCE,
            |el| polygon.push(el),
        );
        let bbox = polygon.bounding_box().intersect(clip);

        Self {
            zone: boundary.zone(),
            area: Area::Polygon(polygon),
            bbox,
        }
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn contains(&self, point: Point) -> bool {
        if !self.bbox.contains(point) {
            return false;
        }
        match &self.area {
            Area::Empty => false,
            Area::Disc(circle) => circle.contains(point),
            Area::Polygon(polygon) => polygon.contains(point),
        }
    }
}

/// Point-to-zone lookup for one layout of the pad.
#[derive(Debug, Clone)]
pub struct RegionIndex {
    clip: Rect,
    regions: Vec<Region>,
}

impl RegionIndex {
    pub fn build(boundaries: &Boundaries) -> Self {
        let clip = boundaries.bounds().clip();
        let regions = Zone::iter()
            .map(|zone| match boundaries.sector(zone) {
                Some(sector) => Region::sector(sector, clip),
                None => Region::disc(zone, boundaries.center, clip),
            })
            .collect();

        Self { clip, regions }
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Regions in the order `classify` tests them.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, zone: Zone) -> Option<&Region> {
        self.regions.iter().find(|r| r.zone == zone)
    }

    /// Zone under a centered point. Should regions ever overlap, the first
    /// one in Center, Up, Right, Down, Left order wins.
    pub fn classify(&self, point: Point) -> Option<Zone> {
        if !self.clip.contains(point) {
            return None;
        }
        self.regions
            .iter()
            .find(|region| region.contains(point))
            .map(Region::zone)
    }
}

/// Anything that can tell which zone sits under a centered point.
pub trait HitTest {
    fn hit_test(&self, point: Point) -> Option<Zone>;
}

impl HitTest for RegionIndex {
    fn hit_test(&self, point: Point) -> Option<Zone> {
        self.classify(point)
    }
}

impl<T: HitTest + ?Sized> HitTest for &T {
    fn hit_test(&self, point: Point) -> Option<Zone> {
        (**self).hit_test(point)
    }
}

/// A missing index (no layout yet) hits nothing.
impl<T: HitTest> HitTest for Option<T> {
    fn hit_test(&self, point: Point) -> Option<Zone> {
        self.as_ref().and_then(|index| index.hit_test(point))
    }
}
