use crate::region::HitTest;
use crate::zone::Zone;
use kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
    Cancel,
}

impl PointerEvent {
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Press(p) | Self::Move(p) | Self::Release(p) => Some(*p),
            Self::Cancel => None,
        }
    }

    /// Same event at a transformed position.
    pub fn map_point(self, f: impl FnOnce(Point) -> Point) -> Self {
        match self {
            Self::Press(p) => Self::Press(f(p)),
            Self::Move(p) => Self::Move(f(p)),
            Self::Release(p) => Self::Release(f(p)),
            Self::Cancel => Self::Cancel,
        }
    }
}

/// Emitted when a gesture both starts and ends on the same zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuSelected(pub Zone);

impl MenuSelected {
    pub fn zone(self) -> Zone {
        self.0
    }
}

/// Bookkeeping of the single gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureState {
    pressed: Option<Zone>,
    current: Option<Zone>,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone under the initial press, fixed until release or cancel.
    pub fn pressed(&self) -> Option<Zone> {
        self.pressed
    }

    /// Zone under the pointer right now.
    pub fn current(&self) -> Option<Zone> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.pressed.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feeds one event in centered coordinates. Only the press and release
    /// positions decide the outcome, so dragging away and coming back still
    /// selects.
    pub fn handle(&mut self, event: PointerEvent, regions: &impl HitTest) -> Option<MenuSelected> {
        match event {
            PointerEvent::Press(point) => {
                let zone = regions.hit_test(point);
                self.pressed = zone;
                self.current = zone;
                None
            }
            PointerEvent::Move(point) => {
                self.current = regions.hit_test(point);
                None
            }
            PointerEvent::Release(point) => {
                let released = regions.hit_test(point);
                let selected = self
                    .pressed
                    .filter(|&pressed| released == Some(pressed))
                    .map(MenuSelected);
                self.reset();
                selected
            }
            PointerEvent::Cancel => {
                self.reset();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Boundaries, Bounds, GeometryConfig};
    use crate::region::RegionIndex;
    use crate::units::Px;

    const CENTER: Point = Point::new(0.0, 0.0);
    const UP: Point = Point::new(0.0, -30.0);
    const RIGHT: Point = Point::new(30.0, 0.0);
    const DOWN: Point = Point::new(0.0, 30.0);
    const OUTSIDE: Point = Point::new(100.0, 100.0);

    fn regions() -> RegionIndex {
        let config = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(20.0), 80.0).unwrap();
        RegionIndex::build(&Boundaries::build(&config, Bounds::new(400.0, 400.0)))
    }

    fn run(events: &[PointerEvent]) -> Vec<MenuSelected> {
        let regions = regions();
        let mut state = GestureState::new();
        events
            .iter()
            .filter_map(|&e| state.handle(e, &regions))
            .collect()
    }

    #[test]
    fn test_press_drag_away_and_return_selects_once() {
        let selected = run(&[
            PointerEvent::Press(RIGHT),
            PointerEvent::Move(UP),
            PointerEvent::Move(OUTSIDE),
            PointerEvent::Release(RIGHT),
        ]);
        assert_eq!(selected, vec![MenuSelected(Zone::Right)]);
    }

    #[test]
    fn test_release_elsewhere_selects_nothing() {
        assert!(run(&[PointerEvent::Press(RIGHT), PointerEvent::Release(UP)]).is_empty());
        assert!(run(&[PointerEvent::Press(CENTER), PointerEvent::Release(OUTSIDE)]).is_empty());
    }

    #[test]
    fn test_press_outside_never_selects() {
        assert!(run(&[PointerEvent::Press(OUTSIDE), PointerEvent::Release(OUTSIDE)]).is_empty());
        assert!(
            run(&[
                PointerEvent::Press(OUTSIDE),
                PointerEvent::Move(DOWN),
                PointerEvent::Release(DOWN)
            ])
            .is_empty()
        );
    }

    #[test]
    fn test_every_zone_can_be_clicked() {
        let cases = [
            (CENTER, Zone::Center),
            (UP, Zone::Up),
            (RIGHT, Zone::Right),
            (DOWN, Zone::Down),
            (Point::new(-30.0, 0.0), Zone::Left),
        ];
        for (point, zone) in cases {
            let selected = run(&[PointerEvent::Press(point), PointerEvent::Release(point)]);
            assert_eq!(selected, vec![MenuSelected(zone)]);
        }
    }

    #[test]
    fn test_cancel_drops_the_gesture() {
        assert!(
            run(&[
                PointerEvent::Press(UP),
                PointerEvent::Cancel,
                PointerEvent::Release(UP)
            ])
            .is_empty()
        );
    }

    #[test]
    fn test_out_of_order_events_are_absorbed() {
        assert!(run(&[PointerEvent::Move(UP), PointerEvent::Release(UP)]).is_empty());
        assert!(run(&[PointerEvent::Release(CENTER), PointerEvent::Cancel]).is_empty());
    }

    #[test]
    fn test_one_selection_per_press() {
        let selected = run(&[
            PointerEvent::Press(UP),
            PointerEvent::Release(UP),
            PointerEvent::Release(UP),
            PointerEvent::Press(DOWN),
            PointerEvent::Release(DOWN),
        ]);
        assert_eq!(selected, vec![MenuSelected(Zone::Up), MenuSelected(Zone::Down)]);
    }

    #[test]
    fn test_state_tracks_press_and_pointer() {
        let regions = regions();
        let mut state = GestureState::new();

        state.handle(PointerEvent::Press(RIGHT), &regions);
        assert_eq!(state.pressed(), Some(Zone::Right));
        assert_eq!(state.current(), Some(Zone::Right));

        state.handle(PointerEvent::Move(UP), &regions);
        assert_eq!(state.pressed(), Some(Zone::Right));
        assert_eq!(state.current(), Some(Zone::Up));
        assert!(state.is_active());

        state.handle(PointerEvent::Release(UP), &regions);
        assert_eq!(state, GestureState::default());
    }

    #[test]
    fn test_map_point_keeps_the_kind() {
        let moved = PointerEvent::Release(Point::new(1.0, 2.0)).map_point(|p| p + kurbo::Vec2::new(1.0, 1.0));
        assert_eq!(moved, PointerEvent::Release(Point::new(2.0, 3.0)));
        assert_eq!(PointerEvent::Cancel.map_point(|_| Point::ORIGIN), PointerEvent::Cancel);
        assert_eq!(PointerEvent::Cancel.point(), None);
    }
}
