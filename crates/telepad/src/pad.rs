use crate::geometry::{Boundaries, Bounds, GeometryConfig};
use crate::gesture::{GestureState, MenuSelected, PointerEvent};
use crate::listener::MenuListener;
use crate::region::RegionIndex;
use crate::zone::Zone;

/// How a zone should be painted right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneState {
    Idle,
    /// Pressed, but the pointer has wandered off.
    Armed,
    Pressed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadAction {
    pub should_redraw: bool,
    pub selected: Option<Zone>,
}

impl PadAction {
    pub fn new(should_redraw: bool, selected: Option<Zone>) -> Self {
        Self {
            should_redraw,
            selected,
        }
    }
}

#[derive(Debug, Clone)]
struct Layout {
    bounds: Bounds,
    boundaries: Boundaries,
    regions: RegionIndex,
}

impl Layout {
    fn build(config: &GeometryConfig, bounds: Bounds) -> Self {
        let boundaries = Boundaries::build(config, bounds);
        let regions = RegionIndex::build(&boundaries);
        Self {
            bounds,
            boundaries,
            regions,
        }
    }
}

/// The five-zone directional pad: geometry, hit regions and the gesture in
/// flight, driven by events in device coordinates.
pub struct RemotePad {
    config: GeometryConfig,
    layout: Option<Layout>,
    gesture: GestureState,
    listener: Option<Box<dyn MenuListener>>,
}

impl RemotePad {
    pub fn new(config: GeometryConfig) -> Self {
        Self {
            config,
            layout: None,
            gesture: GestureState::new(),
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl MenuListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl MenuListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.layout.as_ref().map(|l| l.bounds)
    }

    pub fn boundaries(&self) -> Option<&Boundaries> {
        self.layout.as_ref().map(|l| &l.boundaries)
    }

    pub fn regions(&self) -> Option<&RegionIndex> {
        self.layout.as_ref().map(|l| &l.regions)
    }

    pub fn pressed_zone(&self) -> Option<Zone> {
        self.gesture.pressed()
    }

    pub fn current_zone(&self) -> Option<Zone> {
        self.gesture.current()
    }

    pub fn zone_state(&self, zone: Zone) -> ZoneState {
        match self.gesture.pressed() {
            Some(pressed) if pressed == zone && self.gesture.current() == Some(zone) => {
                ZoneState::Pressed
            }
            Some(pressed) if pressed == zone => ZoneState::Armed,
            _ => ZoneState::Idle,
        }
    }

    /// Rebuilds the layout for a new surface size. An empty size leaves the
    /// pad without regions until the next resize. Any gesture in flight is
    /// dropped.
    pub fn resize(&mut self, width: f64, height: f64) {
        let bounds = Bounds::new(width, height);
        self.layout = if bounds.is_empty() {
            log::debug!("Pad collapsed to {}x{}", width, height);
            None
        } else {
            log::debug!("Pad laid out at {}x{}", width, height);
            Some(Layout::build(&self.config, bounds))
        };
        self.cancel_gesture();
    }

    /// Swaps in new sizes, keeping the current bounds.
    pub fn reconfigure(&mut self, config: GeometryConfig) {
        self.config = config;
        if let Some(bounds) = self.bounds() {
            self.layout = Some(Layout::build(&self.config, bounds));
        }
        self.cancel_gesture();
    }

    /// Feeds one pointer event in device coordinates.
    pub fn handle(&mut self, event: PointerEvent) -> PadAction {
        let before = self.gesture;

        let (event, regions) = match &self.layout {
            Some(layout) => (
                event.map_point(|p| layout.bounds.to_centered(p)),
                Some(&layout.regions),
            ),
            None => (event, None),
        };
        let selected = self.gesture.handle(event, &regions).map(MenuSelected::zone);

        if let Some(listener) = self.listener.as_mut() {
            if self.gesture.current() != before.current() {
                listener.on_highlight(self.gesture.current());
            }
            if let Some(zone) = selected {
                listener.on_menu_selected(zone);
            }
        }
        if let Some(zone) = selected {
            log::info!("Menu selected: {}", zone);
        }

        PadAction::new(self.gesture != before, selected)
    }

    fn cancel_gesture(&mut self) {
        if self.gesture.is_active() {
            log::debug!("Dropping gesture pressed on {:?}", self.gesture.pressed());
            if let Some(listener) = self.listener.as_mut() {
                listener.on_highlight(None);
            }
        }
        self.gesture.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Px;
    use kurbo::Point;

    fn pad() -> RemotePad {
        let config = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(20.0), 80.0).unwrap();
        let mut pad = RemotePad::new(config);
        pad.resize(400.0, 400.0);
        pad
    }

    #[test]
    fn test_device_points_are_centered() {
        let mut pad = pad();
        let action = pad.handle(PointerEvent::Press(Point::new(230.0, 200.0)));
        assert!(action.should_redraw);
        assert_eq!(pad.pressed_zone(), Some(Zone::Right));

        let action = pad.handle(PointerEvent::Release(Point::new(230.0, 200.0)));
        assert_eq!(action.selected, Some(Zone::Right));
        assert_eq!(pad.pressed_zone(), None);
    }

    #[test]
    fn test_no_layout_means_no_zone() {
        let config = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(20.0), 80.0).unwrap();
        let mut pad = RemotePad::new(config);
        assert!(pad.boundaries().is_none());

        pad.handle(PointerEvent::Press(Point::new(0.0, 0.0)));
        let action = pad.handle(PointerEvent::Release(Point::new(0.0, 0.0)));
        assert_eq!(action, PadAction::default());

        pad.resize(0.0, 300.0);
        assert!(pad.regions().is_none());
    }

    #[test]
    fn test_resize_drops_the_gesture() {
        let mut pad = pad();
        pad.handle(PointerEvent::Press(Point::new(200.0, 170.0)));
        assert_eq!(pad.pressed_zone(), Some(Zone::Up));

        pad.resize(200.0, 200.0);
        assert_eq!(pad.pressed_zone(), None);
        assert_eq!(pad.bounds(), Some(Bounds::new(200.0, 200.0)));

        // release lands on Up in the new layout, but the press was forgotten
        let action = pad.handle(PointerEvent::Release(Point::new(100.0, 70.0)));
        assert_eq!(action.selected, None);
    }

    #[test]
    fn test_reconfigure_keeps_bounds() {
        let mut pad = pad();
        let wider = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(60.0), 80.0).unwrap();
        pad.reconfigure(wider);

        assert_eq!(pad.bounds(), Some(Bounds::new(400.0, 400.0)));
        let zone = pad.regions().and_then(|r| r.classify(Point::new(0.0, -60.0)));
        assert_eq!(zone, Some(Zone::Up));
    }

    #[test]
    fn test_reconfigure_drops_the_gesture() {
        let mut pad = pad();
        pad.handle(PointerEvent::Press(Point::new(230.0, 200.0)));
        assert_eq!(pad.pressed_zone(), Some(Zone::Right));

        let narrower = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(20.0), 60.0).unwrap();
        pad.reconfigure(narrower);
        assert_eq!(pad.pressed_zone(), None);
        assert_eq!(pad.current_zone(), None);

        // still Right under the new layout, but the press was forgotten
        let action = pad.handle(PointerEvent::Release(Point::new(230.0, 200.0)));
        assert_eq!(action.selected, None);
    }

    #[test]
    fn test_zone_states_follow_the_pointer() {
        let mut pad = pad();
        pad.handle(PointerEvent::Press(Point::new(200.0, 230.0)));
        assert_eq!(pad.zone_state(Zone::Down), ZoneState::Pressed);
        assert_eq!(pad.zone_state(Zone::Up), ZoneState::Idle);

        pad.handle(PointerEvent::Move(Point::new(200.0, 200.0)));
        assert_eq!(pad.current_zone(), Some(Zone::Center));
        assert_eq!(pad.zone_state(Zone::Down), ZoneState::Armed);
        assert_eq!(pad.zone_state(Zone::Center), ZoneState::Idle);
    }

    #[test]
    fn test_redraw_only_on_change() {
        let mut pad = pad();
        pad.handle(PointerEvent::Press(Point::new(230.0, 200.0)));
        let action = pad.handle(PointerEvent::Move(Point::new(231.0, 200.0)));
        assert!(!action.should_redraw);
        let action = pad.handle(PointerEvent::Move(Point::new(200.0, 170.0)));
        assert!(action.should_redraw);
    }
}
