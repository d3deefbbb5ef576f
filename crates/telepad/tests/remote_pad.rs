use std::cell::RefCell;
use std::rc::Rc;
use telepad::kurbo::Point;
use telepad::{GeometryConfig, MenuListener, PointerEvent, Px, RemotePad, Zone};

#[derive(Default)]
struct Recorder {
    selected: Vec<Zone>,
    highlights: Vec<Option<Zone>>,
}

#[derive(Clone, Default)]
struct SharedRecorder(Rc<RefCell<Recorder>>);

impl MenuListener for SharedRecorder {
    fn on_menu_selected(&mut self, zone: Zone) {
        self.0.borrow_mut().selected.push(zone);
    }

    fn on_highlight(&mut self, zone: Option<Zone>) {
        self.0.borrow_mut().highlights.push(zone);
    }
}

fn scenario_pad(listener: impl MenuListener + 'static) -> RemotePad {
    let config = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(20.0), 80.0).unwrap();
    let mut pad = RemotePad::new(config).with_listener(listener);
    pad.resize(400.0, 400.0);
    pad
}

/// Offsets from the middle of a 400x400 surface.
fn at(x: f64, y: f64) -> Point {
    Point::new(200.0 + x, 200.0 + y)
}

#[test]
fn test_drag_through_up_and_back_selects_right_once() {
    let recorder = SharedRecorder::default();
    let mut pad = scenario_pad(recorder.clone());

    pad.handle(PointerEvent::Press(at(30.0, 0.0)));
    pad.handle(PointerEvent::Move(at(0.0, -30.0)));
    pad.handle(PointerEvent::Release(at(30.0, 0.0)));

    let recorder = recorder.0.borrow();
    assert_eq!(recorder.selected, vec![Zone::Right]);
    assert_eq!(
        recorder.highlights,
        vec![Some(Zone::Right), Some(Zone::Up), None]
    );
}

#[test]
fn test_closure_listener_counts_selections() {
    let hits = Rc::new(RefCell::new(Vec::<Zone>::new()));
    let sink = hits.clone();
    let mut pad = scenario_pad(move |zone: Zone| sink.borrow_mut().push(zone));

    // center tap, up tap, then a press on left released on down
    for (press, release) in [
        (at(0.0, 0.0), at(2.0, 2.0)),
        (at(0.0, -25.0), at(3.0, -28.0)),
        (at(-25.0, 0.0), at(0.0, 25.0)),
    ] {
        pad.handle(PointerEvent::Press(press));
        pad.handle(PointerEvent::Release(release));
    }

    assert_eq!(*hits.borrow(), vec![Zone::Center, Zone::Up]);
}

#[test]
fn test_cancel_and_resize_silence_a_gesture() {
    let recorder = SharedRecorder::default();
    let mut pad = scenario_pad(recorder.clone());

    pad.handle(PointerEvent::Press(at(0.0, 30.0)));
    pad.handle(PointerEvent::Cancel);
    pad.handle(PointerEvent::Release(at(0.0, 30.0)));

    pad.handle(PointerEvent::Press(at(-30.0, 0.0)));
    pad.resize(400.0, 400.0);
    pad.handle(PointerEvent::Release(at(-30.0, 0.0)));

    assert!(recorder.0.borrow().selected.is_empty());
}

#[test]
fn test_presses_past_the_visible_edge_still_count() {
    let hits = Rc::new(RefCell::new(Vec::<Zone>::new()));
    let sink = hits.clone();
    let config = GeometryConfig::new(Px::new(10.0), Px::new(5.0), Px::new(20.0), 80.0).unwrap();
    let mut pad = RemotePad::new(config).with_listener(move |zone: Zone| sink.borrow_mut().push(zone));
    // a 20x20 surface: the Up wedge pokes out above the top edge
    pad.resize(20.0, 20.0);

    let above_top = Point::new(10.0, -8.0);
    pad.handle(PointerEvent::Press(above_top));
    pad.handle(PointerEvent::Release(above_top));

    assert_eq!(*hits.borrow(), vec![Zone::Up]);
}
