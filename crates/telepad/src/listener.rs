use crate::zone::Zone;

/// Receives the outcome of gestures on a [`RemotePad`](crate::RemotePad).
pub trait MenuListener {
    fn on_menu_selected(&mut self, zone: Zone);

    /// The zone under the pointer changed, `None` once it left every zone
    /// or the gesture ended.
    fn on_highlight(&mut self, _zone: Option<Zone>) {}
}

impl<F: FnMut(Zone)> MenuListener for F {
    fn on_menu_selected(&mut self, zone: Zone) {
        self(zone)
    }
}
