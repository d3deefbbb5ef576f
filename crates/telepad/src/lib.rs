//! A five-zone directional pad: a center button ringed by four pie-wedge
//! sectors. Pointer press/move/release sequences become at most one
//! selected zone per gesture.

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod listener;
pub mod macros;
pub mod pad;
pub mod region;
pub mod units;
pub mod zone;

pub use error::GeometryError;
pub use geometry::{Boundaries, Bounds, GeometryConfig, SectorBoundary};
pub use gesture::{GestureState, MenuSelected, PointerEvent};
pub use kurbo;
pub use listener::MenuListener;
pub use pad::{PadAction, RemotePad, ZoneState};
pub use region::{HitTest, Region, RegionIndex};
pub use units::{Density, Dp, Px};
pub use zone::Zone;
