pub mod bounds;
pub mod markers;
pub mod sync;
pub mod view;

pub use bounds::LatLngBounds;
pub use markers::{markers, Marker};
pub use sync::BoundsSynchronizer;
pub use view::{HeadlessMap, MapView, Viewport};
