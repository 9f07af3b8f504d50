pub mod pinch_zoom;

pub use pinch_zoom::{use_pinch_zoom, PinchZoomConfig, PinchZoomHandle};
