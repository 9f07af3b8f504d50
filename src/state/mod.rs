pub mod gesture;
pub mod touch;
pub mod zoom;

pub use gesture::GestureCore;
pub use touch::{touch_distance, PinchState};
pub use zoom::ScaleBounds;
