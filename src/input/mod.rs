//! Input handling: key/pointer mapping and the per-frame input subscription

pub mod mapper;
pub mod subscription;
pub mod touch;

pub use mapper::{InputEvent, InputMapper};
pub use subscription::InputSubscription;
pub use touch::TouchPad;
