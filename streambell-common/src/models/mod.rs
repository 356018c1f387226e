// File: streambell-common/src/models/mod.rs

pub mod platform;
pub mod stream;
pub mod subscription;

pub use platform::{NotificationPlatform, StreamingPlatform};
pub use stream::{LiveEvent, LiveStream};
pub use subscription::ChannelSubscription;
