// File: src/notifiers/mod.rs

use async_trait::async_trait;

use streambell_common::models::NotificationPlatform;
use streambell_common::Error;

/// Send primitive for one messaging destination. Message text arrives fully
/// rendered; adapters never format.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    fn platform(&self) -> NotificationPlatform;
    async fn send(&self, message: &str) -> Result<(), Error>;
}

// Re-export submodules
pub mod discord;
pub mod telegram;

pub use discord::DiscordNotifier;
pub use telegram::TelegramNotifier;
