// File: streambell-core/src/notifiers/telegram.rs

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::debug;

use streambell_common::models::NotificationPlatform;
use streambell_common::Error;

use crate::notifiers::Notifier;

/// Telegram send primitive: one bot token, one fixed chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str) -> Result<Self, Error> {
        let chat_id = ChatId(chat_id.parse::<i64>().map_err(|_| {
            Error::Config(format!("invalid Telegram chat id: {}", chat_id))
        })?);
        Ok(Self {
            bot: Bot::new(token),
            chat_id,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn platform(&self) -> NotificationPlatform {
        NotificationPlatform::Telegram
    }

    async fn send(&self, message: &str) -> Result<(), Error> {
        self.bot
            .send_message(self.chat_id, message)
            .await
            .map_err(|e| Error::Notify(format!("Telegram send failed: {}", e)))?;
        debug!("Sent Telegram notification to chat {}", self.chat_id.0);
        Ok(())
    }
}
