// tests/test_utils/mod.rs
//
// Hand-written fakes for the stream-source and notifier seams.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use streambell_common::models::{LiveStream, NotificationPlatform};
use streambell_common::Error;
use streambell_core::notifiers::Notifier;
use streambell_core::platforms::StreamSource;

/// One scripted poll observation for a channel.
#[derive(Debug, Clone)]
pub enum Status {
    Live(LiveStream),
    Offline,
    Fail,
}

pub fn live(user_id: Option<&str>, user_name: &str, title: &str, game_name: &str) -> Status {
    Status::Live(LiveStream {
        user_id: user_id.map(str::to_string),
        user_name: user_name.to_string(),
        title: title.to_string(),
        game_name: game_name.to_string(),
    })
}

/// Stream source that replays a per-channel script, one entry per fetch.
/// A channel with an exhausted (or missing) script reads as offline.
pub struct ScriptedSource {
    script: Mutex<HashMap<String, VecDeque<Status>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(HashMap::new()),
        }
    }

    pub fn channel(self, name: &str, observations: Vec<Status>) -> Self {
        self.script
            .lock()
            .unwrap()
            .insert(name.to_string(), observations.into());
        self
    }
}

#[async_trait]
impl StreamSource for ScriptedSource {
    async fn fetch_live_status(&self, channel: &str) -> Result<Option<LiveStream>, Error> {
        let next = self
            .script
            .lock()
            .unwrap()
            .get_mut(channel)
            .and_then(|q| q.pop_front());
        match next {
            Some(Status::Live(stream)) => Ok(Some(stream)),
            Some(Status::Offline) | None => Ok(None),
            Some(Status::Fail) => Err(Error::Platform(format!(
                "scripted failure for channel '{}'",
                channel
            ))),
        }
    }
}

/// Notifier that records every message it is asked to send, optionally
/// failing each send after recording it.
pub struct RecordingNotifier {
    platform: NotificationPlatform,
    fail: bool,
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new(platform: NotificationPlatform) -> Self {
        Self {
            platform,
            fail: false,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(platform: NotificationPlatform) -> Self {
        Self {
            fail: true,
            ..Self::new(platform)
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn platform(&self) -> NotificationPlatform {
        self.platform
    }

    async fn send(&self, message: &str) -> Result<(), Error> {
        self.sent.lock().unwrap().push(message.to_string());
        if self.fail {
            return Err(Error::Notify("scripted delivery failure".to_string()));
        }
        Ok(())
    }
}
