// File: streambell-core/src/dispatch/router.rs

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tokio::time::timeout;
use tracing::{debug, warn};

use streambell_common::models::NotificationPlatform;
use streambell_common::Error;

use crate::notifiers::Notifier;

/// Upper bound on one notifier send.
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// Fans a rendered message out to the notifier adapters matching the target
/// platforms.
///
/// The platform→adapter map is resolved once at startup; registering two
/// adapters for one platform fails fast. Delivery is best-effort per
/// destination: a failed or timed-out send is warn-logged and never
/// suppresses delivery to sibling destinations, and the router never
/// propagates an error into the polling loop.
pub struct NotificationRouter {
    notifiers: HashMap<NotificationPlatform, Arc<dyn Notifier>>,
}

impl NotificationRouter {
    pub fn new() -> Self {
        Self {
            notifiers: HashMap::new(),
        }
    }

    /// Registers one notifier adapter. Startup-only.
    pub fn register(&mut self, notifier: Arc<dyn Notifier>) -> Result<(), Error> {
        let platform = notifier.platform();
        if self.notifiers.contains_key(&platform) {
            return Err(Error::Config(format!(
                "a notifier is already registered for platform '{}'",
                platform
            )));
        }
        self.notifiers.insert(platform, notifier);
        Ok(())
    }

    /// Delivers `message` to every registered adapter whose platform is in
    /// `targets`. Sends run concurrently; targets with no registered adapter
    /// are warn-logged and skipped.
    pub async fn dispatch(&self, message: &str, targets: &BTreeSet<NotificationPlatform>) {
        let sends = targets.iter().filter_map(|platform| {
            let Some(notifier) = self.notifiers.get(platform) else {
                warn!("No notifier registered for platform '{}', dropping notification", platform);
                return None;
            };
            let notifier = notifier.clone();
            let platform = *platform;
            Some(async move {
                match timeout(SEND_TIMEOUT, notifier.send(message)).await {
                    Ok(Ok(())) => {
                        debug!("Delivered notification via '{}'", platform);
                    }
                    Ok(Err(e)) => {
                        warn!("Delivery via '{}' failed: {}", platform, e);
                    }
                    Err(_) => {
                        warn!("Delivery via '{}' timed out", platform);
                    }
                }
            })
        });
        join_all(sends).await;
    }

    /// Number of registered destinations.
    pub fn destination_count(&self) -> usize {
        self.notifiers.len()
    }
}

impl Default for NotificationRouter {
    fn default() -> Self {
        Self::new()
    }
}
