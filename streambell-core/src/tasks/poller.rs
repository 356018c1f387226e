// File: streambell-core/src/tasks/poller.rs

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, error, info};

use streambell_common::models::{
    ChannelSubscription, NotificationPlatform, StreamingPlatform,
};

use crate::dispatch::{CheckerDispatcher, NotificationRouter};

/// Where the poll cycle reads its raw channel entries from. Re-read every
/// cycle so a hot-reloading source takes effect without restart.
pub trait ChannelSource: Send + Sync {
    fn entries(&self) -> Vec<String>;
}

/// Fixed channel list, as loaded from environment configuration.
pub struct StaticChannelSource {
    entries: Vec<String>,
}

impl StaticChannelSource {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

impl ChannelSource for StaticChannelSource {
    fn entries(&self) -> Vec<String> {
        self.entries.clone()
    }
}

/// Renders the notification template for one live stream. Placeholders:
/// `{user}`, `{game}`, `{title}`.
fn render_message(template: &str, user: &str, game: &str, title: &str) -> String {
    template
        .replace("{user}", user)
        .replace("{game}", game)
        .replace("{title}", title)
}

/// Channel batches grouped by streaming platform, in first-seen entry order,
/// plus the notification targets for each `(platform, channel)` pair.
struct CycleBatches {
    order: Vec<StreamingPlatform>,
    channels: HashMap<StreamingPlatform, Vec<String>>,
    targets: HashMap<(StreamingPlatform, String), BTreeSet<NotificationPlatform>>,
}

fn group_subscriptions(subs: Vec<ChannelSubscription>) -> CycleBatches {
    let mut batches = CycleBatches {
        order: Vec::new(),
        channels: HashMap::new(),
        targets: HashMap::new(),
    };

    for sub in subs {
        let key = (sub.streaming_platform, sub.channel.clone());
        match batches.targets.get_mut(&key) {
            // Duplicate (channel, platform) entry: merge destinations, poll once.
            Some(targets) => {
                targets.extend(sub.notification_platforms);
            }
            None => {
                if !batches.channels.contains_key(&sub.streaming_platform) {
                    batches.order.push(sub.streaming_platform);
                }
                batches
                    .channels
                    .entry(sub.streaming_platform)
                    .or_default()
                    .push(sub.channel.clone());
                batches.targets.insert(key, sub.notification_platforms);
            }
        }
    }
    batches
}

/// Runs one poll cycle: read the channel list, check every platform's batch,
/// render each "went live" event, and fan it out to the event's destinations.
///
/// Every failure inside a cycle is contained: a malformed entry drops only
/// that entry, a failed check drops only that channel, and a failed delivery
/// is handled inside the router. Nothing here can stop the next cycle.
pub async fn run_poll_cycle(
    channel_source: &dyn ChannelSource,
    dispatcher: &CheckerDispatcher,
    router: &NotificationRouter,
    template: &str,
) -> usize {
    let entries = channel_source.entries();
    let subs = ChannelSubscription::parse_all(&entries);
    if subs.is_empty() {
        debug!("No valid channel subscriptions this cycle");
        return 0;
    }

    let batches = group_subscriptions(subs);
    let mut notified = 0usize;

    for platform in &batches.order {
        let channels = &batches.channels[platform];
        let events = dispatcher.dispatch(*platform, channels).await;

        for event in events {
            let message = render_message(
                template,
                &event.stream.user_name,
                &event.stream.game_name,
                &event.stream.title,
            );
            let key = (*platform, event.channel.clone());
            let Some(targets) = batches.targets.get(&key) else {
                // Tracker can only emit for channels it was handed.
                error!("No targets for channel '{}' on '{}'", event.channel, platform);
                continue;
            };
            info!(
                "Notifying {} destination(s) that '{}' went live",
                targets.len(),
                event.channel
            );
            router.dispatch(&message, targets).await;
            notified += 1;
        }
    }
    notified
}

/// Spawns the polling loop: an immediate first cycle, then one cycle per
/// `poll_delay` tick, forever. The loop has no terminal state; it ends only
/// with the process.
pub fn spawn_polling_task(
    channel_source: Arc<dyn ChannelSource>,
    dispatcher: Arc<CheckerDispatcher>,
    router: Arc<NotificationRouter>,
    template: String,
    poll_delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(poll_delay);
        loop {
            ticker.tick().await;
            let notified =
                run_poll_cycle(channel_source.as_ref(), &dispatcher, &router, &template).await;
            debug!("Poll cycle complete, {} notification(s) dispatched", notified);
        }
    })
}
