// tests/dispatch_tests.rs

mod test_utils;

use std::collections::BTreeSet;
use std::sync::Arc;

use streambell_common::models::{NotificationPlatform, StreamingPlatform};
use streambell_common::Error;
use streambell_core::dispatch::{CheckerDispatcher, NotificationRouter};
use streambell_core::tracker::LiveStateTracker;
use test_utils::{live, RecordingNotifier, ScriptedSource};

#[tokio::test]
async fn duplicate_tracker_registration_fails_fast() {
    let mut dispatcher = CheckerDispatcher::new();
    dispatcher
        .register(
            StreamingPlatform::Twitch,
            LiveStateTracker::new(Arc::new(ScriptedSource::new())),
        )
        .unwrap();

    let second = dispatcher.register(
        StreamingPlatform::Twitch,
        LiveStateTracker::new(Arc::new(ScriptedSource::new())),
    );
    assert!(matches!(second, Err(Error::Config(_))));
}

#[tokio::test]
async fn unregistered_platform_dispatch_returns_empty() {
    let mut dispatcher = CheckerDispatcher::new();
    dispatcher
        .register(
            StreamingPlatform::Twitch,
            LiveStateTracker::new(Arc::new(ScriptedSource::new())),
        )
        .unwrap();

    // VK Play is configured but has no tracker: "no events", never a crash.
    let events = dispatcher
        .dispatch(StreamingPlatform::VkPlay, &vec!["someone".to_string()])
        .await;
    assert!(events.is_empty());
}

#[tokio::test]
async fn dispatch_routes_to_the_matching_tracker() {
    let source =
        ScriptedSource::new().channel("foo", vec![live(Some("101"), "foo", "Ranked", "Chess")]);
    let mut dispatcher = CheckerDispatcher::new();
    dispatcher
        .register(StreamingPlatform::Twitch, LiveStateTracker::new(Arc::new(source)))
        .unwrap();

    let events = dispatcher
        .dispatch(StreamingPlatform::Twitch, &vec!["foo".to_string()])
        .await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].stream.game_name, "Chess");
}

#[tokio::test]
async fn duplicate_notifier_registration_fails_fast() {
    let mut router = NotificationRouter::new();
    router
        .register(Arc::new(RecordingNotifier::new(NotificationPlatform::Telegram)))
        .unwrap();

    let second =
        router.register(Arc::new(RecordingNotifier::new(NotificationPlatform::Telegram)));
    assert!(matches!(second, Err(Error::Config(_))));
}

#[tokio::test]
async fn fan_out_sends_once_per_destination_even_when_one_fails() {
    let telegram = Arc::new(RecordingNotifier::failing(NotificationPlatform::Telegram));
    let discord = Arc::new(RecordingNotifier::new(NotificationPlatform::Discord));

    let mut router = NotificationRouter::new();
    router.register(telegram.clone()).unwrap();
    router.register(discord.clone()).unwrap();

    let targets: BTreeSet<_> =
        [NotificationPlatform::Telegram, NotificationPlatform::Discord].into();
    router.dispatch("foo went live", &targets).await;

    assert_eq!(telegram.sent(), vec!["foo went live"]);
    assert_eq!(discord.sent(), vec!["foo went live"]);
}

#[tokio::test]
async fn targets_without_a_registered_adapter_are_skipped() {
    let telegram = Arc::new(RecordingNotifier::new(NotificationPlatform::Telegram));
    let mut router = NotificationRouter::new();
    router.register(telegram.clone()).unwrap();

    let targets: BTreeSet<_> =
        [NotificationPlatform::Telegram, NotificationPlatform::Discord].into();
    router.dispatch("hello", &targets).await;

    assert_eq!(telegram.sent().len(), 1);
}

#[tokio::test]
async fn untargeted_destinations_receive_nothing() {
    let telegram = Arc::new(RecordingNotifier::new(NotificationPlatform::Telegram));
    let discord = Arc::new(RecordingNotifier::new(NotificationPlatform::Discord));

    let mut router = NotificationRouter::new();
    router.register(telegram.clone()).unwrap();
    router.register(discord.clone()).unwrap();

    let targets: BTreeSet<_> = [NotificationPlatform::Telegram].into();
    router.dispatch("only telegram", &targets).await;

    assert_eq!(telegram.sent().len(), 1);
    assert!(discord.sent().is_empty());
}
