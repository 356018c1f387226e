// File: streambell-server/src/main.rs

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use streambell_common::{AppConfig, Error};
use streambell_core::dispatch::{CheckerDispatcher, NotificationRouter};
use streambell_core::notifiers::{DiscordNotifier, TelegramNotifier};
use streambell_core::platforms::twitch::TwitchHelixClient;
use streambell_core::platforms::TwitchSource;
use streambell_core::tasks::{spawn_polling_task, StaticChannelSource};
use streambell_core::tracker::LiveStateTracker;
use streambell_common::models::StreamingPlatform;

#[derive(Parser, Debug, Clone)]
#[command(name = "streambell")]
#[command(author, version, about = "streambell - live-stream notification poller")]
struct Args {
    /// Optional .env file to load before reading configuration
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Override the configured poll delay (seconds)
    #[arg(long)]
    poll_delay: Option<u64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}

/// Builds every component from config. Any error here is a fatal startup
/// error; nothing past this point can stop the loop.
fn build_components(
    config: &AppConfig,
) -> Result<(Arc<CheckerDispatcher>, Arc<NotificationRouter>), Error> {
    let helix = TwitchHelixClient::new(&config.twitch_oauth_token, &config.twitch_client_id)?;
    let twitch = Arc::new(TwitchSource::new(helix));

    let mut dispatcher = CheckerDispatcher::new();
    dispatcher.register(StreamingPlatform::Twitch, LiveStateTracker::new(twitch))?;

    let mut router = NotificationRouter::new();
    if let Some(tg) = &config.telegram {
        router.register(Arc::new(TelegramNotifier::new(&tg.token, &tg.chat_id)?))?;
        info!("Telegram notifier registered (chat {})", tg.chat_id);
    }
    if let Some(dc) = &config.discord {
        router.register(Arc::new(DiscordNotifier::new(&dc.token, &dc.channel_id)?))?;
        info!("Discord notifier registered (channel {})", dc.channel_id);
    }
    if router.destination_count() == 0 {
        return Err(Error::Config(
            "no notification destination configured; set Telegram and/or Discord credentials"
                .to_string(),
        ));
    }

    Ok((Arc::new(dispatcher), Arc::new(router)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    match &args.env_file {
        Some(path) => {
            dotenv::from_path(path)
                .map_err(|e| Error::Config(format!("failed to load {}: {}", path.display(), e)))?;
        }
        None => {
            dotenv::dotenv().ok();
        }
    }

    init_tracing();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        e
    })?;
    let poll_delay = args
        .poll_delay
        .map(Duration::from_secs)
        .unwrap_or(config.poll_delay);

    let (dispatcher, router) = build_components(&config)?;
    let channel_source = Arc::new(StaticChannelSource::new(config.channels.clone()));

    info!(
        "Starting streambell: {} channel entr(ies), poll delay {:?}",
        config.channels.len(),
        poll_delay
    );

    let poller = spawn_polling_task(
        channel_source,
        dispatcher,
        router,
        config.message_template.clone(),
        poll_delay,
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
        res = poller => {
            // The polling task loops forever; reaching here means it panicked.
            error!("Polling task exited unexpectedly: {:?}", res);
        }
    }

    Ok(())
}
