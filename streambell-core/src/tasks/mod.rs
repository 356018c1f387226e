// File: src/tasks/mod.rs

pub mod poller;

pub use poller::{run_poll_cycle, spawn_polling_task, ChannelSource, StaticChannelSource};
