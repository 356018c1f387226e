// src/lib.rs

pub mod dispatch;
pub mod notifiers;
pub mod platforms;
pub mod tasks;
pub mod tracker;

pub use streambell_common::Error;
