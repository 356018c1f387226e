// File: src/dispatch/mod.rs

pub mod checker;
pub mod router;

pub use checker::CheckerDispatcher;
pub use router::NotificationRouter;
