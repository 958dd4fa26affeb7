//! Core types for the weekplan ecosystem.
//!
//! This crate provides the event store and schedule-merge engine used by the
//! weekplan CLI:
//! - `EventStore` for durable, ordered, de-duplicated per-date events
//! - `merge` for applying generated day plans through the store's add path
//! - `generator` and `protocol` for the CLI-generator communication protocol

pub mod config;
pub mod date_key;
pub mod error;
pub mod event;
pub mod generator;
pub mod merge;
pub mod planner;
pub mod protocol;
pub mod store;

// Re-export the types most callers touch at crate root for convenience
pub use error::{PlannerError, PlannerResult};
pub use event::Event;
pub use store::EventStore;
