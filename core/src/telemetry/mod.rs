//! telemetry/mod.rs
//! Run telemetry: counters, stage timers, and an immutable snapshot.
//!
//! - Counters are plain fields mutated by the single pipeline thread.
//! - The snapshot is serialisable so the CLI can write it as JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
