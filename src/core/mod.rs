//! Core business logic - framework-agnostic budget tracking operations.

/// Per-category monthly spend aggregation over the transaction ledger
pub mod aggregate;
/// Durable, deduplicated budget alerts and the post-expense pipeline
pub mod alerts;
/// Pure threshold evaluation and message building
pub mod evaluate;
/// Category goal upserts and reads
pub mod goals;
/// Calendar month windows and the "YYYY-MM" bucket key
pub mod month;
/// The live goal-vs-spend tracking report
pub mod tracking;
/// Ledger writes and the alert side channel they trigger
pub mod transaction;
