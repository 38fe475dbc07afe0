//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod selectable;

// Re-exports
pub use aggregate_id::AggregateId;
pub use selectable::SelectableEntity;
