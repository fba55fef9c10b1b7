// TodoStore - to-do list state container backed by a JSON snapshot store

pub mod filter;
pub mod snapshot;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::{FilterKind, ParseFilterError, VisibleTask};
pub use snapshot::SnapshotError;
pub use store::{TodoStore, ValidationError};
pub use task::Task;
