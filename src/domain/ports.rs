use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of identifiers for new lists and items.
///
/// Implementations must never hand out the same value twice.
pub trait IdGenerator: Send + 'static {
    fn next_id(&mut self) -> Uuid;
}

/// Source of creation timestamps.
pub trait Clock: Send + 'static {
    fn now(&self) -> DateTime<Utc>;
}
