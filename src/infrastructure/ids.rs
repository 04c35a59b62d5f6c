use uuid::Uuid;

use crate::domain::ports::IdGenerator;

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Ids;

impl IdGenerator for UuidV4Ids {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Counter-backed ids (`00000000-...-0001`, `...-0002`, ...) for reproducible runs.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u128,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.last += 1;
        Uuid::from_u128(self.last)
    }
}
