use std::fmt::Debug;

use uuid::Uuid;

/// Where fresh trace and annotation ids come from.
pub trait IdSource: Debug {
    fn next_uuid(&mut self) -> Uuid;
}

/// Random v4 UUIDs. The default for a running application.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_uuid(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic ids `1, 2, 3, ...` encoded as UUIDs, for tests and replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u128) -> Self {
        Self { next: first.saturating_sub(1) }
    }
}

impl IdSource for SequentialIds {
    fn next_uuid(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_counts_from_one() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_uuid().as_u128(), 1);
        assert_eq!(ids.next_uuid().as_u128(), 2);
    }

    #[test]
    fn sequential_custom_start() {
        let mut ids = SequentialIds::starting_at(100);
        assert_eq!(ids.next_uuid().as_u128(), 100);
    }

    #[test]
    fn random_ids_differ() {
        let mut ids = RandomIds;
        assert_ne!(ids.next_uuid(), ids.next_uuid());
    }
}
