use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Length of identifiers produced by [`ShortIdGenerator`].
pub const SHORT_ID_LEN: usize = 16;

/// Produces identifiers for new records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 16 character lowercase hex ids cut from a v4 UUID (60 random bits).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortIdGenerator;

impl IdGenerator for ShortIdGenerator {
    fn next_id(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SHORT_ID_LEN);
        id
    }
}

/// Deterministic `{prefix}-{n}` ids starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("book")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn short_ids_have_fixed_length_and_differ() {
        let ids = ShortIdGenerator;
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();

        assert_eq!(seen.len(), 1000);
        assert!(seen
            .iter()
            .all(|id| id.len() == SHORT_ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIdGenerator::new("b");
        assert_eq!(ids.next_id(), "b-1");
        assert_eq!(ids.next_id(), "b-2");
    }
}
