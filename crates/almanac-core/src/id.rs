//! Per-instance widget identifiers.
//!
//! Widgets that need a stable id (for log records, or for a host that routes
//! messages by id) receive one from an [`IdGenerator`] passed in at
//! construction. Each host owns its generator, so two hosts never share a
//! counter.

/// Produces unique ids for widget instances.
pub trait IdGenerator {
    /// Return a fresh id. `prefix` names the widget kind, e.g. `"date-picker"`.
    fn next_id(&mut self, prefix: &str) -> String;
}

/// Counter-based generator: `"<prefix>-0"`, `"<prefix>-1"`, ...
///
/// The counter is shared across prefixes, so ids stay unique even when one
/// generator serves several widget kinds.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Create a generator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator whose first id uses `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}-{}", self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_increment() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id("date-picker"), "date-picker-0");
        assert_eq!(ids.next_id("date-picker"), "date-picker-1");
        assert_eq!(ids.next_id("select"), "select-2");
    }

    #[test]
    fn generators_are_independent() {
        let mut a = SequentialIds::new();
        let mut b = SequentialIds::starting_at(10);
        assert_eq!(a.next_id("x"), "x-0");
        assert_eq!(b.next_id("x"), "x-10");
        assert_eq!(a.next_id("x"), "x-1");
    }
}
