//! Elementary-operation counter used to verify the cost model of the search.

/// Counts elementary operations performed by one scoring pass or one search.
///
/// Each call owns its own counter; counters are never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounter {
    total: u64,
}

impl OpCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        OpCounter { total: 0 }
    }

    /// Charges a single operation.
    pub fn tick(&mut self) {
        self.total += 1;
    }

    /// Charges `ops` operations, e.g. the count returned by a sub-step.
    pub fn add(&mut self, ops: u64) {
        self.total += ops;
    }

    /// Returns the number of operations charged so far.
    pub fn total(&self) -> u64 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(OpCounter::new().total(), 0);
        assert_eq!(OpCounter::default(), OpCounter::new());
    }

    #[test]
    fn test_tick_and_add() {
        let mut ops = OpCounter::new();
        ops.tick();
        ops.tick();
        ops.add(40);
        assert_eq!(ops.total(), 42);
    }
}
