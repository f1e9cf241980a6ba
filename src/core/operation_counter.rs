// src/core/operation_counter.rs
//
// Optional operation counting for the vanishing-ideal algorithms. A counter is created by
// the caller and handed down explicitly; nothing here is global.

use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Operation {
    Multiply,
    Gcd,
    Cancel,
    Divides,
    CheckedInsert,
    VanishingMonomial,
    PolyAdd,
    PolyMult,
}

impl Operation {
    pub fn name(&self) -> &str {
        match self {
            Self::Multiply => "FactoredNumber::multiply",
            Self::Gcd => "FactoredNumber::gcd",
            Self::Cancel => "FactoredNumber::cancel",
            Self::Divides => "FactoredNumber::divides",
            Self::CheckedInsert => "checked insert into target ideal",
            Self::VanishingMonomial => "VanishingMonomial::build",
            Self::PolyAdd => "polynomial addition",
            Self::PolyMult => "polynomial multiplication",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationCounter {
    enabled: bool,
    counts: BTreeMap<Operation, usize>,
}

impl OperationCounter {
    pub fn new() -> Self {
        OperationCounter { enabled: true, counts: BTreeMap::new() }
    }

    /// A counter that drops every record.
    pub fn disabled() -> Self {
        OperationCounter { enabled: false, counts: BTreeMap::new() }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record(&mut self, operation: Operation) {
        self.record_many(operation, 1);
    }

    pub fn record_many(&mut self, operation: Operation, count: usize) {
        if !self.enabled || count == 0 {
            return;
        }
        *self.counts.entry(operation).or_insert(0) += count;
    }

    pub fn count(&self, operation: Operation) -> usize {
        self.counts.get(&operation).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<Operation, usize> {
        &self.counts
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn report(&self) {
        for (operation, count) in &self.counts {
            info!("performed {} invocations of '{}'", count, operation.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_counter_ignores_records() {
        let mut counter = OperationCounter::disabled();
        counter.record(Operation::Cancel);
        counter.record_many(Operation::Multiply, 7);
        assert_eq!(counter.count(Operation::Cancel), 0);
        assert!(counter.counts().is_empty());
    }

    #[test]
    fn test_counts_accumulate() {
        let mut counter = OperationCounter::new();
        counter.record(Operation::Gcd);
        counter.record(Operation::Gcd);
        counter.record_many(Operation::PolyAdd, 3);
        assert_eq!(counter.count(Operation::Gcd), 2);
        assert_eq!(counter.count(Operation::PolyAdd), 3);
        counter.reset();
        assert_eq!(counter.count(Operation::Gcd), 0);
    }
}
