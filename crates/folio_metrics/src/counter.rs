//! Named counters for tracking session events
//!
//! Backed by a BTreeMap so the end-of-session report always lists counters
//! in the same order.

use std::collections::BTreeMap;

pub struct Counter {
    counters: BTreeMap<String, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            counters: BTreeMap::new(),
        }
    }

    pub fn increment(&mut self, name: &str, value: usize) {
        *self.counters.entry(name.to_string()).or_insert(0) += value;
    }

    pub fn set(&mut self, name: &str, value: usize) {
        self.counters.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> usize {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }

    /// Counters in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.counters.iter()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_get() {
        let mut counter = Counter::new();
        assert_eq!(counter.get("events.scroll"), 0);
        counter.increment("events.scroll", 1);
        counter.increment("events.scroll", 2);
        assert_eq!(counter.get("events.scroll"), 3);
    }

    #[test]
    fn test_iterates_in_name_order() {
        let mut counter = Counter::new();
        counter.increment("particles.spawned", 5);
        counter.increment("events.click", 1);
        counter.increment("timers.fired", 9);
        let names: Vec<&str> = counter.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["events.click", "particles.spawned", "timers.fired"]);
    }
}
