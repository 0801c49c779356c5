use roster_states::State;

/// Click counter shown above the users table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn label(&self) -> String {
        format!("count is {}", self.count)
    }
}

impl State for Counter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_counts_clicks() {
        let mut counter = Counter::default();
        assert_eq!(counter.label(), "count is 0");

        counter.increment();
        assert_eq!(counter.count(), 1);
        assert_eq!(counter.label(), "count is 1");
    }
}
