use metrics::{counter, histogram};

/// Metrics collector for assignment and capacity operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "erm" }
    }

    /// Record an accepted assignment mutation (`create`, `update`, `delete`)
    pub fn assignment_accepted(&self, operation: &str) {
        counter!(format!("{}.assignments.accepted", self.prefix)).increment(1);
        counter!(format!("{}.assignments.{}", self.prefix, operation)).increment(1);
    }

    /// Record a rejected assignment mutation and why it was rejected
    pub fn assignment_rejected(&self, operation: &str, reason: &str) {
        counter!(format!("{}.assignments.rejected", self.prefix)).increment(1);
        counter!(format!(
            "{}.assignments.rejected.{}.{}",
            self.prefix, operation, reason
        ))
        .increment(1);
    }

    /// Record the overlapping load seen by a capacity check, as a percentage
    pub fn capacity_checked(&self, total_percentage: i32) {
        histogram!(format!("{}.capacity.checked_load", self.prefix))
            .record(f64::from(total_percentage));
    }
}
