use crate::progress::Progress::{FilterDue, FilterServiced};
use crate::progress::{Progress, ProgressDomain, FILTER_INTERVAL_DAYS};

impl ProgressDomain {
    /// Schedules the next filter service and raises the penalty once it is overdue.
    pub fn update_maintenance(&mut self, days_total: f64) -> Vec<Progress> {
        let maintenance = &mut self.maintenance;
        if !(maintenance.filter_due_at > 0.0) {
            maintenance.filter_due_at = days_total + FILTER_INTERVAL_DAYS;
        }
        if !maintenance.filter_penalty && days_total >= maintenance.filter_due_at {
            maintenance.filter_penalty = true;
            maintenance.filter_due_at = 0.0;
            return vec![FilterDue];
        }
        vec![]
    }

    pub fn service_filter(&mut self, days_total: f64) -> Vec<Progress> {
        self.maintenance.filter_penalty = false;
        self.maintenance.filter_due_at = days_total + FILTER_INTERVAL_DAYS;
        vec![FilterServiced {
            next_due: self.maintenance.filter_due_at,
        }]
    }
}
