use crate::progress::ProgressDomain;

impl ProgressDomain {
    pub fn normalize(&mut self) {
        self.level = self.level.max(1);
        self.mastery
            .retain(|_, xp| xp.is_finite() && *xp >= 0.0);
        if !self.maintenance.filter_due_at.is_finite() {
            self.maintenance.filter_due_at = 0.0;
        }
        for progress in self.quests.iter_mut() {
            for current in progress.tasks.iter_mut() {
                if !current.is_finite() || *current < 0.0 {
                    *current = 0.0;
                }
            }
        }
        let mut seen = std::collections::BTreeSet::new();
        self.quests.retain(|progress| seen.insert(progress.id.clone()));
    }
}
