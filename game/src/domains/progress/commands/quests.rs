use crate::collections::Dictionary;
use crate::model::{QuestKind, QuestTask, QuestTaskKind};
use crate::progress::Progress::{QuestClaimed, QuestReady, QuestStarted};
use crate::progress::ProgressError::QuestNotReady;
use crate::progress::{
    Milestone, Progress, ProgressDomain, ProgressError, QuestProgress, QuestStatus,
};

impl ProgressDomain {
    pub fn is_quest_claimed(&self, quest: &str) -> bool {
        self.quests
            .iter()
            .any(|progress| progress.id == quest && progress.status == QuestStatus::Claimed)
    }

    /// Starts every quest whose requirements are met and refreshes level tasks and statuses.
    pub fn sync_quests(&mut self, catalog: &Dictionary<QuestKind>) -> Vec<Progress> {
        let mut events = vec![];
        for quest in catalog.iter() {
            let started = self.quests.iter().any(|progress| progress.id == quest.id);
            let unlocked = quest.min_level <= self.level
                && quest
                    .previous
                    .as_ref()
                    .map(|previous| self.is_quest_claimed(previous))
                    .unwrap_or(true);
            if unlocked && !started {
                self.quests.push(QuestProgress {
                    id: quest.id.clone(),
                    tasks: vec![0.0; quest.tasks.len()],
                    status: QuestStatus::Active,
                });
                events.push(QuestStarted {
                    quest: quest.id.clone(),
                });
            }
        }
        let level = self.level as f64;
        for progress in self.quests.iter_mut() {
            if let Ok(quest) = catalog.get(&progress.id) {
                progress.tasks.resize(quest.tasks.len(), 0.0);
                for (current, task) in progress.tasks.iter_mut().zip(&quest.tasks) {
                    if task.kind == QuestTaskKind::Level && level >= task.required {
                        *current = task.required;
                    }
                }
                events.extend(refresh_status(progress, quest));
            }
        }
        events
    }

    /// Advances every open quest task matching the milestone.
    pub fn record_milestone(
        &mut self,
        milestone: &Milestone,
        catalog: &Dictionary<QuestKind>,
    ) -> Vec<Progress> {
        let mut events = self.sync_quests(catalog);
        for progress in self.quests.iter_mut() {
            if progress.status == QuestStatus::Claimed {
                continue;
            }
            if let Ok(quest) = catalog.get(&progress.id) {
                for (current, task) in progress.tasks.iter_mut().zip(&quest.tasks) {
                    if let Some(amount) = task_increment(task, milestone) {
                        *current = (*current + amount).min(task.required);
                    }
                }
                events.extend(refresh_status(progress, quest));
            }
        }
        events
    }

    pub fn claim_quest(
        &mut self,
        quest: &str,
    ) -> Result<impl FnOnce() -> Vec<Progress> + '_, ProgressError> {
        let progress = self
            .quests
            .iter_mut()
            .find(|progress| progress.id == quest && progress.status == QuestStatus::Ready)
            .ok_or(QuestNotReady {
                quest: quest.to_string(),
            })?;
        let command = move || {
            progress.status = QuestStatus::Claimed;
            vec![QuestClaimed {
                quest: progress.id.clone(),
            }]
        };
        Ok(command)
    }
}

fn task_increment(task: &QuestTask, milestone: &Milestone) -> Option<f64> {
    match (task.kind, milestone) {
        (QuestTaskKind::Harvest, Milestone::Harvest { strain, grams }) => match &task.target {
            Some(target) if target != strain => None,
            _ => Some(*grams),
        },
        (QuestTaskKind::Sell, Milestone::Sell { grams }) => Some(*grams),
        (QuestTaskKind::Cash, Milestone::Cash { amount }) => Some(*amount),
        _ => None,
    }
}

fn refresh_status(progress: &mut QuestProgress, quest: &QuestKind) -> Vec<Progress> {
    if progress.status != QuestStatus::Active {
        return vec![];
    }
    let done = quest
        .tasks
        .iter()
        .zip(&progress.tasks)
        .all(|(task, current)| *current >= task.required);
    if done {
        progress.status = QuestStatus::Ready;
        vec![QuestReady {
            quest: progress.id.clone(),
        }]
    } else {
        vec![]
    }
}
