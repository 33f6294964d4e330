use crate::collections::Dictionary;
use crate::formulas::research_points;
use crate::model::ResearchNode;
use crate::progress::Progress::ResearchBought;
use crate::progress::ProgressError::{
    NotEnoughResearchPoints, ResearchAlreadyOwned, ResearchLocked,
};
use crate::progress::{Progress, ProgressDomain, ProgressError};

impl ProgressDomain {
    pub fn research_spent(&self, nodes: &Dictionary<ResearchNode>) -> u32 {
        nodes
            .iter()
            .filter(|node| self.research.contains(&node.id))
            .map(|node| node.cost)
            .sum()
    }

    pub fn research_available(&self, nodes: &Dictionary<ResearchNode>, total_earned: f64) -> u32 {
        research_points(total_earned, self.haze, self.research_spent(nodes))
    }

    pub fn buy_research(
        &mut self,
        node: &ResearchNode,
        available: u32,
    ) -> Result<impl FnOnce() -> Vec<Progress> + '_, ProgressError> {
        if self.research.contains(&node.id) {
            return Err(ResearchAlreadyOwned {
                node: node.id.clone(),
            });
        }
        if let Some(missing) = node
            .requires
            .iter()
            .find(|required| !self.research.contains(*required))
        {
            return Err(ResearchLocked {
                node: node.id.clone(),
                requires: missing.clone(),
            });
        }
        if available < node.cost {
            return Err(NotEnoughResearchPoints {
                required: node.cost,
                available,
            });
        }
        let node = node.id.clone();
        let command = move || {
            self.research.insert(node.clone());
            vec![ResearchBought { node }]
        };
        Ok(command)
    }
}
