use log::warn;

use crate::market::{ContractKind, MarketDomain, PRICE_HISTORY_LIMIT};
use crate::math::GaugeMath;

impl MarketDomain {
    pub fn normalize(&mut self) {
        self.trend_multiplier = self.trend_multiplier.finite_or(1.0).max(0.0);
        self.news_multiplier = self.news_multiplier.finite_or(1.0).max(0.0);
        self.event_multiplier = self.event_multiplier.finite_or(1.0).max(0.0);
        self.water_multiplier = self.water_multiplier.finite_or(1.0).max(0.0);
        for timer in [
            &mut self.drift_timer,
            &mut self.news_timer,
            &mut self.event_timer,
            &mut self.next_event,
            &mut self.event_cooldown,
            &mut self.next_offer,
            &mut self.next_pharmacy_offer,
            &mut self.next_order,
        ] {
            *timer = timer.non_negative();
        }
        self.price_history.retain(|price| price.is_finite());
        if self.price_history.len() > PRICE_HISTORY_LIMIT {
            let excess = self.price_history.len() - PRICE_HISTORY_LIMIT;
            self.price_history.drain(..excess);
        }
        for kind in [
            ContractKind::Offer,
            ContractKind::PharmacyOffer,
            ContractKind::Order,
        ] {
            let contracts = self.contracts_mut(kind);
            let before = contracts.len();
            contracts.retain(|contract| {
                contract.grams.is_finite()
                    && contract.grams > 0.0
                    && contract.price.is_finite()
                    && contract.expires_at.is_finite()
            });
            if contracts.len() != before {
                warn!(
                    "Dropped {} corrupt {:?} contracts",
                    before - contracts.len(),
                    kind
                );
            }
            let ids: Vec<usize> = contracts.iter().map(|contract| contract.id.0).collect();
            for id in ids {
                self.contracts_id.register(id);
            }
        }
    }
}
