use crate::formulas::{quality_price_multiplier, BASE_PRICE_PER_GRAM};
use crate::market::{MarketDomain, MAX_OFFERS_BASE, OFFER_SPAWN_MAX, OFFER_SPAWN_MIN};

impl MarketDomain {
    /// Live price of one gram for the given item price multiplier and pooled quality.
    pub fn sale_price(&self, price_multiplier: f64, average_quality: f64) -> f64 {
        BASE_PRICE_PER_GRAM
            * self.event_multiplier
            * self.trend_multiplier
            * self.news_multiplier
            * price_multiplier
            * quality_price_multiplier(average_quality)
    }

    /// Bounds of the offer respawn delay, shortened by delivery items.
    pub fn spawn_window(&self, spawn_delta: f64) -> (f64, f64) {
        let min = (OFFER_SPAWN_MIN - spawn_delta).max(20.0);
        let max = (OFFER_SPAWN_MAX - spawn_delta).max(min + 5.0);
        (min, max)
    }

    pub fn max_offers(&self, offer_slots: u32) -> usize {
        MAX_OFFERS_BASE + offer_slots as usize
    }
}
