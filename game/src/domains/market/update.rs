use crate::formulas::BASE_PRICE_PER_GRAM;
use crate::math::{GaugeMath, Random};
use crate::market::Market::{
    ContractExpired, ContractSpawned, EventEnded, EventStarted, NewsEnded, NewsStarted,
    TrendChanged,
};
use crate::market::{
    Contract, ContractId, ContractKind, Market, MarketConditions, MarketDomain,
    COOLDOWN_EVENT_CHANCE, DRIFT_INTERVAL, MARKET_EVENT_DURATION, MAX_ORDERS, NEWS,
    NEWS_CHANCE_PER_SEC, PHARMACY_LEVEL, PRICE_HISTORY_LIMIT, TRENDS,
};

impl MarketDomain {
    /// Runs drift, news, contract spawning and expiry, and the market event timer for `time` world seconds.
    pub fn update(
        &mut self,
        time: f64,
        conditions: &MarketConditions,
        random: &mut dyn Random,
    ) -> Vec<Market> {
        let mut events = vec![];
        events.extend(self.drift(time, conditions, random));
        events.extend(self.update_news(time, random));
        events.extend(self.spawn_contracts(time, conditions, random));
        events.extend(self.prune_expired(conditions.now));
        events.extend(self.update_event(time, random));
        events
    }

    pub fn drift(
        &mut self,
        time: f64,
        conditions: &MarketConditions,
        random: &mut dyn Random,
    ) -> Vec<Market> {
        self.drift_timer = (self.drift_timer - time).max(0.0);
        if self.drift_timer > 0.0 {
            return vec![];
        }
        let (trend, multiplier) = TRENDS[random.index(TRENDS.len())];
        self.trend = trend.to_string();
        self.trend_multiplier = multiplier;
        self.drift_timer = DRIFT_INTERVAL;
        let price = self.sale_price(conditions.price_multiplier, conditions.average_quality);
        self.price_history.push(price);
        if self.price_history.len() > PRICE_HISTORY_LIMIT {
            let excess = self.price_history.len() - PRICE_HISTORY_LIMIT;
            self.price_history.drain(..excess);
        }
        vec![TrendChanged {
            trend: self.trend.clone(),
            multiplier,
            price,
        }]
    }

    pub fn update_news(&mut self, time: f64, random: &mut dyn Random) -> Vec<Market> {
        let mut events = vec![];
        self.news_timer = (self.news_timer - time).max(0.0);
        if self.news_timer > 0.0 {
            return events;
        }
        if self.news.take().is_some() {
            self.news_multiplier = 1.0;
            self.water_multiplier = 1.0;
            events.push(NewsEnded);
        }
        if random.chance(NEWS_CHANCE_PER_SEC * time) {
            let (news, multiplier, duration) = NEWS[random.index(NEWS.len())];
            self.news = Some(news.to_string());
            self.news_multiplier = multiplier;
            self.news_timer = duration;
            events.push(NewsStarted {
                news: news.to_string(),
                multiplier,
            });
        }
        events
    }

    pub fn spawn_contracts(
        &mut self,
        time: f64,
        conditions: &MarketConditions,
        random: &mut dyn Random,
    ) -> Vec<Market> {
        let mut events = vec![];
        self.next_offer = (self.next_offer - time).max(0.0);
        self.next_pharmacy_offer = (self.next_pharmacy_offer - time).max(0.0);
        self.next_order = (self.next_order - time).max(0.0);
        let max_offers = self.max_offers(conditions.offer_slots);

        if self.next_offer == 0.0 && self.offers.len() < max_offers {
            let contract = self.create_offer(conditions, random);
            events.push(self.push_contract(ContractKind::Offer, contract));
            let (min, max) = self.spawn_window(conditions.spawn_delta);
            self.next_offer = random.between(min, max);
        }
        if self.next_pharmacy_offer == 0.0 && self.pharmacy_offers.len() < max_offers {
            if conditions.level >= PHARMACY_LEVEL {
                let contract = self.create_pharmacy_offer(conditions, random);
                events.push(self.push_contract(ContractKind::PharmacyOffer, contract));
            }
            self.next_pharmacy_offer = random.between(30.0, 90.0);
        }
        if self.next_order == 0.0 && self.orders.len() < MAX_ORDERS {
            if let Some(contract) = self.create_order(conditions, random) {
                events.push(self.push_contract(ContractKind::Order, contract));
            }
            self.next_order = random.between(90.0, 210.0);
        }
        events
    }

    fn push_contract(&mut self, kind: ContractKind, contract: Contract) -> Market {
        self.contracts_mut(kind).push(contract.clone());
        ContractSpawned { kind, contract }
    }

    fn create_offer(&mut self, conditions: &MarketConditions, random: &mut dyn Random) -> Contract {
        let scale = contract_scale(conditions.total_earned);
        let grams = (40.0 * scale + random.max(400.0 * scale))
            .floor()
            .bounded(20.0, 1_000_000.0);
        let price = (BASE_PRICE_PER_GRAM * (1.1 + random.max(0.9))).round_to(2);
        let ttl = 60.0 + random.max(120.0).floor();
        Contract {
            id: self.contracts_id.one(ContractId),
            grams,
            price,
            expires_at: conditions.now + ttl,
            strain: None,
        }
    }

    fn create_pharmacy_offer(
        &mut self,
        conditions: &MarketConditions,
        random: &mut dyn Random,
    ) -> Contract {
        let scale = contract_scale(conditions.total_earned);
        let grams = (50.0 * scale + random.max(300.0 * scale))
            .floor()
            .bounded(30.0, 500_000.0);
        let price = (BASE_PRICE_PER_GRAM * (1.2 + random.generate())).round_to(2);
        let ttl = 90.0 + random.max(180.0).floor();
        Contract {
            id: self.contracts_id.one(ContractId),
            grams,
            price,
            expires_at: conditions.now + ttl,
            strain: None,
        }
    }

    fn create_order(
        &mut self,
        conditions: &MarketConditions,
        random: &mut dyn Random,
    ) -> Option<Contract> {
        if conditions.strains.is_empty() {
            return None;
        }
        let strain = conditions.strains[random.index(conditions.strains.len())].clone();
        let base = BASE_PRICE_PER_GRAM * self.event_multiplier;
        let price = (base * (1.2 + random.max(0.6))).round_to(2);
        let grams = (50.0 + random.max(250.0)).floor();
        let ttl = 120.0 + random.max(240.0).floor();
        Some(Contract {
            id: self.contracts_id.one(ContractId),
            grams,
            price,
            expires_at: conditions.now + ttl,
            strain: Some(strain),
        })
    }

    /// Drops every contract whose expiry is not in the future.
    pub fn prune_expired(&mut self, now: f64) -> Vec<Market> {
        let mut events = vec![];
        for kind in [
            ContractKind::Offer,
            ContractKind::PharmacyOffer,
            ContractKind::Order,
        ] {
            let contracts = self.contracts_mut(kind);
            for contract in contracts.iter().filter(|contract| contract.is_expired(now)) {
                events.push(ContractExpired {
                    kind,
                    id: contract.id,
                });
            }
            contracts.retain(|contract| !contract.is_expired(now));
        }
        events
    }

    pub fn update_event(&mut self, time: f64, random: &mut dyn Random) -> Vec<Market> {
        let mut events = vec![];
        if self.event_timer > 0.0 {
            self.event_timer = (self.event_timer - time).max(0.0);
            if self.event_timer == 0.0 {
                self.event = None;
                self.event_multiplier = 1.0;
                events.push(EventEnded);
            }
        }
        if self.next_event > 0.0 {
            self.next_event = (self.next_event - time).max(0.0);
        }
        if self.next_event == 0.0 && self.event_timer == 0.0 {
            let (event, multiplier) = if random.generate() < 0.5 {
                ("inspection", 0.7)
            } else {
                ("hype", 1.25)
            };
            self.event = Some(event.to_string());
            self.event_multiplier = multiplier;
            self.event_timer = MARKET_EVENT_DURATION;
            self.next_event = random.between(90.0, 150.0);
            events.push(EventStarted {
                event: event.to_string(),
                multiplier,
            });
        }
        events
    }

    /// Counts the cooldown down by one housekeeping interval and may start a heatwave or festival.
    pub fn roll_cooldown(&mut self, interval: f64, random: &mut dyn Random) -> Vec<Market> {
        let mut events = vec![];
        self.event_cooldown = (self.event_cooldown - interval).max(0.0);
        if self.event_cooldown > 0.0 {
            return events;
        }
        if random.chance(COOLDOWN_EVENT_CHANCE) && self.news_timer == 0.0 {
            let (news, multiplier) = if random.generate() < 0.5 {
                self.water_multiplier = 1.5;
                self.news_timer = 300.0;
                ("heatwave", 1.0)
            } else {
                self.news_timer = 600.0;
                ("festival", 1.2)
            };
            self.news = Some(news.to_string());
            self.news_multiplier = multiplier;
            events.push(NewsStarted {
                news: news.to_string(),
                multiplier,
            });
        }
        self.event_cooldown = random.between(300.0, 600.0);
        events
    }
}

fn contract_scale(total_earned: f64) -> f64 {
    (total_earned.max(1.0).sqrt() / 20.0).max(1.0)
}
