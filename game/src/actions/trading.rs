use log::info;

use crate::api::{ActionError, Event};
use crate::journal::Severity;
use crate::market::{Buyer, ContractId, ContractKind, Deal};
use crate::progress::Milestone;
use crate::{occur, Game};

const OFFER_XP: u64 = 10;
const CONTRACT_XP: u64 = 12;
const GRAMS_PER_SALE_XP: f64 = 100.0;

impl Game {
    /// Sells stock at the live market price.
    pub(crate) fn sell_grams(&mut self, grams: f64) -> Result<Vec<Event>, ActionError> {
        let price = self.sale_price();
        self.sell_stock(grams, price)
    }

    pub(crate) fn sell_to_buyer(
        &mut self,
        buyer: Buyer,
        grams: f64,
    ) -> Result<Vec<Event>, ActionError> {
        let price = self.sale_price() * buyer.multiplier();
        self.sell_stock(grams, price)
    }

    /// Fulfills an offer, pharmacy offer or order in full.
    ///
    /// An expired contract is only removed, nothing changes hands.
    pub(crate) fn settle_contract(
        &mut self,
        kind: ContractKind,
        id: ContractId,
    ) -> Result<Vec<Event>, ActionError> {
        let now = self.timing.world_seconds;
        let (deal, settle_contract) = self.market.settle_contract(kind, id, now)?;
        let (grams, price) = match deal {
            Deal::Expired => {
                let mut events = occur![settle_contract()];
                events.extend(self.notify("The buyer is gone, the deal expired", Severity::Warning));
                return Ok(events);
            }
            Deal::Settled { grams, price } => (grams, price),
        };
        let (cash, sell) = self.economy.sell(grams, price, true)?;
        let xp = match kind {
            ContractKind::Offer => OFFER_XP,
            ContractKind::PharmacyOffer | ContractKind::Order => CONTRACT_XP,
        };
        let mut events = occur![settle_contract(), sell(), self.progress.gain_xp(xp)];
        events.extend(self.record_sale(grams, cash));
        info!("Settled {:?} {:?}: {:.1} g for {:.2}", kind, id, grams, cash);
        Ok(events)
    }

    fn sell_stock(&mut self, grams: f64, price: f64) -> Result<Vec<Event>, ActionError> {
        let (cash, sell) = self.economy.sell(grams, price, false)?;
        let xp = ((grams / GRAMS_PER_SALE_XP).floor() as u64).max(1);
        let mut events = occur![sell(), self.progress.gain_xp(xp)];
        events.extend(self.record_sale(grams, cash));
        Ok(events)
    }

    fn record_sale(&mut self, grams: f64, cash: f64) -> Vec<Event> {
        let sold = self
            .progress
            .record_milestone(&Milestone::Sell { grams }, &self.known.quests);
        let earned = self
            .progress
            .record_milestone(&Milestone::Cash { amount: cash }, &self.known.quests);
        occur![sold, earned]
    }
}
