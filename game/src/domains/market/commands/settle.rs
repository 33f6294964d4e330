use crate::market::Market::{
    ContractDeclined, ContractExpired, ContractSettled, ReputationChanged,
};
use crate::market::MarketError::ContractNotFound;
use crate::market::{ContractId, ContractKind, Deal, Market, MarketDomain, MarketError};

impl MarketDomain {
    /// Validates a contract against the clock; applying removes it either way.
    ///
    /// Settled orders also raise reputation.
    pub fn settle_contract(
        &mut self,
        kind: ContractKind,
        id: ContractId,
        now: f64,
    ) -> Result<(Deal, impl FnOnce() -> Vec<Market> + '_), MarketError> {
        let contract = self
            .get_contract(kind, id)
            .ok_or(ContractNotFound { kind, id })?;
        let deal = if contract.is_expired(now) {
            Deal::Expired
        } else {
            Deal::Settled {
                grams: contract.grams,
                price: contract.price,
            }
        };
        let command = move || {
            self.contracts_mut(kind).retain(|contract| contract.id != id);
            match deal {
                Deal::Expired => vec![ContractExpired { kind, id }],
                Deal::Settled { grams, price } => {
                    let mut events = vec![ContractSettled {
                        kind,
                        id,
                        grams,
                        price,
                    }];
                    if kind == ContractKind::Order {
                        self.reputation += 1;
                        events.push(ReputationChanged {
                            reputation: self.reputation,
                        });
                    }
                    events
                }
            }
        };
        Ok((deal, command))
    }

    pub fn decline_contract(
        &mut self,
        kind: ContractKind,
        id: ContractId,
    ) -> Result<impl FnOnce() -> Vec<Market> + '_, MarketError> {
        if self.get_contract(kind, id).is_none() {
            return Err(ContractNotFound { kind, id });
        }
        let command = move || {
            self.contracts_mut(kind).retain(|contract| contract.id != id);
            vec![ContractDeclined { kind, id }]
        };
        Ok(command)
    }
}
