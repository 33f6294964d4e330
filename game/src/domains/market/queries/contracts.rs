use crate::market::{Contract, ContractId, ContractKind, MarketDomain};

impl MarketDomain {
    pub fn contracts(&self, kind: ContractKind) -> &Vec<Contract> {
        match kind {
            ContractKind::Offer => &self.offers,
            ContractKind::PharmacyOffer => &self.pharmacy_offers,
            ContractKind::Order => &self.orders,
        }
    }

    pub fn contracts_mut(&mut self, kind: ContractKind) -> &mut Vec<Contract> {
        match kind {
            ContractKind::Offer => &mut self.offers,
            ContractKind::PharmacyOffer => &mut self.pharmacy_offers,
            ContractKind::Order => &mut self.orders,
        }
    }

    pub fn get_contract(&self, kind: ContractKind, id: ContractId) -> Option<&Contract> {
        self.contracts(kind).iter().find(|contract| contract.id == id)
    }
}
