use crate::economy::Economy::{CashChanged, ContractCancelled, ContractSigned};
use crate::economy::EconomyError::{ContractAlreadySigned, ContractNotSigned, NotEnoughCash};
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn sign_contract(
        &mut self,
        contract: &str,
        hire_cost: f64,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if self.contracts.contains(contract) {
            return Err(ContractAlreadySigned {
                contract: contract.to_string(),
            });
        }
        if self.cash < hire_cost {
            return Err(NotEnoughCash {
                required: hire_cost,
                available: self.cash,
            });
        }
        let contract = contract.to_string();
        let operation = move || {
            self.cash -= hire_cost;
            self.contracts.insert(contract.clone());
            vec![ContractSigned { contract }, CashChanged { cash: self.cash }]
        };
        Ok(operation)
    }

    pub fn cancel_contract(
        &mut self,
        contract: &str,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if !self.contracts.contains(contract) {
            return Err(ContractNotSigned {
                contract: contract.to_string(),
            });
        }
        let contract = contract.to_string();
        let operation = move || {
            self.contracts.remove(&contract);
            vec![ContractCancelled { contract }]
        };
        Ok(operation)
    }
}
