use crate::economy::Economy::CashChanged;
use crate::economy::EconomyError::{InvalidAmount, NotEnoughCash};
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn spend_cash(
        &mut self,
        amount: f64,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InvalidAmount { amount });
        }
        if self.cash < amount {
            return Err(NotEnoughCash {
                required: amount,
                available: self.cash,
            });
        }
        let operation = move || {
            self.cash -= amount;
            vec![CashChanged { cash: self.cash }]
        };
        Ok(operation)
    }

    /// Credits cash that counts toward lifetime earnings.
    pub fn earn_cash(&mut self, amount: f64) -> Vec<Economy> {
        if !(amount > 0.0) || !amount.is_finite() {
            return vec![];
        }
        self.cash += amount;
        self.total_cash_earned += amount;
        vec![CashChanged { cash: self.cash }]
    }

    /// Credits cash that is not trade income, such as refunds.
    pub fn receive_cash(&mut self, amount: f64) -> Vec<Economy> {
        if !(amount > 0.0) || !amount.is_finite() {
            return vec![];
        }
        self.cash += amount;
        vec![CashChanged { cash: self.cash }]
    }
}
