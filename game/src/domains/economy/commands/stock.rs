use crate::economy::Economy::{CashChanged, ConcentrateChanged, Sold, StockChanged};
use crate::economy::EconomyError::{InvalidAmount, NotEnoughStock};
use crate::economy::{Economy, EconomyDomain, EconomyError};
use crate::formulas::{clamp_batch_quality, sale_quality_multiplier};

impl EconomyDomain {
    pub fn average_quality(&self) -> f64 {
        self.pool.average()
    }

    /// Adds collected dry grams to the stock, the quality pool and the lifetime total.
    ///
    /// Incoming quality is held to the batch range before it is blended in.
    pub fn add_stock(&mut self, grams: f64, quality: f64) -> Vec<Economy> {
        if !(grams > 0.0) || !grams.is_finite() {
            return vec![];
        }
        self.grams += grams;
        self.total_earned += grams;
        self.pool.deposit(grams, clamp_batch_quality(quality));
        vec![self.stock_changed()]
    }

    pub fn add_concentrate(&mut self, grams: f64) -> Vec<Economy> {
        if !(grams > 0.0) || !grams.is_finite() {
            return vec![];
        }
        self.concentrate += grams;
        vec![ConcentrateChanged {
            grams: self.concentrate,
        }]
    }

    /// Spends grams as currency for upgrades and unlocks.
    pub fn spend_grams(
        &mut self,
        amount: f64,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        self.ensure_stock(amount)?;
        let operation = move || {
            self.grams -= amount;
            vec![StockChanged {
                grams: self.grams,
                average_quality: self.pool.average(),
            }]
        };
        Ok(operation)
    }

    /// Sells `grams` at `price` per gram; `tiered` applies the settlement quality multiplier.
    ///
    /// Returns the cash the sale will credit.
    pub fn sell(
        &mut self,
        grams: f64,
        price: f64,
        tiered: bool,
    ) -> Result<(f64, impl FnOnce() -> Vec<Economy> + '_), EconomyError> {
        self.ensure_stock(grams)?;
        if !price.is_finite() || price < 0.0 {
            return Err(InvalidAmount { amount: price });
        }
        let multiplier = if tiered {
            sale_quality_multiplier(self.pool.average())
        } else {
            1.0
        };
        let cash = grams * price * multiplier;
        let operation = move || {
            self.grams -= grams;
            self.pool.withdraw(grams);
            self.cash += cash;
            self.total_cash_earned += cash;
            self.trades += 1;
            vec![
                Sold { grams, cash },
                CashChanged { cash: self.cash },
                StockChanged {
                    grams: self.grams,
                    average_quality: self.pool.average(),
                },
            ]
        };
        Ok((cash, operation))
    }

    fn ensure_stock(&self, grams: f64) -> Result<(), EconomyError> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(InvalidAmount { amount: grams });
        }
        if self.grams < grams {
            return Err(NotEnoughStock {
                required: grams,
                available: self.grams,
            });
        }
        Ok(())
    }

    fn stock_changed(&self) -> Economy {
        StockChanged {
            grams: self.grams,
            average_quality: self.pool.average(),
        }
    }
}
