use crate::economy::Economy::{BillsPaid, CashChanged, StockChanged};
use crate::economy::{Economy, EconomyDomain, MonthlyBill};

impl EconomyDomain {
    /// Settles one month: pays upkeep and salaries, then collects contract payouts.
    ///
    /// Cash never drops below zero; contracts take whatever stock covers their demand.
    pub fn pay_bills(&mut self, bill: MonthlyBill) -> Vec<Economy> {
        let expenses = bill.upkeep + bill.salaries;
        self.cash = (self.cash - expenses).max(0.0);
        let mut grams = 0.0;
        if bill.payout > 0.0 {
            grams = self.grams.min(bill.grams).max(0.0);
            self.grams -= grams;
            self.pool.withdraw(grams);
            self.cash += bill.payout;
        }
        vec![
            BillsPaid {
                expenses,
                payout: bill.payout,
                grams,
            },
            CashChanged { cash: self.cash },
            StockChanged {
                grams: self.grams,
                average_quality: self.pool.average(),
            },
        ]
    }

    /// Records the production rate, returning true on a new best.
    pub fn record_rate(&mut self, per_sec: f64) -> bool {
        if per_sec.is_finite() && per_sec > self.best_per_sec {
            self.best_per_sec = per_sec;
            true
        } else {
            false
        }
    }
}
