use crate::economy::EconomyDomain;
use crate::math::GaugeMath;

impl EconomyDomain {
    pub fn normalize(&mut self) {
        self.cash = self.cash.finite_or(0.0);
        self.grams = self.grams.non_negative();
        self.concentrate = self.concentrate.non_negative();
        self.total_earned = self.total_earned.non_negative();
        self.total_cash_earned = self.total_cash_earned.non_negative();
        self.best_per_sec = self.best_per_sec.non_negative();
        self.pool.grams = self.pool.grams.non_negative();
        self.pool.weighted = self.pool.weighted.non_negative();
    }
}
