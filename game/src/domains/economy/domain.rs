use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyDomain {
    pub cash: f64,
    pub grams: f64,
    pub concentrate: f64,
    pub pool: QualityPool,
    /// Lifetime dry grams brought into stock.
    pub total_earned: f64,
    pub total_cash_earned: f64,
    pub best_per_sec: f64,
    pub trades: u32,
    pub contracts: BTreeSet<String>,
}

impl Default for EconomyDomain {
    fn default() -> Self {
        Self {
            cash: 0.0,
            grams: 0.0,
            concentrate: 0.0,
            pool: QualityPool::default(),
            total_earned: 0.0,
            total_cash_earned: 0.0,
            best_per_sec: 0.0,
            trades: 0,
            contracts: BTreeSet::new(),
        }
    }
}

/// Quality-weighted grams backing the average quality of the stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityPool {
    pub grams: f64,
    pub weighted: f64,
}

impl QualityPool {
    pub fn average(&self) -> f64 {
        if self.grams > 0.0 {
            self.weighted / self.grams
        } else {
            1.0
        }
    }

    pub fn deposit(&mut self, grams: f64, quality: f64) {
        self.grams += grams;
        self.weighted += grams * quality;
    }

    /// Removes `grams` at the current average, never going negative.
    pub fn withdraw(&mut self, grams: f64) {
        let used = self.weighted.min(self.average() * grams);
        self.grams = (self.grams - grams).max(0.0);
        self.weighted = (self.weighted - used).max(0.0);
    }
}

/// Costs and payouts settled at one month boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyBill {
    pub upkeep: f64,
    pub salaries: f64,
    pub payout: f64,
    pub grams: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Economy {
    CashChanged {
        cash: f64,
    },
    StockChanged {
        grams: f64,
        average_quality: f64,
    },
    ConcentrateChanged {
        grams: f64,
    },
    Sold {
        grams: f64,
        cash: f64,
    },
    BillsPaid {
        expenses: f64,
        payout: f64,
        grams: f64,
    },
    ContractSigned {
        contract: String,
    },
    ContractCancelled {
        contract: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum EconomyError {
    NotEnoughCash { required: f64, available: f64 },
    NotEnoughStock { required: f64, available: f64 },
    InvalidAmount { amount: f64 },
    ContractAlreadySigned { contract: String },
    ContractNotSigned { contract: String },
}
