use nanorand::{Rng, WyRand};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

/// Uniform source of values in `[0, 1)`.
pub trait Random {
    fn generate(&mut self) -> f64;

    fn max(&mut self, max: f64) -> f64 {
        max * self.generate()
    }

    fn between(&mut self, min: f64, max: f64) -> f64 {
        min + self.generate() * (max - min)
    }

    /// Uniform index in `0..len`, `len` must be positive.
    fn index(&mut self, len: usize) -> usize {
        ((self.generate() * len as f64) as usize).min(len.saturating_sub(1))
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.generate() < probability
    }
}

pub struct WyRandom {
    generator: WyRand,
}

impl WyRandom {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }
}

impl Default for WyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Random for WyRandom {
    fn generate(&mut self) -> f64 {
        self.generator.generate::<f64>()
    }
}

pub struct SeededRandom {
    generator: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            generator: StdRng::seed_from_u64(seed),
        }
    }
}

impl Random for SeededRandom {
    fn generate(&mut self) -> f64 {
        self.generator.gen::<f64>()
    }
}

/// Always returns the same value, used for reproducible previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl Random for FixedRandom {
    fn generate(&mut self) -> f64 {
        self.0
    }
}

/// Replays the given values in a loop.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl Random for ScriptedRandom {
    fn generate(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
