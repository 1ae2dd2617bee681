use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform picks among `len` canned alternatives.
pub trait ChoiceSource: Send + Sync {
    /// Returns an index in `0..len`, or 0 when `len` is 0.
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Default)]
pub struct ThreadRngChoice;

impl ChoiceSource for ThreadRngChoice {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

#[derive(Debug)]
pub struct SeededChoice {
    rng: Mutex<StdRng>,
}

impl SeededChoice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ChoiceSource for SeededChoice {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.lock().random_range(0..len)
    }
}

/// Always picks the same index (modulo `len`).
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(pub usize);

impl ChoiceSource for FixedChoice {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.0 % len
        }
    }
}
