//! Park-Miller minimal standard generator used to shuffle bags.

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;
const MAX_FLOAT: u64 = 2_147_483_646;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rng {
    seed: u64,
    index: usize,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { seed: 0, index: 0 };
        rng.set_seed(seed);
        rng
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed % MODULUS;
        if self.seed == 0 {
            self.seed += MAX_FLOAT;
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of values drawn so far.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> u64 {
        self.index += 1;
        self.seed = MULTIPLIER * self.seed % MODULUS;
        self.seed
    }

    /// Uniform in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        (self.next() - 1) as f64 / MAX_FLOAT as f64
    }

    /// Fisher-Yates, walking from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let r = (self.next_float() * (i + 1) as f64) as usize;
            items.swap(i, r);
        }
    }
}
