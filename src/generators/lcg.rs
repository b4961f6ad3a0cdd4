//! Linear congruential generator used for maze carving.
//!
//! The constants are fixed so that a given seed always carves the same maze:
//! `state' = (state * 9301 + 49297) mod 233280`, output `state' / 233280`.

pub const MULTIPLIER: u64 = 9301;
pub const INCREMENT: u64 = 49297;
pub const MODULUS: u64 = 233280;

#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Seeds are reduced modulo [`MODULUS`], which yields the same sequence
    /// as seeding with the unreduced value.
    pub fn new(seed: u64) -> Self {
        Lcg {
            state: seed % MODULUS,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Uniform index in `0..len`, computed as `floor(next_f64() * len)`.
    pub fn index_below(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }

    /// Fisher-Yates shuffle walking from the last index down to 1.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }
}
