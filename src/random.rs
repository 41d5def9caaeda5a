use std::ops::RangeInclusive;

use rand::{rngs::StdRng, Rng, SeedableRng};


// Receipt numbers are three digits
pub const RECEIPT_NUMBERS: RangeInclusive<u16> = 100..=999;

// Source of display-only receipt numbers; repeats are allowed
#[derive(Debug, Clone)]
pub struct ReceiptNumbers {
    rng: StdRng,
}

impl ReceiptNumbers {
    // Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn next_number(&mut self) -> u16 {
        self.rng.gen_range(RECEIPT_NUMBERS)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stay_three_digits() {
        let mut numbers = ReceiptNumbers::seeded(42);
        for _ in 0..10_000 {
            assert!(RECEIPT_NUMBERS.contains(&numbers.next_number()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ReceiptNumbers::seeded(7);
        let mut b = ReceiptNumbers::seeded(7);
        let xs: Vec<u16> = (0..20).map(|_| a.next_number()).collect();
        let ys: Vec<u16> = (0..20).map(|_| b.next_number()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn entropy_numbers_stay_three_digits() {
        let mut numbers = ReceiptNumbers::from_entropy();
        for _ in 0..1_000 {
            assert!(RECEIPT_NUMBERS.contains(&numbers.next_number()));
        }
    }
}
