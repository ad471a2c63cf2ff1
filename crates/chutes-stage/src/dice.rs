//! Dice for moving tokens.

use rand::Rng;
use rand::rngs::StdRng;

/// Roll a six-sided die (1-6).
pub fn roll_d6(rng: &mut StdRng) -> u32 {
    rng.random_range(1..=6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn d6_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!((1..=6).contains(&roll_d6(&mut rng)));
        }
    }

    #[test]
    fn every_face_reachable() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(roll_d6(&mut rng));
        }
        assert_eq!(seen.len(), 6, "missing faces: {seen:?}");
    }

    #[test]
    fn seeded_rolls_repeat() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let ra: Vec<u32> = (0..20).map(|_| roll_d6(&mut a)).collect();
        let rb: Vec<u32> = (0..20).map(|_| roll_d6(&mut b)).collect();
        assert_eq!(ra, rb);
    }
}
