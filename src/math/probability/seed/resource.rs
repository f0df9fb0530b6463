use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injizierbare, seedbare Zufallsquelle für den gesamten Lauf.
/// Gleicher Seed ⇒ gleiche Punktwolke, gleiche Rollenverteilung, gleiche Delays.
#[derive(Debug, Clone)]
pub struct SeedResource {
    pub seed: u64,
    rng: StdRng,
}

impl SeedResource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Gleichverteilter Wert in `[min, max]`. Bei `min >= max` wird `min` geliefert.
    pub fn next_f64_in_inclusive_range(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Bernoulli-Versuch; `probability` wird auf `[0, 1]` begrenzt.
    pub fn next_bool_with_probability(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

impl Default for SeedResource {
    fn default() -> Self {
        let seed_number = rand::random::<u64>();
        Self::from_seed(seed_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_numeric_seed() {
        let num = 1337u64;
        let s = SeedResource::from_seed(num);
        assert_eq!(s.seed, num);
    }
    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeedResource::from_seed(42);
        let mut b = SeedResource::from_seed(42);
        for _ in 0..100 {
            assert_eq!(
                crate::next_random_range!(a, -5.0, 5.0),
                crate::next_random_range!(b, -5.0, 5.0)
            );
        }
    }
    #[test]
    fn test_range_bounds() {
        let mut s = SeedResource::from_seed(7);
        for _ in 0..1000 {
            let v = s.next_f64_in_inclusive_range(2.0, 3.0);
            assert!((2.0..=3.0).contains(&v));
        }
        assert_eq!(s.next_f64_in_inclusive_range(4.0, 4.0), 4.0);
        assert!(!crate::next_random_ratio!(s, 0.0));
        assert!(crate::next_random_ratio!(s, 1.0));
    }
}
