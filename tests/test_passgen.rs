use rpwgen::alphabet::{AlphabetPool, CharacterClassSelection, build_alphabet};
use rpwgen::passgen::{GenError, PasswordGenerator, generate};
use rpwgen::strength::{StrengthTier, classify};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_exact_length_from_pool() {
        let pool = build_alphabet(&CharacterClassSelection::default());
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for length in [1, 4, 16, 32, 100] {
            let password = generate(&pool, length, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn test_generate_respects_selection() {
        let selection = CharacterClassSelection {
            uppercase: false,
            lowercase: true,
            digits: true,
            symbols: false,
        };
        let pool = build_alphabet(&selection);
        let mut generator = PasswordGenerator::from_seed(11);
        let password = generator.generate(&pool, 64).unwrap();
        assert!(!password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_empty_pool_fails_for_every_length() {
        let pool = build_alphabet(&CharacterClassSelection::none());
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for length in [0, 1, 6, 10, 32, 1000] {
            assert_eq!(generate(&pool, length, &mut rng), Err(GenError::EmptyPool));
        }
    }

    #[test]
    fn test_same_seed_same_passwords() {
        let pool = build_alphabet(&CharacterClassSelection::default());
        let mut a = PasswordGenerator::from_seed(42);
        let mut b = PasswordGenerator::from_seed(42);
        for _ in 0..5 {
            assert_eq!(a.generate(&pool, 20).unwrap(), b.generate(&pool, 20).unwrap());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let pool = build_alphabet(&CharacterClassSelection::default());
        let a = PasswordGenerator::from_seed(1).generate(&pool, 32).unwrap();
        let b = PasswordGenerator::from_seed(2).generate(&pool, 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_consecutive_calls_differ() {
        let pool = build_alphabet(&CharacterClassSelection::default());
        let mut generator = PasswordGenerator::from_entropy();
        let first = generator.generate(&pool, 32).unwrap();
        let second = generator.generate(&pool, 32).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let pool = AlphabetPool::from("0123456789");
        let mut rng = ChaCha20Rng::seed_from_u64(2025);
        let password = generate(&pool, 50_000, &mut rng).unwrap();

        let mut counts: HashMap<char, usize> = HashMap::new();
        for c in password.chars() {
            *counts.entry(c).or_default() += 1;
        }

        assert_eq!(counts.len(), 10);
        let expected = 5_000.0;
        for (c, n) in counts {
            let ratio = n as f64 / expected;
            assert!((0.9..1.1).contains(&ratio), "char {} drawn {} times", c, n);
        }
    }

    #[test]
    fn test_full_selection_scenario() {
        let pool = build_alphabet(&CharacterClassSelection::all());
        assert_eq!(pool.len(), 26 + 26 + 10 + 32);

        let password = PasswordGenerator::from_seed(16).generate(&pool, 16).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| pool.contains(c)));
        assert_eq!(classify(16), StrengthTier::Strong);
    }

    #[test]
    fn test_no_selection_scenario() {
        let pool = build_alphabet(&CharacterClassSelection::none());
        let result = PasswordGenerator::from_seed(10).generate(&pool, 10);
        assert!(matches!(result, Err(GenError::EmptyPool)));
    }
}
