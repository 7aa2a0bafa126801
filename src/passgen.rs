//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use zxcvbn::{Score, zxcvbn};

use crate::alphabet::AlphabetPool;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("character pool is empty, select at least one character type")]
    EmptyPool,
}

/// Draws `length` characters uniformly, with replacement, from `pool`.
///
/// `length` must be at least 1; range limits are the caller's business.
/// An empty pool is always an error, whatever the length.
pub fn generate<R: Rng + ?Sized>(
    pool: &AlphabetPool,
    length: usize,
    rng: &mut R,
) -> Result<String, GenError> {
    if pool.is_empty() {
        return Err(GenError::EmptyPool);
    }
    debug_assert!(length >= 1, "password length must be positive");

    let chars = pool.chars();
    let password = (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect();
    Ok(password)
}

/// Owns the random source used for generation.
///
/// Seeded generators produce the same sequence of passwords for the same
/// sequence of calls.
pub struct PasswordGenerator {
    rng: ChaCha20Rng,
}

impl PasswordGenerator {
    pub fn from_entropy() -> Self {
        Self { rng: ChaCha20Rng::from_entropy() }
    }

    pub fn from_seed(seed: u64) -> Self {
        debug!("using seeded generator");
        Self { rng: ChaCha20Rng::seed_from_u64(seed) }
    }

    pub fn generate(&mut self, pool: &AlphabetPool, length: usize) -> Result<String, GenError> {
        debug!("generating {} chars from a pool of {}", length, pool.len());
        generate(pool, length, &mut self.rng)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// zxcvbn estimate, complementing the length-only tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub rating: String,
    pub score: u8,
    pub feedback: String,
}

pub fn assess_password_strength(password: &str) -> StrengthReport {
    let estimate = zxcvbn(password, &[]);
    let feedback = estimate.feedback().map_or_else(String::new, |f| {
        f.suggestions()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    });

    let (rating, score) = match estimate.score() {
        Score::Zero => ("Very weak", 0),
        Score::One => ("Weak", 1),
        Score::Two => ("Fair", 2),
        Score::Three => ("Strong", 3),
        Score::Four => ("Very strong", 4),
        _ => ("Unknown", 0),
    };

    StrengthReport {
        rating: rating.to_string(),
        score,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{CharacterClassSelection, build_alphabet};

    #[test]
    fn test_single_char_pool() {
        let pool = AlphabetPool::from("x");
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(generate(&pool, 5, &mut rng).unwrap(), "xxxxx");
    }

    #[test]
    fn test_empty_pool_rejected() {
        let pool = build_alphabet(&CharacterClassSelection::none());
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(generate(&pool, 10, &mut rng), Err(GenError::EmptyPool));
    }

    #[test]
    fn test_assess_weak_password() {
        let report = assess_password_strength("password");
        assert!(report.score <= 1);
    }

    #[test]
    fn test_assess_strong_password() {
        let report = assess_password_strength("v7#Qm!2pLx@9Rz$e");
        assert!(report.score >= 3);
    }
}
