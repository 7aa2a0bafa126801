//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-11
// Version : 0.1.0
// License : Mulan PSL v2
//
// Generation requests from the command line

use thiserror::Error;

use crate::alphabet::{AlphabetPool, CharacterClassSelection, build_alphabet};
use crate::configtool::GenConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("password length {length} is outside {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },
    #[error("Please select at least one character type.")]
    NoCharacterTypes,
}

/// Classes switched off on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFlags {
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
}

impl ClassFlags {
    /// A class stays enabled only if the config enables it and no flag removes it.
    pub fn apply(&self, base: CharacterClassSelection) -> CharacterClassSelection {
        CharacterClassSelection {
            uppercase: base.uppercase && !self.no_uppercase,
            lowercase: base.lowercase && !self.no_lowercase,
            digits: base.digits && !self.no_digits,
            symbols: base.symbols && !self.no_symbols,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenRequest {
    pub length: Option<usize>,
    pub exclude: ClassFlags,
    pub count: usize,
    pub seed: Option<u64>,
    pub copy: bool,
    pub clear_after: Option<u64>,
    pub show_meter: bool,
}

impl GenRequest {
    /// Merges the request with `config` into the pool and length handed to
    /// the generator. Checks happen here so the core never sees a bad length
    /// or an empty pool.
    pub fn resolve(&self, config: &GenConfig) -> Result<(AlphabetPool, usize), RequestError> {
        let length = self.length.unwrap_or(config.default_length);
        if length < config.min_length || length > config.max_length {
            return Err(RequestError::LengthOutOfRange {
                length,
                min: config.min_length,
                max: config.max_length,
            });
        }

        let selection = self.exclude.apply(config.selection);
        if selection.is_empty() {
            return Err(RequestError::NoCharacterTypes);
        }
        Ok((build_alphabet(&selection), length))
    }
}
