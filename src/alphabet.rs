//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character classes and alphabet pool

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, no whitespace.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which character classes go into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl CharacterClassSelection {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }
}

/// Ordered sequence of characters eligible for sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetPool {
    chars: Vec<char>,
}

impl AlphabetPool {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl From<&str> for AlphabetPool {
    fn from(s: &str) -> Self {
        Self { chars: s.chars().collect() }
    }
}

/// Concatenates the reference sets of every enabled class, always in the
/// order uppercase, lowercase, digits, symbols.
pub fn build_alphabet(selection: &CharacterClassSelection) -> AlphabetPool {
    let sets = [
        (selection.uppercase, UPPERCASE),
        (selection.lowercase, LOWERCASE),
        (selection.digits, DIGITS),
        (selection.symbols, SYMBOLS),
    ];

    let chars = sets
        .iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, set)| set.chars())
        .collect();

    AlphabetPool { chars }
}
