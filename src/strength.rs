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
// Length-based strength tiers

use std::fmt;

pub const WEAK_MAX: usize = 6;
pub const MEDIUM_MAX: usize = 12;

/// Coarse length-only heuristic, not an entropy measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "Weak"),
            StrengthTier::Medium => write!(f, "Medium"),
            StrengthTier::Strong => write!(f, "Strong"),
        }
    }
}

pub fn classify(length: usize) -> StrengthTier {
    if length <= WEAK_MAX {
        StrengthTier::Weak
    } else if length <= MEDIUM_MAX {
        StrengthTier::Medium
    } else {
        StrengthTier::Strong
    }
}

/// Classifies by character count, not byte length.
pub fn classify_password(password: &str) -> StrengthTier {
    classify(password.chars().count())
}
