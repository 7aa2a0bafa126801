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
// Library root

pub mod alphabet;
pub mod configtool;
pub mod meter;
pub mod passgen;
pub mod request;
pub mod setclip;
pub mod strength;

pub use alphabet::{AlphabetPool, CharacterClassSelection, build_alphabet};
pub use passgen::{GenError, PasswordGenerator, generate};
pub use strength::{StrengthTier, classify};
