//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// Terminal strength meter

use console::style;

use crate::strength::{MEDIUM_MAX, StrengthTier, WEAK_MAX, classify};

/// Cells per colour band.
pub const BAND: usize = 6;
pub const CELLS: usize = BAND * 3;

const LIT: &str = "█";
const UNLIT: &str = "░";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterSegments {
    pub red: usize,
    pub yellow: usize,
    pub green: usize,
}

impl MeterSegments {
    pub fn for_length(length: usize) -> Self {
        Self {
            red: length.min(BAND),
            yellow: length.saturating_sub(WEAK_MAX).min(BAND),
            green: length.saturating_sub(MEDIUM_MAX).min(BAND),
        }
    }

    pub fn lit(&self) -> usize {
        self.red + self.yellow + self.green
    }
}

fn band(lit: usize, paint: fn(String) -> String) -> String {
    let mut out = paint(LIT.repeat(lit));
    out.push_str(&style(UNLIT.repeat(BAND - lit)).dim().to_string());
    out
}

/// Renders the 18-cell bar followed by the tier label.
pub fn render_meter(length: usize) -> String {
    let seg = MeterSegments::for_length(length);
    let tier = classify(length);

    let bar = [
        band(seg.red, |s| style(s).red().to_string()),
        band(seg.yellow, |s| style(s).yellow().to_string()),
        band(seg.green, |s| style(s).green().to_string()),
    ]
    .concat();

    let label = format!("{} Password", tier);
    let label = match tier {
        StrengthTier::Weak => style(label).red().bold(),
        StrengthTier::Medium => style(label).yellow().bold(),
        StrengthTier::Strong => style(label).green().bold(),
    };

    format!("[{}] {}", bar, label)
}
