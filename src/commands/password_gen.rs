use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;

use rpwgen::configtool::GenConfig;
use rpwgen::meter::render_meter;
use rpwgen::passgen::PasswordGenerator;
use rpwgen::request::GenRequest;
use rpwgen::setclip::copy_to_clipboard;
use rpwgen::strength::classify;

pub fn generate_random(config: &GenConfig, req: GenRequest) -> Result<()> {
    let (pool, length) = req.resolve(config)?;
    debug!("pool has {} characters", pool.len());

    let mut generator = match req.seed {
        Some(seed) => PasswordGenerator::from_seed(seed),
        None => PasswordGenerator::from_entropy(),
    };

    let mut last = None;
    for _ in 0..req.count.max(1) {
        let password = generator.generate(&pool, length)?;
        println!("{}", password);
        last = Some(password);
    }

    if req.show_meter {
        println!("{}", render_meter(length));
    } else {
        println!("Strength: {}", classify(length));
    }

    if req.copy {
        if let Some(password) = last {
            let secs = req.clear_after.unwrap_or(config.clipboard_clear_secs);
            let clear_after = (secs > 0).then(|| Duration::from_secs(secs));
            copy_to_clipboard(&password, clear_after)
                .context("Failed to copy password to clipboard")?;
            match clear_after {
                Some(d) => println!("Copied to clipboard, clearing in {}s.", d.as_secs()),
                None => println!("Copied to clipboard."),
            }
        }
    }
    Ok(())
}
