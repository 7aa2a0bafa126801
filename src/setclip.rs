//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-31
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use std::{env, process, thread, time::Duration};

use anyhow::{Context, Result};
use arboard::Clipboard;
use log::{debug, warn};
use sha2::{Digest, Sha256};

pub const DAEMON_ENV: &str = "RPWGEN_CLIPBOARD_DAEMON";
pub const DIGEST_ENV: &str = "RPWGEN_CLIPBOARD_DIGEST";
pub const DELAY_ENV: &str = "RPWGEN_CLIPBOARD_DELAY";

/// Hex SHA-256 of the copied text; the daemon never sees the text itself.
pub fn secret_digest(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

/// Only clear what we put there.
pub fn should_clear(current: &str, digest: &str) -> bool {
    secret_digest(current) == digest
}

fn spawn_daemon(secret: &str, delay: Duration) -> Result<()> {
    let exe_path = env::current_exe().context("Failed to locate current executable")?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
        .env(DIGEST_ENV, secret_digest(secret))
        .env(DELAY_ENV, delay.as_secs().to_string())
        .stdin(process::Stdio::null())
        .stdout(process::Stdio::null())
        .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn().context("Failed to spawn clipboard daemon")?;
    Ok(())
}

/// Returns true when this process was started as the clipboard daemon.
pub fn is_daemon() -> bool {
    env::var(DAEMON_ENV).is_ok()
}

/// Body of the detached process: wait, then clear if untouched.
pub fn run_daemon() -> Result<()> {
    let digest = env::var(DIGEST_ENV).context("Clipboard daemon started without a digest")?;
    let secs: u64 = env::var(DELAY_ENV)
        .context("Clipboard daemon started without a delay")?
        .parse()
        .context("Invalid clipboard delay")?;

    thread::sleep(Duration::from_secs(secs));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("clipboard unavailable in daemon: {}", e);
            return Ok(());
        }
    };

    let current = ctx.get_text().unwrap_or_default();
    if should_clear(&current, &digest) {
        ctx.set_text("").context("Failed to clear clipboard")?;
        debug!("clipboard cleared");
    } else {
        debug!("clipboard changed, leaving it alone");
    }
    Ok(())
}

/// Copies `secret` and, if `clear_after` is set, schedules a clear.
pub fn copy_to_clipboard(secret: &str, clear_after: Option<Duration>) -> Result<()> {
    let mut ctx = Clipboard::new().context("Failed to open clipboard")?;
    ctx.set_text(secret).context("Failed to write clipboard")?;
    if let Some(delay) = clear_after {
        spawn_daemon(secret, delay)?;
    }
    Ok(())
}
