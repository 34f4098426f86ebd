//! Batch encode/decode — one stdin line per string
//!
//! Usage: `protect_batch <encode|decode|wrap>`; the password is prompted for.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arlot_protect::cli::{Args, Mode};
use arlot_protect::key_ops::{ciphertext_from_base64url, ciphertext_representations};
use arlot_protect::Cipher;
use clap::Parser;
use rpassword::read_password;
use tracing::{info, warn};

fn main() -> Result<()> {
    let args = Args::parse();
    arlot_protect::logging::init();

    eprint!("Password: ");
    std::io::stderr().flush()?;
    let password = read_password()?;
    let password = password.trim_end();

    let cipher = Cipher::new(password).context("password rejected")?;
    info!("cipher ready ({} code units)", cipher.code_units());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        Mode::Wrap => {
            let wrapped = cipher.get_password()?;
            writeln!(out, "{}", ciphertext_representations(&wrapped).hex)?;
            return Ok(());
        }
        Mode::Encode | Mode::Decode => {}
    }

    let mut processed = 0usize;
    let mut failed = 0usize;

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        if args.mode == Mode::Encode {
            let encoded = cipher.encode_str(&line);
            writeln!(out, "{}", ciphertext_representations(&encoded).base64url_no_pad)?;
            processed += 1;
            continue;
        }

        let Some(ciphertext) = ciphertext_from_base64url(line.trim()) else {
            warn!("skipping line {}: not base64url ciphertext", processed + failed + 1);
            failed += 1;
            continue;
        };
        match cipher.decode(password, &[ciphertext]) {
            Ok(mut plain) => {
                writeln!(out, "{}", plain.pop().unwrap_or_default())?;
                processed += 1;
            }
            Err(err) => {
                warn!("line {} failed: {err}", processed + failed + 1);
                failed += 1;
            }
        }
    }

    info!("{:?}: {processed} ok, {failed} failed", args.mode);
    Ok(())
}
