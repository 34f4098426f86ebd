// src/cli.rs
//! Command-line arguments for `protect_batch` (`cli` feature)

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "protect_batch")]
#[command(about = "Encode or decode stdin lines with a prompted password", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Encode each stdin line, printing base64url ciphertext
    Encode,

    /// Decode base64url ciphertext lines back to text
    Decode,

    /// Print the password wrapped by the base encryption, as hex
    Wrap,
}
