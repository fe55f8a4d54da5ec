//! Password generation command
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): CLI arguments and `execute`
//! - Internal implementation: rendering in internal.rs
//!
//! # Output
//!
//! Text mode prints the clamping warnings before the word list is read,
//! then each confirmation on its own line, then the password as the last
//! line. JSON mode prints one pretty object.

mod internal;

use std::io::Write;
use std::num::IntErrorKind;

use anyhow::{Context, Result};
use bad_password::{paths, Generator, Request, Settings, WordList};

/// Flags for password generation (flattened into the top-level CLI)
#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Words to include in the password
    #[arg(
        short,
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        value_parser = parse_saturating_int
    )]
    pub words: i64,

    /// Special characters to include in the password
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = parse_saturating_int
    )]
    pub symbols: i64,

    /// Capitalize the first letter (makes it super secure!)
    #[arg(short, long)]
    pub caps: bool,

    /// Add numbers at the end (definitely not predictable)
    #[arg(short, long)]
    pub numbers: bool,

    /// Add an exclamation mark (security experts recommend this)
    #[arg(short, long)]
    pub exclamation: bool,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn request(&self) -> Request {
        Request {
            words: self.words,
            symbols: self.symbols,
            capitalize: self.caps,
            append_number: self.numbers,
            append_exclamation: self.exclamation,
        }
    }
}

/// Parse any integer, saturating at the `i64` bounds.
///
/// Only the sign and magnitude relative to 0 and 1 matter downstream, so an
/// out-of-range value still counts as "more than one".
fn parse_saturating_int(value: &str) -> Result<i64, String> {
    let value = value.trim();
    match value.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("invalid integer '{value}'")),
        },
    }
}

/// Warn about clamped flags, then load `./common-passwords.txt`, generate
/// one password and print it.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let (settings, warnings) = Settings::resolve(&args.request());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if !args.json {
        internal::write_notices(&mut out, &warnings)?;
        out.flush()?;
    }

    let path = paths::word_list();
    let list = WordList::load(&path).context("Failed to load word list")?;

    let generation = Generator::system().generate_with(&list, settings, warnings);
    tracing::info!(
        words = generation.settings.word_count,
        symbols = generation.settings.symbol_count,
        "generated password"
    );

    if args.json {
        internal::write_json(&mut out, &generation)
    } else {
        internal::write_text(&mut out, &generation)
    }
}
