//! Internal implementation for the generate command

use std::io::Write;

use anyhow::{Context, Result};
use bad_password::{Generation, Notice};

pub(super) fn write_notices(out: &mut impl Write, notices: &[Notice]) -> Result<()> {
    for notice in notices {
        writeln!(out, "{notice}")?;
    }
    Ok(())
}

/// Confirmations in order, then the password as the final line. Warnings
/// are skipped; they are written before the word list is loaded.
pub(super) fn write_text(out: &mut impl Write, generation: &Generation) -> Result<()> {
    for notice in generation.notices.iter().filter(|n| !n.is_warning()) {
        writeln!(out, "{notice}")?;
    }
    writeln!(out, "{}", generation.password)?;
    Ok(())
}

pub(super) fn write_json(out: &mut impl Write, generation: &Generation) -> Result<()> {
    let json = serde_json::to_string_pretty(generation)
        .context("Failed to serialize generation to JSON")?;
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bad_password::{FixedClock, Generator, Request, WordList};
    use std::path::Path;

    fn run(words: &[&str], request: Request) -> Generation {
        let list = WordList::from_words(
            Path::new("mem"),
            words.iter().map(|w| w.to_string()).collect(),
        )
        .unwrap();
        Generator::new(fastrand::Rng::with_seed(11), FixedClock::new(2024))
            .generate(&list, &request)
    }

    #[test]
    fn test_text_password_is_last_line() {
        let generation = run(
            &["letmein"],
            Request {
                words: 4,
                capitalize: true,
                ..Request::default()
            },
        );

        let mut buf = Vec::new();
        write_notices(&mut buf, &[Notice::TooManyWords]).unwrap();
        write_text(&mut buf, &generation).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3, "warning is not repeated by write_text");
        assert!(lines[0].starts_with("WARNING: Password might actually become secure"));
        assert_eq!(lines[1], "✓ Capitalized first letter for maximum security!");
        assert_eq!(lines[2], "Letmein");
    }

    #[test]
    fn test_json_fields() {
        let generation = run(
            &["trustno1"],
            Request {
                append_number: true,
                ..Request::default()
            },
        );

        let mut buf = Vec::new();
        write_json(&mut buf, &generation).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let suffix = value["suffix"].as_str().unwrap();
        assert_eq!(value["word"], "trustno1");
        assert_eq!(value["password"], format!("trustno1{suffix}"));
        assert_eq!(value["settings"]["word_count"], 1);
        assert_eq!(value["notices"][0]["kind"], "added_number");
        assert_eq!(value["notices"][0]["suffix"], suffix);
    }
}
