//! Word list loading
//!
//! The list is a plain newline-delimited file. Each line is trimmed and
//! blank lines are dropped, so a trailing newline never yields an empty
//! "word". Order is preserved and duplicates are kept.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use fastrand::Rng;

use crate::error::WordListError;

/// An ordered, non-empty sequence of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Read and parse the word list at `path`.
    ///
    /// The file handle lives only inside this call and is closed on every
    /// return path, including a failed read.
    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let contents = read_file(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let words = parse(&contents);
        tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");

        Self::from_words(path, words)
    }

    /// Build a list from words already in memory. `source` is only used
    /// for diagnostics.
    pub fn from_words(source: &Path, words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty {
                path: source.to_path_buf(),
            });
        }
        Ok(Self { words })
    }

    /// Pick one entry uniformly at random.
    pub fn choose(&self, rng: &mut Rng) -> &str {
        // Non-empty by construction
        &self.words[rng.usize(..self.words.len())]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    /// Case-insensitive membership check.
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        let needle = word.to_lowercase();
        self.words.iter().any(|w| w.to_lowercase() == needle)
    }
}

fn read_file(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Split file contents into trimmed, non-empty lines.
pub fn parse(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
