use serde::Serialize;

use crate::generator::Notice;

/// What the user asked for, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub words: i64,
    pub symbols: i64,
    pub capitalize: bool,
    pub append_number: bool,
    pub append_exclamation: bool,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            words: 1,
            symbols: 0,
            capitalize: false,
            append_number: false,
            append_exclamation: false,
        }
    }
}

/// Effective run parameters. Only one word and zero symbols are ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub word_count: u32,
    pub symbol_count: u32,
    pub capitalize: bool,
    pub append_number: bool,
    pub append_exclamation: bool,
}

impl Settings {
    /// Clamp a request into settings, returning the warnings that clamping
    /// produced (words first, then symbols).
    pub fn resolve(request: &Request) -> (Self, Vec<Notice>) {
        let mut warnings = Vec::new();

        if request.words > 1 {
            tracing::info!(requested = request.words, "clamping word count to 1");
            warnings.push(Notice::TooManyWords);
        }
        if request.symbols > 0 {
            tracing::info!(requested = request.symbols, "forcing symbol count to 0");
            warnings.push(Notice::SymbolsRequested);
        }

        let settings = Self {
            word_count: 1,
            symbol_count: 0,
            capitalize: request.capitalize,
            append_number: request.append_number,
            append_exclamation: request.append_exclamation,
        };
        (settings, warnings)
    }
}
