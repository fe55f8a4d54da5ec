//! The password pipeline: clamp, pick, then apply the requested edits in
//! a fixed order (caps, numbers, exclamation).
//!
//! Randomness and time are both injected so a run can be replayed:
//!
//! ```
//! use bad_password::{FixedClock, Generator, Request, WordList};
//! use std::path::Path;
//!
//! let list = WordList::from_words(Path::new("mem"), vec!["dragon".into()]).unwrap();
//! let mut generator = Generator::new(fastrand::Rng::with_seed(1), FixedClock::new(2024));
//! let request = Request { capitalize: true, append_exclamation: true, ..Request::default() };
//!
//! assert_eq!(generator.generate(&list, &request).password, "Dragon!");
//! ```

use std::fmt;

use fastrand::Rng;
use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::config::{Request, Settings};
use crate::transform;
use crate::wordlist::WordList;

/// A line of advisory output produced during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    TooManyWords,
    SymbolsRequested,
    Capitalized,
    AddedNumber { suffix: String },
    AddedExclamation,
}

impl Notice {
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::TooManyWords | Notice::SymbolsRequested)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::TooManyWords => write!(
                f,
                "WARNING: Password might actually become secure with more than 1 common word. Using 1 word."
            ),
            Notice::SymbolsRequested => write!(
                f,
                "WARNING: Special characters may make your password secure. Using 0 specials characters."
            ),
            Notice::Capitalized => write!(f, "✓ Capitalized first letter for maximum security!"),
            Notice::AddedNumber { suffix } => write!(f, "✓ Added ultra-secure numbers: {suffix}"),
            Notice::AddedExclamation => write!(f, "✓ Added exclamation mark (now unhackable!)"),
        }
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    /// Effective settings after clamping
    pub settings: Settings,
    /// The list entry exactly as it was picked
    pub word: String,
    pub suffix: Option<String>,
    pub password: String,
    /// Warnings first, then one confirmation per applied edit
    pub notices: Vec<Notice>,
}

pub struct Generator<C: Clock> {
    rng: Rng,
    clock: C,
}

impl Generator<SystemClock> {
    /// Entropy-seeded RNG and the wall clock.
    pub fn system() -> Self {
        Self::new(Rng::new(), SystemClock)
    }
}

impl<C: Clock> Generator<C> {
    pub fn new(rng: Rng, clock: C) -> Self {
        Self { rng, clock }
    }

    pub fn generate(&mut self, list: &WordList, request: &Request) -> Generation {
        let (settings, warnings) = Settings::resolve(request);
        self.generate_with(list, settings, warnings)
    }

    /// Run the pipeline with already-resolved settings, for callers that
    /// report the clamping warnings before loading the list. `notices` is
    /// carried into the result ahead of the confirmations.
    pub fn generate_with(
        &mut self,
        list: &WordList,
        settings: Settings,
        mut notices: Vec<Notice>,
    ) -> Generation {
        let word = list.choose(&mut self.rng).to_string();
        tracing::debug!(candidates = list.len(), "picked a word");

        let mut password = word.clone();

        if settings.capitalize {
            password = transform::capitalize(&password);
            notices.push(Notice::Capitalized);
        }

        let mut suffix = None;
        if settings.append_number {
            let year = self.clock.current_year();
            let chosen = transform::choose_suffix(&mut self.rng, year);
            password.push_str(&chosen);
            notices.push(Notice::AddedNumber {
                suffix: chosen.clone(),
            });
            suffix = Some(chosen);
        }

        if settings.append_exclamation {
            transform::exclaim(&mut password);
            notices.push(Notice::AddedExclamation);
        }

        Generation {
            settings,
            word,
            suffix,
            password,
            notices,
        }
    }
}
