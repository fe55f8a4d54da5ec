//! The three cosmetic edits: capitalization, a guessable numeric suffix,
//! and a trailing exclamation mark.

use fastrand::Rng;

/// Suffixes that are not the current year.
pub const STATIC_SUFFIXES: [&str; 4] = ["1", "123", "12345", "1234"];

/// Upper-case the first character and lower-case the rest.
///
/// When the upper-case form of the first character expands (`ß` -> `SS`),
/// only its leading character stays upper-case, so `ßtraße` -> `Sstraße`.
/// This keeps the transform idempotent.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut out = String::with_capacity(word.len());
    out.extend(upper.next());

    let rest: String = upper.chain(chars).collect();
    out.push_str(&rest.to_lowercase());
    out
}

/// Candidate suffixes in their fixed order: `1`, `123`, `12345`, year, `1234`.
pub fn numeric_suffixes(year: i32) -> [String; 5] {
    [
        STATIC_SUFFIXES[0].to_string(),
        STATIC_SUFFIXES[1].to_string(),
        STATIC_SUFFIXES[2].to_string(),
        year.to_string(),
        STATIC_SUFFIXES[3].to_string(),
    ]
}

/// Pick one candidate suffix uniformly at random.
pub fn choose_suffix(rng: &mut Rng, year: i32) -> String {
    let candidates = numeric_suffixes(year);
    let idx = rng.usize(..candidates.len());
    candidates[idx].clone()
}

/// Append exactly one `!`.
pub fn exclaim(password: &mut String) {
    password.push('!');
}
