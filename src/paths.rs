//! Single source of truth for where bad-password reads from.
//!
//! This module defines WHERE data lives. It has no I/O, no validation,
//! no business logic.
//!
//! ```text
//! ./
//! └── common-passwords.txt    # one candidate word per line
//! ```

use std::path::{Path, PathBuf};

/// File name of the word list, resolved against the working directory.
pub const WORD_LIST_FILE: &str = "common-passwords.txt";

/// Word list path: `./common-passwords.txt`
pub fn word_list() -> PathBuf {
    word_list_in(Path::new("."))
}

/// Word list path inside an arbitrary directory.
pub fn word_list_in(dir: &Path) -> PathBuf {
    dir.join(WORD_LIST_FILE)
}
