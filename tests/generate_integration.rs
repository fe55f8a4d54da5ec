//! Library-level tests: word list on disk through the full pipeline

use std::fs;

use bad_password::{paths, FixedClock, Generator, Notice, Request, WordList, WordListError};
use tempfile::TempDir;

fn setup_list(contents: &str) -> (TempDir, WordList) {
    let temp_dir = TempDir::new().unwrap();
    let path = paths::word_list_in(temp_dir.path());
    fs::write(&path, contents).unwrap();
    let list = WordList::load(&path).unwrap();
    (temp_dir, list)
}

#[test]
fn test_correct_horse_battery_staple() {
    let (_dir, list) = setup_list("correct\nhorse\nbattery\nstaple\n");
    let request = Request {
        capitalize: true,
        append_exclamation: true,
        ..Request::default()
    };

    for seed in 0..50 {
        let out = Generator::new(fastrand::Rng::with_seed(seed), FixedClock::new(2024))
            .generate(&list, &request);
        assert!(
            ["Correct!", "Horse!", "Battery!", "Staple!"].contains(&out.password.as_str()),
            "seed {seed} produced {}",
            out.password
        );
        assert_eq!(out.notices, vec![Notice::Capitalized, Notice::AddedExclamation]);
    }
}

#[test]
fn test_clamped_run_keeps_raw_word() {
    let (_dir, list) = setup_list("Correct\nhorse\n");
    let request = Request {
        words: 3,
        symbols: 2,
        ..Request::default()
    };

    let out = Generator::new(fastrand::Rng::with_seed(3), FixedClock::new(2024))
        .generate(&list, &request);

    assert_eq!(out.notices, vec![Notice::TooManyWords, Notice::SymbolsRequested]);
    assert_eq!(out.password, out.word);
    assert!(list.words().contains(&out.password));
}

#[test]
fn test_windows_line_endings() {
    let (_dir, list) = setup_list("abc123\r\npassword1\r\n");
    assert_eq!(list.words(), ["abc123", "password1"]);
}

#[test]
fn test_empty_list_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = paths::word_list_in(temp_dir.path());
    fs::write(&path, "").unwrap();

    match WordList::load(&path) {
        Err(WordListError::Empty { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected Empty error, got {other:?}"),
    }
}
