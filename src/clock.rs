//! Time provider used for the year suffix.

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock pinned to one year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub year: i32,
}

impl FixedClock {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}
