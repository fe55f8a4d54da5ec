pub mod clock;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod paths;
pub mod transform;
pub mod wordlist;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Request, Settings};
pub use error::WordListError;
pub use generator::{Generation, Generator, Notice};
pub use wordlist::WordList;
