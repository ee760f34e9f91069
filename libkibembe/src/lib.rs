//! libkibembe crate root
//!
//! This crate turns numbers written as digits or English words into Kibembe
//! numerals, and wraps that in a small `Session` that keeps a translation
//! history through `kibembe-core`.
//!
//! Public API exported here:
//! - `translate` and `resolve_number` from `translate` (the entry point)
//! - `parse_english_words` from `words`
//! - `number_to_kibembe` from `kibembe`
//! - `TranslateError` from `error`
//! - `Session` from `session`

pub mod config;
pub mod error;
pub mod kibembe;
pub mod session;
pub mod translate;
pub mod words;

// Re-export history types from core
pub use kibembe_core::{Config, History, HistoryError, HistoryRecord};

// Convenience re-exports for common types used by callers.
pub use config::{default_history_path, KibembeConfig};
pub use error::{TranslateError, TranslateResult};
pub use kibembe::{number_to_kibembe, KIBEMBE_ONES};
pub use session::Session;
pub use translate::{resolve_number, translate, MAX_NUMBER};
pub use words::{parse_english_words, ENGLISH_NUMBERS};

/// Preset inputs offered as one-click examples by the front end.
pub const SAMPLE_INPUTS: &[&str] = &[
    "5",
    "10",
    "23",
    "100",
    "123",
    "1000",
    "9999",
    "twenty-three",
    "one hundred twenty three",
    "two thousand five",
];
