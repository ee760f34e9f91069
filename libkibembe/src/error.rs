use thiserror::Error;

/// Failures of a single translation. The `Display` text is the message shown
/// to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Please enter a number")]
    EmptyInput,

    #[error("Unknown English number word: \"{word}\"")]
    UnknownWord { word: String },

    /// `value` saturates at `u64::MAX` for inputs that overflow.
    #[error("Number too large. Please enter a number less than 10000.")]
    NumberTooLarge { value: u64 },
}

pub type TranslateResult<T> = Result<T, TranslateError>;
