//! Fragment parsing errors.

/// Error returned when markup cannot be interpreted as an HTML fragment.
///
/// Positions are byte offsets into the original input, pointing at the
/// start of the construct the reader was working on when it gave up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer hit something it could not read (unclosed tag,
    /// unterminated comment, truncated input).
    #[error("malformed markup at byte {position}: {message}")]
    Syntax { position: usize, message: String },
    /// A start tag carried an attribute list that could not be split into
    /// name/value pairs.
    #[error("malformed attribute at byte {position}: {message}")]
    Attribute { position: usize, message: String },
}
