//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The 1-based line the token starts on
/// * `$start`, `$end` - The byte range of the lexeme
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 1, 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            span: $crate::Span {
                start: $start,
                end: $end,
            },
        }
    };
}
