//! Lexical error types.
//!
//! Every error ends the scan. Each carries the line (and byte offset) it
//! refers to so callers can match on the kind without parsing messages.

pub mod errors;
