//! Lexical analysis for GOX.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization driven by an ordered table of anchored regex patterns
//! - Keyword lookup after an identifier has been matched in full
//! - Two-character operators before one-character operators
//! - Line tracking across newlines, block comments and string literals

pub mod lexer;
pub mod tokens;
