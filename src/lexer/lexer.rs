use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{lookup_keyword, Token, TokenKind, ONE_CHAR_LOOKUP, TWO_CHAR_LOOKUP};

/// Called with the byte length of the pattern match at the lexer's position.
/// Returns `Ok(None)` for input that is skipped rather than tokenized.
pub type RegexHandler = fn(&mut Lexer<'_>, usize) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Order matters: comments before operators, floats before integers.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^/\*").unwrap(), handler: block_comment_handler },
        RegexPattern { regex: Regex::new(r"^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\n").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^(?:[0-9]+\.[0-9]*|\.[0-9]+)").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^'").unwrap(), handler: char_handler },
    ];

    static ref CHAR_LITERAL: Regex =
        Regex::new(r"^'(\\[nrt\\']|\\x[0-9a-fA-F]{2}|[^\\'\n])'").unwrap();
}

/// Scanner over one GOX source string.
///
/// Yields tokens lazily in source order. The first lexical error is yielded
/// as `Err` and ends the sequence.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn current_line(&self) -> u32 {
        self.line
    }

    pub fn current_position(&self) -> Position {
        Position {
            line: self.line,
            offset: self.pos,
        }
    }

    /// Builds a token from the next `len` bytes and moves past them.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let value = self.remainder()[..len].to_string();
        let token = MK_TOKEN!(kind, value, self.line, self.pos, self.pos + len);
        self.advance_n(len);
        token
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        'scan: while let Some(character) = self.at() {
            let remaining = self.remainder();

            for pattern in PATTERNS.iter() {
                if let Some(matched) = pattern.regex.find(remaining) {
                    match (pattern.handler)(self, matched.end())? {
                        Some(token) => return Ok(Some(token)),
                        None => continue 'scan,
                    }
                }
            }

            return operator_handler(self, character).map(Some);
        }

        Ok(None)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

fn skip_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    lexer.advance_n(len);
    Ok(None)
}

fn newline_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    lexer.line += 1;
    lexer.advance_n(len);
    Ok(None)
}

fn block_comment_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    let remaining = lexer.remainder();

    match remaining[len..].find("*/") {
        Some(close) => {
            let comment = &remaining[..len + close + 2];
            lexer.line += comment.matches('\n').count() as u32;
            lexer.advance_n(comment.len());
            Ok(None)
        }
        None => Err(Error::new(ErrorImpl::UnterminatedComment, lexer.current_position())),
    }
}

fn symbol_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    let kind = lookup_keyword(&lexer.remainder()[..len]).unwrap_or(TokenKind::Id);
    Ok(Some(lexer.emit(kind, len)))
}

fn float_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    Ok(Some(lexer.emit(TokenKind::Float, len)))
}

fn integer_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    Ok(Some(lexer.emit(TokenKind::Integer, len)))
}

fn string_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    let remaining = lexer.remainder();
    let bytes = remaining.as_bytes();
    let mut index = len;

    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b'"' => {
                let literal_len = index + 1;
                let newlines = remaining[..literal_len].matches('\n').count() as u32;
                let token = lexer.emit(TokenKind::String, literal_len);
                lexer.line += newlines;
                return Ok(Some(token));
            }
            _ => index += 1,
        }
    }

    Err(Error::new(ErrorImpl::UnterminatedString, lexer.current_position()))
}

fn char_handler(lexer: &mut Lexer<'_>, len: usize) -> Result<Option<Token>, Error> {
    let remaining = lexer.remainder();

    if let Some(captures) = CHAR_LITERAL.captures(remaining) {
        let literal_len = captures[0].len();
        let body = captures[1].to_string();
        let token = MK_TOKEN!(TokenKind::Char, body, lexer.line, lexer.pos, lexer.pos + literal_len);
        lexer.advance_n(literal_len);
        return Ok(Some(token));
    }

    // A quote closed later on the line starts no valid token; otherwise the literal never closes.
    let rest_of_line = remaining[len..].split('\n').next().unwrap_or_default();
    let mut chars = rest_of_line.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '\'' => {
                return Err(Error::new(
                    ErrorImpl::IllegalCharacter { character: '\'' },
                    lexer.current_position(),
                ))
            }
            _ => {}
        }
    }

    Err(Error::new(ErrorImpl::UnterminatedChar, lexer.current_position()))
}

fn operator_handler(lexer: &mut Lexer<'_>, character: char) -> Result<Token, Error> {
    let remaining = lexer.remainder();

    if let Some(kind) = remaining.get(..2).and_then(|op| TWO_CHAR_LOOKUP.get(op)) {
        return Ok(lexer.emit(*kind, 2));
    }

    match ONE_CHAR_LOOKUP.get(&character) {
        Some(kind) => Ok(lexer.emit(*kind, character.len_utf8())),
        None => Err(Error::new(
            ErrorImpl::IllegalCharacter { character },
            lexer.current_position(),
        )),
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).collect()
}
