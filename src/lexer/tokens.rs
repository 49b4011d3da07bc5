use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("const", TokenKind::Const);
        map.insert("var", TokenKind::Var);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("func", TokenKind::Func);
        map.insert("import", TokenKind::Import);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };

    /// Operators made of two characters. Checked before `ONE_CHAR_LOOKUP`.
    pub static ref TWO_CHAR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("<=", TokenKind::Le);
        map.insert(">=", TokenKind::Ge);
        map.insert("==", TokenKind::Eq);
        map.insert("!=", TokenKind::Ne);
        map.insert("&&", TokenKind::Land);
        map.insert("||", TokenKind::Lor);
        map
    };

    pub static ref ONE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Times);
        map.insert('/', TokenKind::Divide);
        map.insert('%', TokenKind::Mod);
        map.insert('<', TokenKind::Lt);
        map.insert('>', TokenKind::Gt);
        map.insert('=', TokenKind::Assign);
        map.insert(';', TokenKind::Semi);
        map.insert('(', TokenKind::LParen);
        map.insert(')', TokenKind::RParen);
        map.insert('{', TokenKind::LBrace);
        map.insert('}', TokenKind::RBrace);
        map.insert(',', TokenKind::Comma);
        map.insert('^', TokenKind::Grow);
        map.insert('`', TokenKind::Deref);
        map
    };
}

/// Returns the keyword kind for `word`, or `None` when it is a plain identifier.
pub fn lookup_keyword(word: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(word).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Const,
    Var,
    Print,
    Return,
    Break,
    Continue,
    If,
    Else,
    While,
    Func,
    Import,
    True,
    False,

    Id,
    Integer,
    Float,
    Char,
    String,

    Plus,   // +
    Minus,  // -
    Times,  // *
    Divide, // /
    Mod,    // %
    Lt,     // <
    Le,     // <=
    Gt,     // >
    Ge,     // >=
    Eq,     // ==
    Ne,     // !=
    Land,   // &&
    Lor,    // ||
    Grow,   // ^

    Assign, // =
    Semi,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Deref, // `
}

impl TokenKind {
    /// The stable upper-case name downstream parsers key on.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Const => "CONST",
            TokenKind::Var => "VAR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Func => "FUNC",
            TokenKind::Import => "IMPORT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Id => "ID",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Char => "CHAR",
            TokenKind::String => "STRING",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Mod => "MOD",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::Land => "LAND",
            TokenKind::Lor => "LOR",
            TokenKind::Grow => "GROW",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semi => "SEMI",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Deref => "DEREF",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Const
                | TokenKind::Var
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Func
                | TokenKind::Import
                | TokenKind::True
                | TokenKind::False
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::Char | TokenKind::String
        )
    }

    /// Operators and punctuation, i.e. everything found in the operator tables.
    pub fn is_operator(&self) -> bool {
        !self.is_keyword() && !self.is_literal() && *self != TokenKind::Id
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{ kind: {}, value: {:?}, line: {} }}",
            self.kind, self.value, self.line
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Formats the token as the `('KIND', 'value', line)` record used by the tuple output.
    pub fn as_tuple(&self) -> String {
        format!("('{}', '{}', {})", self.kind, self.value, self.line)
    }
}
