//! Property tests over generated GOX token streams.

use gox::{lexer::tokens::TokenKind, tokenize};
use proptest::prelude::*;

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "<", "<=", ">", ">=", "==", "!=", "&&", "||", "^", "=", ";", "(",
    ")", "{", "}", ",", "`",
];

const SEPARATORS: &[&str] = &[" ", "\n", "\t", "  \n  ", " // note\n", " /* a\nb */ ", "\r\n"];

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_][A-Za-z0-9_]{0,8}",
        "[0-9]{1,6}",
        "[0-9]{1,3}\\.[0-9]{0,3}",
        "\\.[0-9]{1,3}",
        "\"[a-z ]{0,6}\"",
        "'[a-z ]'",
        prop::sample::select(OPERATORS).prop_map(String::from),
    ]
}

fn program() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec((fragment(), prop::sample::select(SEPARATORS)), 0..40).prop_map(
        |parts| {
            let fragments = parts.iter().map(|(fragment, _)| fragment.clone()).collect();
            let source = parts
                .iter()
                .map(|(fragment, separator)| format!("{}{}", fragment, separator))
                .collect();
            (fragments, source)
        },
    )
}

proptest! {
    #[test]
    fn one_token_per_fragment((fragments, source) in program()) {
        let tokens = tokenize(&source).unwrap();

        prop_assert_eq!(tokens.len(), fragments.len());
        for (token, fragment) in tokens.iter().zip(&fragments) {
            if token.kind == TokenKind::Char {
                prop_assert_eq!(&token.value, &fragment[1..fragment.len() - 1]);
            } else {
                prop_assert_eq!(&token.value, fragment);
            }
            prop_assert_eq!(&source[token.span.start..token.span.end], fragment.as_str());
        }
    }

    #[test]
    fn line_is_one_plus_preceding_newlines((_, source) in program()) {
        for token in tokenize(&source).unwrap() {
            let newlines = source[..token.span.start].matches('\n').count() as u32;
            prop_assert_eq!(token.line, newlines + 1);
        }
    }

    #[test]
    fn skipped_regions_hold_no_tokens((_, source) in program()) {
        let tokens = tokenize(&source).unwrap();
        let mut previous_end = 0;

        for token in &tokens {
            prop_assert!(token.span.start >= previous_end);
            prop_assert!(tokenize(&source[previous_end..token.span.start]).unwrap().is_empty());
            previous_end = token.span.end;
        }
        prop_assert!(tokenize(&source[previous_end..]).unwrap().is_empty());
    }

    #[test]
    fn token_text_lexes_to_itself((_, source) in program()) {
        for token in tokenize(&source).unwrap() {
            if token.kind == TokenKind::Char {
                continue;
            }

            let again = tokenize(&token.value).unwrap();
            prop_assert_eq!(again.len(), 1);
            prop_assert_eq!(again[0].kind, token.kind);
            prop_assert_eq!(&again[0].value, &token.value);
        }
    }

    #[test]
    fn identifiers_are_never_split(word in "[A-Za-z_][A-Za-z0-9_]{0,12}") {
        let tokens = tokenize(&word).unwrap();

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(&tokens[0].value, &word);
    }
}
