#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::lexer::lexer::{tokenize, Lexer};
pub use crate::lexer::tokens::{Token, TokenKind};

extern crate regex;

/// Where a diagnostic points: 1-based line plus the byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub offset: usize,
}

/// Half-open byte range `[start, end)` of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns `(line_number, line_text, byte_column)` for a byte offset in `source`.
///
/// `line_text` excludes the line terminator. Returns `None` when `position` is
/// past the end of `source` or not on a character boundary.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, &str, usize)> {
    let before = source.get(..position)?;
    let line_number = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |index| index + 1);
    let line_end = source[position..]
        .find('\n')
        .map_or(source.len(), |index| position + index);

    let line = source[line_start..line_end].trim_end_matches('\r');
    Some((line_number, line, position - line_start))
}

pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        Error: IllegalCharacter
        -> main.gox
           |
         3 | var a = @;
           | --------^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let Some((line, line_text, column)) = get_line_at_position(source, error.get_position().offset)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..column].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::tokenize;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\r\n\n    Testing { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 15).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "foo");
        assert_eq!(line_pos, 1);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }");
        assert_eq!(line_pos, 12);

        assert!(super::get_line_at_position(source, source.len() + 1).is_none());
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("a\n", 2).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        let (line_number, _, _) = super::get_line_at_position("", 0).unwrap();
        assert_eq!(line_number, 1);
    }

    #[test]
    fn test_render_illegal_character() {
        let source = "var x = 1;\n    var y = @;\n";
        let error = tokenize(source).unwrap_err();
        let rendered = super::render_error(&error, source, &PathBuf::from("main.gox"));

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: IllegalCharacter (line 2: illegal character '@')");
        assert_eq!(lines[1], "-> main.gox");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | var y = @;");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_render_unterminated_comment_points_at_opening() {
        let source = "var x;\n/* never\nclosed";
        let error = tokenize(source).unwrap_err();
        let rendered = super::render_error(&error, source, &PathBuf::from("main.gox"));

        assert!(rendered.starts_with("Error: UnterminatedComment (Comment opened here"));
        assert!(rendered.contains("2 | /* never"));
        assert!(rendered.ends_with("  | ^\n"));
    }
}
