//! Lexical helpers built on [`Cursor`].
//!
//! Predicates classify single characters; the scanning methods consume input
//! and return (or append) the exact source text they passed over, so callers
//! can copy plain script through unchanged.

use crate::cursor::Cursor;

/// ASCII letters only; identifiers in tags and props are ASCII.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_identifier_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

pub fn is_identifier_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// String delimiters recognised inside expression bodies.
pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

impl Cursor {
    /// Consume the maximal run of letters, digits and underscores, starting
    /// with a letter or underscore. Returns an empty string, consuming
    /// nothing, if the current character cannot start an identifier.
    pub fn read_identifier(&mut self) -> String {
        let mut ident = String::new();
        if !self.current().is_some_and(is_identifier_start) {
            return ident;
        }
        while let Some(c) = self.current().filter(|&c| is_identifier_char(c)) {
            ident.push(c);
            self.advance();
        }
        ident
    }

    pub fn skip_blank(&mut self) {
        while self.current().is_some_and(is_blank) {
            self.advance();
        }
    }

    /// Consume a string literal opened by the current character, returning it
    /// with both delimiters. A backslash escapes the character after it.
    /// An unterminated literal runs to end of input.
    pub fn read_quoted_string(&mut self) -> String {
        let mut literal = String::new();
        let Some(quote) = self.current() else {
            return literal;
        };
        literal.push(quote);
        self.advance();

        while let Some(c) = self.current() {
            literal.push(c);
            self.advance();
            if c == quote {
                return literal;
            }
            if c == '\\' {
                if let Some(escaped) = self.current() {
                    literal.push(escaped);
                    self.advance();
                }
            }
        }

        literal
    }

    /// Consume an expression body up to, not including, the first unmatched `}`.
    ///
    /// String literals (including template strings) are opaque: braces and
    /// quotes inside them do not affect nesting.
    pub fn read_balanced_expression(&mut self) -> String {
        let mut body = String::new();
        let mut depth = 0usize;

        while let Some(c) = self.current() {
            match c {
                '}' if depth == 0 => break,
                c if is_quote(c) => {
                    body.push_str(&self.read_quoted_string());
                    continue;
                }
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            body.push(c);
            self.advance();
        }

        body
    }

    /// Copy a `// ...` comment, including its terminating newline, into `out`.
    pub fn skip_line_comment(&mut self, out: &mut String) {
        out.push_str("//");
        self.advance();
        self.advance();

        while let Some(c) = self.current() {
            out.push(c);
            self.advance();
            if c == '\n' {
                break;
            }
        }
    }

    /// Copy a `/* ... */` comment into `out`. An unterminated comment runs to
    /// end of input without a closing `*/` being added.
    pub fn skip_block_comment(&mut self, out: &mut String) {
        out.push_str("/*");
        self.advance();
        self.advance();

        while let Some(c) = self.current() {
            if self.at_pair('*', '/') {
                out.push_str("*/");
                self.advance();
                self.advance();
                return;
            }
            out.push(c);
            self.advance();
        }
    }
}
