//! XJSX Lexer
//!
//! Character-level cursor and lexical helpers for scanning JavaScript source
//! that embeds XJSX markup. There is no token stream: the parser drives the
//! cursor directly, because it has to back out of speculative markup parses
//! and pass plain script through byte-for-byte.
//!
//! Nothing in this crate fails. Unterminated strings and comments run to the
//! end of input, and reading past the end keeps yielding `None`.
//!
//! # Example
//!
//! ```
//! use xjsx_lexer::Cursor;
//!
//! let mut cursor = Cursor::new("div class");
//! assert_eq!(cursor.read_identifier(), "div");
//! cursor.skip_blank();
//! assert_eq!(cursor.current(), Some('c'));
//! ```

pub mod cursor;
pub mod scanner;

pub use cursor::{Checkpoint, Cursor, Position};
pub use scanner::{
    is_blank, is_digit, is_identifier_char, is_identifier_start, is_letter, is_quote,
};
