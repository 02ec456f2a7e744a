//! XJSX Parser
//!
//! Parses JavaScript source with embedded XJSX markup into a [`Document`]:
//! plain script fragments interleaved with component trees.
//!
//! Markup starts are ambiguous (`<` is also less-than), so every `<` is a
//! speculative parse that rolls back to plain text when it turns out not to
//! be markup. Once a tag name has been read the parser is committed, and
//! malformed markup is a [`SyntaxError`].
//!
//! Embedded `{...}` blocks are compiled while parsing, through an
//! [`ExpressionCompiler`], because they may contain further markup.

pub mod ast;
pub mod markup;
pub mod parser;

pub use ast::{Child, Component, Document, Node, Part, Prop, Props};
pub use parser::Parser;
pub use xjsx_lexer::Position;

/// Syntax error with position information. Aborts the whole compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Syntax error at line {line}, column {column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }
}

/// Compiles the body of an embedded `{...}` block into its final text.
///
/// `origin` is the position of the opening brace, so nested diagnostics can be
/// reported against the enclosing source.
pub trait ExpressionCompiler {
    fn compile_expression(&self, body: &str, origin: Position) -> Result<String, SyntaxError>;
}

/// Leaves expression bodies as they are. Useful for inspecting a single level
/// of the tree without running code generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl ExpressionCompiler for Verbatim {
    fn compile_expression(&self, body: &str, _origin: Position) -> Result<String, SyntaxError> {
        Ok(body.to_string())
    }
}
