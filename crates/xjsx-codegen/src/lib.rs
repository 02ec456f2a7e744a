//! XJSX Code Generator
//!
//! Turns an XJSX document into plain JavaScript: every component becomes a
//! creation call and every text run a text-node call, while the surrounding
//! script passes through untouched.
//!
//! ```text
//! source → Parser → Document → Converter → JavaScript
//!                      ↑            │
//!                      └── {...} ───┘  (embedded bodies compile recursively)
//! ```
//!
//! # Example
//!
//! ```
//! let js = xjsx_codegen::compile("const el = <h1 id=\"t\">Hi</h1>;").unwrap();
//! assert_eq!(
//!     js,
//!     "const el = Xjsx.create(\"h1\", {id: \"t\"}, document.createTextNode(`Hi`));"
//! );
//! ```

pub mod js;
pub mod options;

pub use js::Converter;
pub use options::ConvertOptions;
pub use xjsx_parser::SyntaxError;

use xjsx_parser::Parser;

/// Compile XJSX source to JavaScript with the default call names.
pub fn compile(source: &str) -> Result<String, SyntaxError> {
    compile_with(source, &ConvertOptions::default())
}

/// Compile XJSX source to JavaScript. Nothing is produced on a syntax error.
pub fn compile_with(source: &str, options: &ConvertOptions) -> Result<String, SyntaxError> {
    let converter = Converter::new(options);
    let doc = Parser::parse(source, &converter)?;
    Ok(converter.convert(&doc))
}
