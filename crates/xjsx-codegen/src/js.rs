//! JavaScript converter.
//!
//! Walks the document AST and renders every node kind as JavaScript source:
//!
//! ```text
//! <Counter start={1}>hi {n}</Counter>
//!   → Xjsx.create(Counter, {start: 1}, document.createTextNode(`hi `), n)
//! ```
//!
//! The converter is also the parser's [`ExpressionCompiler`]: embedded
//! `{...}` bodies are parsed and converted with the same options, at any
//! nesting depth.

use crate::ConvertOptions;
use xjsx_parser::ast::{Child, Component, Document, Node, Props};
use xjsx_parser::{ExpressionCompiler, Parser, Position, SyntaxError};

/// Renders XJSX syntax trees as JavaScript.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'o> {
    options: &'o ConvertOptions,
}

impl<'o> Converter<'o> {
    pub fn new(options: &'o ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert a whole document to JavaScript.
    pub fn convert(&self, doc: &Document) -> String {
        self.render(Node::from(doc))
    }

    /// Render any node kind.
    pub fn render(&self, node: Node<'_>) -> String {
        let mut out = String::new();
        self.render_into(node, &mut out);
        out
    }

    fn render_into(&self, node: Node<'_>, out: &mut String) {
        match node {
            Node::Props(props) => self.render_props(props, out),
            Node::Text(text) => {
                out.push_str(&self.options.text_fn);
                out.push_str("(`");
                out.push_str(text);
                out.push_str("`)");
            }
            // Already compiled while parsing.
            Node::Expression(code) => out.push_str(code),
            Node::Component(component) => self.render_component(component, out),
            Node::Document(doc) => {
                for part in &doc.parts {
                    out.push_str(&part.raw);
                    if let Some(component) = &part.component {
                        self.render_into(Node::from(component), out);
                    }
                }
            }
        }
    }

    /// `create_fn(Name | "tag", {props}, ...children)`
    fn render_component(&self, component: &Component, out: &mut String) {
        out.push_str(&self.options.create_fn);
        out.push('(');

        if component.is_custom() {
            out.push_str(&component.name);
        } else {
            out.push('"');
            out.push_str(&component.name);
            out.push('"');
        }

        out.push_str(", ");
        match &component.props {
            Some(props) => self.render_into(Node::from(props), out),
            None => out.push_str("{}"),
        }

        for child in &component.children {
            out.push_str(", ");
            self.render_child(child, out);
        }

        out.push(')');
    }

    fn render_child(&self, child: &Child, out: &mut String) {
        self.render_into(Node::from(child), out);
    }

    /// `{k1: v1, k2: v2}`, with `ref` values paired with the element handle.
    fn render_props(&self, props: &Props, out: &mut String) {
        out.push('{');

        for (i, prop) in props.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&prop.key);
            out.push_str(": ");
            if prop.key == "ref" {
                out.push_str(&format!("[\"{}\", {}]", prop.value, self.options.refs_ident));
            } else {
                out.push_str(&prop.value);
            }
        }

        out.push('}');
    }
}

impl ExpressionCompiler for Converter<'_> {
    fn compile_expression(&self, body: &str, origin: Position) -> Result<String, SyntaxError> {
        let doc = Parser::with_origin(body, origin, self).parse_document()?;
        Ok(self.convert(&doc))
    }
}
