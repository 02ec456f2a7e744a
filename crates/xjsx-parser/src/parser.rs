//! Document parser for XJSX.
//!
//! Recursive descent directly over a [`Cursor`], with three productions:
//! document (plain script interrupted by components), component, and props.
//!
//! A `<` in script or in children is only a *possible* tag start. The parser
//! takes a checkpoint, attempts a component, and on [`Attempt::NotMarkup`]
//! rewinds and treats the `<` as text. Once a tag name has been read the
//! parse is committed and every later problem is a [`SyntaxError`].

use crate::ast::{Child, Component, Document, Part, Prop, Props};
use crate::{ExpressionCompiler, SyntaxError};
use xjsx_lexer::{is_quote, Cursor, Position};

/// Outcome of a speculative parse.
enum Attempt<T> {
    Parsed(T),
    /// The input at the checkpoint is not markup; the caller rewinds.
    NotMarkup,
}

/// XJSX document parser.
pub struct Parser<'c, C: ExpressionCompiler + ?Sized> {
    cursor: Cursor,
    compiler: &'c C,
}

impl<'c, C: ExpressionCompiler + ?Sized> Parser<'c, C> {
    /// Create a parser over `source`. Embedded `{...}` bodies are handed to
    /// `compiler`.
    pub fn new(source: &str, compiler: &'c C) -> Self {
        Self {
            cursor: Cursor::new(source),
            compiler,
        }
    }

    /// Create a parser for text that continues right after `origin` in some
    /// enclosing source.
    pub fn with_origin(source: &str, origin: Position, compiler: &'c C) -> Self {
        Self {
            cursor: Cursor::with_origin(source, origin),
            compiler,
        }
    }

    /// Parse source code into a document AST.
    pub fn parse(source: &str, compiler: &'c C) -> Result<Document, SyntaxError> {
        Parser::new(source, compiler).parse_document()
    }

    /// Parse the whole input.
    pub fn parse_document(mut self) -> Result<Document, SyntaxError> {
        let mut parts = Vec::new();

        while !self.cursor.is_at_end() {
            let mut raw = String::new();
            let mut component = None;

            while let Some(c) = self.cursor.current() {
                match c {
                    // Template strings are not skipped here, only inside `{...}`.
                    '"' | '\'' => raw.push_str(&self.cursor.read_quoted_string()),
                    '/' if self.cursor.peek() == Some('/') => {
                        self.cursor.skip_line_comment(&mut raw);
                    }
                    '/' if self.cursor.peek() == Some('*') => {
                        self.cursor.skip_block_comment(&mut raw);
                    }
                    '<' => {
                        if let Some(parsed) = self.try_component()? {
                            component = Some(parsed);
                            break;
                        }
                        raw.push('<');
                        self.cursor.advance();
                    }
                    _ => {
                        raw.push(c);
                        self.cursor.advance();
                    }
                }
            }

            parts.push(Part { raw, component });
        }

        Ok(Document { parts })
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Speculatively parse a component at the current `<`. Returns `None`,
    /// with the cursor back on the `<`, if it is not markup.
    fn try_component(&mut self) -> Result<Option<Component>, SyntaxError> {
        let checkpoint = self.cursor.checkpoint();
        match self.parse_component()? {
            Attempt::Parsed(component) => Ok(Some(component)),
            Attempt::NotMarkup => {
                self.cursor.rewind(checkpoint);
                Ok(None)
            }
        }
    }

    /// Parse a component:
    /// ```text
    /// <Name key="literal" other={expr}>text {expr} <child/></Name>
    /// ```
    fn parse_component(&mut self) -> Result<Attempt<Component>, SyntaxError> {
        if self.cursor.current() != Some('<') {
            return Ok(Attempt::NotMarkup);
        }
        self.cursor.advance();

        let name = self.cursor.read_identifier();
        if name.is_empty() {
            return Ok(Attempt::NotMarkup);
        }

        let props = self.parse_props(&name)?;

        if self.cursor.at_pair('/', '>') {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(Attempt::Parsed(Component {
                name,
                props,
                children: Vec::new(),
            }));
        }
        self.expect('>')?;

        let children = self.parse_children()?;

        self.expect('<')?;
        self.expect('/')?;
        let closing = self.cursor.read_identifier();
        if closing != name {
            return Err(self.error(format!("{name} element does not have a closing tag")));
        }
        self.expect('>')?;

        Ok(Attempt::Parsed(Component {
            name,
            props,
            children,
        }))
    }

    /// Parse children up to the first `</` (or end of input).
    fn parse_children(&mut self) -> Result<Vec<Child>, SyntaxError> {
        let mut children = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.cursor.current() {
            match c {
                '<' if self.cursor.peek() == Some('/') => break,
                '<' => match self.try_component()? {
                    Some(component) => {
                        flush_text(&mut text, &mut children);
                        children.push(Child::Component(component));
                    }
                    None => {
                        text.push('<');
                        self.cursor.advance();
                    }
                },
                '{' => {
                    flush_text(&mut text, &mut children);
                    children.push(Child::Expression(self.parse_embedded()?));
                }
                _ => {
                    text.push(c);
                    self.cursor.advance();
                }
            }
        }

        flush_text(&mut text, &mut children);
        Ok(children)
    }

    /// Parse a `{...}` child and compile its body.
    fn parse_embedded(&mut self) -> Result<String, SyntaxError> {
        let origin = self.cursor.position();
        self.cursor.advance(); // consume `{`
        let body = self.cursor.read_balanced_expression();
        self.cursor.advance(); // consume `}`
        self.compiler.compile_expression(&body, origin)
    }

    // =========================================================================
    // Props
    // =========================================================================

    /// Parse `key=value` pairs up to `>` or `/>`. Returns `None` when the tag
    /// declares no props.
    fn parse_props(&mut self, tag: &str) -> Result<Option<Props>, SyntaxError> {
        let mut props = Props::default();
        self.cursor.skip_blank();

        while self.cursor.current() != Some('>') && !self.cursor.at_pair('/', '>') {
            let key = self.cursor.read_identifier();
            if key.is_empty() {
                return Err(self.error(format!(
                    "Expected prop name in <{tag}> but got '{}'",
                    describe(self.cursor.current())
                )));
            }

            self.cursor.skip_blank();
            self.expect('=')?;
            self.cursor.skip_blank();

            let value = self.parse_prop_value(&key)?;
            props.entries.push(Prop { key, value });
            self.cursor.skip_blank();
        }

        Ok((!props.is_empty()).then_some(props))
    }

    /// Parse a prop value: `{expr}` (braces stripped) or a quoted string
    /// (quotes kept).
    fn parse_prop_value(&mut self, key: &str) -> Result<String, SyntaxError> {
        match self.cursor.current() {
            Some('{') => {
                self.cursor.advance();
                let value = self.cursor.read_balanced_expression();
                self.expect('}')?;
                Ok(value)
            }
            Some(c) if is_quote(c) => Ok(self.cursor.read_quoted_string()),
            other => Err(self.error(format!(
                "Expected prop value ({{expr}} or quoted string) for '{key}' but got '{}'",
                describe(other)
            ))),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Consume `expected` or fail with a syntax error at the current position.
    fn expect(&mut self, expected: char) -> Result<(), SyntaxError> {
        if self.cursor.current() != Some(expected) {
            return Err(self.error(format!(
                "Expected character '{expected}' but got '{}'",
                describe(self.cursor.current())
            )));
        }
        self.cursor.advance();
        Ok(())
    }

    fn error(&self, message: String) -> SyntaxError {
        SyntaxError::new(message, self.cursor.position())
    }
}

fn flush_text(text: &mut String, children: &mut Vec<Child>) {
    if !text.is_empty() {
        children.push(Child::Text(std::mem::take(text)));
    }
}

fn describe(c: Option<char>) -> String {
    match c {
        Some(c) => c.to_string(),
        None => "EOF".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verbatim;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Document {
        Parser::parse(source, &Verbatim).unwrap()
    }

    fn parse_err(source: &str) -> SyntaxError {
        Parser::parse(source, &Verbatim).unwrap_err()
    }

    fn only_component(doc: &Document) -> &Component {
        let found: Vec<&Component> = doc
            .parts
            .iter()
            .filter_map(|p| p.component.as_ref())
            .collect();
        assert_eq!(found.len(), 1, "expected exactly one component in {doc:?}");
        found[0]
    }

    fn text(s: &str) -> Child {
        Child::Text(s.into())
    }

    // =========================================================================
    // Plain script
    // =========================================================================

    #[test]
    fn test_empty_source() {
        assert_eq!(parse(""), Document { parts: Vec::new() });
    }

    #[test]
    fn test_plain_script_is_one_part() {
        let doc = parse("let x = 1;\n");
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, "let x = 1;\n");
        assert!(doc.parts[0].component.is_none());
    }

    #[test]
    fn test_less_than_operator_rolls_back() {
        let doc = parse("if (a < b) { f(); }");
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, "if (a < b) { f(); }");
    }

    #[test]
    fn test_less_than_before_punctuation_rolls_back() {
        let doc = parse("x <(y) || z <= 2");
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, "x <(y) || z <= 2");
    }

    #[test]
    fn test_less_than_before_number_rolls_back() {
        let src = "for (let i = 0; i <10; i++) {}\nx = a<1 ? b : c;";
        let doc = parse(src);
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, src);
        assert!(doc.parts[0].component.is_none());
    }

    #[test]
    fn test_strings_hide_markup() {
        let src = "const a = \"<div>\"; const b = '<b/>';";
        let doc = parse(src);
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, src);
    }

    #[test]
    fn test_comments_hide_markup() {
        let src = "// <div>\n/* <span/> */ x";
        let doc = parse(src);
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, src);
    }

    #[test]
    fn test_template_string_does_not_hide_markup() {
        // Known boundary case: backtick strings are only opaque inside `{...}`.
        let doc = parse("const s = `<b/>`;");
        assert_eq!(doc.parts.len(), 2);
        assert_eq!(doc.parts[0].raw, "const s = `");
        assert_eq!(doc.parts[0].component.as_ref().unwrap().name, "b");
        assert_eq!(doc.parts[1].raw, "`;");
        assert!(doc.parts[1].component.is_none());
    }

    // =========================================================================
    // Document parts
    // =========================================================================

    #[test]
    fn test_parts_interleave_script_and_components() {
        let doc = parse("const a = <A/>;\nconst b = <B/>;\n");
        assert_eq!(doc.parts.len(), 3);
        assert_eq!(doc.parts[0].raw, "const a = ");
        assert_eq!(doc.parts[0].component.as_ref().unwrap().name, "A");
        assert_eq!(doc.parts[1].raw, ";\nconst b = ");
        assert_eq!(doc.parts[1].component.as_ref().unwrap().name, "B");
        assert_eq!(doc.parts[2].raw, ";\n");
        assert!(doc.parts[2].component.is_none());
    }

    #[test]
    fn test_component_at_end_has_no_trailing_part() {
        let doc = parse("x = <br/>");
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(doc.parts[0].raw, "x = ");
    }

    // =========================================================================
    // Components
    // =========================================================================

    #[test]
    fn test_self_closing() {
        let doc = parse("<Foo/>");
        let c = only_component(&doc);
        assert_eq!(c.name, "Foo");
        assert!(c.props.is_none());
        assert!(c.children.is_empty());
    }

    #[test]
    fn test_self_closing_with_space() {
        let doc = parse("<Foo />");
        assert_eq!(only_component(&doc).name, "Foo");
    }

    #[test]
    fn test_empty_element() {
        let doc = parse("<div></div>");
        let c = only_component(&doc);
        assert_eq!(c.name, "div");
        assert!(c.children.is_empty());
    }

    #[test]
    fn test_text_child() {
        let doc = parse("<p>Hello world</p>");
        assert_eq!(only_component(&doc).children, vec![text("Hello world")]);
    }

    #[test]
    fn test_children_preserve_interleaving() {
        let doc = parse("<p>a<b>x</b>c{d}e</p>");
        let c = only_component(&doc);
        assert_eq!(c.children.len(), 5);
        assert_eq!(c.children[0], text("a"));
        assert!(matches!(&c.children[1], Child::Component(b) if b.name == "b"));
        assert_eq!(c.children[2], text("c"));
        assert_eq!(c.children[3], Child::Expression("d".into()));
        assert_eq!(c.children[4], text("e"));
    }

    #[test]
    fn test_whitespace_children_are_kept() {
        let doc = parse("<div>\n  <span/>\n</div>");
        let c = only_component(&doc);
        assert_eq!(c.children.len(), 3);
        assert_eq!(c.children[0], text("\n  "));
        assert_eq!(c.children[2], text("\n"));
    }

    #[test]
    fn test_less_than_in_children_is_text() {
        let doc = parse("<p>1 < 2</p>");
        assert_eq!(only_component(&doc).children, vec![text("1 < 2")]);
    }

    #[test]
    fn test_deep_nesting() {
        let doc = parse("<ul><li><a>x</a></li></ul>");
        let ul = only_component(&doc);
        let Child::Component(li) = &ul.children[0] else {
            panic!("expected li");
        };
        let Child::Component(a) = &li.children[0] else {
            panic!("expected a");
        };
        assert_eq!(a.name, "a");
        assert_eq!(a.children, vec![text("x")]);
    }

    #[test]
    fn test_embedded_body_passed_to_compiler() {
        let doc = parse("<div>{items.map(i => <li>{i}</li>)}</div>");
        assert_eq!(
            only_component(&doc).children,
            vec![Child::Expression("items.map(i => <li>{i}</li>)".into())]
        );
    }

    #[test]
    fn test_embedded_origin_is_brace_position() {
        struct Recorder(std::cell::RefCell<Vec<Position>>);
        impl ExpressionCompiler for Recorder {
            fn compile_expression(
                &self,
                body: &str,
                origin: Position,
            ) -> Result<String, SyntaxError> {
                self.0.borrow_mut().push(origin);
                Ok(body.to_string())
            }
        }

        let recorder = Recorder(Default::default());
        Parser::parse("<a>\n  {x}</a>", &recorder).unwrap();
        assert_eq!(*recorder.0.borrow(), vec![Position::new(2, 3)]);
    }

    // =========================================================================
    // Props
    // =========================================================================

    #[test]
    fn test_props_in_order() {
        let doc = parse("<a x={1} y={2}/>");
        let props = only_component(&doc).props.as_ref().unwrap();
        assert_eq!(props.entries, vec![Prop::new("x", "1"), Prop::new("y", "2")]);
    }

    #[test]
    fn test_quoted_prop_keeps_quotes() {
        let doc = parse("<a href=\"https://x\"/>");
        let props = only_component(&doc).props.as_ref().unwrap();
        assert_eq!(props.entries, vec![Prop::new("href", "\"https://x\"")]);
        assert!(props.entries[0].is_literal());
    }

    #[test]
    fn test_expression_prop_strips_braces() {
        let doc = parse("<a onClick={() => go({ to: '}' })}>x</a>");
        let props = only_component(&doc).props.as_ref().unwrap();
        assert_eq!(props.entries, vec![Prop::new("onClick", "() => go({ to: '}' })")]);
    }

    #[test]
    fn test_props_with_blanks_around_equals() {
        let doc = parse("<input\n  type = \"text\"\n  value={v}\n/>");
        let props = only_component(&doc).props.as_ref().unwrap();
        assert_eq!(
            props.entries,
            vec![Prop::new("type", "\"text\""), Prop::new("value", "v")]
        );
    }

    // =========================================================================
    // Errors
    // =========================================================================

    #[test]
    fn test_mismatched_closing_tag() {
        let err = parse_err("<div></span>");
        assert_eq!(err.message, "div element does not have a closing tag");
        assert_eq!((err.line, err.column), (1, 12));
    }

    #[test]
    fn test_mismatched_closing_tag_on_later_line() {
        let err = parse_err("x;\n<div>\n</dvi>");
        assert_eq!(err.line, 3);
        assert_eq!(err.column, 6);
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_err("<a href>x</a>");
        assert_eq!(err.message, "Expected character '=' but got '>'");
    }

    #[test]
    fn test_empty_prop_name_is_fatal() {
        let err = parse_err("a<b && c");
        assert!(err.message.contains("Expected prop name in <b>"));
    }

    #[test]
    fn test_bad_prop_value() {
        let err = parse_err("<a x=1/>");
        assert!(err.message.contains("Expected prop value"));
        assert!(err.message.contains("'x'"));
    }

    #[test]
    fn test_unclosed_element() {
        let err = parse_err("<div>abc");
        assert_eq!(err.message, "Expected character '<' but got 'EOF'");
        assert_eq!((err.line, err.column), (1, 9));
    }

    #[test]
    fn test_unterminated_tag() {
        let err = parse_err("<div");
        assert!(err.message.contains("got 'EOF'"));
    }

    #[test]
    fn test_error_display() {
        let err = parse_err("<div></span>");
        assert_eq!(
            err.to_string(),
            "Syntax error at line 1, column 12: div element does not have a closing tag"
        );
    }
}
