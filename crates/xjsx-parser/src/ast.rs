//! Abstract Syntax Tree for XJSX.
//!
//! A strict ownership tree: every component owns its props and children by
//! value, and source order is preserved everywhere.

/// A parsed source unit: the whole input, or the body of one `{...}` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub parts: Vec<Part>,
}

/// Plain script text followed by the component that interrupted it, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Part {
    pub raw: String,
    pub component: Option<Component>,
}

/// A `<name ...>children</name>` or `<name ... />` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub props: Option<Props>,
    pub children: Vec<Child>,
}

impl Component {
    /// Names starting with an uppercase letter refer to user components
    /// (identifiers); everything else is an intrinsic tag (a string).
    pub fn is_custom(&self) -> bool {
        self.name.starts_with(|c: char| c.is_ascii_uppercase())
    }
}

/// Attribute list in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Props {
    pub entries: Vec<Prop>,
}

impl Props {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One `key=value` attribute.
///
/// `value` is either a string literal with its quotes kept, or the raw source
/// of a `{...}` expression with the braces stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: String,
}

impl Prop {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_literal(&self) -> bool {
        self.value.starts_with(xjsx_lexer::is_quote)
    }
}

/// Content between a component's open and close tags.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Literal character data.
    Text(String),

    /// An embedded `{...}` block, already compiled to its final text.
    Expression(String),

    Component(Component),
}

/// Borrowed view over every node kind, for walkers that dispatch on kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Props(&'a Props),
    Text(&'a str),
    Expression(&'a str),
    Component(&'a Component),
    Document(&'a Document),
}

impl<'a> From<&'a Child> for Node<'a> {
    fn from(child: &'a Child) -> Self {
        match child {
            Child::Text(text) => Node::Text(text),
            Child::Expression(code) => Node::Expression(code),
            Child::Component(component) => Node::Component(component),
        }
    }
}

impl<'a> From<&'a Component> for Node<'a> {
    fn from(component: &'a Component) -> Self {
        Node::Component(component)
    }
}

impl<'a> From<&'a Document> for Node<'a> {
    fn from(document: &'a Document) -> Self {
        Node::Document(document)
    }
}

impl<'a> From<&'a Props> for Node<'a> {
    fn from(props: &'a Props) -> Self {
        Node::Props(props)
    }
}
