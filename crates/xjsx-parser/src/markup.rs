//! Prints a syntax tree back as XJSX markup.
//!
//! Expression props and children print inside braces, double-quoted props as
//! written. A custom component with no children prints self-closing; intrinsic
//! tags always get an explicit closing tag, so `<div/>` and `<div></div>` print
//! the same.

use std::fmt;

use crate::ast::{Child, Component, Document, Node, Prop, Props};

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.starts_with('"') {
            write!(f, "{}={}", self.key, self.value)
        } else {
            write!(f, "{}={{{}}}", self.key, self.value)
        }
    }
}

impl fmt::Display for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prop in &self.entries {
            write!(f, " {prop}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        if let Some(props) = &self.props {
            write!(f, "{props}")?;
        }

        if self.children.is_empty() && self.is_custom() {
            return f.write_str(" />");
        }

        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Text(text) => f.write_str(text),
            Child::Expression(code) => write!(f, "{{{code}}}"),
            Child::Component(component) => write!(f, "{component}"),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            f.write_str(&part.raw)?;
            if let Some(component) = &part.component {
                write!(f, "{component}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Props(props) => write!(f, "{props}"),
            Node::Text(text) => f.write_str(text),
            Node::Expression(code) => write!(f, "{{{code}}}"),
            Node::Component(component) => write!(f, "{component}"),
            Node::Document(document) => write!(f, "{document}"),
        }
    }
}
