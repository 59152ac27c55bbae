//! In-memory SVG document tree.
//!
//! This is the markup capability the transformer works against: parse into a
//! [`Document`], reach the root, walk descendants, read and edit attributes,
//! then serialize. The tree keeps everything the source had so serialization
//! loses nothing but what was removed on purpose.

/// A complete SVG document.
#[derive(Debug, Clone)]
pub struct Document {
    /// XML declaration (e.g., `<?xml version="1.0" encoding="UTF-8"?>`)
    pub xml_declaration: Option<XmlDeclaration>,
    /// Nodes between the declaration and the root: DOCTYPE, comments, PIs, whitespace
    pub prolog: Vec<Node>,
    /// The root element
    pub root: Element,
    /// Comments, PIs and whitespace after the root
    pub epilog: Vec<Node>,
}

/// XML declaration attributes.
#[derive(Debug, Clone)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

/// An SVG/XML element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Element name with optional prefix (e.g., "svg", "svg:rect")
    pub name: QName,
    /// Attributes in source order
    pub attributes: Vec<Attribute>,
    /// Child nodes
    pub children: Vec<Node>,
}

/// A qualified name (possibly with namespace prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace prefix (e.g., "xmlns", "xlink")
    pub prefix: Option<String>,
    /// Local name (e.g., "rect", "href")
    pub local: String,
}

impl QName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            local: local.into(),
        }
    }

    /// Parse a qualified name from a string like "prefix:local" or just "local".
    pub fn parse(s: &str) -> Self {
        if let Some((prefix, local)) = s.split_once(':') {
            Self::with_prefix(prefix, local)
        } else {
            Self::new(s)
        }
    }

    /// Whether this name, written out, is exactly `name`.
    pub fn matches(&self, name: &str) -> bool {
        match &self.prefix {
            Some(p) => name
                .split_once(':')
                .is_some_and(|(np, nl)| np == p && nl == self.local),
            None => self.local == name,
        }
    }

    /// Get the full name as a string.
    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

/// An attribute on an element.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: QName::parse(name),
            value: value.into(),
        }
    }
}

/// A node in the SVG tree.
#[derive(Debug, Clone)]
pub enum Node {
    /// An element node
    Element(Element),
    /// A text node, unescaped
    Text(String),
    /// A comment node
    Comment(String),
    /// A CDATA section
    CData(String),
    /// A DOCTYPE declaration body (only ever found in the prolog)
    DocType(String),
    /// A processing instruction (e.g., `<?xml-stylesheet ... ?>`)
    ProcessingInstruction { target: String, content: Option<String> },
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: QName::parse(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by its full name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.matches(name))
            .map(|a| a.value.as_str())
    }

    /// Set an attribute value, appending it if it isn't there yet.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.name.matches(name)) {
            attr.value = value.into();
        } else {
            self.attributes.push(Attribute::new(name, value));
        }
    }

    /// Remove an attribute by its full name. Returns whether anything was removed.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| !a.name.matches(name));
        self.attributes.len() != before
    }

    /// Check if this element is named `name`, ignoring ASCII case.
    pub fn is(&self, name: &str) -> bool {
        self.name.full_name().eq_ignore_ascii_case(name)
    }

    /// Iterate over child elements only (skip text, comments, etc.).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Iterate over child elements mutably.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Visit every element below this one, depth first, not including itself.
    pub fn for_each_descendant_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        fn visit(elem: &mut Element, f: &mut impl FnMut(&mut Element)) {
            for child in elem.child_elements_mut() {
                f(child);
                visit(child, f);
            }
        }
        visit(self, &mut f);
    }
}

impl Document {
    /// Recursively visit all elements in the document.
    pub fn for_each_element(&self, mut f: impl FnMut(&Element)) {
        fn visit(elem: &Element, f: &mut impl FnMut(&Element)) {
            f(elem);
            for child in elem.child_elements() {
                visit(child, f);
            }
        }
        visit(&self.root, &mut f);
    }

    /// Recursively visit all elements mutably, root first.
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        f(&mut self.root);
        self.root.for_each_descendant_mut(f);
    }
}
