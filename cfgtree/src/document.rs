//! The persisted document format.
//!
//! A configuration file is a small XML document: one root element whose
//! descendants mirror the entry tree. This module provides a minimal owned
//! DOM ([`Document`], [`Element`], [`Node`]) with a parser and a pretty
//! writer built on `quick-xml`. It knows nothing about entries; mapping
//! between the two lives in [`crate::entry`].

use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// Name of the root element written by [`crate::Config`].
pub const ROOT_ELEMENT: &str = "cfgtree_config";

/// Spaces per nesting level in written documents.
const INDENT: usize = 2;

/// A node inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Character data, already unescaped.
    Text(String),
    /// A comment. Kept so documents can be inspected, ignored by entries.
    Comment(String),
}

/// An element with its name and ordered child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterates over the direct child elements, skipping text and comments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Returns the first direct text node, if any.
    ///
    /// Text that follows a child element or comment is not merged in.
    #[must_use]
    pub fn child_text(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            Node::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replaces the first direct text node.
    ///
    /// `None` or an empty string removes it. New text is placed before any
    /// child elements.
    pub fn set_child_text(&mut self, text: Option<&str>) {
        let existing = self
            .children
            .iter()
            .position(|node| matches!(node, Node::Text(_)));

        match (existing, text.filter(|t| !t.is_empty())) {
            (Some(index), Some(text)) => self.children[index] = Node::Text(text.to_string()),
            (Some(index), None) => {
                self.children.remove(index);
            }
            (None, Some(text)) => self.children.insert(0, Node::Text(text.to_string())),
            (None, None) => {}
        }
    }

    /// Appends a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Appends a comment.
    ///
    /// The body must not contain `--` or end with `-`; such a comment
    /// cannot be written and makes [`Document::to_pretty_string`] fail.
    pub fn push_comment(&mut self, comment: impl Into<String>) {
        self.children.push(Node::Comment(comment.into()));
    }
}

/// A parsed or freshly built document.
///
/// A document may lack a root element (for example a zero-byte file).
///
/// # Examples
///
/// ```
/// use cfgtree::document::Document;
///
/// let doc = Document::parse("<settings><width>800</width></settings>").unwrap();
/// let root = doc.root().unwrap();
/// assert_eq!(root.name(), "settings");
/// assert_eq!(root.elements().next().unwrap().child_text(), Some("800"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root: Option<Element>,
}

impl Document {
    /// Creates a document with the given root element.
    #[must_use]
    pub fn with_root(root: Element) -> Self {
        Self { root: Some(root) }
    }

    /// Returns the root element, if the document has one.
    #[must_use]
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Parses a document from text.
    ///
    /// Declarations, processing instructions, doctypes, comments and
    /// whitespace outside the root element are accepted and dropped.
    /// Attributes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentParse`] for anything that is not a single
    /// well-formed element tree: mismatched or unclosed tags, stray text
    /// outside the root, multiple roots, bad escapes.
    pub fn parse(input: &str) -> Result<Self> {
        let mut reader = Reader::from_str(input);
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(malformed(format!(
                        "{e} (at byte {})",
                        reader.buffer_position()
                    )))
                }
            };

            match event {
                Event::Start(start) => open.push(Element::new(element_name(&start)?)),
                Event::Empty(start) => {
                    let element = Element::new(element_name(&start)?);
                    attach(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| malformed("closing tag without an open element"))?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    let content = text.unescape().map_err(|e| malformed(e.to_string()))?;
                    push_text(&mut open, content.into_owned())?;
                }
                Event::CData(data) => {
                    let content = String::from_utf8_lossy(&data).into_owned();
                    push_text(&mut open, content)?;
                }
                Event::Comment(comment) => {
                    if let Some(parent) = open.last_mut() {
                        parent.push_comment(String::from_utf8_lossy(&comment).into_owned());
                    }
                }
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Eof => break,
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(malformed(format!("unclosed element '{}'", unclosed.name)));
        }

        Ok(Self { root })
    }

    /// Reads and parses the document stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::DocumentParse`] (carrying `path`) if it is malformed.
    pub fn read_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|e| match e {
            Error::DocumentParse { reason, .. } => Error::DocumentParse {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })
    }

    /// Serializes the document as indented UTF-8 text with an XML declaration.
    ///
    /// Text is written directly after its opening tag so that it survives a
    /// reparse unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_failed)?;

        if let Some(root) = &self.root {
            write_element(&mut writer, root)?;
        }

        let mut bytes = writer.into_inner();
        bytes.push(b'\n');
        String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if serialization or the write fails.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let text = self.to_pretty_string()?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Checks whether `name` is an XML element name, so that it can be written
/// and read back unchanged.
///
/// Follows the `Name` production of XML 1.0: `:`, `_`, letters and most
/// non-ASCII characters may start a name; digits, `-`, `.`, the middle dot and
/// combining marks may follow. Namespace prefixes are not interpreted.
///
/// # Examples
///
/// ```
/// use cfgtree::document::is_valid_name;
///
/// assert!(is_valid_name("tab_width"));
/// assert!(is_valid_name("ns:panel"));
/// assert!(!is_valid_name("tab width"));
/// assert!(!is_valid_name("1st"));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | '_' | 'A'..='Z' | 'a'..='z'
        | '\u{c0}'..='\u{d6}'
        | '\u{d8}'..='\u{f6}'
        | '\u{f8}'..='\u{2ff}'
        | '\u{370}'..='\u{37d}'
        | '\u{37f}'..='\u{1fff}'
        | '\u{200c}'..='\u{200d}'
        | '\u{2070}'..='\u{218f}'
        | '\u{2c00}'..='\u{2fef}'
        | '\u{3001}'..='\u{d7ff}'
        | '\u{f900}'..='\u{fdcf}'
        | '\u{fdf0}'..='\u{fffd}'
        | '\u{10000}'..='\u{effff}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{b7}'
            | '\u{300}'..='\u{36f}'
            | '\u{203f}'..='\u{2040}')
}

/// A comment body that XML can represent: no `--` and no trailing `-`.
fn is_valid_comment(comment: &str) -> bool {
    !comment.contains("--") && !comment.ends_with('-')
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::DocumentParse {
        path: None,
        reason: reason.into(),
    }
}

fn write_failed(e: impl std::fmt::Display) -> Error {
    Error::Io(io::Error::other(e.to_string()))
}

fn element_name(start: &BytesStart<'_>) -> Result<String> {
    std::str::from_utf8(start.name().as_ref())
        .map(str::to_string)
        .map_err(|e| malformed(format!("element name is not UTF-8: {e}")))
}

fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.push_element(element);
        Ok(())
    } else if root.is_some() {
        Err(malformed(format!(
            "second root element '{}'",
            element.name
        )))
    } else {
        *root = Some(element);
        Ok(())
    }
}

fn push_text(open: &mut [Element], text: String) -> Result<()> {
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(malformed("text outside the root element")),
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let name = element.name.as_str();
    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(write_failed);
    }

    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(write_failed)?;

    for child in &element.children {
        match child {
            Node::Element(nested) => write_element(writer, nested)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_failed)?,
            Node::Comment(comment) if !is_valid_comment(comment) => {
                return Err(write_failed(format!(
                    "comment in '{name}' contains '--' or ends with '-'"
                )))
            }
            Node::Comment(comment) => writer
                .write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))
                .map_err(write_failed)?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(write_failed)
}
