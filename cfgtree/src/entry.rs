//! The configuration tree.
//!
//! An [`Entry`] holds an optional scalar value and a set of uniquely named
//! child entries. Children are created on demand by [`Entry::entry`], which
//! is the single accessor used both to read and to write deeper settings:
//!
//! ```
//! use cfgtree::Entry;
//!
//! let mut root = Entry::default();
//! root.entry("window").entry("width").set_value(800);
//!
//! assert!(root.has_entry("window"));
//! assert_eq!(root.lookup("window.width").unwrap().value(), Some("800"));
//! assert_eq!(root.entry("window").entry("width").value_or(0), 800);
//! ```
//!
//! Each entry owns its children outright, so the structure is a tree by
//! construction and traversal is always top-down.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::Serialize;

use crate::document::{is_valid_name, Element};

/// Separator between segments of a dotted entry path.
pub const PATH_SEPARATOR: char = '.';

/// Makes the following character part of the current path segment, so
/// `font\.size` names a single entry called `font.size`.
pub const PATH_ESCAPE: char = '\\';

/// A node of the configuration tree.
///
/// Children are kept in name order, which makes saved documents stable
/// across load/save cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    children: BTreeMap<String, Entry>,
}

impl Entry {
    /// Creates an entry holding `value` and no children.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            children: BTreeMap::new(),
        }
    }

    /// Returns the scalar value, if one is set.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the scalar value from anything printable.
    pub fn set_value(&mut self, value: impl ToString) {
        self.value = Some(value.to_string());
    }

    /// Removes the scalar value, leaving children untouched.
    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Parses the value as `T`, ignoring surrounding whitespace.
    ///
    /// Returns `None` when there is no value or it does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Entry;
    ///
    /// let entry = Entry::with_value("true");
    /// assert_eq!(entry.parse_value::<bool>(), Some(true));
    /// assert_eq!(entry.parse_value::<u32>(), None);
    /// ```
    #[must_use]
    pub fn parse_value<T: FromStr>(&self) -> Option<T> {
        self.value.as_deref().and_then(|v| v.trim().parse().ok())
    }

    /// Parses the value as `T`, falling back to `default`.
    #[must_use]
    pub fn value_or<T: FromStr>(&self, default: T) -> T {
        self.parse_value().unwrap_or(default)
    }

    /// Checks whether a direct child called `name` exists. Never creates it.
    #[must_use]
    pub fn has_entry(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Returns the direct child called `name` without creating it.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Entry> {
        self.children.get(name)
    }

    /// Returns the direct child called `name`, creating an empty one first
    /// if it does not exist yet.
    pub fn entry(&mut self, name: &str) -> &mut Entry {
        self.children.entry(name.to_string()).or_default()
    }

    /// Follows a dotted path (`"editor.colors.cursor"`) without creating
    /// anything. Empty segments are skipped, so `""` returns `self`.
    /// See [`path_segments`] for escaping dots inside names.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Entry> {
        path_segments(path)
            .iter()
            .try_fold(self, |entry, name| entry.child(name))
    }

    /// Follows a dotted path, creating every missing entry along the way.
    pub fn entry_path(&mut self, path: &str) -> &mut Entry {
        path_segments(path)
            .iter()
            .fold(self, |entry, name| entry.entry(name))
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the entry has neither a value nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Iterates over direct children as `(name, entry)` pairs in name order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.children.iter(),
        }
    }

    /// Iterates mutably over direct children in name order.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            inner: self.children.iter_mut(),
        }
    }

    /// Populates this entry from a document element.
    ///
    /// The element's first text node becomes the value unless it is all
    /// whitespace, in which case any existing value is kept. Every child
    /// element is loaded recursively into the child of the same name.
    /// Comments and other non-element nodes are skipped, as are elements
    /// whose names could not be written back. This never fails.
    pub fn load(&mut self, element: &Element) {
        if let Some(text) = element.child_text() {
            if !text.trim().is_empty() {
                self.value = Some(text.to_string());
            }
        }

        self.load_children(element);
    }

    /// Loads the child elements of `element` without touching the value.
    pub(crate) fn load_children(&mut self, element: &Element) {
        for child in element.elements() {
            if is_valid_name(child.name()) {
                self.entry(child.name()).load(child);
            } else {
                log::debug!("skipping element with unusable name '{}'", child.name());
            }
        }
    }

    /// Writes this entry into a document element.
    ///
    /// The value replaces the element's text (no value clears it) and each
    /// child is appended as a nested element named after its key.
    pub fn save(&self, element: &mut Element) {
        element.set_child_text(self.value.as_deref());

        for (name, child) in self {
            let mut nested = Element::new(name);
            child.save(&mut nested);
            element.push_element(nested);
        }
    }

    /// Returns the first name in this subtree that cannot be saved as an
    /// element name, searching depth-first in name order.
    #[must_use]
    pub fn first_invalid_name(&self) -> Option<&str> {
        self.children.iter().find_map(|(name, child)| {
            if is_valid_name(name) {
                child.first_invalid_name()
            } else {
                Some(name.as_str())
            }
        })
    }
}

/// Splits a dotted path into entry names.
///
/// [`PATH_ESCAPE`] takes the next character literally, which is how a name
/// containing [`PATH_SEPARATOR`] is addressed. Empty segments are skipped.
///
/// # Examples
///
/// ```
/// use cfgtree::entry::path_segments;
///
/// assert_eq!(path_segments("editor.colors"), vec!["editor", "colors"]);
/// assert_eq!(path_segments(r"fonts.size\.v2"), vec!["fonts", "size.v2"]);
/// assert!(path_segments("..").is_empty());
/// ```
#[must_use]
pub fn path_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            PATH_ESCAPE => current.push(chars.next().unwrap_or(PATH_ESCAPE)),
            PATH_SEPARATOR if current.is_empty() => {}
            PATH_SEPARATOR => segments.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Escapes `name` for use as one segment of a dotted path.
#[must_use]
pub fn escape_segment(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, PATH_SEPARATOR | PATH_ESCAPE) {
            escaped.push(PATH_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Iterator over the direct children of an [`Entry`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, entry)| (name.as_str(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Mutable iterator over the direct children of an [`Entry`].
#[derive(Debug)]
pub struct IterMut<'a> {
    inner: btree_map::IterMut<'a, String, Entry>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, entry)| (name.as_str(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}
impl FusedIterator for IterMut<'_> {}

impl<'a> IntoIterator for &'a Entry {
    type Item = (&'a str, &'a Entry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Entry {
    type Item = (&'a str, &'a mut Entry);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
