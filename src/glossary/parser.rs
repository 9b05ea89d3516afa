//! Glossary (`.lg`) file parser.
//!
//! Apple's glossaries are XML documents shaped like this:
//!
//! ```xml
//! <Proj>
//!   <File>
//!     <TextItem>
//!       <Description>Button title</Description>
//!       <Position>Done</Position>
//!       <TranslationSet>
//!         <base loc="en">Done</base>
//!         <tran loc="de">Fertig</tran>
//!       </TranslationSet>
//!     </TextItem>
//!   </File>
//! </Proj>
//! ```

use std::fmt::Display;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{
    BytesStart,
    Event,
};

use super::types::{
    GlossaryError,
    LocalisationEntry,
};

/// A node of the parsed document tree.
#[derive(Debug)]
enum Node {
    /// A child element
    Element(Element),
    /// Merged character data
    Text(String),
}

/// An element and its children. Attributes are not needed and dropped.
#[derive(Debug)]
struct Element {
    /// Tag name, prefix included
    name: String,
    /// Child nodes in document order
    children: Vec<Node>,
}

impl Element {
    /// An empty element named after the start tag.
    fn from_start(start: &BytesStart<'_>) -> Self {
        Self { name: String::from_utf8_lossy(start.name().as_ref()).into_owned(), children: Vec::new() }
    }

    /// Child elements called `name`.
    fn elements_named(&self, name: &str) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(move |child| match child {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// The text of this element if its only child is a text node.
    ///
    /// Whitespace-only text reads as absent, so whitespace-only keys never match.
    fn single_text(&self) -> Option<&str> {
        match self.children.as_slice() {
            [Node::Text(text)] if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// Appends text, merging with a preceding text node.
    ///
    /// Text split by comments or processing instructions ends up in one node.
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text(previous)) = self.children.last_mut() {
            previous.push_str(text);
        } else {
            self.children.push(Node::Text(text.to_string()));
        }
    }
}

/// A [`GlossaryError::Malformed`] for `path`.
fn malformed(path: &Path, message: impl Display) -> GlossaryError {
    GlossaryError::Malformed { path: path.to_path_buf(), message: message.to_string() }
}

/// Builds the element tree for a whole document.
fn parse_document(path: &Path, xml: &str) -> Result<Element, GlossaryError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(path, format!("{e} (at byte {})", reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => open.push(Element::from_start(&start)),
            Event::Empty(start) => {
                close_element(path, &mut open, &mut root, Element::from_start(&start))?;
            }
            Event::End(_) => {
                let element =
                    open.pop().ok_or_else(|| malformed(path, "closing tag without opening tag"))?;
                close_element(path, &mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| malformed(path, e))?;
                if let Some(parent) = open.last_mut() {
                    parent.push_text(&text);
                }
            }
            Event::CData(cdata) => {
                let text = cdata.decode().map_err(|e| malformed(path, e))?;
                if let Some(parent) = open.last_mut() {
                    parent.push_text(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(malformed(path, format!("unclosed <{}> at end of document", unclosed.name)));
    }
    root.ok_or_else(|| malformed(path, "document has no root element"))
}

/// Attaches a finished element to its parent, or makes it the document root.
fn close_element(
    path: &Path,
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), GlossaryError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(malformed(path, format!("second root element <{}>", element.name)));
    }
    *root = Some(element);
    Ok(())
}

/// The child named `name`, if any. More than one such child breaks the format.
fn optional_child<'a>(
    path: &Path,
    parent: &'a Element,
    name: &str,
) -> Result<Option<&'a Element>, GlossaryError> {
    let mut matches = parent.elements_named(name);
    let first = matches.next();
    if matches.next().is_some() {
        return Err(GlossaryError::Structure {
            path: path.to_path_buf(),
            message: format!("<{}> has more than one <{name}> child", parent.name),
        });
    }
    Ok(first)
}

/// Like [`optional_child`], but a missing child breaks the format too.
fn required_child<'a>(
    path: &Path,
    parent: &'a Element,
    name: &str,
) -> Result<&'a Element, GlossaryError> {
    optional_child(path, parent, name)?.ok_or_else(|| GlossaryError::Structure {
        path: path.to_path_buf(),
        message: format!("<{}> has no <{name}> child", parent.name),
    })
}

/// Converts one `TextItem`. Items without a usable base or translation text are skipped.
fn entry_from_text_item(
    path: &Path,
    text_item: &Element,
) -> Result<Option<LocalisationEntry>, GlossaryError> {
    let translation_set = required_child(path, text_item, "TranslationSet")?;
    let base = required_child(path, translation_set, "base")?;
    let tran = required_child(path, translation_set, "tran")?;

    let (Some(base), Some(translation)) = (base.single_text(), tran.single_text()) else {
        return Ok(None);
    };

    let comment =
        optional_child(path, text_item, "Description")?.and_then(Element::single_text);
    let key = optional_child(path, text_item, "Position")?.and_then(Element::single_text);

    Ok(Some(LocalisationEntry {
        source_file: path.to_path_buf(),
        comment: comment.map(str::to_string),
        key: key.map(str::to_string),
        base: base.to_string(),
        translation: translation.to_string(),
    }))
}

/// Parses glossary XML text into entries, in document order.
///
/// # Errors
/// - The text is not well-formed XML
/// - A `TextItem` breaks the expected layout
pub fn parse_entries(path: &Path, xml: &str) -> Result<Vec<LocalisationEntry>, GlossaryError> {
    let root = parse_document(path, xml)?;

    let mut entries = Vec::new();
    for file in root.elements_named("File") {
        for text_item in file.elements_named("TextItem") {
            if let Some(entry) = entry_from_text_item(path, text_item)? {
                entries.push(entry);
            }
        }
    }
    Ok(entries)
}

/// Reads and parses one glossary file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn read_entries(path: &Path) -> Result<Vec<LocalisationEntry>, GlossaryError> {
    tracing::debug!(path = %path.display(), "Parsing glossary file");

    let xml = std::fs::read_to_string(path)
        .map_err(|source| GlossaryError::Io { path: path.to_path_buf(), source })?;
    let entries = parse_entries(path, &xml)?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "Parsed glossary file");
    Ok(entries)
}
