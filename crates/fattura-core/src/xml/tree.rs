//! Minimal owned element tree used for path lookups.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::XmlError;

/// An element with its qualified name, child elements and trimmed text.
///
/// Attributes are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified name as written in the document (e.g. `ns2:FatturaElettronica`).
    pub name: String,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    ensure_open(&root)?;
                    stack.push(Self::new(String::from_utf8_lossy(e.name().as_ref())));
                }
                Event::Empty(e) => {
                    ensure_open(&root)?;
                    let element = Self::new(String::from_utf8_lossy(e.name().as_ref()));
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError::IllFormed("unexpected closing tag".into()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(t) => {
                    let text = t.unescape()?;
                    push_text(&mut stack, text.trim())?;
                }
                Event::CData(c) => {
                    let bytes = c.into_inner();
                    push_text(&mut stack, String::from_utf8_lossy(&bytes).trim())?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XmlError::IllFormed(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| XmlError::IllFormed("document has no root element".into()))
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Follow a chain of child names from this element.
    pub fn path(&self, names: &[&str]) -> Option<&XmlElement> {
        names.iter().try_fold(self, |node, name| node.child(name))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn ensure_open(root: &Option<XmlElement>) -> Result<(), XmlError> {
    if root.is_some() {
        return Err(XmlError::IllFormed("content after the root element".into()));
    }
    Ok(())
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            ensure_open(root)?;
            *root = Some(element);
        }
    }
    Ok(())
}

fn push_text(stack: &mut [XmlElement], text: &str) -> Result<(), XmlError> {
    if text.is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.text.push_str(text);
            Ok(())
        }
        None => Err(XmlError::IllFormed("text outside of the root element".into())),
    }
}
