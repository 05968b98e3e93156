//! Flattening of element trees into `_`-joined path columns, and the reverse.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::tree::XmlElement;
use crate::error::XmlError;

/// Separator between tag names in a flattened column key.
pub const PATH_SEPARATOR: char = '_';

/// Root element name of documents rebuilt by [`unflatten`].
pub const UNFLATTEN_ROOT: &str = "FatturaElettronica";

/// An insertion-ordered set of `(column, value)` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRow {
    cells: Vec<(String, String)>,
}

impl FlatRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Flatten every leaf below `root` into a row keyed by its tag path.
///
/// The root's own name is not part of the keys.
pub fn flatten(root: &XmlElement) -> FlatRow {
    let mut row = FlatRow::new();
    collect(root, "", &mut row);
    row
}

fn collect(element: &XmlElement, prefix: &str, row: &mut FlatRow) {
    for child in &element.children {
        let key = if prefix.is_empty() {
            child.name.clone()
        } else {
            format!("{prefix}{PATH_SEPARATOR}{}", child.name)
        };

        if child.is_leaf() {
            row.insert(key, child.text().trim());
        } else {
            collect(child, &key, row);
        }
    }
}

/// Rebuild a tree from flattened columns under a root named `root_name`.
///
/// Each column is split on `_`; existing children are reused by name.
/// Empty segments are dropped, and a column with no segments left is ignored.
pub fn unflatten(root_name: &str, row: &FlatRow) -> XmlElement {
    let mut root = XmlElement::new(root_name);

    for (column, value) in row.iter() {
        let mut parts = column
            .split(PATH_SEPARATOR)
            .filter(|part| !part.is_empty())
            .peekable();
        if parts.peek().is_none() {
            continue;
        }

        let mut current = &mut root;
        for part in parts {
            let index = match current.children.iter().position(|c| c.name == part) {
                Some(index) => index,
                None => {
                    current.children.push(XmlElement::new(part));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[index];
        }
        current.text = value.to_string();
    }

    root
}

/// Serialise a tree with an XML declaration and two-space indentation.
///
/// Unlike the invoice encoder, text is escaped here.
pub fn to_pretty_xml(root: &XmlElement) -> Result<String, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    write_element(&mut writer, root)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), XmlError> {
    let name = element.name.as_str();
    if element.is_leaf() && element.text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    if !element.text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&element.text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flatten_keys_exclude_root() {
        let root = XmlElement::parse(
            "<ns2:F><H><Sede><CAP>20121</CAP><Comune> Milano </Comune></Sede></H><B><Vuoto/></B></ns2:F>",
        )
        .unwrap();
        let row = flatten(&root);

        assert_eq!(
            row.keys().collect::<Vec<_>>(),
            vec!["H_Sede_CAP", "H_Sede_Comune", "B_Vuoto"]
        );
        assert_eq!(row.get("H_Sede_Comune"), Some("Milano"));
        assert_eq!(row.get("B_Vuoto"), Some(""));
    }

    #[test]
    fn test_repeated_key_overwrites_in_place() {
        let root = XmlElement::parse("<R><A>1</A><B>x</B><A>2</A></R>").unwrap();
        let row = flatten(&root);

        assert_eq!(row.len(), 2);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec![("A", "2"), ("B", "x")]);
    }

    #[test]
    fn test_unflatten_shares_parents() {
        let mut row = FlatRow::new();
        row.insert("Header_Sede_CAP", "00100");
        row.insert("Header_Sede_Comune", "Roma");
        row.insert("Body_Numero", "001/2025");

        let root = unflatten(UNFLATTEN_ROOT, &row);

        assert_eq!(root.name, "FatturaElettronica");
        assert_eq!(root.children.len(), 2);
        let seat = root.path(&["Header", "Sede"]).unwrap();
        assert_eq!(seat.children.len(), 2);
        assert_eq!(seat.child("Comune").unwrap().text(), "Roma");
        assert_eq!(root.path(&["Body", "Numero"]).unwrap().text(), "001/2025");
    }

    #[test]
    fn test_flatten_unflatten_round_trip() {
        let xml = "<FatturaElettronica><H><A>1</A><S><B>2</B><C>3</C></S></H><D>4</D></FatturaElettronica>";
        let root = XmlElement::parse(xml).unwrap();

        let rebuilt = unflatten(UNFLATTEN_ROOT, &flatten(&root));
        assert_eq!(rebuilt, root);
    }

    #[test]
    fn test_unflatten_skips_empty_segments() {
        let mut row = FlatRow::new();
        row.insert("Sede__CAP_", "20121");
        row.insert("_Numero", "001/2025");
        row.insert("__", "lost");

        let root = unflatten(UNFLATTEN_ROOT, &row);

        assert_eq!(root.text(), "");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.path(&["Sede", "CAP"]).unwrap().text(), "20121");
        assert_eq!(root.child("Numero").unwrap().text(), "001/2025");

        let xml = to_pretty_xml(&root).unwrap();
        assert!(!xml.contains("<>"), "{xml}");
        assert_eq!(XmlElement::parse(&xml).unwrap(), root);
    }

    #[test]
    fn test_pretty_xml_escapes_and_reparses() {
        let mut row = FlatRow::new();
        row.insert("Anagrafica_Denominazione", "Bianchi & Figli <Srl>");
        row.insert("Anagrafica_Vuoto", "");
        let root = unflatten(UNFLATTEN_ROOT, &row);

        let xml = to_pretty_xml(&root).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
        assert!(xml.contains("Bianchi &amp; Figli &lt;Srl&gt;"));
        assert!(xml.contains("<Vuoto/>"));

        assert_eq!(XmlElement::parse(&xml).unwrap(), root);
    }
}
