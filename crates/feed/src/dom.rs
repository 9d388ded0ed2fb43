// ABOUTME: Minimal namespace-aware element tree built from raw XML bytes with quick-xml.
// ABOUTME: Exposes namespace URI, local name, attributes, text content, and ordered children.

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use crate::error::FeedError;

/// A child of an element: either a nested element or a run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its namespace already resolved.
///
/// Attributes keep their qualified name (`xml:base`, `href`); namespace
/// declarations are consumed during resolution and are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    local_name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element. Mostly useful for building trees by hand.
    pub fn new(namespace: Option<&str>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local_name: local_name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// The resolved namespace URI, `None` for elements outside any namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Looks up an attribute by its qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Concatenated character data of this element and all its descendants,
    /// in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Direct child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Parses raw XML bytes into the root element of the document.
///
/// Not-well-formed input (mismatched tags, bad attributes, unterminated
/// document) is rejected with [`FeedError::Parse`].
pub fn parse_document(data: &[u8]) -> Result<Element, FeedError> {
    let mut reader = NsReader::from_reader(data);
    reader.config_mut().expand_empty_elements = true;

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let (resolved, event) = reader
            .read_resolved_event_into(&mut buf)
            .map_err(FeedError::parse)?;
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            _ => None,
        };

        match event {
            Event::Start(ref start) => {
                let element = open_element(namespace, start, &reader)?;
                stack.push(element);
            }
            Event::End(_) => {
                let Some(element) = stack.pop() else {
                    return Err(FeedError::parse("unexpected closing tag"));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(element)),
                    None if root.is_none() => root = Some(element),
                    None => return Err(FeedError::parse("multiple root elements")),
                }
            }
            Event::Text(ref text) => {
                let decoded = text.decode().map_err(FeedError::parse)?;
                push_text(&mut stack, &decoded);
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                push_text(&mut stack, &String::from_utf8_lossy(&raw));
            }
            Event::GeneralRef(ref reference) => {
                let resolved = match reference.resolve_char_ref().map_err(FeedError::parse)? {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name = reference.decode().map_err(FeedError::parse)?;
                        match resolve_predefined_entity(&name) {
                            Some(value) => value.to_string(),
                            None => format!("&{};", name),
                        }
                    }
                };
                push_text(&mut stack, &resolved);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(FeedError::parse("unexpected end of document"));
    }
    root.ok_or_else(|| FeedError::parse("document has no root element"))
}

fn open_element(
    namespace: Option<String>,
    start: &BytesStart<'_>,
    reader: &NsReader<&[u8]>,
) -> Result<Element, FeedError> {
    let local_name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(FeedError::parse)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(FeedError::parse)?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        namespace,
        local_name,
        attributes,
        children: Vec::new(),
    })
}

// Character data outside the root element (whitespace, mostly) is dropped.
fn push_text(stack: &mut [Element], text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        match current.children.last_mut() {
            Some(Node::Text(existing)) => existing.push_str(text),
            _ => current.children.push(Node::Text(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_prefixed_and_default_namespaces() {
        let xml = r#"<rss xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
            <channel>
                <title>Show</title>
                <itunes:image href="https://example.com/img.jpg"/>
            </channel>
        </rss>"#;

        let root = parse_document(xml.as_bytes()).unwrap();
        assert_eq!(root.local_name(), "rss");
        assert_eq!(root.namespace(), None);

        let channel = root.child_elements().next().unwrap();
        let children: Vec<&Element> = channel.child_elements().collect();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].local_name(), "title");
        assert_eq!(children[1].local_name(), "image");
        assert_eq!(
            children[1].namespace(),
            Some("http://www.itunes.com/dtds/podcast-1.0.dtd")
        );
        assert_eq!(
            children[1].attribute("href"),
            Some("https://example.com/img.jpg")
        );
    }

    #[test]
    fn test_text_content_joins_cdata_and_entities() {
        let xml = r#"<description>Tom &amp; Jerry <![CDATA[<b>live</b>]]> &#33;</description>"#;
        let root = parse_document(xml.as_bytes()).unwrap();
        assert_eq!(root.text_content(), "Tom & Jerry <b>live</b> !");
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let xml = r#"<rss version="2.0" xmlns:podcast="https://podcastindex.org/namespace/1.0"/>"#;
        let root = parse_document(xml.as_bytes()).unwrap();
        let attrs: Vec<(&str, &str)> = root.attributes().collect();
        assert_eq!(attrs, vec![("version", "2.0")]);
    }

    #[test]
    fn test_rejects_mismatched_tags() {
        let xml = "<rss><channel></rss>";
        assert!(matches!(
            parse_document(xml.as_bytes()),
            Err(FeedError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_empty_document() {
        assert!(parse_document(b"").is_err());
    }
}
