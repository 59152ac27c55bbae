//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::TrimError;

/// Parse an SVG string into a Document.
///
/// Anything quick-xml rejects, a missing or repeated root, stray text outside
/// the root, or a root that isn't `<svg>` (in any letter case) is an error.
pub fn parse_svg(svg: &str) -> Result<Document, TrimError> {
    let mut reader = Reader::from_str(svg);

    let mut xml_declaration = None;
    let mut prolog = Vec::new();
    let mut epilog = Vec::new();
    let mut root = None;

    loop {
        let node = match reader.read_event()? {
            Event::Decl(decl) => {
                xml_declaration = Some(XmlDeclaration {
                    version: String::from_utf8_lossy(decl.version()?.as_ref()).into_owned(),
                    encoding: decl
                        .encoding()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|e| String::from_utf8_lossy(e.as_ref()).into_owned()),
                    standalone: decl.standalone().transpose().ok().flatten().map(|s| {
                        let s = String::from_utf8_lossy(s.as_ref());
                        s == "yes"
                    }),
                });
                continue;
            }
            Event::DocType(dt) => Node::DocType(String::from_utf8_lossy(&dt).into_owned()),
            Event::Start(start) => {
                if root.is_some() {
                    return Err(TrimError::InvalidSvg("Multiple root elements".into()));
                }
                root = Some(parse_element(&mut reader, &start)?);
                continue;
            }
            Event::Empty(start) => {
                if root.is_some() {
                    return Err(TrimError::InvalidSvg("Multiple root elements".into()));
                }
                root = Some(parse_element_start(&start)?);
                continue;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    return Err(TrimError::InvalidSvg(
                        "Text content outside the root element".into(),
                    ));
                }
                Node::Text(text.into_owned())
            }
            Event::Comment(comment) => {
                Node::Comment(String::from_utf8_lossy(&comment).into_owned())
            }
            Event::PI(pi) => parse_pi(&pi),
            Event::CData(_) => {
                return Err(TrimError::InvalidSvg(
                    "CDATA section outside the root element".into(),
                ));
            }
            Event::Eof => break,
            _ => {
                return Err(TrimError::InvalidSvg(
                    "Unexpected markup outside the root element".into(),
                ));
            }
        };

        if root.is_some() {
            epilog.push(node);
        } else {
            prolog.push(node);
        }
    }

    let root = root.ok_or_else(|| TrimError::InvalidSvg("No root element found".into()))?;
    if !root.is("svg") {
        return Err(TrimError::RootMismatch(root.name.full_name()));
    }

    Ok(Document {
        xml_declaration,
        prolog,
        root,
        epilog,
    })
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Element, TrimError> {
    let mut element = parse_element_start(start)?;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                element
                    .children
                    .push(Node::Element(parse_element(reader, &start)?));
            }
            Event::Empty(start) => {
                element
                    .children
                    .push(Node::Element(parse_element_start(&start)?));
            }
            Event::End(_) => {
                break;
            }
            Event::Text(text) => {
                element
                    .children
                    .push(Node::Text(text.unescape()?.into_owned()));
            }
            Event::Comment(comment) => {
                element
                    .children
                    .push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()));
            }
            Event::CData(cdata) => {
                element
                    .children
                    .push(Node::CData(String::from_utf8_lossy(&cdata).into_owned()));
            }
            Event::PI(pi) => {
                element.children.push(parse_pi(&pi));
            }
            Event::Eof => {
                return Err(TrimError::InvalidSvg(format!(
                    "Unexpected end of file inside <{}>",
                    element.name.full_name()
                )));
            }
            _ => {
                return Err(TrimError::InvalidSvg(
                    "Declaration inside an element".into(),
                ));
            }
        }
    }

    Ok(element)
}

fn parse_pi(raw: &[u8]) -> Node {
    let content = String::from_utf8_lossy(raw).into_owned();
    let (target, rest) = content
        .split_once(char::is_whitespace)
        .map(|(t, r)| (t.to_string(), Some(r.to_string())))
        .unwrap_or_else(|| (content, None));
    Node::ProcessingInstruction { target, content: rest }
}

fn parse_element_start(start: &BytesStart) -> Result<Element, TrimError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element {
        name: QName::parse(name),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute {
            name: QName::parse(key),
            value: value.into_owned(),
        });
    }

    Ok(element)
}
