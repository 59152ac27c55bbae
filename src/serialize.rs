//! SVG serialization back to XML text.
//!
//! Output keeps every node the parser kept: text is written as-is (escaped,
//! never trimmed), comments, CDATA and processing instructions survive, and
//! attributes come out in the order the element stores them.

use std::fmt::{self, Write};

use crate::ast::*;

/// Serialize a Document to an SVG string.
pub fn serialize(doc: &Document) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_document(&mut out, doc)?;
    Ok(out)
}

/// Write a Document to any `fmt::Write` sink.
pub fn write_document<W: Write>(out: &mut W, doc: &Document) -> fmt::Result {
    if let Some(ref decl) = doc.xml_declaration {
        write!(out, "<?xml version=\"{}\"", decl.version)?;
        if let Some(ref enc) = decl.encoding {
            write!(out, " encoding=\"{}\"", enc)?;
        }
        if let Some(standalone) = decl.standalone {
            write!(
                out,
                " standalone=\"{}\"",
                if standalone { "yes" } else { "no" }
            )?;
        }
        out.write_str("?>")?;
    }

    for node in &doc.prolog {
        write_node(out, node)?;
    }
    write_element(out, &doc.root)?;
    for node in &doc.epilog {
        write_node(out, node)?;
    }

    Ok(())
}

fn write_element<W: Write>(out: &mut W, elem: &Element) -> fmt::Result {
    let name = elem.name.full_name();
    out.write_char('<')?;
    out.write_str(&name)?;

    for attr in &elem.attributes {
        out.write_char(' ')?;
        out.write_str(&attr.name.full_name())?;
        out.write_str("=\"")?;
        write_escaped_attr(out, &attr.value)?;
        out.write_char('"')?;
    }

    if elem.children.is_empty() {
        return out.write_str("/>");
    }

    out.write_char('>')?;
    for child in &elem.children {
        write_node(out, child)?;
    }
    write!(out, "</{}>", name)
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Element(elem) => write_element(out, elem),
        Node::Text(text) => write_escaped_text(out, text),
        Node::Comment(comment) => write!(out, "<!--{}-->", comment),
        Node::CData(data) => write!(out, "<![CDATA[{}]]>", data),
        Node::DocType(dt) => write!(out, "<!DOCTYPE {}>", dt),
        Node::ProcessingInstruction { target, content } => {
            out.write_str("<?")?;
            out.write_str(target)?;
            if let Some(c) = content {
                out.write_char(' ')?;
                out.write_str(c)?;
            }
            out.write_str("?>")
        }
    }
}

fn write_escaped_attr<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => out.write_str("&quot;")?,
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            // as references, so attribute-value normalization keeps them
            '\n' => out.write_str("&#10;")?,
            '\r' => out.write_str("&#13;")?,
            '\t' => out.write_str("&#9;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

fn write_escaped_text<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_svg;

    #[test]
    fn test_serialize_simple() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect/></svg>"#;
        let doc = parse_svg(svg).unwrap();
        assert_eq!(serialize(&doc).unwrap(), svg);
    }

    #[test]
    fn test_serialize_keeps_prolog_and_whitespace() {
        let svg = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE svg>\n<svg>\n  <!-- c -->\n  <g>\n    <rect/>\n  </g>\n</svg>\n";
        let doc = parse_svg(svg).unwrap();
        assert_eq!(serialize(&doc).unwrap(), svg);
    }

    #[test]
    fn test_serialize_escapes() {
        let svg = r#"<svg><text data-x="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3</text></svg>"#;
        let doc = parse_svg(svg).unwrap();
        assert_eq!(serialize(&doc).unwrap(), svg);
    }

    #[test]
    fn test_serialize_collapses_empty_pairs() {
        let doc = parse_svg(r#"<svg><path d="M0 0"></path></svg>"#).unwrap();
        assert_eq!(serialize(&doc).unwrap(), r#"<svg><path d="M0 0"/></svg>"#);
    }

    #[test]
    fn test_serialize_keeps_attr_whitespace_refs() {
        let svg = r#"<svg><path d="M0 0&#10;L1 1&#13;&#9;Z"/></svg>"#;
        let doc = parse_svg(svg).unwrap();
        let path = doc.root.child_elements().next().unwrap();
        assert_eq!(path.get_attr("d"), Some("M0 0\nL1 1\r\tZ"));

        let out = serialize(&doc).unwrap();
        assert_eq!(out, svg);
        let reparsed = parse_svg(&out).unwrap();
        let path = reparsed.root.child_elements().next().unwrap();
        assert_eq!(path.get_attr("d"), Some("M0 0\nL1 1\r\tZ"));
    }

    #[test]
    fn test_serialize_keeps_cdata() {
        let svg = "<svg><style><![CDATA[.a > .b { fill: red }]]></style></svg>";
        let doc = parse_svg(svg).unwrap();
        assert_eq!(serialize(&doc).unwrap(), svg);
    }
}
