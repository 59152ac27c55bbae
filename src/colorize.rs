//! Preview recoloring and data URL encoding.
//!
//! Recoloring works on text rather than on a parsed tree: the base output may
//! be an echoed invalid input, and it still deserves a preview if it has an
//! `<svg ...>` tag somewhere. Only the first root opening tag is rewritten;
//! `<svg` inside comments, CDATA, declarations or processing instructions
//! does not count.

use std::borrow::Cow;
use std::sync::LazyLock;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use regex::{Captures, Regex};

/// MIME type of everything this crate produces.
pub const SVG_MIME: &str = "image/svg+xml";

/// Either a span to skip (comment, CDATA, `<!...>` declaration with an
/// optional internal subset, processing instruction) or an opening `<svg ...>`
/// tag. Quoted values are consumed whole, so a `>` inside an attribute value
/// does not end the tag.
static ROOT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)<!--.*?-->"#,
        r#"|<!\[CDATA\[.*?\]\]>"#,
        r#"|<![^\[>]*(?:\[.*?\])?\s*>"#,
        r#"|<\?.*?\?>"#,
        r#"|(?i:<svg(?P<attrs>\s(?:[^>"']|"[^"]*"|'[^']*')*?)?(?P<close>\s*/?)>)"#,
    ))
    .unwrap()
});

/// One `name="value"` (or bare `name`) inside an opening tag, with its leading space.
static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(?P<name>[^\s=/>"']+)(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>"']+))?"#).unwrap()
});

/// Replace the root's `fill` and `stroke` with `fill="<color>"`.
///
/// Returns an empty string when `svg` has no `<svg>` opening tag.
pub fn colorize(svg: &str, color: &str) -> String {
    let Some(caps) = ROOT_TAG
        .captures_iter(svg)
        .find(|caps| caps.name("close").is_some())
    else {
        log::debug!("no <svg> opening tag to recolor");
        return String::new();
    };
    let (Some(tag), Some(close)) = (caps.get(0), caps.name("close")) else {
        return String::new();
    };
    let attrs = caps.name("attrs").map_or("", |m| m.as_str().trim_end());
    // `<svg` as written, keeping its letter case
    let open = &svg[tag.start()..tag.start() + 4];

    let mut out = String::with_capacity(svg.len() + color.len() + 8);
    out.push_str(&svg[..tag.start()]);
    out.push_str(open);
    out.push_str(&strip_paint(attrs));
    out.push_str(" fill=\"");
    out.push_str(&escape_attr(color));
    out.push('"');
    out.push_str(close.as_str());
    out.push('>');
    out.push_str(&svg[tag.end()..]);
    out
}

fn strip_paint(attrs: &str) -> Cow<'_, str> {
    ATTR.replace_all(attrs, |caps: &Captures| match &caps["name"] {
        "fill" | "stroke" => String::new(),
        _ => caps[0].to_string(),
    })
}

fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '&', '<']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Encode `svg` as a self-contained `data:image/svg+xml;base64,` URL.
///
/// Empty input has nothing to render and yields an empty URL.
pub fn data_url(svg: &str) -> String {
    if svg.is_empty() {
        return String::new();
    }
    format!(
        "data:{};base64,{}",
        SVG_MIME,
        BASE64_STANDARD.encode(svg.as_bytes())
    )
}
