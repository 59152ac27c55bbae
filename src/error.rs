use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrimError {
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Root element is <{0}>, expected <svg>")]
    RootMismatch(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] std::fmt::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
