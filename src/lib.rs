//! svgtrim - strip attributes from SVG icons and preview them recolored
//!
//! The transformer parses an SVG, removes the attributes selected in
//! [`TransformOptions`] and writes it back out. Anything it can't parse comes
//! back unchanged. On top of that, [`colorize`] and [`data_url`] turn the
//! result into a recolored preview, and [`Session`] keeps all derived values
//! current as the input and options change.

mod ast;
mod colorize;
mod error;
mod parse;
mod preview;
mod serialize;
mod session;
mod strip;

pub use ast::*;
pub use colorize::*;
pub use error::*;
pub use parse::*;
pub use preview::*;
pub use serialize::*;
pub use session::*;
pub use strip::*;

use std::fs;
use std::path::{Path, PathBuf};

/// File name used when the final output is saved.
pub const DOWNLOAD_FILE_NAME: &str = "optimized.svg";

/// Save `svg` as [`DOWNLOAD_FILE_NAME`] inside `dir` and return the written path.
pub fn save_download(dir: &Path, svg: &str) -> Result<PathBuf, TrimError> {
    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, svg)?;
    log::info!("saved {} ({} bytes)", path.display(), svg.len());
    Ok(path)
}

/// Strip attributes from an SVG string.
///
/// Empty or whitespace-only input gives an empty string. Input that isn't a
/// well-formed `<svg>` document is returned unchanged.
pub fn transform(svg: &str, options: &TransformOptions) -> String {
    if svg.trim().is_empty() {
        return String::new();
    }

    match try_transform(svg, options) {
        Ok(out) => out,
        Err(e) => {
            log::warn!("leaving input unchanged: {}", e);
            svg.to_string()
        }
    }
}

/// Strip attributes from an SVG string, reporting why it couldn't be done.
pub fn try_transform(svg: &str, options: &TransformOptions) -> Result<String, TrimError> {
    let mut doc = parse_svg(svg)?;
    strip(&mut doc, options);
    Ok(serialize(&doc)?)
}

/// Which attributes to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Remove `class` from the root and every descendant
    pub remove_classes: bool,
    /// Remove `width` from the root
    pub remove_width: bool,
    /// Remove `height` from the root
    pub remove_height: bool,
    /// Remove the default namespace declaration (`xmlns`) from the root
    pub remove_xmlns: bool,
}

impl TransformOptions {
    /// Options that remove nothing.
    pub fn none() -> Self {
        Self {
            remove_classes: false,
            remove_width: false,
            remove_height: false,
            remove_xmlns: false,
        }
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            remove_classes: true,
            remove_width: true,
            remove_height: true,
            remove_xmlns: false,
        }
    }
}

/// Preview settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Color written into the root's `fill`; not validated
    pub preview_color: String,
    /// Use the recolored markup as the final output
    pub apply_preview_color: bool,
    /// Comma-separated preview sizes, as typed
    pub output_sizes: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            preview_color: "#000000".into(),
            apply_preview_color: false,
            output_sizes: "16, 24, 32, 48".into(),
        }
    }
}
