//! Live editing state with derived outputs kept current.
//!
//! Dependencies run one way: input and transform options feed the base
//! output, the base output and preview color feed the colorized output, and
//! that feeds the data URL. Each setter recomputes only what lies downstream
//! of what it changed.

use crate::{
    PreviewLayout, PreviewOptions, TransformOptions, colorize, data_url, parse_sizes, transform,
};

#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    transform_options: TransformOptions,
    preview_options: PreviewOptions,

    base: String,
    colorized: String,
    url: String,
    sizes: Vec<u32>,
}

impl Session {
    pub fn new(transform_options: TransformOptions, preview_options: PreviewOptions) -> Self {
        let mut session = Self {
            input: String::new(),
            transform_options,
            preview_options,
            base: String::new(),
            colorized: String::new(),
            url: String::new(),
            sizes: Vec::new(),
        };
        session.refresh_base();
        session.refresh_sizes();
        session
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        if input != self.input {
            self.input = input;
            self.refresh_base();
        }
    }

    pub fn set_transform_options(&mut self, options: TransformOptions) {
        if options != self.transform_options {
            self.transform_options = options;
            self.refresh_base();
        }
    }

    pub fn set_preview_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        if color != self.preview_options.preview_color {
            self.preview_options.preview_color = color;
            self.refresh_colorized();
        }
    }

    /// The final output is picked on read, so nothing is recomputed here.
    pub fn set_apply_preview_color(&mut self, apply: bool) {
        self.preview_options.apply_preview_color = apply;
    }

    pub fn set_output_sizes(&mut self, sizes: impl Into<String>) {
        self.preview_options.output_sizes = sizes.into();
        self.refresh_sizes();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transform_options(&self) -> &TransformOptions {
        &self.transform_options
    }

    pub fn preview_options(&self) -> &PreviewOptions {
        &self.preview_options
    }

    /// Transformed markup before recoloring.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Base markup with the preview color on its root; empty if it has no `<svg>` tag.
    pub fn colorized(&self) -> &str {
        &self.colorized
    }

    /// What copy and download act on.
    pub fn final_output(&self) -> &str {
        if self.preview_options.apply_preview_color {
            &self.colorized
        } else {
            &self.base
        }
    }

    pub fn data_url(&self) -> &str {
        &self.url
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    pub fn layout(&self) -> PreviewLayout {
        PreviewLayout::from_sizes(&self.sizes)
    }

    fn refresh_base(&mut self) {
        self.base = transform(&self.input, &self.transform_options);
        self.refresh_colorized();
    }

    fn refresh_colorized(&mut self) {
        self.colorized = colorize(&self.base, &self.preview_options.preview_color);
        self.url = data_url(&self.colorized);
        log::debug!(
            "recomputed preview: {} bytes base, {} bytes colorized",
            self.base.len(),
            self.colorized.len()
        );
    }

    fn refresh_sizes(&mut self) {
        self.sizes = parse_sizes(&self.preview_options.output_sizes);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TransformOptions::default(), PreviewOptions::default())
    }
}
