//! Multi-size preview: size list parsing, layout choice and the HTML page.

use minijinja::{Environment, context};

/// Parse a comma-separated size list like `"16, 24, 32"`.
///
/// Tokens that aren't positive integers are dropped. Order and duplicates
/// are kept.
pub fn parse_sizes(input: &str) -> Vec<u32> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(|token| match token.parse::<u32>() {
            Ok(size) if size > 0 => Some(size),
            _ => {
                if !token.is_empty() {
                    log::trace!("ignoring size token {:?}", token);
                }
                None
            }
        })
        .collect()
}

/// How previews are laid out for a given size list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLayout {
    /// No usable sizes: show guidance instead of a preview.
    Empty,
    /// One preview the viewer can resize, starting at this size.
    Adjustable(u32),
    /// One fixed preview per size.
    Fixed(Vec<u32>),
}

impl PreviewLayout {
    pub fn from_sizes(sizes: &[u32]) -> Self {
        match sizes {
            [] => Self::Empty,
            [size] => Self::Adjustable(*size),
            _ => Self::Fixed(sizes.to_vec()),
        }
    }
}

/// Shown in place of previews when the size list is empty.
pub const EMPTY_SIZES_MESSAGE: &str =
    "Enter one or more positive sizes separated by commas, e.g. 16, 24, 32.";

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Pick a theme from the host's "prefers dark" signal.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("#ffffff", "#1f2328"),
            Self::Dark => ("#0d1117", "#e6edf3"),
        }
    }
}

/// Largest size the adjustable preview's slider reaches.
const SLIDER_MAX: u32 = 512;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>svgtrim preview</title>
<style>
body { background: {{ background }}; color: {{ foreground }}; font-family: system-ui, sans-serif; margin: 2rem; }
.previews { display: flex; flex-wrap: wrap; align-items: flex-end; gap: 1.5rem; }
figure { margin: 0; text-align: center; }
figcaption { font-size: 0.8rem; opacity: 0.7; }
</style>
</head>
<body>
{% if layout == "empty" %}
<p class="guidance">{{ message }}</p>
{% elif layout == "adjustable" %}
<figure>
<img id="preview" src="{{ url }}" width="{{ size }}" height="{{ size }}" alt="preview">
<figcaption><input id="size" type="range" min="1" max="{{ slider_max }}" value="{{ size }}"> <span id="label">{{ size }}px</span></figcaption>
</figure>
<script>
const slider = document.getElementById("size");
slider.addEventListener("input", () => {
  const img = document.getElementById("preview");
  img.width = img.height = slider.value;
  document.getElementById("label").textContent = slider.value + "px";
});
</script>
{% else %}
<div class="previews">
{% for size in sizes %}
<figure>
<img src="{{ url }}" width="{{ size }}" height="{{ size }}" alt="{{ size }}px preview">
<figcaption>{{ size }}px</figcaption>
</figure>
{% endfor %}
</div>
{% endif %}
</body>
</html>
"#;

/// Render a standalone HTML page showing `url` in the given layout.
///
/// An empty `url` means nothing is renderable and the guidance text is shown
/// whatever the layout says.
pub fn render_page(url: &str, layout: &PreviewLayout, theme: Theme) -> String {
    let (background, foreground) = theme.colors();
    let (kind, size, sizes): (&str, u32, &[u32]) = match layout {
        _ if url.is_empty() => ("empty", 0, &[]),
        PreviewLayout::Empty => ("empty", 0, &[]),
        PreviewLayout::Adjustable(size) => ("adjustable", *size, &[]),
        PreviewLayout::Fixed(sizes) => ("fixed", 0, sizes),
    };

    let mut env = Environment::new();
    let rendered = env
        .add_template("page.html", PAGE_TEMPLATE)
        .and_then(|()| env.get_template("page.html"))
        .and_then(|tmpl| {
            tmpl.render(context! {
                background,
                foreground,
                layout => kind,
                message => EMPTY_SIZES_MESSAGE,
                url,
                size,
                sizes,
                slider_max => SLIDER_MAX.max(size),
            })
        });

    match rendered {
        Ok(page) => page,
        Err(e) => {
            log::warn!("failed to render preview page: {}", e);
            String::new()
        }
    }
}
