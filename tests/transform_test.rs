//! End-to-end behavior of the transformer and the preview pipeline.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use svgtrim::{
    DOWNLOAD_FILE_NAME, PreviewOptions, Session, TransformOptions, colorize, data_url, parse_svg,
    save_download, transform, try_transform,
};

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" class="icon"><path class="p" d="M0 0"/></svg>"#;

const ALL: TransformOptions = TransformOptions {
    remove_classes: true,
    remove_width: true,
    remove_height: true,
    remove_xmlns: true,
};

fn option_grid() -> Vec<TransformOptions> {
    let mut grid = Vec::new();
    for bits in 0..16u8 {
        grid.push(TransformOptions {
            remove_classes: bits & 1 != 0,
            remove_width: bits & 2 != 0,
            remove_height: bits & 4 != 0,
            remove_xmlns: bits & 8 != 0,
        });
    }
    grid
}

#[test]
fn test_blank_input_is_empty() {
    for options in option_grid() {
        for input in ["", " ", "\n\t  \r\n"] {
            assert_eq!(transform(input, &options), "");
        }
    }
}

#[test]
fn test_invalid_input_is_echoed() {
    let inputs = [
        "hello world",
        "<html><body></body></html>",
        r#"<div class="x">not an icon</div>"#,
        "<svg><g></svg>",
        "<svg width=24>",
        r#"<svg class="a"><path/>"#,
        "<svg>&nbsp;</svg>",
        "  <svg class='a'/> trailing",
    ];
    for input in inputs {
        assert_eq!(transform(input, &ALL), input, "input {:?}", input);
        assert!(try_transform(input, &ALL).is_err(), "input {:?}", input);
    }
}

#[test]
fn test_xmlns_toggle() {
    let removed = transform(ICON, &ALL);
    let doc = parse_svg(&removed).unwrap();
    assert_eq!(doc.root.get_attr("xmlns"), None);

    let kept = transform(
        ICON,
        &TransformOptions {
            remove_xmlns: false,
            ..ALL
        },
    );
    let doc = parse_svg(&kept).unwrap();
    assert_eq!(doc.root.get_attr("xmlns"), Some("http://www.w3.org/2000/svg"));
}

#[test]
fn test_class_toggle() {
    let svg = r#"<svg class="a b"><g class="c"><g><rect class="d"/></g></g><circle class="e"/></svg>"#;

    let stripped = transform(svg, &ALL);
    assert!(!stripped.contains("class="), "{}", stripped);
    assert_eq!(stripped, "<svg><g><g><rect/></g></g><circle/></svg>");

    let kept = transform(svg, &TransformOptions::none());
    assert_eq!(kept, svg);
}

#[test]
fn test_idempotent() {
    let inputs = [
        ICON,
        r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
  <!-- icon -->
  <g class="x" fill="red"><path d="M1 1h8"/></g>
</svg>
"#,
        "not svg",
    ];
    for input in inputs {
        for options in option_grid() {
            let once = transform(input, &options);
            let twice = transform(&once, &options);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_content_preserved() {
    let svg = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- exported -->
<svg xmlns="http://www.w3.org/2000/svg" width="10" viewBox="0 0 10 10">
  <title>Tom &amp; Jerry</title>
  <style><![CDATA[.a{fill:red}]]></style>
  <text x="1">  spaced   out  </text>
</svg>"#;

    let out = transform(svg, &ALL);
    assert_eq!(out, svg.replace(r#"xmlns="http://www.w3.org/2000/svg" width="10" "#, ""));
}

#[test]
fn test_end_to_end_base_output() {
    let options = TransformOptions {
        remove_classes: true,
        remove_width: true,
        remove_height: true,
        remove_xmlns: false,
    };
    assert_eq!(
        transform(ICON, &options),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#
    );
}

#[test]
fn test_end_to_end_colorized_output() {
    let mut session = Session::new(
        TransformOptions {
            remove_xmlns: false,
            ..ALL
        },
        PreviewOptions {
            preview_color: "#ff0000".into(),
            apply_preview_color: true,
            output_sizes: "16, 24, 32".into(),
        },
    );
    session.set_input(ICON);

    let expected = r##"<svg xmlns="http://www.w3.org/2000/svg" fill="#ff0000"><path d="M0 0"/></svg>"##;
    assert_eq!(session.final_output(), expected);
    assert_eq!(session.sizes(), &[16, 24, 32]);

    let encoded = session
        .data_url()
        .strip_prefix("data:image/svg+xml;base64,")
        .unwrap();
    let decoded = String::from_utf8(BASE64_STANDARD.decode(encoded).unwrap()).unwrap();
    assert_eq!(decoded, session.colorized());

    session.set_apply_preview_color(false);
    assert_eq!(
        session.final_output(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#
    );
}

#[test]
fn test_colorize_only_touches_root() {
    let base = r##"<svg fill="#111" stroke="#222"><path fill="#333"/><g stroke="#444"><rect fill="#555"/></g></svg>"##;
    let colorized = colorize(base, "#abcdef");
    assert_eq!(
        colorized,
        r##"<svg fill="#abcdef"><path fill="#333"/><g stroke="#444"><rect fill="#555"/></g></svg>"##
    );

    let doc = parse_svg(&colorized).unwrap();
    assert_eq!(doc.root.get_attr("stroke"), None);
    assert_eq!(data_url(""), "");
}

#[test]
fn test_save_download() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_download(dir.path(), "<svg/>").unwrap();
    assert_eq!(path.file_name().unwrap(), DOWNLOAD_FILE_NAME);
    assert_eq!(std::fs::read_to_string(path).unwrap(), "<svg/>");
}

#[test]
fn test_colorize_finds_root_after_prolog_comment() {
    let input = r#"<!-- <svg> sample --><svg fill="blue" stroke="red"><path/></svg>"#;
    let base = transform(input, &TransformOptions::default());
    let colorized = colorize(&base, "#ff0000");
    assert!(colorized.starts_with("<!-- <svg> sample -->"), "{}", colorized);

    let doc = parse_svg(&colorized).unwrap();
    assert_eq!(doc.root.get_attr("fill"), Some("#ff0000"));
    assert_eq!(doc.root.get_attr("stroke"), None);
}

#[test]
fn test_attr_line_breaks_survive_transform() {
    let input = r#"<svg class="x"><path d="M0 0&#10;L1 1"/></svg>"#;
    let out = transform(input, &ALL);
    assert_eq!(out, r#"<svg><path d="M0 0&#10;L1 1"/></svg>"#);

    let doc = parse_svg(&out).unwrap();
    let path = doc.root.child_elements().next().unwrap();
    assert_eq!(path.get_attr("d"), Some("M0 0\nL1 1"));
}
