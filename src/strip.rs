//! Attribute removal passes.

use crate::TransformOptions;
use crate::ast::*;

/// Apply every enabled removal to the document.
///
/// The passes touch disjoint attributes, so the order here is not significant.
pub fn strip(doc: &mut Document, options: &TransformOptions) {
    if options.remove_xmlns {
        doc.root.remove_attr("xmlns");
    }

    if options.remove_width {
        doc.root.remove_attr("width");
    }

    if options.remove_height {
        doc.root.remove_attr("height");
    }

    if options.remove_classes {
        remove_classes(doc);
    }
}

/// Remove `class` from the root and every element below it.
fn remove_classes(doc: &mut Document) {
    doc.for_each_element_mut(|elem| {
        elem.remove_attr("class");
    });
}
