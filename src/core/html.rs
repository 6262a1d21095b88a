// src/core/html.rs
//
// Small helpers over `scraper`'s DOM. Matching on the `style` attribute is
// exact string equality: no CSS parsing, no whitespace folding.

use scraper::{ElementRef, Html, Selector};

/// All `<tag>` elements whose `style` attribute equals `style` exactly,
/// in document order.
pub fn find_all_by_style<'a>(doc: &'a Html, tag: &str, style: &str) -> Vec<ElementRef<'a>> {
    let Ok(sel) = Selector::parse(tag) else {
        return Vec::new();
    };
    doc.select(&sel)
        .filter(|el| el.value().attr("style") == Some(style))
        .collect()
}

/// First match of `find_all_by_style`.
pub fn find_by_style<'a>(doc: &'a Html, tag: &str, style: &str) -> Option<ElementRef<'a>> {
    find_all_by_style(doc, tag, style).into_iter().next()
}

/// Text content, text nodes concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text content with `sep` between consecutive text nodes.
pub fn text_with_sep(el: ElementRef<'_>, sep: &str) -> String {
    el.text().collect::<Vec<_>>().join(sep)
}
