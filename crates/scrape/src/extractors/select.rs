// ABOUTME: Selector-based field extraction utilities scoped to a single matched element.
// ABOUTME: Provides child text and child attribute lookups plus selector compilation.

//! Selector-based field extraction utilities.
//!
//! Key behaviors:
//! - Child text concatenates the text of every matching descendant and trims the result.
//! - Child attribute reads only the first matching descendant and trims the value.
//! - Missing matches yield an empty string rather than an error.

use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;

/// Compile a CSS selector, reporting failures as an Extract error.
pub fn compile(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| {
        ScrapeError::extract(
            "",
            "CompileSelector",
            Some(anyhow::anyhow!("invalid selector {:?}: {}", css, e)),
        )
    })
}

/// Text of all descendants of `el` matching `sel`, concatenated and trimmed.
pub fn child_text(el: &ElementRef<'_>, sel: &Selector) -> String {
    let mut out = String::new();
    for child in el.select(sel) {
        for piece in child.text() {
            out.push_str(piece);
        }
    }
    out.trim().to_string()
}

/// Attribute `attr` of the first descendant of `el` matching `sel`, trimmed.
///
/// Later matches are not consulted when the first one lacks the attribute.
pub fn child_attr(el: &ElementRef<'_>, sel: &Selector, attr: &str) -> String {
    el.select(sel)
        .next()
        .and_then(|child| child.value().attr(attr))
        .unwrap_or_default()
        .trim()
        .to_string()
}
