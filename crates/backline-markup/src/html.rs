//! AST -> HTML rendering.
//!
//! The output dialect is the one a contentEditable host produces and
//! `crate::html_parse` reads back: `<strong>`, `<h1>`-`<h3>`, legacy
//! `<font size>` for the non-heading levels, `<span style="color: ..">`,
//! and `<br>` line breaks.

use std::fmt::Write;

use crate::ast::{Fragment, Inline};

impl Fragment {
    /// Render the fragment as HTML. Text content is escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_inlines(&mut out, &self.inlines);
        out
    }
}

fn write_inlines(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        match node {
            Inline::Text(text) => escape_html(out, text),
            Inline::Break => out.push_str("<br>"),
            Inline::Bold(children) => {
                out.push_str("<strong>");
                write_inlines(out, children);
                out.push_str("</strong>");
            }
            Inline::Sized(size, children) => match size.heading_tag() {
                Some(tag) => {
                    let _ = write!(out, "<{tag}>");
                    write_inlines(out, children);
                    let _ = write!(out, "</{tag}>");
                }
                None => {
                    // Small/Normal/Large carry a legacy font size.
                    let n = size.font_size().unwrap_or(3);
                    let _ = write!(out, "<font size=\"{n}\">");
                    write_inlines(out, children);
                    out.push_str("</font>");
                }
            },
            Inline::Colored(color, children) => {
                let _ = write!(out, "<span style=\"color: {color}\">");
                write_inlines(out, children);
                out.push_str("</span>");
            }
        }
    }
}

/// Escape text for embedding in HTML body or attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html(&mut out, text);
    out
}

/// Minimal HTML body-text escaping.
pub(crate) fn escape_html(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
