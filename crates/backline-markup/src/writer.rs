//! AST -> canonical markup serialization.

use std::fmt::Write;

use crate::ast::{Fragment, Inline};

impl Fragment {
    /// Serialize the fragment back to the markup dialect.
    ///
    /// The output is canonical: runs of three or more newlines collapse to
    /// exactly two, so blank space cannot accumulate across edit cycles.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_inlines(&mut out, &self.inlines);
        collapse_newlines(&out)
    }
}

fn write_inlines(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Break => out.push('\n'),
            Inline::Bold(children) => {
                out.push_str("**");
                write_inlines(out, children);
                out.push_str("**");
            }
            Inline::Sized(size, children) => {
                let _ = write!(out, "<size:{}>", size.keyword());
                write_inlines(out, children);
                out.push_str("</size>");
            }
            Inline::Colored(color, children) => {
                let _ = write!(out, "<color:{color}>");
                write_inlines(out, children);
                out.push_str("</color>");
            }
        }
    }
}

/// Collapse runs of 3+ newlines to exactly 2.
fn collapse_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0usize;
    for ch in s.chars() {
        if ch == '\n' {
            run += 1;
            if run <= 2 {
                out.push('\n');
            }
        } else {
            run = 0;
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Color, Size};
    use crate::parse::parse_markup;

    fn text(s: &str) -> Inline {
        Inline::text(s)
    }

    #[test]
    fn test_serialize_all_node_kinds() {
        let frag = Fragment::new(vec![
            Inline::Bold(vec![text("b")]),
            text(" "),
            Inline::Sized(Size::H1, vec![text("t")]),
            Inline::Break,
            Inline::Colored(Color::new("#fff").unwrap(), vec![text("c")]),
        ]);
        assert_eq!(
            frag.to_markup(),
            "**b** <size:h1>t</size>\n<color:#fff>c</color>"
        );
    }

    #[test]
    fn test_markup_ast_round_trip() {
        let src = "**a** <size:small>b</size> <color:#123456>c</color>\nplain";
        assert_eq!(parse_markup(src).to_markup(), src);
    }

    #[test]
    fn test_newline_collapse() {
        let frag = Fragment::new(vec![
            text("a"),
            Inline::Break,
            Inline::Break,
            Inline::Break,
            Inline::Break,
            Inline::Break,
            text("b"),
        ]);
        assert_eq!(frag.to_markup(), "a\n\nb");
    }

    #[test]
    fn test_two_newlines_survive() {
        assert_eq!(parse_markup("a\n\nb").to_markup(), "a\n\nb");
    }
}
