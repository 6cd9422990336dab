//! Markup dialect -> AST.
//!
//! A hand-rolled scanner, total over arbitrary input: an unclosed `**`, a
//! `<size:..>` missing its `</size>`, or an unknown keyword is kept as
//! literal text rather than rejected. This matches the stored corpus, where
//! a marker that no substitution recognized simply stayed in the string.

use smol_str::SmolStr;

use crate::ast::{Color, Fragment, Inline, Size};

/// Parse a markup-dialect string into a fragment.
pub fn parse_markup(input: &str) -> Fragment {
    Fragment::new(parse_inlines(input))
}

fn parse_inlines(input: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < input.len() {
        let rest = &input[i..];

        if rest.starts_with('\n') {
            flush(&mut text, &mut out);
            out.push(Inline::Break);
            i += 1;
        } else if let Some(rest2) = rest.strip_prefix("**") {
            match rest2.find("**") {
                Some(end) => {
                    flush(&mut text, &mut out);
                    out.push(Inline::Bold(parse_inlines(&rest2[..end])));
                    i += 2 + end + 2;
                }
                None => {
                    // Unpaired marker stays literal.
                    text.push_str("**");
                    i += 2;
                }
            }
        } else if rest.starts_with("<size:") {
            match parse_span(rest, "size") {
                Some((keyword, inner, consumed)) => match Size::from_keyword(&keyword) {
                    Ok(size) => {
                        flush(&mut text, &mut out);
                        out.push(Inline::Sized(size, parse_inlines(inner)));
                        i += consumed;
                    }
                    Err(_) => {
                        text.push('<');
                        i += 1;
                    }
                },
                None => {
                    text.push('<');
                    i += 1;
                }
            }
        } else if rest.starts_with("<color:") {
            match parse_span(rest, "color") {
                Some((value, inner, consumed)) => match Color::new(&value) {
                    Ok(color) => {
                        flush(&mut text, &mut out);
                        out.push(Inline::Colored(color, parse_inlines(inner)));
                        i += consumed;
                    }
                    Err(_) => {
                        text.push('<');
                        i += 1;
                    }
                },
                None => {
                    text.push('<');
                    i += 1;
                }
            }
        } else {
            let ch = rest.chars().next().expect("non-empty rest");
            text.push(ch);
            i += ch.len_utf8();
        }
    }

    flush(&mut text, &mut out);
    out
}

fn flush(text: &mut String, out: &mut Vec<Inline>) {
    if !text.is_empty() {
        out.push(Inline::Text(SmolStr::new(std::mem::take(text))));
    }
}

/// Try to read `<{tag}:ARG>INNER</{tag}>` from the start of `input`.
///
/// Returns `(arg, inner, consumed_bytes)`. Closing tags nest: the matching
/// `</{tag}>` is found with depth counting so same-type spans inside the
/// body do not steal the close.
fn parse_span<'a>(input: &'a str, tag: &str) -> Option<(String, &'a str, usize)> {
    let open_prefix = format!("<{tag}:");
    let rest = input.strip_prefix(open_prefix.as_str())?;

    let arg_end = rest.find('>')?;
    let arg = &rest[..arg_end];
    // A marker argument never spans lines or opens another tag.
    if arg.contains('<') || arg.contains('\n') {
        return None;
    }

    let body_start = arg_end + 1;
    let body = &rest[body_start..];
    let close = format!("</{tag}>");

    let mut depth = 0usize;
    let mut j = 0;
    while j < body.len() {
        let here = &body[j..];
        if here.starts_with(open_prefix.as_str()) {
            depth += 1;
            j += open_prefix.len();
        } else if here.starts_with(close.as_str()) {
            if depth == 0 {
                let inner = &body[..j];
                // "<tag:" + arg + ">" + inner + "</tag>"
                let consumed = open_prefix.len() + arg.len() + 1 + j + close.len();
                return Some((arg.to_string(), inner, consumed));
            }
            depth -= 1;
            j += close.len();
        } else {
            let ch = here.chars().next().expect("non-empty body rest");
            j += ch.len_utf8();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::text(s)
    }

    #[test]
    fn test_plain_text() {
        let frag = parse_markup("hello world");
        assert_eq!(frag.inlines, vec![text("hello world")]);
    }

    #[test]
    fn test_empty() {
        assert!(parse_markup("").is_empty());
    }

    #[test]
    fn test_bold() {
        let frag = parse_markup("a **b** c");
        assert_eq!(
            frag.inlines,
            vec![text("a "), Inline::Bold(vec![text("b")]), text(" c")]
        );
    }

    #[test]
    fn test_unclosed_bold_is_literal() {
        let frag = parse_markup("a **b");
        assert_eq!(frag.inlines, vec![text("a **b")]);
    }

    #[test]
    fn test_size_span() {
        let frag = parse_markup("<size:h1>Title</size>");
        assert_eq!(
            frag.inlines,
            vec![Inline::Sized(Size::H1, vec![text("Title")])]
        );
    }

    #[test]
    fn test_unknown_size_keyword_is_literal() {
        let frag = parse_markup("<size:huge>x</size>");
        assert_eq!(frag.inlines, vec![text("<size:huge>x</size>")]);
    }

    #[test]
    fn test_unclosed_size_is_literal() {
        let frag = parse_markup("<size:h1>dangling");
        assert_eq!(frag.inlines, vec![text("<size:h1>dangling")]);
    }

    #[test]
    fn test_color_span() {
        let frag = parse_markup("<color:#ff0000>red</color>");
        assert_eq!(
            frag.inlines,
            vec![Inline::Colored(
                Color::new("#ff0000").unwrap(),
                vec![text("red")]
            )]
        );
    }

    #[test]
    fn test_newlines_become_breaks() {
        let frag = parse_markup("a\nb");
        assert_eq!(frag.inlines, vec![text("a"), Inline::Break, text("b")]);
    }

    #[test]
    fn test_nesting_bold_in_color() {
        let frag = parse_markup("<color:#000>**x**</color>");
        assert_eq!(
            frag.inlines,
            vec![Inline::Colored(
                Color::new("#000").unwrap(),
                vec![Inline::Bold(vec![text("x")])]
            )]
        );
    }

    #[test]
    fn test_nested_same_type_spans() {
        let frag = parse_markup("<size:h1>a<size:small>b</size>c</size>");
        assert_eq!(
            frag.inlines,
            vec![Inline::Sized(
                Size::H1,
                vec![
                    text("a"),
                    Inline::Sized(Size::Small, vec![text("b")]),
                    text("c"),
                ]
            )]
        );
    }

    #[test]
    fn test_stray_angle_bracket() {
        let frag = parse_markup("1 < 2 and 3 > 2");
        assert_eq!(frag.inlines, vec![text("1 < 2 and 3 > 2")]);
    }
}
