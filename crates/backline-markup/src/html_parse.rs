//! Trusted editor HTML -> AST.
//!
//! The input is HTML the editor itself produced (directly or via a
//! contentEditable host), so this is a tolerant tag scanner, not a general
//! HTML parser: unknown tags are dropped and their text content kept,
//! stray closers are ignored, unclosed spans are closed at end of input.
//!
//! Size collision: the host formats "large" text with `<font size="5">`
//! and headings with `<h1>`-`<h3>`. On the way back, `<font size="5">`
//! and `<h2>` both map to the `h2` level, so `large` is not recoverable
//! from HTML. Deliberate - the stored corpus depends on this folding.

use smol_str::SmolStr;

use crate::ast::{Color, Fragment, Inline, Size};

/// Parse editor-produced HTML into a fragment.
pub fn parse_html(input: &str) -> Fragment {
    Parser::new(input).run()
}

enum FrameKind {
    Bold,
    Sized(Size),
    Colored(Color),
}

struct Frame {
    kind: FrameKind,
    children: Vec<Inline>,
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    text: String,
    root: Vec<Inline>,
    stack: Vec<Frame>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            text: String::new(),
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> Fragment {
        while self.pos < self.input.len() {
            let input = self.input;
            let rest = &input[self.pos..];
            if rest.starts_with('<') {
                match rest[1..].find('>') {
                    Some(end) => {
                        let tag = &rest[1..1 + end];
                        self.pos += end + 2;
                        self.handle_tag(tag);
                    }
                    None => {
                        // Dangling '<' with no close - literal.
                        self.text.push('<');
                        self.pos += 1;
                    }
                }
            } else if rest.starts_with('&') {
                let consumed = self.decode_entity(rest);
                self.pos += consumed;
            } else {
                let ch = rest.chars().next().expect("non-empty rest");
                self.text.push(ch);
                self.pos += ch.len_utf8();
            }
        }

        self.flush_text();
        // Implicitly close anything still open.
        while let Some(frame) = self.stack.pop() {
            let node = wrap(frame);
            self.push_node(node);
        }
        Fragment::new(self.root)
    }

    fn handle_tag(&mut self, raw: &str) {
        let raw = raw.trim();
        let (closing, body) = match raw.strip_prefix('/') {
            Some(rest) => (true, rest.trim()),
            None => (false, raw.trim_end_matches('/').trim()),
        };
        let name_end = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());
        let name = body[..name_end].to_ascii_lowercase();
        let attrs = &body[name_end..];

        match (closing, name.as_str()) {
            (_, "br") => {
                self.flush_text();
                self.push_node(Inline::Break);
            }
            (false, "div") => {
                // contentEditable line container: a new div starts a new line.
                self.flush_text();
                if !self.is_at_start() {
                    self.push_node(Inline::Break);
                }
            }
            (true, "div") => {}
            (false, "strong" | "b") => self.open(FrameKind::Bold),
            (true, "strong" | "b") => self.close(|k| matches!(k, FrameKind::Bold)),
            (false, "h1") => self.open(FrameKind::Sized(Size::H1)),
            (false, "h2") => self.open(FrameKind::Sized(Size::H2)),
            (false, "h3") => self.open(FrameKind::Sized(Size::H3)),
            (true, "h1" | "h2" | "h3") => self.close(|k| matches!(k, FrameKind::Sized(_))),
            (false, "font") => match font_size_level(attrs) {
                Some(size) => self.open(FrameKind::Sized(size)),
                // Unmapped font tag: drop it, keep content.
                None => {}
            },
            (true, "font") => self.close(|k| matches!(k, FrameKind::Sized(_))),
            (false, "span") => match style_color(attrs) {
                Some(color) => self.open(FrameKind::Colored(color)),
                None => {}
            },
            (true, "span") => self.close(|k| matches!(k, FrameKind::Colored(_))),
            // Anything else: drop the tag, keep surrounding content.
            _ => {}
        }
    }

    fn open(&mut self, kind: FrameKind) {
        self.flush_text();
        self.stack.push(Frame {
            kind,
            children: Vec::new(),
        });
    }

    fn close(&mut self, matches_kind: impl Fn(&FrameKind) -> bool) {
        self.flush_text();
        let top_matches = self
            .stack
            .last()
            .map(|frame| matches_kind(&frame.kind))
            .unwrap_or(false);
        if top_matches {
            let frame = self.stack.pop().expect("matching frame on top");
            let node = wrap(frame);
            self.push_node(node);
        }
        // Stray closers are ignored.
    }

    fn push_node(&mut self, node: Inline) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root.push(node),
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let node = Inline::Text(SmolStr::new(std::mem::take(&mut self.text)));
            self.push_node(node);
        }
    }

    fn is_at_start(&self) -> bool {
        self.root.is_empty() && self.stack.is_empty()
    }

    /// Decode one `&entity;` into the text buffer, returning bytes consumed.
    fn decode_entity(&mut self, rest: &str) -> usize {
        // Entities the renderer emits, plus the ones contentEditable adds.
        const KNOWN: [(&str, &str); 6] = [
            ("&amp;", "&"),
            ("&lt;", "<"),
            ("&gt;", ">"),
            ("&quot;", "\""),
            ("&#39;", "'"),
            ("&nbsp;", " "),
        ];
        for (entity, replacement) in KNOWN {
            if rest.starts_with(entity) {
                self.text.push_str(replacement);
                return entity.len();
            }
        }
        self.text.push('&');
        1
    }
}

fn wrap(frame: Frame) -> Inline {
    match frame.kind {
        FrameKind::Bold => Inline::Bold(frame.children),
        FrameKind::Sized(size) => Inline::Sized(size, frame.children),
        FrameKind::Colored(color) => Inline::Colored(color, frame.children),
    }
}

/// Map a `<font size="N">` attribute list to a size level.
fn font_size_level(attrs: &str) -> Option<Size> {
    let value = attr_value(attrs, "size")?;
    match value.trim() {
        "2" => Some(Size::Small),
        "3" => Some(Size::Normal),
        // The "large"/"h2" fold: font size 5 reads back as h2.
        "5" => Some(Size::H2),
        _ => None,
    }
}

/// Pull a `color: ..` declaration out of a `style` attribute.
fn style_color(attrs: &str) -> Option<Color> {
    let style = attr_value(attrs, "style")?;
    let after = style.split("color:").nth(1)?;
    let value = after.split(';').next().unwrap_or(after);
    Color::new(value).ok()
}

/// Find `name="value"` (or `name=value`) in an attribute list.
fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let mut search = attrs;
    loop {
        let at = search.find(name)?;
        let after = &search[at + name.len()..];
        let after_eq = after.trim_start();
        match after_eq.strip_prefix('=') {
            Some(v) => {
                let v = v.trim_start();
                return if let Some(quoted) = v.strip_prefix('"') {
                    quoted.split('"').next()
                } else {
                    Some(v.split_whitespace().next().unwrap_or(v))
                };
            }
            None => search = &search[at + name.len()..],
        }
    }
}
