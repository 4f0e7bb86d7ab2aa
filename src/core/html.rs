// src/core/html.rs
//! Small, forgiving HTML query helpers.
//!
//! Not a DOM: a tag scanner over the borrowed source that can find an
//! element by `id`, list descendants by tag name and flatten an element to
//! its text. Comments, doctypes and `<script>`/`<style>` bodies are skipped
//! so their contents never look like markup. Tag and attribute names are
//! matched case-insensitively.

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];
const RAW_TEXT: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Open { name: String, attrs_at: (usize, usize), self_closing: bool },
    Close { name: String },
    /// Comment, doctype or processing instruction.
    Other,
}

#[derive(Debug, Clone)]
struct Token {
    kind: Kind,
    start: usize,
    end: usize,
}

/// Iterates tags in document order. Byte offsets are into `src`.
struct Tags<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tags<'a> {
    fn new(src: &'a str) -> Self { Self { src, pos: 0 } }
}

impl Iterator for Tags<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let src = self.src;
        let bytes = src.as_bytes();
        loop {
            let start = src.get(self.pos..)?.find('<')? + self.pos;
            let rest = &src[start..];

            if rest.starts_with("<!--") {
                let end = rest.find("-->").map(|i| start + i + 3).unwrap_or(src.len());
                self.pos = end;
                return Some(Token { kind: Kind::Other, start, end });
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                let end = rest.find('>').map(|i| start + i + 1).unwrap_or(src.len());
                self.pos = end;
                return Some(Token { kind: Kind::Other, start, end });
            }

            let closing = rest.starts_with("</");
            let name_at = start + if closing { 2 } else { 1 };
            let name_len = bytes[name_at..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-' || **b == b':')
                .count();
            if name_len == 0 {
                // stray '<' in text
                self.pos = start + 1;
                continue;
            }
            let name = src[name_at..name_at + name_len].to_ascii_lowercase();
            let end = tag_end(src, name_at + name_len);

            if closing {
                self.pos = end;
                return Some(Token { kind: Kind::Close { name }, start, end });
            }

            let inner_end = if src[..end].ends_with("/>") { end - 2 } else { end - 1 };
            let attrs_at = (name_at + name_len, inner_end.max(name_at + name_len));
            let self_closing = VOID.contains(&name.as_str()) || src[..end].ends_with("/>");

            self.pos = if RAW_TEXT.contains(&name.as_str()) && !self_closing {
                find_ci(src, &format!("</{name}"), end).unwrap_or(src.len())
            } else {
                end
            };
            return Some(Token {
                kind: Kind::Open { name, attrs_at, self_closing },
                start,
                end,
            });
        }
    }
}

/// Index just past the `>` closing a tag, honoring quoted attribute values.
fn tag_end(src: &str, from: usize) -> usize {
    let mut quote: Option<u8> = None;
    for (i, b) in src.as_bytes()[from..].iter().enumerate() {
        match (quote, *b) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(*b),
            (None, b'>') => return from + i + 1,
            _ => {}
        }
    }
    src.len()
}

/// ASCII case-insensitive `find` starting at `from`.
fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let lower = hay.get(from..)?.to_ascii_lowercase();
    lower.find(&needle.to_ascii_lowercase()).map(|i| i + from)
}

/// Value of attribute `key` in a raw attribute string, entity-decoded.
pub fn attr_value(attrs: &str, key: &str) -> Option<String> {
    let b = attrs.as_bytes();
    let mut i = 0;
    while i < b.len() {
        while i < b.len() && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        let name_start = i;
        while i < b.len() && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = &attrs[name_start..i];
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }

        let mut value = "";
        if i < b.len() && b[i] == b'=' {
            i += 1;
            while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
            if i < b.len() && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                let v_start = i + 1;
                let v_len = b[v_start..].iter().take_while(|c| **c != q).count();
                value = &attrs[v_start..v_start + v_len];
                i = (v_start + v_len + 1).min(b.len());
            } else {
                let v_start = i;
                while i < b.len() && !b[i].is_ascii_whitespace() { i += 1; }
                value = &attrs[v_start..i];
            }
        }

        if name.is_empty() {
            i += 1;
            continue;
        }
        if name.eq_ignore_ascii_case(key) {
            return Some(html_escape::decode_html_entities(value).into_owned());
        }
    }
    None
}

/// A located element: its tag name and the source between its open and
/// close tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    name: &'a str,
    inner: &'a str,
}

/// Treat a whole document as the root element.
pub fn document(src: &str) -> Element<'_> {
    Element { name: "#document", inner: src }
}

impl<'a> Element<'a> {
    pub fn name(&self) -> &'a str { self.name }

    pub fn inner_html(&self) -> &'a str { self.inner }

    /// Bounds of the element opened by `open`, as (inner_start, inner_end).
    /// An unclosed element runs to the end of the enclosing source.
    fn span(&self, open: &Token) -> (usize, usize) {
        let Kind::Open { name, self_closing, .. } = &open.kind else {
            return (open.end, open.end);
        };
        if *self_closing {
            return (open.end, open.end);
        }
        let mut depth = 1usize;
        for tok in (Tags { src: self.inner, pos: open.end }) {
            match &tok.kind {
                Kind::Open { name: n, self_closing: false, .. } if n == name => depth += 1,
                Kind::Close { name: n } if n == name => {
                    depth -= 1;
                    if depth == 0 {
                        return (open.end, tok.start);
                    }
                }
                _ => {}
            }
        }
        (open.end, self.inner.len())
    }

    fn element_at(&self, open: &Token) -> Element<'a> {
        let (a, b) = self.span(open);
        let name = match &open.kind {
            Kind::Open { .. } => {
                let raw = &self.inner[open.start + 1..];
                let len = raw
                    .bytes()
                    .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b':')
                    .count();
                &raw[..len]
            }
            _ => "",
        };
        Element { name, inner: &self.inner[a..b] }
    }

    /// First descendant whose `id` attribute equals `id`.
    pub fn by_id(&self, id: &str) -> Option<Element<'a>> {
        Tags::new(self.inner).find_map(|tok| match &tok.kind {
            Kind::Open { attrs_at: (a, b), .. }
                if attr_value(&self.inner[*a..*b], "id").as_deref() == Some(id) =>
            {
                Some(self.element_at(&tok))
            }
            _ => None,
        })
    }

    /// Every descendant with tag name `tag`, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<Element<'a>> {
        let tag = tag.to_ascii_lowercase();
        Tags::new(self.inner)
            .filter(|tok| matches!(&tok.kind, Kind::Open { name, .. } if *name == tag))
            .map(|tok| self.element_at(&tok))
            .collect()
    }

    /// Concatenated text content with tags dropped and entities decoded.
    /// Whitespace is kept as written.
    pub fn text(&self) -> String {
        let src = self.inner;
        let mut out = String::with_capacity(src.len());
        let mut last = 0;
        let mut raw_depth = 0usize;
        for tok in Tags::new(src) {
            if raw_depth == 0 {
                out.push_str(&src[last..tok.start]);
            }
            match &tok.kind {
                Kind::Open { name, self_closing: false, .. } if RAW_TEXT.contains(&name.as_str()) => {
                    raw_depth += 1
                }
                Kind::Close { name } if RAW_TEXT.contains(&name.as_str()) => {
                    raw_depth = raw_depth.saturating_sub(1)
                }
                _ => {}
            }
            last = tok.end;
        }
        if raw_depth == 0 {
            out.push_str(&src[last.min(src.len())..]);
        }
        html_escape::decode_html_entities(&out).into_owned()
    }
}

/// Convenience over `document(src).by_id(id)`.
pub fn element_by_id<'a>(src: &'a str, id: &str) -> Option<Element<'a>> {
    document(src).by_id(id)
}
