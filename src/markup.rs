//! # Constrained Markup Renderer
//!
//! Converts a restricted markdown subset into HTML fragments for static help
//! content. The grammar is deliberately tiny: `### ` headers, `**bold**`
//! spans, single-level and one-level-nested ordered lists, and explicit
//! `<br/>` markers (which pass through untouched, as does everything else;
//! nothing is escaped).
//!
//! This is a line-oriented state machine, not a markdown parser. Unmatched
//! constructs (links, bullets, deeper nesting) fall through as literal text,
//! which is accepted behavior rather than a defect.

/// Open-list scan state. A list container is only ever opened together with
/// its first item, so `outer`/`nested` being set implies an item tag is open
/// too; the close methods account for that.
#[derive(Debug, Default)]
struct Lists {
    outer: bool,
    nested: bool,
}

impl Lists {
    /// Transition for an outer ordered item: close an open nested list,
    /// then either open the outer container or close the previous item.
    fn outer_item(&mut self, out: &mut String) {
        if self.nested {
            out.push_str("</li></ol>");
            self.nested = false;
        }
        if self.outer {
            out.push_str("</li>");
        } else {
            out.push_str("<ol>");
            self.outer = true;
        }
    }

    /// Transition for a nested ordered item: open the nested container or
    /// close the previous nested item.
    fn nested_item(&mut self, out: &mut String) {
        if self.nested {
            out.push_str("</li>");
        } else {
            out.push_str("<ol>");
            self.nested = true;
        }
    }

    /// Close whatever is open, nested first.
    fn close_all(&mut self, out: &mut String) {
        if self.nested {
            out.push_str("</li></ol>");
            self.nested = false;
        }
        if self.outer {
            out.push_str("</li></ol>");
            self.outer = false;
        }
    }
}

/// Render a restricted-markup document to an HTML fragment.
///
/// `numbered_lists` gates the ordered-list rules; with it off, list-looking
/// lines are plain text and no list container tags are ever emitted.
pub fn render(doc: &str, numbered_lists: bool) -> String {
    let mut lists = Lists::default();
    let mut out: Vec<String> = Vec::new();

    for raw in doc.lines() {
        // Inline passes run before line classification.
        let line = replace_bold_spans(raw);
        let mut piece = String::new();

        if let Some(text) = line.strip_prefix("### ") {
            lists.close_all(&mut piece);
            piece.push_str("<h3>");
            piece.push_str(text);
            piece.push_str("</h3>");
        } else if numbered_lists && let Some(item) = ordered_item(&line) {
            lists.outer_item(&mut piece);
            piece.push_str("<li>");
            piece.push_str(item);
        } else if numbered_lists && let Some(item) = nested_ordered_item(&line) {
            lists.nested_item(&mut piece);
            piece.push_str("<li>");
            piece.push_str(item);
        } else if line.trim().is_empty() {
            // Blank lines pass through without closing lists, so items may
            // be separated by whitespace.
        } else {
            lists.close_all(&mut piece);
            piece.push_str(&line);
        }

        out.push(piece);
    }

    // Force-close anything still open at end of input.
    let mut tail = String::new();
    lists.close_all(&mut tail);
    if !tail.is_empty() {
        out.push(tail);
    }

    out.join("\n").trim().to_string()
}

/// Replace every `**text**` span with `<strong>text</strong>`.
///
/// Pairs match non-greedily, left to right; an unpaired trailing `**` is
/// left as literal text.
fn replace_bold_spans(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find("**") {
        let Some(close) = rest[open + 2..].find("**") else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(&rest[open + 2..open + 2 + close]);
        out.push_str("</strong>");
        rest = &rest[open + 2 + close + 2..];
    }
    out.push_str(rest);
    out
}

/// Match `digits`, `.`, whitespace, content at zero indentation.
fn ordered_item(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    let rest = rest.strip_prefix('.')?;
    let content = rest.trim_start_matches([' ', '\t']);
    if content.len() == rest.len() {
        return None;
    }
    Some(content)
}

/// Match an ordered item behind exactly four leading spaces.
fn nested_ordered_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("    ")?;
    if rest.starts_with(' ') {
        return None;
    }
    ordered_item(rest)
}
