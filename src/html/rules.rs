//! Per-kind HTML formatting rules.
//!
//! Each rule receives the node's payload and, for container kinds, the
//! already-rendered HTML of its children (`content`), and appends its own
//! markup to `ob`. Block rules that start a new element emit a single
//! separating newline when `ob` already holds output.

use bstr::ByteSlice;
use memchr::{memchr, memmem};

use crate::ast::{AutolinkKind, CellFlags, NodeKind};
use crate::buffer::Buffer;
use crate::escape::{escape_href, escape_html};
use crate::options::HtmlFlags;

use super::HtmlRenderer;
use super::dimensions::parse_dimensions;

impl HtmlRenderer {
    /// Format one node. Returns `false` when the node produced nothing and
    /// should be treated as omitted.
    pub(super) fn dispatch(&mut self, ob: &mut Buffer, kind: &NodeKind, content: &[u8]) -> bool {
        let flags = self.options.flags;

        match kind {
            NodeKind::Root => ob.put(content),
            NodeKind::BlockCode { text, lang } => block_code(ob, text, lang.as_deref()),
            NodeKind::BlockQuote => block_quote(ob, content),
            NodeKind::Header { level } => self.header(ob, content, *level),
            NodeKind::HorizontalRule => {
                separate(ob);
                ob.puts("<hr/>\n");
            }
            NodeKind::List { ordered } => list(ob, content, *ordered),
            NodeKind::ListItem { .. } => list_item(ob, content),
            NodeKind::Paragraph => paragraph(ob, content, flags.contains(HtmlFlags::HARD_WRAP)),
            NodeKind::Table { .. } => block(ob, content, "table"),
            NodeKind::TableHeader { .. } => block(ob, content, "thead"),
            NodeKind::TableBody => block(ob, content, "tbody"),
            NodeKind::TableRow => {
                ob.puts("<tr>\n");
                ob.put(content);
                ob.puts("</tr>\n");
            }
            NodeKind::TableCell { flags: cell, .. } => table_cell(ob, content, *cell),
            NodeKind::FootnotesBlock => footnotes(ob, content),
            NodeKind::FootnoteDef { number } => footnote_def(ob, content, *number),
            NodeKind::BlockHtml { text } => block_html(ob, text.as_bytes(), flags),

            NodeKind::Autolink { link, kind: link_kind } => {
                return autolink(ob, link.as_bytes(), *link_kind);
            }
            NodeKind::CodeSpan { text } => {
                ob.puts("<code>");
                escape_html(ob, text.as_bytes());
                ob.puts("</code>");
            }
            NodeKind::Emphasis => return span(ob, content, "<em>", "</em>"),
            NodeKind::DoubleEmphasis => return span(ob, content, "<strong>", "</strong>"),
            NodeKind::TripleEmphasis => {
                return span(ob, content, "<strong><em>", "</em></strong>");
            }
            NodeKind::Strikethrough => return span(ob, content, "<del>", "</del>"),
            NodeKind::Highlight => return span(ob, content, "<mark>", "</mark>"),
            NodeKind::Superscript => return span(ob, content, "<sup>", "</sup>"),
            NodeKind::Image {
                link,
                title,
                dimensions,
                alt,
            } => image(ob, link, title, dimensions, alt),
            NodeKind::LineBreak => ob.puts("<br/>\n"),
            NodeKind::Link { link, title } => link_rule(ob, content, link, title),
            NodeKind::FootnoteRef { number } => ob.put_fmt(format_args!(
                "<sup id=\"fnref{number}\"><a href=\"#fn{number}\" rel=\"footnote\">{number}</a></sup>"
            )),
            NodeKind::Math { text, display } => math(ob, text.as_bytes(), *display),
            NodeKind::RawHtml { text } => raw_html(ob, text.as_bytes(), flags),
            NodeKind::NormalText { text } => escape_html(ob, text.as_bytes()),
        }

        true
    }

    /// `<hN>` with an id from the TOC counter or the header registry.
    fn header(&mut self, ob: &mut Buffer, content: &[u8], level: u8) {
        let numbered = level <= self.options.toc_nesting_level;
        let level = level.clamp(1, 6);
        separate(ob);

        if numbered {
            ob.put_fmt(format_args!("<h{level} id=\"toc_{}\">", self.toc_count));
            tracing::trace!(level, toc = self.toc_count, "numbered header");
            self.toc_count += 1;
        } else if !content.is_empty() {
            ob.put_fmt(format_args!("<h{level} id=\""));
            escape_href(ob, content);
            if let Some(suffix) = self.headers.register(content) {
                ob.put_fmt(format_args!("-{suffix}"));
            }
            ob.puts("\">");
        } else {
            ob.put_fmt(format_args!("<h{level}>"));
        }

        ob.put(content);
        ob.put_fmt(format_args!("</h{level}>\n"));
    }
}

/// Emit a newline if `ob` already has content.
fn separate(ob: &mut Buffer) {
    if !ob.is_empty() {
        ob.putc(b'\n');
    }
}

/// Same set as C `isspace` in the "C" locale.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn block(ob: &mut Buffer, content: &[u8], tag: &str) {
    separate(ob);
    ob.put_fmt(format_args!("<{tag}>\n"));
    ob.put(content);
    ob.put_fmt(format_args!("</{tag}>\n"));
}

fn block_code(ob: &mut Buffer, text: &str, lang: Option<&str>) {
    separate(ob);

    match lang.filter(|l| !l.is_empty()) {
        Some(lang) => {
            ob.puts("<pre><code class=\"language-");
            escape_html(ob, lang.as_bytes());
            ob.puts("\">");
        }
        None => ob.puts("<pre><code>"),
    }

    escape_html(ob, text.as_bytes());
    ob.puts("</code></pre>\n");
}

fn block_quote(ob: &mut Buffer, content: &[u8]) {
    separate(ob);
    ob.puts("<blockquote>\n");
    ob.put(content);
    ob.puts("</blockquote>\n");
}

fn list(ob: &mut Buffer, content: &[u8], ordered: bool) {
    block(ob, content, if ordered { "ol" } else { "ul" });
}

fn list_item(ob: &mut Buffer, content: &[u8]) {
    ob.puts("<li>");
    ob.put(content.trim_end_with(|c| c == '\n'));
    ob.puts("</li>\n");
}

fn paragraph(ob: &mut Buffer, content: &[u8], hard_wrap: bool) {
    let Some(start) = content.iter().position(|&b| !is_space(b)) else {
        return;
    };
    let content = &content[start..];

    separate(ob);
    ob.puts("<p>");

    if hard_wrap {
        let mut rest = content;
        while let Some(nl) = memchr(b'\n', rest) {
            ob.put(&rest[..nl]);
            // No break for a newline that ends the paragraph
            if nl + 1 == rest.len() {
                rest = &[];
                break;
            }
            ob.puts("<br/>\n");
            rest = &rest[nl + 1..];
        }
        ob.put(rest);
    } else {
        ob.put(content);
    }

    ob.puts("</p>\n");
}

fn table_cell(ob: &mut Buffer, content: &[u8], flags: CellFlags) {
    let tag = if flags.is_header() { "th" } else { "td" };

    ob.put_fmt(format_args!("<{tag}"));
    if let Some(alignment) = flags.alignment() {
        ob.put_fmt(format_args!(" style=\"text-align: {}\"", alignment.as_css()));
    }
    ob.putc(b'>');
    ob.put(content);
    ob.put_fmt(format_args!("</{tag}>\n"));
}

fn footnotes(ob: &mut Buffer, content: &[u8]) {
    separate(ob);
    ob.puts("<div class=\"footnotes\">\n<hr/>\n<ol>\n");
    ob.put(content);
    ob.puts("\n</ol>\n</div>\n");
}

/// Position of the first `</p>` or `</P>` in `content`.
fn find_paragraph_close(content: &[u8]) -> Option<usize> {
    memmem::find_iter(content, b"</")
        .find(|&i| matches!(content.get(i + 2..i + 4), Some([b'p' | b'P', b'>'])))
}

fn footnote_def(ob: &mut Buffer, content: &[u8], number: u32) {
    ob.put_fmt(format_args!("\n<li id=\"fn{number}\">\n"));

    match find_paragraph_close(content) {
        Some(close) => {
            ob.put(&content[..close]);
            ob.put_fmt(format_args!(
                "&nbsp;<a href=\"#fnref{number}\" rev=\"footnote\">&#8617;</a>"
            ));
            ob.put(&content[close..]);
        }
        None => ob.put(content),
    }

    ob.puts("</li>\n");
}

/// Apply the raw HTML policy: escape, skip or pass through.
fn raw_html(ob: &mut Buffer, text: &[u8], flags: HtmlFlags) {
    if flags.contains(HtmlFlags::ESCAPE) {
        escape_html(ob, text);
    } else if !flags.contains(HtmlFlags::SKIP_HTML) {
        ob.put(text);
    }
}

fn block_html(ob: &mut Buffer, text: &[u8], flags: HtmlFlags) {
    let text = text.trim_with(|c| c == '\n');
    if text.is_empty() {
        return;
    }
    if flags.contains(HtmlFlags::SKIP_HTML) && !flags.contains(HtmlFlags::ESCAPE) {
        return;
    }

    separate(ob);
    raw_html(ob, text, flags);
    ob.putc(b'\n');
}

fn autolink(ob: &mut Buffer, link: &[u8], kind: AutolinkKind) -> bool {
    if link.is_empty() {
        return false;
    }

    let address = link.strip_prefix(b"mailto:");

    ob.puts("<a href=\"");
    if kind == AutolinkKind::Email && address.is_none() {
        ob.puts("mailto:");
    }
    escape_href(ob, link);
    ob.puts("\">");

    let visible = match kind {
        AutolinkKind::Email => address.unwrap_or(link),
        AutolinkKind::Normal => link,
    };
    escape_html(ob, visible);

    ob.puts("</a>");
    true
}

/// Inline wrapper; nothing is emitted for empty content.
fn span(ob: &mut Buffer, content: &[u8], open: &str, close: &str) -> bool {
    if content.is_empty() {
        return false;
    }

    ob.puts(open);
    ob.put(content);
    ob.puts(close);
    true
}

fn image(ob: &mut Buffer, link: &str, title: &str, dimensions: &str, alt: &str) {
    ob.puts("<img src=\"");
    escape_href(ob, link.as_bytes());
    ob.puts("\" alt=\"");
    escape_html(ob, alt.as_bytes());
    ob.putc(b'"');

    if !dimensions.is_empty() {
        match parse_dimensions(dimensions.as_bytes()) {
            Some(dims) => {
                ob.put_fmt(format_args!(" width=\"{}\"", dims.width));
                if let Some(height) = dims.height {
                    ob.put_fmt(format_args!(" height=\"{height}\""));
                }
            }
            None => tracing::debug!(hint = dimensions, "ignoring image dimension hint"),
        }
    }

    if !title.is_empty() {
        ob.puts(" title=\"");
        escape_html(ob, title.as_bytes());
        ob.putc(b'"');
    }

    ob.puts(" />");
}

fn link_rule(ob: &mut Buffer, content: &[u8], link: &str, title: &str) {
    ob.puts("<a href=\"");
    escape_href(ob, link.as_bytes());

    if !title.is_empty() {
        ob.puts("\" title=\"");
        escape_html(ob, title.as_bytes());
    }

    ob.puts("\">");
    ob.put(content);
    ob.puts("</a>");
}

fn math(ob: &mut Buffer, text: &[u8], display: bool) {
    ob.puts(if display { "\\[" } else { "\\(" });
    escape_html(ob, text);
    ob.puts(if display { "\\]" } else { "\\)" });
}
