//! Tests for loading JSON document trees and rendering them.
#![cfg(feature = "serde")]

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use quire::ast::{Document, NodeId, NodeKind};
use quire::{Error, HtmlFlags, RenderOptions, render_html};

fn fixture_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/guide.json"))
}

fn load_fixture() -> Document {
    let file = File::open(fixture_path()).expect("open fixture");
    Document::from_reader(BufReader::new(file)).expect("parse fixture")
}

/// Check that every element in `html` is closed in order.
///
/// Text and attributes are not unescaped, so HTML-only entities such as
/// `&nbsp;` pass.
fn assert_balanced(html: &str) {
    let wrapped = format!("<body>{html}</body>");
    let mut reader = Reader::from_str(&wrapped);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!(
                "malformed output at {}: {e}\n{html}",
                reader.buffer_position()
            ),
        }
    }

    assert_eq!(depth, 0, "unclosed elements in:\n{html}");
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_fixture_loads() {
    let doc = load_fixture();
    let top: Vec<_> = doc
        .children(NodeId::ROOT)
        .map(|id| doc.node(id).unwrap().kind.clone())
        .collect();

    assert_eq!(top.len(), 10);
    assert_eq!(top[0], NodeKind::Header { level: 1 });
    assert_eq!(top[8], NodeKind::HorizontalRule);
    assert_eq!(top[9], NodeKind::FootnotesBlock);
}

#[test]
fn test_from_reader_matches_from_json() {
    let json = std::fs::read_to_string(fixture_path()).unwrap();
    let from_str = Document::from_json(&json).unwrap();
    let from_file = load_fixture();

    assert_eq!(from_str.node_count(), from_file.node_count());
    assert_eq!(
        render_html(&from_str, RenderOptions::default()),
        render_html(&from_file, RenderOptions::default())
    );
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"type": "root", "children": [
            {{"type": "paragraph", "children": [{{"type": "normal_text", "text": "tmp"}}]}}
        ]}}"#
    )
    .unwrap();

    let doc = Document::from_reader(File::open(file.path()).unwrap()).unwrap();
    assert_eq!(render_html(&doc, RenderOptions::default()), "<p>tmp</p>\n");
}

#[test]
fn test_invalid_documents() {
    let cases = [
        r#"{"type": "paragraph"}"#,
        r#"{"type": "root", "children": [{"type": "root"}]}"#,
        r#"{"type": "root", "children": [{"type": "header", "level": 0}]}"#,
    ];
    for json in cases {
        let err = Document::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)), "{json}: {err}");
    }

    let err = Document::from_json(r#"{"type": "blink"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, r#"{"flags": "ESCAPE", "toc_nesting_level": 1}"#).unwrap();

    let options = RenderOptions::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(options.flags, HtmlFlags::ESCAPE);

    let html = render_html(&load_fixture(), options);
    assert!(html.starts_with("<h1 id=\"toc_0\">Guide</h1>\n"));
    assert!(html.contains("&lt;span&gt;raw&lt;/span&gt;"));
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_fixture_renders() {
    let html = render_html(&load_fixture(), RenderOptions::default());

    let expected_fragments = [
        "<h1 id=\"Guide\">Guide</h1>\n",
        "<p>Read the <a href=\"https://example.com/docs\" title=\"Docs\"><strong>docs</strong></a> \
         or mail <a href=\"mailto:help@example.com\">help@example.com</a>\
         <sup id=\"fnref1\"><a href=\"#fn1\" rel=\"footnote\">1</a></sup>.</p>\n",
        "<h2 id=\"Setup\">Setup</h2>\n",
        "<ol>\n<li>Install <code>quire</code></li>\n<li>Run it</li>\n</ol>\n",
        "<pre><code class=\"language-sh\">quire doc.json &gt; doc.html\n</code></pre>\n",
        "<h2 id=\"Setup-1\">Setup</h2>\n",
        "<th style=\"text-align: left\">Flag</th>\n<th style=\"text-align: center\">Effect</th>\n",
        "<td><code>--escape</code></td>\n<td style=\"text-align: center\">escapes raw HTML</td>\n",
        "<img src=\"img/logo.png\" alt=\"Logo\" width=\"120\" height=\"40\" title=\"quire\" /><br/>\n",
        "\\[e^{i\\pi} &lt; 0\\]<span>raw</span></p>\n",
        "<li id=\"fn1\">\n<p>Replies within a day.&nbsp;<a href=\"#fnref1\" rev=\"footnote\">&#8617;</a></p>\n</li>\n",
    ];
    for fragment in expected_fragments {
        assert!(html.contains(fragment), "missing {fragment:?} in:\n{html}");
    }
}

#[test]
fn test_fixture_output_is_balanced() {
    let doc = load_fixture();
    for bits in 0..8 {
        let options = RenderOptions::new()
            .with_flags(HtmlFlags::from_bits_truncate(bits))
            .with_toc_nesting_level(bits as u8 % 3);
        assert_balanced(&render_html(&doc, options));
    }
}

#[test]
fn test_skip_html_drops_fixture_span() {
    let html = render_html(&load_fixture(), RenderOptions::new().with_flag(HtmlFlags::SKIP_HTML));
    assert!(!html.contains("span"));
    assert!(html.contains("\\[e^{i\\pi} &lt; 0\\]</p>\n"));
}
