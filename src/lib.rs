//! # quire
//!
//! A fast HTML renderer for parsed markdown document trees.
//!
//! quire takes a document tree built by an upstream markdown parser and
//! serializes it to HTML. Rendering is deterministic and never fails for a
//! given tree.
//!
//! ## Features
//!
//! - Block and inline markup: headers, paragraphs, lists, tables, block
//!   quotes, code, emphasis, links, images, math, footnotes
//! - Unique header ids, or sequential `toc_N` ids up to a configured level
//! - Hard line wrapping, and raw HTML pass-through, skipping or escaping
//! - A JSON form of the document tree (feature `serde`)
//!
//! ## Quick Start
//!
//! ```
//! use quire::ast::{Document, NodeId, NodeKind};
//! use quire::{RenderOptions, render_html};
//!
//! let mut doc = Document::new();
//! let h = doc.push(NodeId::ROOT, NodeKind::Header { level: 1 });
//! doc.push(h, NodeKind::text("Title"));
//! let p = doc.push(NodeId::ROOT, NodeKind::Paragraph);
//! doc.push(p, NodeKind::text("Hello, "));
//! let em = doc.push(p, NodeKind::Emphasis);
//! doc.push(em, NodeKind::text("world"));
//!
//! let html = render_html(&doc, RenderOptions::default());
//! assert_eq!(html, "<h1 id=\"Title\">Title</h1>\n\n<p>Hello, <em>world</em></p>\n");
//! ```
//!
//! ## Rendering into an existing buffer
//!
//! [`HtmlRenderer`] keeps per-document state (header ids, TOC numbering) and
//! appends to a caller-owned [`Buffer`]:
//!
//! ```
//! use quire::ast::{Document, NodeId, NodeKind};
//! use quire::{Buffer, HtmlFlags, HtmlRenderer, RenderOptions};
//!
//! let mut doc = Document::new();
//! doc.push(NodeId::ROOT, NodeKind::RawHtml { text: "<b>".into() });
//!
//! let options = RenderOptions::new().with_flag(HtmlFlags::ESCAPE);
//! let mut renderer = HtmlRenderer::new(options);
//! let mut ob = Buffer::new();
//! renderer.render(&mut ob, &doc, NodeId::ROOT);
//! assert_eq!(ob.as_bytes(), b"&lt;b&gt;");
//! ```

pub mod ast;
pub mod buffer;
pub mod error;
pub mod escape;
pub mod html;
pub mod options;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use ast::{Document, NodeId, NodeKind};
pub use buffer::Buffer;
pub use error::{Error, Result};
pub use escape::{escape_href, escape_html};
pub use html::{HtmlRenderer, render_html};
pub use options::{HtmlFlags, RenderOptions};
