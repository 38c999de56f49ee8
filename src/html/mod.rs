//! Document tree to HTML rendering.
//!
//! [`HtmlRenderer`] holds the state of one document render: the options,
//! the header id registry and the table-of-contents counter. Rendering walks
//! the tree depth-first; every node's children are rendered into a private
//! buffer first, and the node's rule then formats that buffer into its
//! parent's output.
//!
//! # Example
//!
//! ```
//! use quire::ast::{Document, NodeId, NodeKind};
//! use quire::html::HtmlRenderer;
//! use quire::{Buffer, RenderOptions};
//!
//! let mut doc = Document::new();
//! let h = doc.push(NodeId::ROOT, NodeKind::Header { level: 1 });
//! doc.push(h, NodeKind::text("Title"));
//!
//! let mut renderer = HtmlRenderer::new(RenderOptions::default());
//! let mut ob = Buffer::new();
//! renderer.render(&mut ob, &doc, NodeId::ROOT);
//! assert_eq!(ob.as_bytes(), b"<h1 id=\"Title\">Title</h1>\n");
//! ```

mod dimensions;
mod registry;
mod rules;

pub use dimensions::{Dimensions, MAX_DIMENSION_HINT, parse_dimensions};
pub use registry::{HeaderEntry, HeaderRegistry};

use crate::ast::{Document, NodeId, NodeKind};
use crate::buffer::Buffer;
use crate::options::RenderOptions;

/// HTML renderer state for one document.
///
/// Header ids and TOC numbers accumulate across calls to [`render`], so a
/// renderer must not be reused for a second document. Rendering takes
/// `&mut self`; render documents concurrently with one renderer each.
///
/// [`render`]: HtmlRenderer::render
#[derive(Debug)]
pub struct HtmlRenderer {
    options: RenderOptions,
    headers: HeaderRegistry,
    toc_count: usize,
}

/// One node being rendered: its children are appended to `content` until
/// `next_child` runs out.
struct Frame<'a> {
    id: NodeId,
    kind: &'a NodeKind,
    content: Buffer,
    next_child: Option<NodeId>,
}

impl<'a> Frame<'a> {
    fn new(doc: &'a Document, id: NodeId) -> Option<Self> {
        let node = doc.node(id)?;
        Some(Self {
            id,
            kind: &node.kind,
            content: Buffer::new(),
            // Leaf kinds format their payload; their children are not rendered
            next_child: if node.kind.is_leaf() {
                None
            } else {
                node.first_child
            },
        })
    }
}

impl HtmlRenderer {
    /// Create a renderer with an empty header registry and a zero TOC counter.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            headers: HeaderRegistry::new(),
            toc_count: 0,
        }
    }

    /// Options this renderer was created with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Header ids assigned so far.
    pub fn headers(&self) -> &HeaderRegistry {
        &self.headers
    }

    /// Number of `toc_N` ids assigned so far.
    pub fn toc_count(&self) -> usize {
        self.toc_count
    }

    /// Append the HTML for `node` and its subtree to `ob`.
    ///
    /// Children are rendered in document order before their parent is
    /// formatted. The walk uses an explicit stack, so deeply nested trees
    /// cost heap memory (one frame per level) rather than call stack.
    /// A `node` that is not in `doc` renders nothing.
    pub fn render(&mut self, ob: &mut Buffer, doc: &Document, node: NodeId) {
        let Some(root) = Frame::new(doc, node) else {
            tracing::debug!(node = node.0, "render target not in document");
            return;
        };

        let mut stack = vec![root];
        while let Some(mut frame) = stack.pop() {
            if let Some(child) = frame.next_child {
                frame.next_child = doc.node(child).and_then(|n| n.next_sibling);
                stack.push(frame);
                if let Some(child_frame) = Frame::new(doc, child) {
                    stack.push(child_frame);
                }
                continue;
            }

            let out = match stack.last_mut() {
                Some(parent) => &mut parent.content,
                None => &mut *ob,
            };
            if !self.dispatch(out, frame.kind, frame.content.as_bytes()) {
                tracing::trace!(node = frame.id.0, kind = ?frame.kind, "node did not render");
            }
        }
    }

    /// Render a whole document into a new buffer.
    pub fn render_document(&mut self, doc: &Document) -> Buffer {
        let mut ob = Buffer::with_capacity(doc.node_count() * 16);
        self.render(&mut ob, doc, NodeId::ROOT);
        tracing::debug!(
            nodes = doc.node_count(),
            bytes = ob.len(),
            headers = self.headers.len(),
            "rendered document"
        );
        ob
    }
}

/// Render a document to an HTML string with a fresh renderer.
///
/// # Examples
///
/// ```
/// use quire::ast::{Document, NodeId, NodeKind};
/// use quire::{HtmlFlags, RenderOptions, render_html};
///
/// let mut doc = Document::new();
/// let p = doc.push(NodeId::ROOT, NodeKind::Paragraph);
/// doc.push(p, NodeKind::text("a\nb\n"));
///
/// let options = RenderOptions::new().with_flag(HtmlFlags::HARD_WRAP);
/// assert_eq!(render_html(&doc, options), "<p>a<br/>\nb</p>\n");
/// ```
pub fn render_html(doc: &Document, options: RenderOptions) -> String {
    HtmlRenderer::new(options).render_document(doc).into_string()
}
