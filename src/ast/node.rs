//! Document tree node types.

use bitflags::bitflags;

/// Unique identifier for a node within a [`Document`](super::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

bitflags! {
    /// Table cell flags: a 2-bit alignment field plus a header bit.
    ///
    /// Center alignment is both alignment bits set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct CellFlags: u8 {
        const ALIGN_LEFT = 1 << 0;
        const ALIGN_RIGHT = 1 << 1;
        const ALIGN_CENTER = Self::ALIGN_LEFT.bits() | Self::ALIGN_RIGHT.bits();
        const ALIGN_MASK = Self::ALIGN_CENTER.bits();
        const HEADER = 1 << 2;
    }
}

/// Horizontal alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    /// CSS `text-align` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        }
    }
}

impl CellFlags {
    /// Whether this is a header cell (`<th>`).
    pub fn is_header(self) -> bool {
        self.contains(CellFlags::HEADER)
    }

    /// Decode the alignment field. `None` when no alignment bits are set.
    pub fn alignment(self) -> Option<Alignment> {
        match self.bits() & CellFlags::ALIGN_MASK.bits() {
            1 => Some(Alignment::Left),
            2 => Some(Alignment::Right),
            3 => Some(Alignment::Center),
            _ => None,
        }
    }
}

/// How an autolink was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AutolinkKind {
    /// A URL such as `<https://example.com>`.
    #[default]
    Normal,
    /// An e-mail address such as `<user@example.com>`.
    Email,
}

/// Kind of a node together with its kind-specific payload.
///
/// Container kinds take their content from their rendered children. Leaf
/// kinds (text, code, images, autolinks, raw HTML, math) carry their own
/// payload; children of leaf kinds are ignored by the HTML renderer.
///
/// Optional string payloads use the empty string for "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum NodeKind {
    /// Root document node. Renders as its children.
    Root,

    // Block kinds
    /// Fenced or indented code block.
    BlockCode {
        text: String,
        #[cfg_attr(feature = "serde", serde(default))]
        lang: Option<String>,
    },
    BlockQuote,
    /// Heading with level 1-6.
    Header { level: u8 },
    HorizontalRule,
    List {
        #[cfg_attr(feature = "serde", serde(default))]
        ordered: bool,
    },
    ListItem {
        #[cfg_attr(feature = "serde", serde(default))]
        ordered: bool,
        /// 1-based position within the list.
        #[cfg_attr(feature = "serde", serde(default))]
        number: usize,
    },
    Paragraph,
    Table {
        #[cfg_attr(feature = "serde", serde(default))]
        columns: usize,
    },
    TableHeader {
        #[cfg_attr(feature = "serde", serde(default))]
        columns: usize,
    },
    TableBody,
    TableRow,
    TableCell {
        #[cfg_attr(feature = "serde", serde(default))]
        flags: CellFlags,
        #[cfg_attr(feature = "serde", serde(default))]
        column: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        columns: usize,
    },
    /// Container for all footnote definitions at the end of a document.
    FootnotesBlock,
    FootnoteDef { number: u32 },
    /// Raw HTML block.
    BlockHtml { text: String },

    // Inline kinds
    Autolink {
        link: String,
        #[cfg_attr(feature = "serde", serde(default))]
        kind: AutolinkKind,
    },
    CodeSpan { text: String },
    /// `**strong**`
    DoubleEmphasis,
    /// `*em*`
    Emphasis,
    /// `***strong em***`
    TripleEmphasis,
    /// `==mark==`
    Highlight,
    Image {
        link: String,
        #[cfg_attr(feature = "serde", serde(default))]
        title: String,
        /// Size hint such as `640x480`.
        #[cfg_attr(feature = "serde", serde(default))]
        dimensions: String,
        #[cfg_attr(feature = "serde", serde(default))]
        alt: String,
    },
    LineBreak,
    Link {
        link: String,
        #[cfg_attr(feature = "serde", serde(default))]
        title: String,
    },
    Strikethrough,
    Superscript,
    FootnoteRef { number: u32 },
    /// TeX math, inline or display.
    Math {
        text: String,
        #[cfg_attr(feature = "serde", serde(default))]
        display: bool,
    },
    /// Raw inline HTML.
    RawHtml { text: String },
    NormalText { text: String },
}

impl NodeKind {
    /// Shorthand for a text node.
    pub fn text(text: impl Into<String>) -> Self {
        NodeKind::NormalText { text: text.into() }
    }

    /// Whether the renderer formats this kind from its own payload rather
    /// than from its children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::BlockCode { .. }
                | NodeKind::HorizontalRule
                | NodeKind::BlockHtml { .. }
                | NodeKind::Autolink { .. }
                | NodeKind::CodeSpan { .. }
                | NodeKind::Image { .. }
                | NodeKind::LineBreak
                | NodeKind::FootnoteRef { .. }
                | NodeKind::Math { .. }
                | NodeKind::RawHtml { .. }
                | NodeKind::NormalText { .. }
        )
    }
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind and payload.
    pub kind: NodeKind,
    /// Parent node (None for root).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Last child node.
    pub last_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
}

impl Node {
    /// Create a detached node.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }
}
