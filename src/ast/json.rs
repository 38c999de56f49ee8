//! JSON interchange form of the document tree.
//!
//! A node is an object with a `type` tag, the kind's payload fields and an
//! optional `children` array:
//!
//! ```json
//! {"type": "root", "children": [
//!   {"type": "header", "level": 1, "children": [
//!     {"type": "normal_text", "text": "Title"}
//!   ]}
//! ]}
//! ```

use std::io::Read;

use serde::Deserialize;

use super::{Document, NodeId, NodeKind};
use crate::error::{Error, Result};

#[derive(Deserialize)]
struct JsonNode {
    #[serde(flatten)]
    kind: NodeKind,
    #[serde(default)]
    children: Vec<JsonNode>,
}

impl Document {
    /// Build a document from its JSON form.
    ///
    /// The top-level object must be a `root` node, and header levels must
    /// lie in 1-6.
    ///
    /// Nesting is limited by `serde_json`'s recursion limit of 128 JSON
    /// containers. Each node takes two (its object and its `children`
    /// array), so trees more than about 60 nodes deep fail with
    /// [`Error::Json`]. Documents built through [`Document::push`] have no
    /// such limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use quire::ast::{Document, NodeId};
    ///
    /// let doc = Document::from_json(
    ///     r#"{"type": "root", "children": [{"type": "horizontal_rule"}]}"#,
    /// ).unwrap();
    /// assert_eq!(doc.children(NodeId::ROOT).count(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Document> {
        let root: JsonNode = serde_json::from_str(json)?;
        Self::from_json_root(root)
    }

    /// Build a document from JSON read from `reader`.
    ///
    /// Same rules and nesting limit as [`Document::from_json`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
        let root: JsonNode = serde_json::from_reader(reader)?;
        Self::from_json_root(root)
    }

    fn from_json_root(root: JsonNode) -> Result<Document> {
        if root.kind != NodeKind::Root {
            return Err(Error::invalid_document("top-level node must be of type root"));
        }

        let mut doc = Document::new();
        let mut pending: Vec<(NodeId, JsonNode)> = root
            .children
            .into_iter()
            .rev()
            .map(|child| (NodeId::ROOT, child))
            .collect();

        // Explicit stack; children are pushed reversed so allocation follows
        // document order.
        while let Some((parent, node)) = pending.pop() {
            validate(&node.kind)?;
            let id = doc.push(parent, node.kind);
            pending.extend(node.children.into_iter().rev().map(|child| (id, child)));
        }

        tracing::debug!(nodes = doc.node_count(), "loaded document from JSON");
        Ok(doc)
    }
}

fn validate(kind: &NodeKind) -> Result<()> {
    match kind {
        NodeKind::Root => Err(Error::invalid_document("root node may only appear at the top")),
        NodeKind::Header { level } if !(1..=6).contains(level) => Err(Error::invalid_document(
            format!("header level {level} is outside 1-6"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AutolinkKind, CellFlags};

    #[test]
    fn test_from_json_builds_tree() {
        let doc = Document::from_json(
            r#"{"type": "root", "children": [
                {"type": "header", "level": 2, "children": [
                    {"type": "normal_text", "text": "Intro"}
                ]},
                {"type": "paragraph", "children": [
                    {"type": "normal_text", "text": "a "},
                    {"type": "emphasis", "children": [{"type": "normal_text", "text": "b"}]}
                ]}
            ]}"#,
        )
        .unwrap();

        let top: Vec<_> = doc.children(NodeId::ROOT).collect();
        assert_eq!(top.len(), 2);
        assert_eq!(doc.node(top[0]).unwrap().kind, NodeKind::Header { level: 2 });
        assert_eq!(doc.children(top[1]).count(), 2);

        // Allocation follows document order
        let order: Vec<_> = doc.iter_dfs().collect();
        let mut sorted = order.clone();
        sorted.sort_by_key(|id| id.0);
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_from_json_payload_defaults() {
        let doc = Document::from_json(
            r#"{"type": "root", "children": [
                {"type": "image", "link": "a.png"},
                {"type": "autolink", "link": "x@y.z", "kind": "email"},
                {"type": "table_cell", "flags": "ALIGN_CENTER | HEADER"}
            ]}"#,
        )
        .unwrap();

        let kinds: Vec<_> = doc
            .children(NodeId::ROOT)
            .map(|id| doc.node(id).unwrap().kind.clone())
            .collect();
        assert_eq!(
            kinds[0],
            NodeKind::Image {
                link: "a.png".into(),
                title: String::new(),
                dimensions: String::new(),
                alt: String::new(),
            }
        );
        assert_eq!(
            kinds[1],
            NodeKind::Autolink {
                link: "x@y.z".into(),
                kind: AutolinkKind::Email,
            }
        );
        assert_eq!(
            kinds[2],
            NodeKind::TableCell {
                flags: CellFlags::ALIGN_CENTER | CellFlags::HEADER,
                column: 0,
                columns: 0,
            }
        );
    }

    #[test]
    fn test_from_json_rejects_non_root_top() {
        let err = Document::from_json(r#"{"type": "paragraph"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }

    #[test]
    fn test_from_json_rejects_nested_root() {
        let err =
            Document::from_json(r#"{"type": "root", "children": [{"type": "root"}]}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_header_level() {
        let err = Document::from_json(
            r#"{"type": "root", "children": [{"type": "header", "level": 7}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("header level 7"));
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = Document::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    /// A root holding `depth` nested block quotes around a text node.
    fn nested_quotes(depth: usize) -> String {
        let mut json = String::from(r#"{"type": "root", "children": ["#);
        for _ in 0..depth {
            json.push_str(r#"{"type": "block_quote", "children": ["#);
        }
        json.push_str(r#"{"type": "normal_text", "text": "deep"}"#);
        for _ in 0..depth {
            json.push_str("]}");
        }
        json.push_str("]}");
        json
    }

    #[test]
    fn test_from_json_nesting_limit() {
        let doc = Document::from_json(&nested_quotes(40)).unwrap();
        assert_eq!(doc.node_count(), 42);

        let err = Document::from_json(&nested_quotes(100)).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("recursion limit"));
    }

    #[test]
    fn test_from_json_long_flat_document() {
        let rules = vec![r#"{"type": "horizontal_rule"}"#; 100_000].join(",");
        let doc = Document::from_json(&format!(r#"{{"type": "root", "children": [{rules}]}}"#))
            .unwrap();

        let ids: Vec<_> = doc.children(NodeId::ROOT).collect();
        assert_eq!(ids.len(), 100_000);
        assert!(ids.windows(2).all(|w| w[0].0 + 1 == w[1].0));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"type": "root", "children": [{"type": "line_break"}]}"#;
        let doc = Document::from_reader(&json[..]).unwrap();
        assert_eq!(doc.node_count(), 2);
    }
}
