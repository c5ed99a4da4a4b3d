// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON payloads exchanged with the tree service.
//!
//! Field names follow the service's camelCase convention. A tree record is the
//! layout [`TreeSnapshot`] plus service metadata, flattened into one object.
//!
//! Node graphs nest one JSON object per level. Decode response bodies with
//! [`decode`], which has no fixed depth limit.

use canopy_layout::{TreeNode, TreeSnapshot};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Decode a service response body.
///
/// The parser's recursion limit is lifted and the stack grows on demand
/// instead, so a degenerate chain thousands of levels deep still decodes.
/// Trailing non-whitespace is an error.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// A stored tree as returned by create, get and list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RecordWire")]
pub struct TreeRecord {
    /// Service-assigned id. Numeric ids are read as their decimal text.
    pub id: String,
    /// User-supplied name.
    pub name: String,
    /// Creation timestamp as sent by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Node graph and summary metadata.
    #[serde(flatten)]
    pub snapshot: TreeSnapshot,
}

// Read side of `TreeRecord`, with the snapshot fields spelled out so the node
// graph streams straight from the parser instead of being buffered by
// `flatten`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    #[serde(deserialize_with = "id_from_string_or_number")]
    id: String,
    name: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    root_node: Option<TreeNode>,
    #[serde(default)]
    node_count: usize,
    #[serde(default)]
    height: i32,
    #[serde(default)]
    is_balanced: Option<bool>,
    #[serde(default)]
    original_inputs: Vec<i64>,
}

impl From<RecordWire> for TreeRecord {
    fn from(wire: RecordWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            created_at: wire.created_at,
            snapshot: TreeSnapshot {
                root_node: wire.root_node,
                node_count: wire.node_count,
                height: wire.height,
                is_balanced: wire.is_balanced,
                original_inputs: wire.original_inputs,
            },
        }
    }
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTreeRequest {
    /// Tree name, already trimmed.
    pub name: String,
    /// Values to insert, in order.
    pub values: Vec<i64>,
}

impl CreateTreeRequest {
    /// Build a request.
    pub fn new(name: impl Into<String>, values: impl Into<Vec<i64>>) -> Self {
        Self {
            name: name.into(),
            values: values.into(),
        }
    }
}

/// One page of the tree list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreePage {
    /// Trees on this page. List entries may omit `rootNode`.
    #[serde(default)]
    pub trees: Vec<TreeRecord>,
    /// Trees across all pages.
    #[serde(default)]
    pub total_count: usize,
    /// Page size the service applied.
    #[serde(default)]
    pub size: usize,
}

impl TreePage {
    /// Number of pages, never less than one.
    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            return 1;
        }
        self.total_count.div_ceil(self.size).max(1)
    }
}

/// Error body sent by the service alongside non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    #[serde(default)]
    pub message: Option<String>,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Signed(n) => n.to_string(),
        Id::Unsigned(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_flattens_snapshot() {
        let json = r#"{
            "id": 12,
            "name": "demo",
            "createdAt": "2025-03-01T10:00:00",
            "nodeCount": 1,
            "height": 0,
            "isBalanced": true,
            "originalInputs": [5],
            "rootNode": { "value": 5, "left": null, "right": null }
        }"#;
        let rec: TreeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.id, "12");
        assert_eq!(rec.created_at.as_deref(), Some("2025-03-01T10:00:00"));
        assert_eq!(rec.snapshot.node_count, 1);
        assert_eq!(rec.snapshot.validate(), Ok(()));

        let out = serde_json::to_value(&rec).unwrap();
        assert_eq!(out["id"], "12");
        assert_eq!(out["rootNode"]["value"], 5);
        assert_eq!(out["isBalanced"], true);
    }

    /// A record whose root is a right-leaning chain `depth` levels deep.
    fn chain_record_json(depth: usize) -> String {
        let mut json = String::from(r#"{"id":"deep","name":"chain","rootNode":"#);
        for v in 0..depth {
            json.push_str(&format!(r#"{{"value":{v},"left":null,"right":"#));
        }
        json.push_str("null");
        json.push_str(&"}".repeat(depth));
        json.push_str(&format!(r#","nodeCount":{depth},"height":{}}}"#, depth - 1));
        json
    }

    #[test]
    fn decodes_deep_chains() {
        let rec: TreeRecord = decode(&chain_record_json(5_000)).unwrap();
        assert_eq!(rec.id, "deep");
        assert_eq!(rec.snapshot.validate(), Ok(()));
        assert_eq!(rec.snapshot.root_node.as_ref().unwrap().height(), 4_999);
    }

    #[test]
    fn decode_rejects_trailing_garbage() {
        let err = decode::<TreeRecord>(r#"{"id":1,"name":"x"} tail"#).unwrap_err();
        assert!(matches!(err, crate::ApiError::Decode(_)));
        let rec: TreeRecord = decode(r#" {"id":1,"name":"x"} "#).unwrap();
        assert!(rec.snapshot.is_empty());
    }

    #[test]
    fn list_entries_may_omit_root() {
        let json = r#"{
            "trees": [{ "id": "a", "name": "x", "nodeCount": 3, "height": 1, "isBalanced": null }],
            "totalCount": 11,
            "size": 5
        }"#;
        let page: TreePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.trees.len(), 1);
        assert!(page.trees[0].snapshot.root_node.is_none());
        assert_eq!(page.trees[0].snapshot.is_balanced, None);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn total_pages_never_zero() {
        assert_eq!(TreePage::default().total_pages(), 1);
        let page = TreePage {
            total_count: 0,
            size: 5,
            ..TreePage::default()
        };
        assert_eq!(page.total_pages(), 1);
        let page = TreePage {
            total_count: 10,
            size: 5,
            ..TreePage::default()
        };
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn create_request_shape() {
        let req = CreateTreeRequest::new("t", [3, 1, 2]);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"t","values":[3,1,2]}"#
        );
    }
}
