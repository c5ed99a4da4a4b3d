// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text views of a tree next to its drawing.

use canopy_layout::{TreeNode, TreeSnapshot};
use serde_json::{Map, Value, json};

use crate::wire::TreeRecord;

/// Label/value rows shown beside a displayed tree.
pub fn summary(record: &TreeRecord) -> Vec<(&'static str, String)> {
    let snap = &record.snapshot;
    vec![
        ("ID", record.id.clone()),
        ("Name", record.name.clone()),
        ("Original Inputs", join_values(&snap.original_inputs)),
        ("Nodes", snap.node_count.to_string()),
        ("Height", snap.height.to_string()),
        ("Balanced", snap.is_balanced.unwrap_or(false).to_string()),
    ]
}

/// One-line metadata for a list entry.
pub fn list_metadata(record: &TreeRecord) -> String {
    format!(
        "Nodes: {} | Height: {}",
        record.snapshot.node_count, record.snapshot.height
    )
}

/// Creation time for a list entry, or `None` if the service sent none.
///
/// ISO-8601 timestamps read as `2025-04-02 09:30:00`: the `T` separator becomes
/// a space, and fractional seconds and `Z`/`+hh:mm` suffixes are dropped.
/// Anything else is shown as sent.
pub fn list_date(record: &TreeRecord) -> Option<String> {
    let raw = record.created_at.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    let Some((date, time)) = raw.split_once('T') else {
        return Some(raw.to_owned());
    };
    let time = time
        .split(['.', 'Z', '+'])
        .next()
        .unwrap_or(time);
    Some(format!("{date} {time}"))
}

/// Badge text for the balance flag, `None` when the flag is unknown.
pub fn balance_badge(snapshot: &TreeSnapshot) -> Option<&'static str> {
    snapshot
        .is_balanced
        .map(|b| if b { "Balanced" } else { "Unbalanced" })
}

/// `"50, 30, 70"`.
pub fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The snapshot as JSON with node ids and inputs stripped.
///
/// Keys are `nodeCount`, `height`, `isBalanced` and `rootNode`; each node has
/// only `value`, `left` and `right`, with `null` for a missing child.
pub fn simplified_json(snapshot: &TreeSnapshot) -> Value {
    json!({
        "nodeCount": snapshot.node_count,
        "height": snapshot.height,
        "isBalanced": snapshot.is_balanced,
        "rootNode": snapshot.root_node.as_ref().map_or(Value::Null, simplify_node),
    })
}

// Post-order on an explicit stack so deep chains cannot overflow.
fn simplify_node(root: &TreeNode) -> Value {
    let mut done: Vec<Value> = Vec::new();
    let mut stack = vec![(root, false)];
    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, false));
            }
            continue;
        }
        // Children finished in left-then-right order, so right is on top.
        let right = match node.right {
            Some(_) => done.pop().unwrap_or(Value::Null),
            None => Value::Null,
        };
        let left = match node.left {
            Some(_) => done.pop().unwrap_or(Value::Null),
            None => Value::Null,
        };
        let mut obj = Map::new();
        obj.insert("value".to_owned(), node.value.into());
        obj.insert("left".to_owned(), left);
        obj.insert("right".to_owned(), right);
        done.push(Value::Object(obj));
    }
    done.pop().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::build_snapshot;

    fn record(values: &[i64]) -> TreeRecord {
        TreeRecord {
            id: "7".to_owned(),
            name: "oak".to_owned(),
            created_at: None,
            snapshot: build_snapshot(values),
        }
    }

    #[test]
    fn summary_rows() {
        let rows = summary(&record(&[50, 30, 70, 30]));
        let expect = [
            ("ID", "7"),
            ("Name", "oak"),
            ("Original Inputs", "50, 30, 70, 30"),
            ("Nodes", "3"),
            ("Height", "1"),
            ("Balanced", "true"),
        ];
        assert_eq!(rows.len(), expect.len());
        for ((label, value), (el, ev)) in rows.iter().zip(expect) {
            assert_eq!((*label, value.as_str()), (el, ev));
        }
    }

    #[test]
    fn metadata_and_badges() {
        let rec = record(&[1, 2, 3]);
        assert_eq!(list_metadata(&rec), "Nodes: 3 | Height: 2");
        assert_eq!(balance_badge(&rec.snapshot), Some("Unbalanced"));
        assert_eq!(balance_badge(&TreeSnapshot::empty()), None);
    }

    #[test]
    fn list_date_is_readable() {
        let mut rec = record(&[1]);
        assert_eq!(list_date(&rec), None);
        rec.created_at = Some("2025-04-02T09:30:00.123456".to_owned());
        assert_eq!(list_date(&rec).as_deref(), Some("2025-04-02 09:30:00"));
        rec.created_at = Some("2025-04-02T09:30:00Z".to_owned());
        assert_eq!(list_date(&rec).as_deref(), Some("2025-04-02 09:30:00"));
        rec.created_at = Some("yesterday".to_owned());
        assert_eq!(list_date(&rec).as_deref(), Some("yesterday"));
        rec.created_at = Some("  ".to_owned());
        assert_eq!(list_date(&rec), None);
    }

    #[test]
    fn simplified_json_drops_extras() {
        let mut snap = build_snapshot(&[2, 1, 3]);
        if let Some(root) = snap.root_node.as_mut() {
            root.id = Some("n2".to_owned());
        }
        let json = simplified_json(&snap);
        assert_eq!(
            json,
            json!({
                "nodeCount": 3,
                "height": 1,
                "isBalanced": true,
                "rootNode": {
                    "value": 2,
                    "left": { "value": 1, "left": null, "right": null },
                    "right": { "value": 3, "left": null, "right": null }
                }
            })
        );
        let text = serde_json::to_string(&json).unwrap();
        assert!(text.starts_with(r#"{"nodeCount":3,"height":1"#));
        assert!(!text.contains("originalInputs"));
        assert!(!text.contains("n2"));
    }

    #[test]
    fn simplified_json_of_empty_tree() {
        let json = simplified_json(&TreeSnapshot::empty());
        assert_eq!(json["rootNode"], Value::Null);
        assert_eq!(json["height"], -1);
        assert_eq!(json["isBalanced"], Value::Null);
    }

    #[test]
    fn deep_chain_simplifies() {
        let values: Vec<i64> = (0..1_000).collect();
        let json = simplified_json(&build_snapshot(&values));
        let mut node = &json["rootNode"];
        let mut depth = 0;
        while !node.is_null() {
            assert!(node["left"].is_null());
            node = &node["right"];
            depth += 1;
        }
        assert_eq!(depth, 1_000);
    }
}
