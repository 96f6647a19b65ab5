use crate::model::QuiltLayout;
use serde::Serialize;
use serde_json::{Value, json};

/// Serialize a layout as a JSON object `{ patches, meta }` (array-of-patches
/// style). Suitable for generic tooling and snapshotting; in-memory only.
pub fn to_json<K: Serialize>(layout: &QuiltLayout<K>) -> Value {
    let patches_val: Vec<Value> = layout
        .patches
        .iter()
        .map(|p| {
            json!({
                "key": &p.key,
                "origin": {"col": p.origin.col, "row": p.origin.row},
                "span": {"w": p.span.width(), "h": p.span.height()},
            })
        })
        .collect();
    let stats = layout.stats();
    json!({
        "patches": patches_val,
        "meta": {
            "schemaVersion": "1",
            "app": "quilt",
            "version": env!("CARGO_PKG_VERSION"),
            "columns": layout.columns,
            "rowsUsed": stats.rows_used,
            "occupancy": stats.occupancy,
        }
    })
}
