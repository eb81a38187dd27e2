//! Fallback tile: scalar payload leaves no specific tile consumed.

use std::collections::HashSet;

use portal_core::PortalItem;
use serde_json::Value;

use crate::tiles::{FallbackEntry, TileSpec};

/// Render a scalar JSON leaf as display text. Nested objects and arrays are
/// never rendered here.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) | Value::Array(_) => None,
    }
}

/// Build the trailing key/value tile from payload fields not claimed by any
/// specific tile. Returns `None` when nothing scalar remains.
pub(crate) fn fallback_tile(
    item: &PortalItem,
    claimed: &HashSet<&'static str>,
) -> Option<TileSpec> {
    let Ok(Value::Object(map)) = serde_json::to_value(&item.payload) else {
        return None;
    };
    let entries: Vec<FallbackEntry> = map
        .iter()
        .filter(|(key, _)| key.as_str() != "type" && !claimed.contains(key.as_str()))
        .filter_map(|(key, value)| {
            scalar_text(value).map(|text| FallbackEntry { key: key.clone(), value: text })
        })
        .collect();
    if entries.is_empty() {
        return None;
    }
    Some(TileSpec::Fallback { entries })
}
