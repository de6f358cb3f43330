//! Repairs stale option values in node lists written by older editors.
//!
//! Older editor releases stored enum options that were later renamed or
//! removed. Rather than rejecting the whole file, the affected field is reset
//! to the value the editor itself falls back to.

use rl_protocol::DType;
use rl_protocol::NodeKind;
use rl_protocol::ReaderMode;
use rl_protocol::ResizeFilter;
use serde_json::Map;
use serde_json::Value;
use tracing::warn;

struct FieldRepair {
    kind: NodeKind,
    field: &'static str,
    is_known: fn(&str) -> bool,
    fallback: &'static str,
}

const REPAIRS: &[FieldRepair] = &[
    FieldRepair {
        kind: NodeKind::Resize,
        field: "filter",
        is_known: known_filter,
        fallback: "cubic_mitchell",
    },
    FieldRepair {
        kind: NodeKind::FolderReader,
        field: "mode",
        is_known: known_mode,
        fallback: "rgb",
    },
    FieldRepair {
        kind: NodeKind::Upscale,
        field: "dtype",
        is_known: known_dtype,
        fallback: "F32",
    },
];

/// Model directory of the hosted notebook runtime older editors wrote into
/// `upscale.model`; only the file name is meaningful locally.
const LEGACY_MODEL_DIR: &str = "/content/models/";

fn known_filter(value: &str) -> bool {
    ResizeFilter::ALL.iter().any(|f| f.as_str() == value)
}

fn known_mode(value: &str) -> bool {
    ReaderMode::ALL.iter().any(|m| m.as_str() == value)
}

fn known_dtype(value: &str) -> bool {
    DType::ALL.iter().any(|d| d.as_str() == value)
}

/// Resets unknown enum values and legacy model paths in a node list in place.
///
/// Returns the number of fields repaired. Values that are not node lists,
/// and nodes without a string `type` or an object `options`, are left alone
/// for the decoder to report.
pub fn migrate_nodes(config: &mut Value) -> usize {
    let Some(nodes) = config.as_array_mut() else {
        return 0;
    };

    let mut repaired = 0;
    for (index, node) in nodes.iter_mut().enumerate() {
        let Some(kind) = node.get("type").and_then(Value::as_str).map(str::to_owned) else {
            continue;
        };
        let Some(options) = node.get_mut("options").and_then(Value::as_object_mut) else {
            continue;
        };

        for repair in REPAIRS.iter().filter(|r| r.kind.as_str() == kind) {
            let current = options.get(repair.field);
            if current.and_then(Value::as_str).is_some_and(repair.is_known) {
                continue;
            }

            warn!(
                index,
                node = %repair.kind,
                field = repair.field,
                found = ?current,
                replacement = repair.fallback,
                "Replacing unknown option value"
            );
            options.insert(
                repair.field.to_string(),
                Value::String(repair.fallback.to_string()),
            );
            repaired += 1;
        }

        if kind == NodeKind::Upscale.as_str() && strip_legacy_model_dir(index, options) {
            repaired += 1;
        }
    }

    repaired
}

fn strip_legacy_model_dir(index: usize, options: &mut Map<String, Value>) -> bool {
    let Some(model) = options.get("model").and_then(Value::as_str) else {
        return false;
    };
    if !model.starts_with(LEGACY_MODEL_DIR) {
        return false;
    }

    let name = model
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(model)
        .to_string();
    warn!(index, found = model, replacement = %name, "Replacing legacy model path");
    options.insert("model".to_string(), Value::String(name));
    true
}
