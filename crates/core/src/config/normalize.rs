//! Path normalization over a parsed configuration value.
//!
//! Every string leaf that names an entry currently present on the local
//! filesystem is replaced with its canonical absolute, symlink-resolved form.
//! Existence on disk is the only signal used, so a plain data string that
//! happens to match a relative path from the working directory is rewritten
//! as well.
//!
//! Object keys, array lengths and order, and non-string leaves are never
//! touched.

use serde_json::Value;
use std::io;
use std::path::Path;
use tracing::debug;
use tracing::warn;

/// Outcome of checking one string against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathProbe {
    /// The path exists; holds its canonical absolute form.
    Exists(String),

    /// The path does not exist, or the check failed with an ordinary I/O error.
    Missing,

    /// The string cannot be represented as a path on this platform.
    Unrepresentable { reason: String },
}

/// Checks whether `candidate` names an existing filesystem entry.
///
/// Symlinks are followed, so a dangling link is `Missing`. The empty string is
/// always `Missing`.
pub fn probe_path(candidate: &str) -> PathProbe {
    if candidate.is_empty() {
        return PathProbe::Missing;
    }

    let path = Path::new(candidate);
    match path.try_exists() {
        Ok(true) => canonical_form(path),
        Ok(false) => PathProbe::Missing,
        // Interior NUL bytes are rejected before reaching the OS.
        Err(err) if err.kind() == io::ErrorKind::InvalidInput => PathProbe::Unrepresentable {
            reason: err.to_string(),
        },
        Err(err) => {
            debug!(candidate, error = %err, "Existence check failed, treating as missing");
            PathProbe::Missing
        }
    }
}

// Plain `C:\...` form on Windows instead of the verbatim `\\?\` prefix.
fn canonical_form(path: &Path) -> PathProbe {
    match dunce::canonicalize(path) {
        Ok(canonical) => match canonical.into_os_string().into_string() {
            Ok(canonical) => PathProbe::Exists(canonical),
            Err(raw) => PathProbe::Unrepresentable {
                reason: format!("canonical path {} is not valid UTF-8", raw.to_string_lossy()),
            },
        },
        Err(err) => {
            // Raced with a removal, or a parent lost its search permission.
            debug!(path = %path.display(), error = %err, "Canonicalization failed, treating as missing");
            PathProbe::Missing
        }
    }
}

/// A string leaf that was replaced by its canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub from: String,
    pub to: String,
}

/// What a normalization pass changed and what it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Leaves rewritten to canonical paths, in traversal order.
    pub rewritten: Vec<Rewrite>,

    /// Leaves left unchanged because they could not be checked.
    pub skipped: Vec<String>,
}

/// Result of [`normalize_with_report`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub value: Value,
    pub report: NormalizeReport,
}

/// Returns a copy of `value` with existing paths rewritten.
///
/// # Example
///
/// ```rust
/// use rl_core::config::normalize::normalize;
/// use serde_json::json;
///
/// let value = json!({ "n": 42, "missing": "no-such-entry-a7b3" });
/// assert_eq!(normalize(&value), value);
/// ```
pub fn normalize(value: &Value) -> Value {
    normalize_with_report(value).value
}

/// Like [`normalize`], but also reports every rewrite and skip.
///
/// A leaf whose existence check fails because it cannot be represented as a
/// path is logged once and left unchanged; the rest of the traversal
/// continues.
pub fn normalize_with_report(value: &Value) -> Normalized {
    let mut report = NormalizeReport::default();
    let value = normalize_value(value, &mut report);

    if !report.rewritten.is_empty() || !report.skipped.is_empty() {
        debug!(
            rewritten = report.rewritten.len(),
            skipped = report.skipped.len(),
            "Normalized configuration paths"
        );
    }

    Normalized { value, report }
}

fn normalize_value(value: &Value, report: &mut NormalizeReport) -> Value {
    match value {
        Value::String(leaf) => Value::String(normalize_leaf(leaf, report)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| normalize_value(item, report))
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), normalize_value(item, report)))
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

fn normalize_leaf(leaf: &str, report: &mut NormalizeReport) -> String {
    match probe_path(leaf) {
        PathProbe::Exists(canonical) => {
            if canonical != leaf {
                report.rewritten.push(Rewrite {
                    from: leaf.to_string(),
                    to: canonical.clone(),
                });
            }
            canonical
        }
        PathProbe::Missing => leaf.to_string(),
        PathProbe::Unrepresentable { reason } => {
            warn!(value = ?leaf, reason = %reason, "Cannot check string as a path, leaving it unchanged");
            report.skipped.push(leaf.to_string());
            leaf.to_string()
        }
    }
}
