use anyhow::{Context, Result};
use serde_json::Value;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::CORRECTED_SUFFIX;

/// Sibling of `input` with `_corrected` inserted before the extension.
///
/// `data/pivot.json` becomes `data/pivot_corrected.json`; a path without
/// an extension just gets the suffix appended.
pub fn corrected_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(CORRECTED_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Serialize a document as compact JSON text.
pub fn to_compact_json(doc: &Value) -> Result<String> {
    serde_json::to_string(doc).context("failed to serialize document")
}

/// Write `doc` to `path` as compact JSON.
///
/// The whole document is serialized before the file is opened, so a
/// failure never leaves a half-written document behind from this step.
pub fn persist_document(path: &Path, doc: &Value) -> Result<()> {
    let text = to_compact_json(doc)?;
    fs::write(path, text)
        .with_context(|| format!("failed to write document: {}", path.display()))
}
