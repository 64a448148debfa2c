pub mod document;
pub mod error;
pub mod tree;

use std::path::Path;

use anyhow::Result;

use crate::tree::Summary;

pub const TOOL_NAME: &str = "pivot";

/// Keys whose mapping values receive an empty `properties` member.
pub const ANNOTATION_KEYS: [&str; 2] = ["samplingFeature", "spatialExtent"];

/// Member injected onto every annotated mapping.
pub const PROPERTIES_KEY: &str = "properties";

/// Inserted between the file stem and extension of the output path.
pub const CORRECTED_SUFFIX: &str = "_corrected";

/// Input used when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "pivot.json";

/// Maximum container nesting the tree passes will descend into.
pub const MAX_DEPTH: usize = 512;

/// Load a document and run both tree passes over it.
///
/// Persisting the result is left to the caller so that a failed write can
/// be reported separately from a failed read.
pub fn correct(input: &Path) -> Result<(serde_json::Value, Summary)> {
    let mut doc = document::read::load_document(input)?;
    let summary = tree::normalize(&mut doc)?;
    Ok((doc, summary))
}
