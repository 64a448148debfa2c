//! In-memory passes over a loaded document tree.
//!
//! Both passes mutate the document in place and walk it depth-first.
//! `clean` must run before `annotate`: the injected `properties: {}`
//! members are empty mappings and would otherwise be pruned again.

pub mod annotate;
pub mod clean;

pub use annotate::annotate;
pub use clean::clean;

use serde_json::Value;

use crate::error::{NormalizeError, NormalizeResult};
use crate::MAX_DEPTH;

/// Counts gathered while normalizing a single document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Entries removed from mappings and sequences by the clean pass.
    pub pruned: usize,

    /// Mappings that received an empty `properties` member.
    pub annotated: usize,
}

/// Run the clean pass followed by the annotate pass.
pub fn normalize(doc: &mut Value) -> NormalizeResult<Summary> {
    let mut summary = Summary::default();
    clean::prune(doc, 0, &mut summary.pruned)?;
    annotate::mark(doc, 0, &mut summary.annotated)?;
    Ok(summary)
}

fn check_depth(depth: usize) -> NormalizeResult<()> {
    if depth > MAX_DEPTH {
        return Err(NormalizeError::DepthExceeded { limit: MAX_DEPTH });
    }
    Ok(())
}
