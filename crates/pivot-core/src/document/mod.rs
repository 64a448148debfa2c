//! File I/O around the tree passes: loading the input document and
//! persisting the corrected one.

pub mod read;
pub mod write;
