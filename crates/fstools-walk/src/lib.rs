//! Directory traversal for the listing and finding tools.
//!
//! The walker keeps its pending work on an explicit stack of open
//! directories instead of recursing, so depth is bounded only by memory
//! and path length by the OS.

pub mod entry;
pub mod errors;
pub mod walker;

pub use entry::{DirEntryInfo, EntryKind};
pub use errors::WalkError;
pub use walker::{WalkEvent, Walker};
