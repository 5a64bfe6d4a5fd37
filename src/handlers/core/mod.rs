//! Handler plumbing: the per-command context and the dispatch table.

pub mod context;
pub mod registry;
