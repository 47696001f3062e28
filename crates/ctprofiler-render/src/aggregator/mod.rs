//! Aggregation of call-tree statistics.
//!
//! This module reduces a session forest into:
//! - Per-leaf totals (all nodes sharing a leaf timer name, across branches)
//! - The top-N ranking printed at the end of each session report

pub mod leaf_stats;

// Re-export main types and functions
pub use leaf_stats::{aggregate_leaves, top_leaves, LeafStatistics};
