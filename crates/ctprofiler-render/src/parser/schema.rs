//! Input JSON schema definitions for profiling sessions.
//!
//! Timer paths are not stored in the document; they follow from nesting.

use crate::profile::CallStatistics;
use serde::{Deserialize, Serialize};

/// Top-level session document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Name of the captured thread
    #[serde(alias = "threadName")]
    pub thread_name: String,

    /// Forest of root timers
    #[serde(default)]
    pub roots: Vec<NodeRecord>,

    /// Captures of other threads nested in this report
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<SessionRecord>,
}

/// One timer in the call tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Timer name (the leaf segment of this node's path)
    pub name: String,

    /// Statistics; absent for synthetic umbrella nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<CallStatistics>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeRecord>,
}
