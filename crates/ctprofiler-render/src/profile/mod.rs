//! In-memory profiling record consumed by the renderers.
//!
//! A `ProfileSession` is one thread's capture: a forest of call-tree nodes,
//! each carrying the statistics of one instrumented code path. Sessions can
//! own nested sub-sessions captured on other threads.

mod validate;

pub use validate::validate_session;

use serde::{Deserialize, Serialize};

/// Ordered chain of timer names from a forest root down to one node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerPath {
    segments: Vec<String>,
}

impl TimerPath {
    /// Path of a forest root
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Build a path from its segments, outermost first
    ///
    /// Returns `None` when there are no segments.
    pub fn from_segments(segments: Vec<String>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Path of a direct child of this path
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Nesting depth; forest roots are level 0
    pub fn level(&self) -> usize {
        self.segments.len() - 1
    }

    /// Name of the innermost timer
    pub fn leaf_name(&self) -> &str {
        // A path always has at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for TimerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

/// Call count and elapsed time of all recorded invocations of one code path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallStatistics {
    /// Number of recorded calls
    #[serde(alias = "numberOfCalls")]
    pub calls: u64,

    /// Summed elapsed time of all calls
    #[serde(alias = "totalNanos")]
    pub total_nanos: u64,
}

impl CallStatistics {
    pub fn new(calls: u64, total_nanos: u64) -> Self {
        Self { calls, total_nanos }
    }
}

/// One node of a call tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub path: TimerPath,

    /// Absent only for a synthetic umbrella node without its own measurement
    pub stats: Option<CallStatistics>,

    pub children: Vec<Node>,
}

impl Node {
    pub fn new(path: TimerPath, stats: Option<CallStatistics>) -> Self {
        Self {
            path,
            stats,
            children: Vec::new(),
        }
    }

    /// Append a measured child below this node and return it for further nesting
    pub fn add_child(&mut self, name: &str, stats: CallStatistics) -> &mut Node {
        let child = Node::new(self.path.child(name), Some(stats));
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Total number of nodes in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_size).sum::<usize>()
    }
}

/// One thread's capture
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileSession {
    pub thread_name: String,
    pub roots: Vec<Node>,

    /// Captures of other threads reported inside this session's report
    pub subtasks: Vec<ProfileSession>,
}

impl ProfileSession {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
            roots: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    /// Append a measured root node and return it for further nesting
    pub fn add_root(&mut self, name: &str, stats: CallStatistics) -> &mut Node {
        self.push_root(Node::new(TimerPath::root(name), Some(stats)))
    }

    /// Append an already built root node
    pub fn push_root(&mut self, node: Node) -> &mut Node {
        self.roots.push(node);
        let last = self.roots.len() - 1;
        &mut self.roots[last]
    }

    /// Number of nodes in this session's forest, excluding subtasks
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::subtree_size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_path_levels() {
        let root = TimerPath::root("request");
        let child = root.child("db");
        let grandchild = child.child("query");

        assert_eq!(root.level(), 0);
        assert_eq!(child.level(), 1);
        assert_eq!(grandchild.level(), 2);
        assert_eq!(grandchild.leaf_name(), "query");
        assert_eq!(grandchild.to_string(), "request/db/query");
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(TimerPath::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn test_builders_nest_paths() {
        let mut session = ProfileSession::new("main");
        session
            .add_root("a", CallStatistics::new(1, 10))
            .add_child("b", CallStatistics::new(2, 5))
            .add_child("c", CallStatistics::new(3, 1));

        let c = &session.roots[0].children[0].children[0];
        assert_eq!(c.path.level(), 2);
        assert_eq!(c.path.leaf_name(), "c");
        assert_eq!(session.node_count(), 3);
    }
}
