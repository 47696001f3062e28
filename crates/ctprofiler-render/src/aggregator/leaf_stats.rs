//! Rank code paths by their leaf timer name.
//!
//! The same leaf name can show up under many branches of the call tree
//! (a `query` timer below several request handlers, say). Summing them
//! answers "where does the time go" regardless of who called.

use crate::profile::{CallStatistics, Node};
use crate::rendering::formatter::nanos_to_millis;
use log::debug;
use std::collections::HashMap;

/// Summed statistics of all nodes sharing one leaf name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafStatistics {
    pub leaf_name: String,
    pub total_calls: u64,
    pub total_nanos: u64,
}

impl LeafStatistics {
    fn new(leaf_name: &str) -> Self {
        Self {
            leaf_name: leaf_name.to_string(),
            total_calls: 0,
            total_nanos: 0,
        }
    }

    fn add(&mut self, stats: &CallStatistics) {
        self.total_calls = self.total_calls.saturating_add(stats.calls);
        self.total_nanos = self.total_nanos.saturating_add(stats.total_nanos);
    }

    pub fn total_millis(&self) -> f64 {
        nanos_to_millis(self.total_nanos)
    }
}

/// Group every node of a forest by leaf name and sum the groups
///
/// All nodes are visited, whether or not they were rendered. Nodes without
/// statistics add nothing but their children are still visited.
///
/// # Returns
/// One entry per leaf name, sorted by total duration (descending). Ties keep
/// the order in which the names were first seen.
pub fn aggregate_leaves(roots: &[Node]) -> Vec<LeafStatistics> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut leaves: Vec<LeafStatistics> = Vec::new();

    collect(roots, &mut index, &mut leaves);

    leaves.sort_by(|a, b| b.total_nanos.cmp(&a.total_nanos));
    debug!("Aggregated {} distinct leaf names", leaves.len());

    leaves
}

fn collect(nodes: &[Node], index: &mut HashMap<String, usize>, leaves: &mut Vec<LeafStatistics>) {
    for node in nodes {
        if let Some(stats) = &node.stats {
            let name = node.path.leaf_name();
            let slot = match index.get(name) {
                Some(&slot) => slot,
                None => {
                    leaves.push(LeafStatistics::new(name));
                    index.insert(name.to_string(), leaves.len() - 1);
                    leaves.len() - 1
                }
            };
            leaves[slot].add(stats);
        }
        collect(&node.children, index, leaves);
    }
}

/// Pick the leaves for the summary
///
/// Takes the first `max_items` of `leaves` (already ranked) whose total is
/// strictly above `threshold_nanos`.
pub fn top_leaves(
    leaves: &[LeafStatistics],
    max_items: usize,
    threshold_nanos: u64,
) -> impl Iterator<Item = &LeafStatistics> {
    leaves
        .iter()
        .filter(move |leaf| leaf.total_nanos > threshold_nanos)
        .take(max_items)
}
