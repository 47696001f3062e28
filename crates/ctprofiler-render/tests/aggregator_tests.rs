use ctprofiler_render::aggregator::{aggregate_leaves, top_leaves, LeafStatistics};
use ctprofiler_render::profile::{CallStatistics, Node, ProfileSession, TimerPath};

const MS: u64 = 1_000_000;

fn names<'a>(leaves: impl Iterator<Item = &'a LeafStatistics>) -> Vec<&'a str> {
    leaves.map(|leaf| leaf.leaf_name.as_str()).collect()
}

#[test]
fn test_same_leaf_name_merges_across_branches() {
    let mut session = ProfileSession::new("main");
    session
        .add_root("left", CallStatistics::new(1, 100 * MS))
        .add_child("X", CallStatistics::new(3, 10 * MS));
    session
        .add_root("right", CallStatistics::new(1, 100 * MS))
        .add_child("mid", CallStatistics::new(1, 50 * MS))
        .add_child("X", CallStatistics::new(5, 20 * MS));

    let leaves = aggregate_leaves(&session.roots);
    let x = leaves.iter().find(|leaf| leaf.leaf_name == "X").unwrap();

    assert_eq!(x.total_calls, 8);
    assert_eq!(x.total_nanos, 30 * MS);
    assert_eq!(x.total_millis(), 30.0);
    assert_eq!(leaves.len(), 4);
}

#[test]
fn test_sorted_by_total_duration_descending() {
    let mut session = ProfileSession::new("main");
    for (name, millis) in [("a", 50), ("b", 10), ("c", 30), ("d", 5)] {
        session.add_root(name, CallStatistics::new(1, millis * MS));
    }

    let leaves = aggregate_leaves(&session.roots);

    assert_eq!(names(leaves.iter()), vec!["a", "c", "b", "d"]);
    assert_eq!(names(top_leaves(&leaves, 2, 0)), vec!["a", "c"]);
}

#[test]
fn test_ties_keep_first_seen_order() {
    let mut session = ProfileSession::new("main");
    session.add_root("second", CallStatistics::new(1, 7));
    session.add_root("first", CallStatistics::new(1, 7));

    let leaves = aggregate_leaves(&session.roots);

    assert_eq!(names(leaves.iter()), vec!["second", "first"]);
}

#[test]
fn test_threshold_is_strict_and_applied_before_cap() {
    let mut session = ProfileSession::new("main");
    session.add_root("slow", CallStatistics::new(1, 40 * MS));
    session.add_root("edge", CallStatistics::new(1, 20 * MS));
    session.add_root("fast", CallStatistics::new(1, 1 * MS));

    let leaves = aggregate_leaves(&session.roots);

    assert_eq!(names(top_leaves(&leaves, 10, 20 * MS)), vec!["slow"]);
    assert_eq!(top_leaves(&leaves, 0, 0).count(), 0);
}

#[test]
fn test_nodes_without_stats_are_skipped_but_descended() {
    let mut session = ProfileSession::new("main");
    let umbrella = session.push_root(Node::new(TimerPath::root("all"), None));
    umbrella.add_child("work", CallStatistics::new(2, 5 * MS));

    let leaves = aggregate_leaves(&session.roots);

    assert_eq!(
        leaves,
        vec![LeafStatistics {
            leaf_name: "work".to_string(),
            total_calls: 2,
            total_nanos: 5 * MS,
        }]
    );
}

#[test]
fn test_empty_forest() {
    assert!(aggregate_leaves(&[]).is_empty());
}
