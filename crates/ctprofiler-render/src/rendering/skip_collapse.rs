//! Suppression of fast call-tree nodes.
//!
//! Siblings below the suppression threshold are not rendered one by one.
//! Consecutive suppressed siblings on one level form a run which is flushed
//! as soon as a node breaks it: either a node at another level, or a node at
//! or above the threshold. A run of one is flushed as the node itself, longer
//! runs as a single summary line.

use crate::profile::{CallStatistics, TimerPath};

/// What a flushed run turns into
#[derive(Debug, Clone, PartialEq)]
pub enum Flush {
    /// The run held a single node; render it as usual
    Single {
        path: TimerPath,
        stats: CallStatistics,
    },

    /// Render one summary line for `count` suppressed siblings at `level`
    Summary { level: usize, count: usize },
}

/// Outcome of offering one node to the engine
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// A pending run closed by this node; must be written before the node
    pub flush: Option<Flush>,

    /// Whether the node itself is rendered
    pub render: bool,
}

#[derive(Debug, Clone)]
struct SuppressedRun {
    level: usize,
    count: usize,
    last_path: TimerPath,
    last_stats: CallStatistics,
}

impl SuppressedRun {
    fn start(path: &TimerPath, stats: CallStatistics) -> Self {
        Self {
            level: path.level(),
            count: 1,
            last_path: path.clone(),
            last_stats: stats,
        }
    }

    fn extend(&mut self, path: &TimerPath, stats: CallStatistics) {
        self.count += 1;
        self.last_path = path.clone();
        self.last_stats = stats;
    }

    fn into_flush(self) -> Flush {
        if self.count == 1 {
            Flush::Single {
                path: self.last_path,
                stats: self.last_stats,
            }
        } else {
            Flush::Summary {
                level: self.level,
                count: self.count,
            }
        }
    }
}

/// Per-traversal suppression state
///
/// `None` in `run` is the not-skipping state; `Some` is skipping at the
/// run's level.
#[derive(Debug, Clone)]
pub struct SkipCollapseEngine {
    threshold_nanos: u64,
    run: Option<SuppressedRun>,
}

impl SkipCollapseEngine {
    pub fn new(threshold_nanos: u64) -> Self {
        Self {
            threshold_nanos,
            run: None,
        }
    }

    /// Level of the open run, if any
    pub fn skipping_level(&self) -> Option<usize> {
        self.run.as_ref().map(|run| run.level)
    }

    /// Number of nodes in the open run
    pub fn suppressed_count(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.count)
    }

    /// Decide whether a node is rendered or folded into a run
    ///
    /// Nodes without statistics are always rendered and leave the run alone.
    pub fn enter(&mut self, path: &TimerPath, stats: Option<&CallStatistics>) -> Decision {
        let Some(stats) = stats else {
            return Decision {
                flush: None,
                render: true,
            };
        };

        let below_threshold = stats.total_nanos < self.threshold_nanos;
        let level_changed = self
            .run
            .as_ref()
            .map_or(true, |run| run.level != path.level());

        let flush = if !below_threshold || level_changed {
            self.run.take().map(SuppressedRun::into_flush)
        } else {
            None
        };

        if !below_threshold {
            return Decision {
                flush,
                render: true,
            };
        }

        match &mut self.run {
            Some(run) => run.extend(path, *stats),
            None => self.run = Some(SuppressedRun::start(path, *stats)),
        }

        Decision {
            flush,
            render: false,
        }
    }

    /// Close whatever run is still open, e.g. when a session ends
    pub fn finish(&mut self) -> Option<Flush> {
        self.run.take().map(SuppressedRun::into_flush)
    }

    /// Drop any open run without flushing it
    pub fn reset(&mut self) {
        self.run = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    fn stats(millis: u64) -> CallStatistics {
        CallStatistics::new(1, millis * MS)
    }

    #[test]
    fn test_zero_threshold_never_suppresses() {
        let mut engine = SkipCollapseEngine::new(0);
        let path = TimerPath::root("a");
        let decision = engine.enter(&path, Some(&CallStatistics::new(0, 0)));
        assert!(decision.render);
        assert!(decision.flush.is_none());
    }

    #[test]
    fn test_run_is_counted_and_broken_by_slow_sibling() {
        let mut engine = SkipCollapseEngine::new(5 * MS);
        let parent = TimerPath::root("p");

        for (i, millis) in [1, 2, 3].into_iter().enumerate() {
            let decision = engine.enter(&parent.child(format!("c{i}")), Some(&stats(millis)));
            assert!(!decision.render);
            assert!(decision.flush.is_none());
        }
        assert_eq!(engine.suppressed_count(), 3);
        assert_eq!(engine.skipping_level(), Some(1));

        let decision = engine.enter(&parent.child("slow"), Some(&stats(9)));
        assert!(decision.render);
        assert_eq!(decision.flush, Some(Flush::Summary { level: 1, count: 3 }));
        assert_eq!(engine.skipping_level(), None);
    }

    #[test]
    fn test_single_suppressed_node_flushes_as_itself() {
        let mut engine = SkipCollapseEngine::new(5 * MS);
        let fast = TimerPath::root("p").child("fast");
        engine.enter(&fast, Some(&stats(1)));

        let decision = engine.enter(&TimerPath::root("q"), Some(&stats(10)));
        assert_eq!(
            decision.flush,
            Some(Flush::Single {
                path: fast,
                stats: stats(1)
            })
        );
    }

    #[test]
    fn test_level_change_closes_run_even_below_threshold() {
        let mut engine = SkipCollapseEngine::new(5 * MS);
        let parent = TimerPath::root("p");
        engine.enter(&parent.child("a"), Some(&stats(1)));
        engine.enter(&parent.child("b"), Some(&stats(1)));

        let decision = engine.enter(&TimerPath::root("q"), Some(&stats(1)));
        assert!(!decision.render);
        assert_eq!(decision.flush, Some(Flush::Summary { level: 1, count: 2 }));
        assert_eq!(engine.skipping_level(), Some(0));
        assert_eq!(engine.suppressed_count(), 1);
    }

    #[test]
    fn test_missing_stats_leave_run_untouched() {
        let mut engine = SkipCollapseEngine::new(5 * MS);
        let parent = TimerPath::root("p");
        engine.enter(&parent.child("a"), Some(&stats(1)));

        let decision = engine.enter(&parent.child("umbrella"), None);
        assert!(decision.render);
        assert!(decision.flush.is_none());
        assert_eq!(engine.suppressed_count(), 1);

        engine.enter(&parent.child("b"), Some(&stats(1)));
        assert_eq!(engine.suppressed_count(), 2);
    }

    #[test]
    fn test_finish_flushes_pending_run() {
        let mut engine = SkipCollapseEngine::new(5 * MS);
        let parent = TimerPath::root("p");
        engine.enter(&parent.child("a"), Some(&stats(1)));
        engine.enter(&parent.child("b"), Some(&stats(1)));

        assert_eq!(engine.finish(), Some(Flush::Summary { level: 1, count: 2 }));
        assert_eq!(engine.finish(), None);
    }
}
