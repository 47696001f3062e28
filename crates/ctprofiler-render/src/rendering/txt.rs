//! Plain-text report renderer.
//!
//! Output layout (default tokens, 5ms suppression threshold):
//!
//! ```text
//! [      1]       120.00ms request
//! [      4]        80.00ms |-db
//! [     12]        60.00ms | |-query
//!                          | |-(3 paths each <5.00ms)
//! [      1]        30.00ms |-render
//! ```

use super::formatter::{PrefixStack, TextFormatter};
use super::skip_collapse::{Flush, SkipCollapseEngine};
use super::Renderer;
use crate::aggregator::{aggregate_leaves, top_leaves};
use crate::profile::{CallStatistics, ProfileSession, TimerPath};
use crate::utils::config::RenderConfig;
use log::debug;
use std::io::{self, Write};

/// Renders sessions as an indented call tree followed by a leaf summary
#[derive(Debug, Clone)]
pub struct TxtRenderer {
    config: RenderConfig,
    formatter: TextFormatter,
}

/// State of one text traversal
pub struct TextContext<'w> {
    sink: &'w mut dyn Write,
    prefixes: PrefixStack,
    skip: SkipCollapseEngine,
}

impl TextContext<'_> {
    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl TxtRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let formatter = TextFormatter::new(&config);
        Self { config, formatter }
    }

    /// Fresh traversal state writing to `sink`
    pub fn context<'w>(&self, sink: &'w mut dyn Write) -> TextContext<'w> {
        TextContext {
            sink,
            prefixes: PrefixStack::new(self.config.line_prefix.clone()),
            skip: SkipCollapseEngine::new(self.config.suppression_threshold_nanos),
        }
    }

    fn write_flush(&self, cx: &mut TextContext<'_>, flush: Flush) -> io::Result<()> {
        match flush {
            Flush::Single { path, stats } => self.formatter.write_node_line(
                cx.sink,
                cx.prefixes.current(),
                &path,
                Some(&stats),
            ),
            Flush::Summary { level, count } => self.formatter.write_suppressed_line(
                cx.sink,
                cx.prefixes.current(),
                level,
                count,
                self.config.suppression_threshold_nanos,
            ),
        }
    }

    fn finish_run(&self, cx: &mut TextContext<'_>) -> io::Result<()> {
        match cx.skip.finish() {
            Some(flush) => self.write_flush(cx, flush),
            None => Ok(()),
        }
    }

    fn write_leaf_summary(&self, cx: &mut TextContext<'_>, session: &ProfileSession) -> io::Result<()> {
        let max_items = self.config.leaf_summary_max_items;
        let threshold = self.config.leaf_summary_threshold_nanos;
        let leaves = aggregate_leaves(&session.roots);

        self.formatter
            .write_leaf_header(cx.sink, cx.prefixes.current(), max_items, threshold)?;
        for leaf in top_leaves(&leaves, max_items, threshold) {
            self.formatter.write_leaf_row(
                cx.sink,
                cx.prefixes.current(),
                leaf.total_calls,
                leaf.total_nanos,
                &leaf.leaf_name,
            )?;
        }

        Ok(())
    }
}

impl Renderer for TxtRenderer {
    type Context<'w> = TextContext<'w>;

    fn begin_session(&self, cx: &mut TextContext<'_>, session: &ProfileSession) -> io::Result<()> {
        debug!(
            "Rendering session '{}' ({} nodes)",
            session.thread_name,
            session.node_count()
        );
        cx.skip.reset();
        Ok(())
    }

    fn end_session(&self, cx: &mut TextContext<'_>, session: &ProfileSession) -> io::Result<()> {
        self.finish_run(cx)?;

        if self.config.leaf_summary_enabled() {
            self.write_leaf_summary(cx, session)?;
        }

        Ok(())
    }

    fn enter_node(
        &self,
        cx: &mut TextContext<'_>,
        path: &TimerPath,
        stats: Option<&CallStatistics>,
    ) -> io::Result<bool> {
        let decision = cx.skip.enter(path, stats);

        if let Some(flush) = decision.flush {
            self.write_flush(cx, flush)?;
        }
        if decision.render {
            self.formatter
                .write_node_line(cx.sink, cx.prefixes.current(), path, stats)?;
        }

        Ok(decision.render)
    }

    fn exit_node(
        &self,
        _cx: &mut TextContext<'_>,
        _path: &TimerPath,
        _stats: Option<&CallStatistics>,
    ) -> io::Result<()> {
        Ok(())
    }

    fn enter_group(&self, cx: &mut TextContext<'_>, session: &ProfileSession) -> io::Result<()> {
        // The parent's open run belongs above the nested section
        self.finish_run(cx)?;

        let prefix = cx.prefixes.nested(&self.config.group_indent);
        write!(
            cx.sink,
            "{}[{}]{}",
            prefix,
            session.thread_name,
            self.formatter.line_terminator()
        )?;
        cx.prefixes.push(prefix);

        Ok(())
    }

    fn exit_group(&self, cx: &mut TextContext<'_>, _session: &ProfileSession) -> io::Result<()> {
        cx.prefixes.pop();
        Ok(())
    }
}
