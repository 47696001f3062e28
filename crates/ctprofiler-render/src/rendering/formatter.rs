//! Line formatting for the text report.
//!
//! Everything here is stateless apart from `PrefixStack`, which lives in the
//! per-traversal context.

use crate::profile::{CallStatistics, TimerPath};
use crate::utils::config::{
    RenderConfig, CALL_COUNT_WIDTH, MILLIS_WIDTH, NANOS_PER_MILLI, TIMINGS_COLUMN_WIDTH,
};
use std::io::{self, Write};

/// Convert nanoseconds to fractional milliseconds
pub fn nanos_to_millis(nanos: u64) -> f64 {
    nanos as f64 / NANOS_PER_MILLI
}

/// Fixed-width "[calls] millis " column
pub fn format_timings(calls: u64, total_nanos: u64) -> String {
    format!(
        "[{:>cw$}] {:>mw$.2}ms ",
        calls,
        nanos_to_millis(total_nanos),
        cw = CALL_COUNT_WIDTH,
        mw = MILLIS_WIDTH
    )
}

/// Token layout of the report, taken from a `RenderConfig`
#[derive(Debug, Clone)]
pub struct TextFormatter {
    leaf_marker_token: String,
    indent_token: String,
    line_terminator: String,
}

impl TextFormatter {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            leaf_marker_token: config.leaf_marker_token.clone(),
            indent_token: config.indent_token.clone(),
            line_terminator: config.line_terminator.clone(),
        }
    }

    /// Indentation for a node at `level`
    ///
    /// Level 0 has none; deeper levels get `level - 1` indent tokens
    /// followed by the leaf marker.
    pub fn indent(&self, level: usize) -> String {
        if level == 0 {
            return String::new();
        }
        let mut out = self.indent_token.repeat(level - 1);
        out.push_str(&self.leaf_marker_token);
        out
    }

    pub fn line_terminator(&self) -> &str {
        &self.line_terminator
    }

    /// Write one call-tree node
    pub fn write_node_line(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        path: &TimerPath,
        stats: Option<&CallStatistics>,
    ) -> io::Result<()> {
        let timings = stats
            .map(|s| format_timings(s.calls, s.total_nanos))
            .unwrap_or_default();
        write!(
            out,
            "{}{}{}{}{}",
            prefix,
            timings,
            self.indent(path.level()),
            path.leaf_name(),
            self.line_terminator
        )
    }

    /// Write the line standing in for a run of suppressed siblings
    pub fn write_suppressed_line(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        level: usize,
        count: usize,
        threshold_nanos: u64,
    ) -> io::Result<()> {
        write!(
            out,
            "{}{:w$}{}({} paths each <{:.2}ms){}",
            prefix,
            "",
            self.indent(level),
            count,
            nanos_to_millis(threshold_nanos),
            self.line_terminator,
            w = TIMINGS_COLUMN_WIDTH
        )
    }

    /// Write the leaf summary header, preceded by a line holding only the prefix
    pub fn write_leaf_header(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        max_items: usize,
        threshold_nanos: u64,
    ) -> io::Result<()> {
        write!(
            out,
            "{prefix}{eol}{prefix}Top {:2} Durations by Leaf Names > {:>mw$.2}ms:{eol}",
            max_items,
            nanos_to_millis(threshold_nanos),
            prefix = prefix,
            eol = self.line_terminator,
            mw = MILLIS_WIDTH
        )
    }

    /// Write one row of the leaf summary
    pub fn write_leaf_row(
        &self,
        out: &mut dyn Write,
        prefix: &str,
        calls: u64,
        total_nanos: u64,
        leaf_name: &str,
    ) -> io::Result<()> {
        write!(
            out,
            "{}{}{}{}",
            prefix,
            format_timings(calls, total_nanos),
            leaf_name,
            self.line_terminator
        )
    }
}

/// Line prefixes of nested per-thread groups
///
/// The base prefix is never popped.
#[derive(Debug, Clone)]
pub struct PrefixStack {
    prefixes: Vec<String>,
}

impl PrefixStack {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            prefixes: vec![base.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.prefixes.last().map(String::as_str).unwrap_or_default()
    }

    /// The prefix one group deeper than the current one
    pub fn nested(&self, group_indent: &str) -> String {
        format!("{}{}", self.current(), group_indent)
    }

    pub fn push(&mut self, prefix: String) {
        self.prefixes.push(prefix);
    }

    pub fn pop(&mut self) -> Option<String> {
        if self.prefixes.len() > 1 {
            self.prefixes.pop()
        } else {
            None
        }
    }

    /// Number of groups currently entered
    pub fn depth(&self) -> usize {
        self.prefixes.len() - 1
    }
}
