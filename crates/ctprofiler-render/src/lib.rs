//! ctprofiler report renderer
//!
//! Turns per-thread call trees recorded by a code-path profiler into a
//! human-readable text report: fast sibling calls are collapsed into summary
//! lines and the most expensive leaf timers are ranked at the end.
//!
//! This crate provides the core implementation for the `ctprofiler` CLI.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod profile;
pub mod rendering;
pub mod utils;
