//! Rendering of profiling sessions.
//!
//! A traversal walks a session depth-first and drives a `Renderer` through
//! its six callbacks. All mutable state of one traversal lives in the
//! renderer's context value, so a single renderer can serve any number of
//! independent traversals.
//!
//! # Example
//! ```ignore
//! use ctprofiler_render::rendering::render_to_string;
//! use ctprofiler_render::utils::RenderConfig;
//!
//! let config = RenderConfig::new().with_suppression_threshold_ms(5.0);
//! let report = render_to_string(&config, &session)?;
//! ```

pub mod formatter;
pub mod skip_collapse;
pub mod txt;
pub mod walker;

pub use formatter::{PrefixStack, TextFormatter};
pub use skip_collapse::{Decision, Flush, SkipCollapseEngine};
pub use txt::{TextContext, TxtRenderer};
pub use walker::walk_session;

use crate::profile::{CallStatistics, ProfileSession, TimerPath};
use crate::utils::config::RenderConfig;
use log::debug;
use std::io::{self, Write};

/// Callbacks driven by a depth-first traversal of one session
///
/// Sink errors are returned unmodified and abort the traversal.
pub trait Renderer {
    /// Mutable state of one traversal, including the output sink
    type Context<'w>;

    /// Start of one thread's report
    fn begin_session(&self, cx: &mut Self::Context<'_>, session: &ProfileSession)
        -> io::Result<()>;

    /// End of one thread's report
    fn end_session(&self, cx: &mut Self::Context<'_>, session: &ProfileSession) -> io::Result<()>;

    /// Called before a node's children
    ///
    /// Returns `false` when the node was suppressed; its children are then
    /// not rendered beneath it.
    fn enter_node(
        &self,
        cx: &mut Self::Context<'_>,
        path: &TimerPath,
        stats: Option<&CallStatistics>,
    ) -> io::Result<bool>;

    /// Called after a node's children
    fn exit_node(
        &self,
        cx: &mut Self::Context<'_>,
        path: &TimerPath,
        stats: Option<&CallStatistics>,
    ) -> io::Result<()>;

    /// Start of a nested per-thread session
    fn enter_group(&self, cx: &mut Self::Context<'_>, session: &ProfileSession)
        -> io::Result<()>;

    /// End of a nested per-thread session; called even if rendering it failed
    fn exit_group(&self, cx: &mut Self::Context<'_>, session: &ProfileSession) -> io::Result<()>;
}

/// Render a session as a text report into `sink`
pub fn render_session(
    config: &RenderConfig,
    session: &ProfileSession,
    sink: &mut dyn Write,
) -> io::Result<()> {
    let renderer = TxtRenderer::new(config.clone());
    let mut cx = renderer.context(sink);
    walk_session(&renderer, &mut cx, session)?;
    cx.flush()
}

/// Render a session as a text report into a `String`
pub fn render_to_string(config: &RenderConfig, session: &ProfileSession) -> io::Result<String> {
    let mut buffer: Vec<u8> = Vec::new();
    render_session(config, session, &mut buffer)?;

    debug!("Rendered report ({} bytes)", buffer.len());

    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
