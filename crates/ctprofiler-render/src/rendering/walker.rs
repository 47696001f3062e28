//! Depth-first traversal driving a `Renderer`.
//!
//! Order per session: `begin_session`, every root subtree, every subtask
//! wrapped in `enter_group`/`exit_group`, then `end_session`.

use super::Renderer;
use crate::profile::{Node, ProfileSession};
use std::io;

/// Walk one session, including its nested subtasks
pub fn walk_session<R>(
    renderer: &R,
    cx: &mut R::Context<'_>,
    session: &ProfileSession,
) -> io::Result<()>
where
    R: Renderer + ?Sized,
{
    renderer.begin_session(cx, session)?;

    for root in &session.roots {
        walk_node(renderer, cx, root)?;
    }

    for subtask in &session.subtasks {
        walk_group(renderer, cx, subtask)?;
    }

    renderer.end_session(cx, session)
}

fn walk_group<R>(renderer: &R, cx: &mut R::Context<'_>, subtask: &ProfileSession) -> io::Result<()>
where
    R: Renderer + ?Sized,
{
    renderer.enter_group(cx, subtask)?;
    let rendered = walk_session(renderer, cx, subtask);
    let released = renderer.exit_group(cx, subtask);
    rendered.and(released)
}

fn walk_node<R>(renderer: &R, cx: &mut R::Context<'_>, node: &Node) -> io::Result<()>
where
    R: Renderer + ?Sized,
{
    let stats = node.stats.as_ref();

    if renderer.enter_node(cx, &node.path, stats)? {
        for child in &node.children {
            walk_node(renderer, cx, child)?;
        }
    }

    renderer.exit_node(cx, &node.path, stats)
}
