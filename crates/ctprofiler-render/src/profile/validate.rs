//! Precondition checks on upstream profiling data.
//!
//! Counts and durations are unsigned by construction, so what is left to
//! check is the shape of the timer paths.

use super::{Node, ProfileSession};
use crate::utils::error::ProfileError;
use log::debug;

/// Validate a session and all of its subtasks
///
/// # Errors
/// * `ProfileError::RootLevel` - A root node is not at level 0
/// * `ProfileError::LevelMismatch` - A child is not exactly one level below its parent
/// * `ProfileError::EmptySegment` - A timer name is empty
pub fn validate_session(session: &ProfileSession) -> Result<(), ProfileError> {
    debug!(
        "Validating session '{}' ({} nodes, {} subtasks)",
        session.thread_name,
        session.node_count(),
        session.subtasks.len()
    );

    for root in &session.roots {
        if root.path.level() != 0 {
            return Err(ProfileError::RootLevel {
                name: root.path.to_string(),
                level: root.path.level(),
            });
        }
        validate_node(root)?;
    }

    for subtask in &session.subtasks {
        validate_session(subtask)?;
    }

    Ok(())
}

fn validate_node(node: &Node) -> Result<(), ProfileError> {
    if let Some(empty_at) = node.path.segments().iter().position(String::is_empty) {
        return Err(ProfileError::EmptySegment {
            parent: node.path.segments()[..empty_at].join("/"),
        });
    }

    let expected = node.path.level() + 1;
    for child in &node.children {
        if child.path.level() != expected {
            return Err(ProfileError::LevelMismatch {
                name: child.path.to_string(),
                expected,
                actual: child.path.level(),
            });
        }
        validate_node(child)?;
    }

    Ok(())
}
