//! Session parsing and schema definitions.
//!
//! This module handles:
//! - Parsing session JSON into the in-memory profile model
//! - Deriving timer paths from node nesting
//! - Validating the result before it reaches a renderer

pub mod schema;

pub use schema::{NodeRecord, SessionRecord};

use crate::profile::{validate_session, Node, ProfileSession, TimerPath};
use crate::utils::error::ProfileError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse a session from a JSON string
///
/// # Errors
/// * `ProfileError::JsonError` - Invalid JSON structure
/// * Any validation error from `validate_session`
pub fn parse_session(json: &str) -> Result<ProfileSession, ProfileError> {
    let record: SessionRecord = serde_json::from_str(json)?;
    from_record(record)
}

/// Read and parse a session JSON file
///
/// # Errors
/// * `ProfileError::IoError` - File read error
/// * `ProfileError::JsonError` - JSON parse error
/// * Any validation error from `validate_session`
pub fn read_session(input_path: impl AsRef<Path>) -> Result<ProfileSession, ProfileError> {
    let input_path = input_path.as_ref();

    debug!("Reading session from: {}", input_path.display());

    let file = File::open(input_path)?;
    let record: SessionRecord = serde_json::from_reader(BufReader::new(file))?;

    from_record(record)
}

/// Convert a parsed document into a validated session
pub fn from_record(record: SessionRecord) -> Result<ProfileSession, ProfileError> {
    let session = build_session(record);
    validate_session(&session)?;

    debug!(
        "Session loaded: thread '{}', {} nodes, {} subtasks",
        session.thread_name,
        session.node_count(),
        session.subtasks.len()
    );

    Ok(session)
}

fn build_session(record: SessionRecord) -> ProfileSession {
    ProfileSession {
        thread_name: record.thread_name,
        roots: record
            .roots
            .into_iter()
            .map(|root| {
                let path = TimerPath::root(root.name.clone());
                build_node(path, root)
            })
            .collect(),
        subtasks: record.subtasks.into_iter().map(build_session).collect(),
    }
}

fn build_node(path: TimerPath, record: NodeRecord) -> Node {
    let children = record
        .children
        .into_iter()
        .map(|child| {
            let child_path = path.child(child.name.clone());
            build_node(child_path, child)
        })
        .collect();

    Node {
        path,
        stats: record.stats,
        children,
    }
}
