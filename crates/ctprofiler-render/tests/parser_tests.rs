use ctprofiler_render::parser::{parse_session, read_session};
use ctprofiler_render::profile::CallStatistics;
use ctprofiler_render::utils::ProfileError;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"{
    "thread_name": "main",
    "roots": [
        {
            "name": "request",
            "stats": { "calls": 1, "total_nanos": 120000000 },
            "children": [
                { "name": "db", "stats": { "calls": 4, "total_nanos": 80000000 } },
                { "name": "cache" }
            ]
        }
    ],
    "subtasks": [
        {
            "thread_name": "worker-1",
            "roots": [{ "name": "job", "stats": { "calls": 2, "total_nanos": 5 } }]
        }
    ]
}"#;

#[test]
fn test_parse_session_builds_paths_from_nesting() {
    let session = parse_session(SAMPLE).unwrap();

    assert_eq!(session.thread_name, "main");
    assert_eq!(session.roots.len(), 1);

    let db = &session.roots[0].children[0];
    assert_eq!(db.path.level(), 1);
    assert_eq!(db.path.leaf_name(), "db");
    assert_eq!(db.path.to_string(), "request/db");
    assert_eq!(db.stats, Some(CallStatistics::new(4, 80_000_000)));

    let cache = &session.roots[0].children[1];
    assert!(cache.stats.is_none());
    assert!(cache.children.is_empty());

    assert_eq!(session.subtasks.len(), 1);
    assert_eq!(session.subtasks[0].thread_name, "worker-1");
    assert_eq!(session.node_count(), 3);
}

#[test]
fn test_accepts_camel_case_field_names() {
    let session = parse_session(
        r#"{
            "threadName": "t",
            "roots": [{ "name": "a", "stats": { "numberOfCalls": 3, "totalNanos": 9 } }]
        }"#,
    )
    .unwrap();

    assert_eq!(session.roots[0].stats, Some(CallStatistics::new(3, 9)));
}

#[test]
fn test_negative_counts_rejected() {
    let result = parse_session(
        r#"{ "thread_name": "t", "roots": [{ "name": "a", "stats": { "calls": -1, "total_nanos": 0 } }] }"#,
    );

    assert!(matches!(result, Err(ProfileError::JsonError(_))));
}

#[test]
fn test_empty_timer_name_rejected() {
    let result = parse_session(
        r#"{ "thread_name": "t", "roots": [{ "name": "a", "children": [{ "name": "" }] }] }"#,
    );

    assert!(matches!(result, Err(ProfileError::EmptySegment { .. })));
}

#[test]
fn test_missing_thread_name_rejected() {
    assert!(parse_session(r#"{ "roots": [] }"#).is_err());
}

#[test]
fn test_read_session_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let session = read_session(file.path()).unwrap();
    assert_eq!(session.roots[0].path.leaf_name(), "request");
}

#[test]
fn test_read_missing_file() {
    let result = read_session("/nonexistent/session.json");
    assert!(matches!(result, Err(ProfileError::IoError(_))));
}
