//! Tests for engine module

use super::*;
use crate::error::Error;
use crate::output::Sink;
use crate::pagination::Fetch;
use crate::scope::{ExtractionRequest, RepositoryScope};
use crate::test_support::MockFetch;
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;
use test_case::test_case;

/// Sink that keeps every write in memory
#[derive(Default)]
struct RecordingSink {
    writes: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sink for RecordingSink {
    async fn write(&self, key: &str, payload: &str) -> crate::error::Result<String> {
        if self.fail {
            return Err(Error::sink("access denied"));
        }
        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), payload.to_string()));
        Ok(format!("mem://{key}"))
    }
}

/// Fetch that fails with a non-transport error
struct BrokenFetch;

#[async_trait]
impl Fetch for BrokenFetch {
    async fn fetch(&self, _path: &str, _params: &StringMap) -> crate::error::Result<Vec<JsonValue>> {
        Err(Error::config("credentials unreadable"))
    }
}

fn request(kind: &str, repository: RepositoryScope) -> ExtractionRequest {
    ExtractionRequest::new(kind, "acme", repository, StringMap::new()).unwrap()
}

fn repos_page(names: &[&str]) -> Vec<Vec<JsonValue>> {
    vec![names.iter().map(|n| json!({"name": n})).collect()]
}

// ============================================================================
// ExtractConfig / Stats Tests
// ============================================================================

#[test]
fn test_extract_config_default() {
    let config = ExtractConfig::default();
    assert_eq!(config.max_concurrency, 1);
    assert_eq!(ExtractConfig::new().with_max_concurrency(0).max_concurrency, 1);
    assert_eq!(ExtractConfig::new().with_max_concurrency(4).max_concurrency, 4);
}

#[test]
fn test_extract_stats() {
    let mut stats = ExtractStats::new();
    stats.add_unit(10);
    stats.add_unit(5);
    stats.add_skipped("commits:acme/empty");
    assert_eq!(stats.units, 3);
    assert_eq!(stats.records, 15);
    assert_eq!(stats.skipped_units, vec!["commits:acme/empty"]);
}

// ============================================================================
// Extraction Tests
// ============================================================================

#[tokio::test]
async fn test_extract_unscoped_kind() {
    let fetch = MockFetch::new().with_records("orgs/acme/members", 150, 100);
    let extractor = Extractor::new(fetch);

    let extraction = extractor
        .extract(&request("members", RepositoryScope::None))
        .await
        .unwrap();

    assert_eq!(extraction.records.len(), 150);
    assert_eq!(extraction.stats.units, 1);
    assert_eq!(extractor.fetcher().call_count(), 2);
}

#[tokio::test]
async fn test_extract_all_skips_failed_unit() {
    let fetch = MockFetch::new()
        .with_pages("orgs/acme/repos", repos_page(&["r1", "r2"]))
        .failing("repos/acme/r1/commits", 409)
        .with_pages(
            "repos/acme/r2/commits",
            vec![vec![
                json!({"sha": "a", "author": {"id": 1}, "committer": null}),
                json!({"sha": "b", "author": {"id": 2}, "committer": null}),
            ]],
        );
    let extractor = Extractor::new(fetch);

    let extraction = extractor
        .extract(&request("commits", RepositoryScope::All))
        .await
        .unwrap();

    let shas: Vec<_> = extraction.records.iter().map(|r| r["sha"].clone()).collect();
    assert_eq!(shas, vec![json!("a"), json!("b")]);
    assert_eq!(extraction.stats.units, 2);
    assert_eq!(extraction.stats.skipped_units, vec!["commits:acme/r1"]);
    assert_eq!(extraction.records[0]["author_id"], json!(1));
}

#[tokio::test]
async fn test_extract_list_preserves_unit_order() {
    let fetch = MockFetch::new()
        .with_pages("repos/acme/b/issues", vec![vec![json!({"n": "b1"}), json!({"n": "b2"})]])
        .with_pages("repos/acme/a/issues", vec![vec![json!({"n": "a1"})]])
        .with_pages("repos/acme/c/issues", vec![vec![json!({"n": "c1"})]]);
    let extractor = Extractor::new(fetch);
    let req = request(
        "issues",
        RepositoryScope::List(vec!["b".into(), "a".into(), "c".into()]),
    );

    let extraction = extractor.extract(&req).await.unwrap();

    let order: Vec<_> = extraction.records.iter().map(|r| r["n"].clone()).collect();
    assert_eq!(order, vec![json!("b1"), json!("b2"), json!("a1"), json!("c1")]);
}

#[tokio::test]
async fn test_extract_concurrent_keeps_order() {
    let fetch = MockFetch::new()
        .with_records("repos/acme/x/pulls", 120, 100)
        .with_pages("repos/acme/y/pulls", vec![vec![json!({"id": "y"})]]);
    let extractor =
        Extractor::new(fetch).with_config(ExtractConfig::new().with_max_concurrency(4));
    let req = request(
        "pull_requests",
        RepositoryScope::List(vec!["x".into(), "y".into()]),
    );

    let extraction = extractor.extract(&req).await.unwrap();

    assert_eq!(extraction.records.len(), 121);
    assert_eq!(extraction.records[0]["id"], json!(0));
    assert_eq!(extraction.records[119]["id"], json!(119));
    assert_eq!(extraction.records[120]["id"], json!("y"));
}

#[tokio::test]
async fn test_extract_non_unit_error_propagates() {
    let extractor = Extractor::new(BrokenFetch);

    let err = extractor
        .extract(&request("issues", RepositoryScope::single("widgets")))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_extract_invalid_per_page_before_network() {
    let fetch = MockFetch::new();
    let extractor = Extractor::new(fetch);
    let extra = StringMap::from([("per_page".to_string(), "many".to_string())]);
    let req =
        ExtractionRequest::new("members", "acme", RepositoryScope::None, extra).unwrap();

    let err = extractor.extract(&req).await.unwrap_err();

    assert!(matches!(err, Error::InvalidConfigValue { .. }));
    assert_eq!(extractor.fetcher().call_count(), 0);
}

#[tokio::test]
async fn test_extra_params_sent_with_every_page() {
    let fetch = MockFetch::new().with_records("repos/acme/w/issues", 100, 100);
    let extractor = Extractor::new(fetch);
    let extra = StringMap::from([("state".to_string(), "closed".to_string())]);
    let req =
        ExtractionRequest::new("issues", "acme", RepositoryScope::single("w"), extra).unwrap();

    extractor.extract(&req).await.unwrap();

    let calls = extractor.fetcher().calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|(_, p)| p["state"] == "closed"));
}

// ============================================================================
// Run Tests
// ============================================================================

#[tokio::test]
async fn test_run_writes_ndjson() {
    let fetch = MockFetch::new().with_pages(
        "orgs/acme/repos",
        vec![vec![
            json!({"id": 1, "name": "r1", "owner": {"id": 9, "login": "acme"}}),
            json!({"id": 2, "name": "r2", "owner": {"id": 9, "login": "acme"}}),
        ]],
    );
    let extractor = Extractor::new(fetch);
    let sink = RecordingSink::default();

    let summary = extractor
        .run(&request("repositories", RepositoryScope::None), &sink, "repos.json")
        .await
        .unwrap();

    let writes = sink.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, "repos.json");
    assert_eq!(
        writes[0].1,
        "{\"id\":1,\"name\":\"r1\",\"owner_id\":9}\n{\"id\":2,\"name\":\"r2\",\"owner_id\":9}"
    );
    assert_eq!(summary.location, "mem://repos.json");
    assert_eq!(summary.bytes, writes[0].1.len());
    assert_eq!(summary.stats.records, 2);
}

#[tokio::test]
async fn test_run_empty_still_writes() {
    let fetch = MockFetch::new()
        .with_pages("orgs/acme/repos", repos_page(&["r1"]))
        .failing("repos/acme/r1/comments", 404);
    let extractor = Extractor::new(fetch);
    let sink = RecordingSink::default();

    let summary = extractor
        .run(
            &request("commit_comments", RepositoryScope::All),
            &sink,
            "comments.json",
        )
        .await
        .unwrap();

    assert_eq!(sink.writes(), vec![("comments.json".to_string(), String::new())]);
    assert_eq!(summary.bytes, 0);
    assert_eq!(summary.stats.skipped_units.len(), 1);
}

#[tokio::test]
async fn test_run_sink_failure_fails_run() {
    let fetch = MockFetch::new().with_records("orgs/acme/members", 3, 100);
    let extractor = Extractor::new(fetch);
    let sink = RecordingSink::failing();

    let err = extractor
        .run(&request("members", RepositoryScope::None), &sink, "m.json")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Sink { .. }));
}

#[tokio::test]
async fn test_run_bad_credentials_fail_without_writing() {
    let fetch = MockFetch::new()
        .failing("repos/acme/a/commits", 401)
        .failing("repos/acme/b/commits", 401);
    let extractor = Extractor::new(fetch);
    let sink = RecordingSink::default();
    let req = request(
        "commits",
        RepositoryScope::List(vec!["a".into(), "b".into()]),
    );

    let err = extractor.run(&req, &sink, "k.json").await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
    assert!(sink.writes().is_empty());
    assert_eq!(extractor.fetcher().call_count(), 1);
}

#[test_case(403 ; "forbidden")]
#[test_case(429 ; "too many requests")]
#[test_case(500 ; "server error")]
#[tokio::test]
async fn test_run_aborts_on_run_wide_status(status: u16) {
    let fetch = MockFetch::new()
        .with_pages("repos/acme/a/issues", vec![vec![json!({"n": 1})]])
        .failing("repos/acme/b/issues", status);
    let extractor = Extractor::new(fetch);
    let sink = RecordingSink::default();
    let req = request(
        "issues",
        RepositoryScope::List(vec!["a".into(), "b".into()]),
    );

    let err = extractor.run(&req, &sink, "i.json").await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: s, .. } if s == status));
    assert!(sink.writes().is_empty());
}

#[test]
fn test_unsupported_kind_never_reaches_fetch() {
    let fetch = MockFetch::new();
    let result = ExtractionRequest::new("gists", "acme", RepositoryScope::None, StringMap::new());

    assert!(matches!(result, Err(Error::UnsupportedEntityKind { .. })));
    assert_eq!(fetch.call_count(), 0);
}
