//! Tests for the read-only store adapter

use dinghy_store::{DependencyStore, MemoryStore, ReadOnlyStore, StoreClient};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

/// Failure modes of an external store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum ClientError {
    #[error("no row for {0}")]
    NotFound(String),
    #[error("connection refused")]
    Unavailable,
}

/// Client that answers from fixed data, or fails every call.
struct FixedClient {
    roots: Vec<String>,
    raw_data: Option<String>,
    down: bool,
}

impl FixedClient {
    fn healthy(roots: &[&str], raw_data: Option<&str>) -> Self {
        Self {
            roots: roots.iter().map(|r| r.to_string()).collect(),
            raw_data: raw_data.map(str::to_string),
            down: false,
        }
    }

    fn down() -> Self {
        Self {
            roots: Vec::new(),
            raw_data: None,
            down: true,
        }
    }
}

impl StoreClient for FixedClient {
    type Error = ClientError;

    fn roots(&self, _url: &str) -> Result<Vec<String>, ClientError> {
        if self.down {
            return Err(ClientError::Unavailable);
        }
        Ok(self.roots.clone())
    }

    fn raw_data(&self, url: &str) -> Result<String, ClientError> {
        if self.down {
            return Err(ClientError::Unavailable);
        }
        self.raw_data
            .clone()
            .ok_or_else(|| ClientError::NotFound(url.to_string()))
    }
}

fn snapshot<S: DependencyStore>(
    store: &S,
    url: &str,
) -> (Result<Vec<String>, S::Error>, Result<String, S::Error>) {
    (store.get_roots(url), store.get_raw_data(url))
}

#[test]
fn test_reads_forward_to_client() {
    let store = ReadOnlyStore::new(FixedClient::healthy(&["app/dinghyfile"], Some("{}")));

    assert_eq!(store.get_roots("module.json"), Ok(vec!["app/dinghyfile".to_string()]));
    assert_eq!(store.get_raw_data("app/dinghyfile"), Ok("{}".to_string()));
}

#[test]
fn test_no_roots_is_empty_sequence() {
    let store = ReadOnlyStore::new(FixedClient::healthy(&[], None));
    assert_eq!(store.get_roots("module.json"), Ok(Vec::new()));
}

#[test]
fn test_client_errors_are_forwarded_verbatim() {
    let missing = ReadOnlyStore::new(FixedClient::healthy(&[], None));
    assert_eq!(
        missing.get_raw_data("app/dinghyfile"),
        Err(ClientError::NotFound("app/dinghyfile".into()))
    );

    let down = ReadOnlyStore::new(FixedClient::down());
    assert_eq!(down.get_roots("module.json"), Err(ClientError::Unavailable));
    assert_eq!(down.get_raw_data("module.json"), Err(ClientError::Unavailable));
}

#[test]
fn test_set_raw_data_always_succeeds() {
    let store = ReadOnlyStore::new(FixedClient::down());
    assert_eq!(store.set_raw_data("app/dinghyfile", "{}"), Ok(()));
}

#[rstest]
#[case("set_deps")]
#[case("set_raw_data")]
#[case("clear")]
fn test_mutations_do_not_change_reads(#[case] mutation: &str) {
    let backing = Arc::new(MemoryStore::new());
    backing.set_deps("app/dinghyfile", &["module.json".to_string()]);
    backing.set_raw_data("app/dinghyfile", "{\"stages\": []}").unwrap();

    let store = ReadOnlyStore::new(Arc::clone(&backing));

    let roots_before = snapshot(&store, "module.json");
    let raw_before = snapshot(&store, "app/dinghyfile");

    match mutation {
        "set_deps" => store.set_deps("other/dinghyfile", &["module.json".to_string()]),
        "set_raw_data" => store.set_raw_data("app/dinghyfile", "overwritten").unwrap(),
        _ => store.clear(),
    }

    assert_eq!(snapshot(&store, "module.json"), roots_before);
    assert_eq!(snapshot(&store, "app/dinghyfile"), raw_before);
    assert_eq!(
        store.get_roots("module.json").unwrap(),
        vec!["app/dinghyfile".to_string()]
    );
}

#[test]
fn test_read_only_view_sees_backing_writes() {
    let backing = Arc::new(MemoryStore::new());
    let store = ReadOnlyStore::new(Arc::clone(&backing));

    assert!(store.get_raw_data("app/dinghyfile").is_err());

    backing.set_raw_data("app/dinghyfile", "{}").unwrap();

    assert_eq!(store.get_raw_data("app/dinghyfile").unwrap(), "{}");
}

fn roots_via_trait<S: DependencyStore>(store: &S, url: &str) -> Vec<String> {
    store.get_roots(url).unwrap_or_default()
}

#[test]
fn test_both_variants_satisfy_the_capability() {
    let memory = MemoryStore::new();
    memory.set_deps("app/dinghyfile", &["module.json".to_string()]);
    let read_only = ReadOnlyStore::new(FixedClient::healthy(&["app/dinghyfile"], None));

    assert_eq!(roots_via_trait(&memory, "module.json"), vec!["app/dinghyfile"]);
    assert_eq!(roots_via_trait(&read_only, "module.json"), vec!["app/dinghyfile"]);
}
