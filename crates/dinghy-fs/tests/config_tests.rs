use dinghy_fs::{ConfigStore, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Profile {
    parser_format: String,
    github_token: String,
}

#[rstest]
#[case("dinghy.yml", "parserFormat: yaml\ngithubToken: abc\n")]
#[case("dinghy.yaml", "parserFormat: yaml\ngithubToken: abc\n")]
#[case("dinghy.json", r#"{"parserFormat": "yaml", "githubToken": "abc"}"#)]
#[case("dinghy.toml", "parserFormat = \"yaml\"\ngithubToken = \"abc\"\n")]
fn test_load_by_extension(#[case] file_name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(file_name);
    fs::write(&path, content).unwrap();

    let profile: Profile = ConfigStore::new().load(&path).unwrap();

    assert_eq!(
        profile,
        Profile {
            parser_format: "yaml".into(),
            github_token: "abc".into(),
        }
    );
}

#[test]
fn test_load_yaml_into_untyped_value() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("spinnaker.yml");
    fs::write(&path, "redis:\n  baseUrl: redis:6379\n  password: hunter2\n").unwrap();

    let value: serde_json::Value = ConfigStore::new().load(&path).unwrap();

    assert_eq!(value["redis"]["baseUrl"], "redis:6379");
    assert_eq!(value["redis"]["password"], "hunter2");
}

#[test]
fn test_parse_error_names_format_and_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = ConfigStore::new()
        .load::<serde_json::Value>(&path)
        .unwrap_err();

    match err {
        Error::ConfigParse {
            path: err_path,
            format,
            ..
        } => {
            assert_eq!(err_path, path);
            assert_eq!(format, "JSON");
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dinghy-local.yml");

    let err = ConfigStore::new()
        .load::<serde_json::Value>(&path)
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
