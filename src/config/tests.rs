// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;

use std::io::Write;
use std::thread;

use tempfile::{NamedTempFile, TempDir};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file
}

#[test]
fn test_config_from_string() {
    let config_content = r#"
# application settings
$base = /srv/app
name = TestApp
debug

server {
    host = localhost
    port: 8080
    root = $base/public
    tls {
        cert = "$base/cert.pem"
    }
}
"#;
    let config = Config::parse(config_content).expect("Failed to parse config");

    assert_eq!(config.get_str("name"), Some("TestApp"));
    assert_eq!(config.get("debug"), Some(Entry::Scalar("")));
    assert!(config.exists("server"));
    assert!(!config.exists("base"));
    assert!(!config.exists("nonexistent"));

    let server = config.group("server").expect("server is a group");
    assert_eq!(server.get_str("host"), Some("localhost"));
    assert_eq!(server.get_str("port"), Some("8080"));
    assert_eq!(server.get_str("root"), Some("/srv/app/public"));
    assert_eq!(server.find("tls/cert"), Some(Entry::Scalar("$base/cert.pem")));
    assert_eq!(config.find("server/tls/cert").and_then(|e| e.as_str()), Some("$base/cert.pem"));
}

#[test]
fn test_get_missing_and_wrong_kind() {
    let config: Config = "a = 1\ng {\n}\n".parse().unwrap();
    assert_eq!(config.get("missing"), None);
    assert_eq!(config.get_str("g"), None);
    assert_eq!(config.group("a"), None);
    assert_eq!(config.find("a/b"), None);
    assert_eq!(config.find("g/b"), None);
    assert!(config.get("g").unwrap().is_group());
}

#[test]
fn test_find_root_and_slashes() {
    let config: Config = "g {\n  h {\n    k = v\n  }\n}\n".parse().unwrap();
    assert_eq!(config.find(""), Some(Entry::Group(config.view())));
    assert_eq!(config.find("/g/h/k/").and_then(|e| e.as_str()), Some("v"));
}

#[test]
fn test_order_preservation() {
    let config_content = "
first = 1
second = 2
third = 3
nested {
    gamma = c
    alpha = a
    beta = b
}
";
    let config = Config::parse(config_content).unwrap();

    let top: Vec<&str> = config.keys().collect();
    assert_eq!(top, vec!["first", "second", "third", "nested"]);

    let nested = config.group("nested").unwrap();
    let pairs: Vec<(&str, &str)> = nested
        .iter()
        .map(|(k, e)| (k, e.as_str().unwrap()))
        .collect();
    assert_eq!(pairs, vec![("gamma", "c"), ("alpha", "a"), ("beta", "b")]);
    assert_eq!(nested.keys().collect::<Vec<_>>(), vec!["gamma", "alpha", "beta"]);
    assert_eq!(nested.iter().len(), 3);

    let mut seen = Vec::new();
    for (key, entry) in &config {
        seen.push((key, entry.is_group()));
    }
    assert_eq!(seen.last(), Some(&("nested", true)));
}

#[test]
fn test_subgroup_views_share_the_tree() {
    let config: Config = "outer {\n  inner = 5\n}\n".parse().unwrap();

    let first = config.group("outer").unwrap();
    let second = config.get("outer").and_then(|e| e.as_group()).unwrap();
    assert!(std::ptr::eq(first.as_group(), second.as_group()));
    assert_eq!(first.get("inner"), Some(Entry::Scalar("5")));
    assert_eq!(first.len(), 1);
    assert!(!first.is_empty());
}

#[test]
fn test_concurrent_readers() {
    let config: Config = "a {\n  b = 1\n  c = 2\n}\n".parse().unwrap();
    let view = config.view();

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || {
                let group = view.group("a").unwrap();
                assert_eq!(group.get_str("b"), Some("1"));
                assert_eq!(group.iter().count(), 2);
            });
        }
    });
}

#[test]
fn test_default_is_empty() {
    let config = Config::default();
    assert!(config.is_empty());
    assert_eq!(config.len(), 0);
    assert_eq!(config.source(), None);
    assert_eq!(config.iter().count(), 0);
}

#[test]
fn test_into_value() {
    let config: Config = "k = v\n".parse().unwrap();
    let value = config.into_value();
    assert_eq!(value.as_group().and_then(|g| g["k"].as_str()), Some("v"));
}

// ===== File loading =====

#[test]
fn test_from_file() {
    let file = write_config("name = from file\n");
    let config = Config::from_file(file.path()).expect("Failed to load config");

    assert_eq!(config.get_str("name"), Some("from file"));
    assert_eq!(config.source(), Some(file.path()));
}

#[test]
fn test_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.conf");

    let err = Config::from_file(&path).unwrap_err();
    assert_eq!(
        err,
        CfgError::FileNotFound {
            path: path.to_string_lossy().to_string()
        }
    );
    assert_eq!(err.code(), 301);
    assert_eq!(err.line(), None);
}

#[test]
fn test_from_file_wraps_parse_errors() {
    let file = write_config("a = 1\n\na = 2\n");
    let err = Config::from_file(file.path()).unwrap_err();

    match &err {
        CfgError::InFile { path, source } => {
            assert_eq!(path, &file.path().to_string_lossy().to_string());
            assert_eq!(
                **source,
                CfgError::DuplicateKey {
                    path: "a".into(),
                    line: 3
                }
            );
        }
        other => panic!("Expected InFile, got {:?}", other),
    }
    assert_eq!(err.code(), 203);
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.root().code(), 203);

    let message = err.to_string();
    assert!(message.contains(&file.path().to_string_lossy().to_string()));
    assert!(message.contains("Duplicate config key 'a' on line 3"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_from_file_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert_eq!(err.code(), 302);
}

#[test]
fn test_from_file_with_fallback() {
    let dir = TempDir::new().unwrap();
    let primary = dir.path().join("primary.conf");
    let fallback = dir.path().join("fallback.conf");
    std::fs::write(&fallback, "source = fallback\n").unwrap();

    let config = Config::from_file_with_fallback(&primary, &fallback).unwrap();
    assert_eq!(config.get_str("source"), Some("fallback"));
    assert_eq!(config.source(), Some(fallback.as_path()));

    std::fs::write(&primary, "source = primary\n").unwrap();
    let config = Config::from_file_with_fallback(&primary, &fallback).unwrap();
    assert_eq!(config.get_str("source"), Some("primary"));
}

#[test]
fn test_fallback_does_not_mask_parse_errors() {
    let dir = TempDir::new().unwrap();
    let primary = dir.path().join("primary.conf");
    let fallback = dir.path().join("fallback.conf");
    std::fs::write(&primary, "g {\n").unwrap();
    std::fs::write(&fallback, "ok = 1\n").unwrap();

    let err = Config::from_file_with_fallback(&primary, &fallback).unwrap_err();
    assert_eq!(err.code(), 206);
}

#[test]
fn test_fallback_both_missing() {
    let dir = TempDir::new().unwrap();
    let primary = dir.path().join("a.conf");
    let fallback = dir.path().join("b.conf");

    let err = Config::from_file_with_fallback(&primary, &fallback).unwrap_err();
    match err {
        CfgError::FileNotFound { path } => {
            assert!(path.contains("a.conf"));
            assert!(path.contains("fallback: "));
        }
        other => panic!("Expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_resolve_path_leaves_plain_paths() {
    assert_eq!(resolve_path(Path::new("conf/app.conf")).unwrap(), PathBuf::from("conf/app.conf"));
    assert_eq!(resolve_path(Path::new("~user/app.conf")).unwrap(), PathBuf::from("~user/app.conf"));
}

#[test]
fn test_resolve_path_expands_home() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(resolve_path(Path::new("~/app.conf")).unwrap(), home.join("app.conf"));
    }
}
