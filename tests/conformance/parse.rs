use signup_form::parse::parse;
use std::fs;
use std::path::{Path, PathBuf};

use super::common::fixtures_dir;

fn fixture_files(dir: &Path) -> Vec<PathBuf> {
    assert!(
        dir.exists(),
        "Conformance fixture directory not found: {:?}",
        dir
    );
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("yaml") | Some("json")
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn parse_valid_fixtures() {
    let files = fixture_files(&fixtures_dir().join("parse/valid"));
    assert!(!files.is_empty(), "No valid parse fixtures found");

    for path in files {
        let content = fs::read_to_string(&path).unwrap();
        let result = parse(&content);
        assert!(
            result.is_ok(),
            "Expected valid parse for {:?}, got error: {:?}",
            path.file_name().unwrap(),
            result.err()
        );
    }
}

#[test]
fn parse_invalid_fixtures() {
    let files = fixture_files(&fixtures_dir().join("parse/invalid"));
    assert!(!files.is_empty(), "No invalid parse fixtures found");

    for path in files {
        let content = fs::read_to_string(&path).unwrap();
        let result = parse(&content);
        assert!(
            result.is_err(),
            "Expected parse error for {:?}, got: {:?}",
            path.file_name().unwrap(),
            result.ok()
        );
    }
}
