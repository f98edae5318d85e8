use signup_form::{FieldName, FieldValues, validate};
use std::collections::BTreeMap;

use super::common::{fixtures_dir, values_structurally_equal};

/// A single validation test case from the suite.
#[derive(Debug, serde::Deserialize)]
struct TestCase {
    id: String,
    name: String,
    input: FieldValues,
    expected: Expected,
}

#[derive(Debug, serde::Deserialize)]
struct Expected {
    valid: bool,
    #[serde(default)]
    exact: bool,
    #[serde(default)]
    errors: BTreeMap<String, String>,
    #[serde(default)]
    absent: Vec<String>,
    #[serde(default)]
    record: Option<serde_json::Value>,
}

fn load_suite() -> Vec<TestCase> {
    let suite_path = fixtures_dir().join("validate/suite.yaml");
    assert!(
        suite_path.exists(),
        "Conformance fixture not found: {:?}",
        suite_path
    );
    let content = std::fs::read_to_string(&suite_path).unwrap();
    serde_saphyr::from_str(&content).unwrap()
}

fn field(path: &str) -> FieldName {
    path.parse()
        .unwrap_or_else(|e| panic!("fixture names unknown field: {}", e))
}

#[test]
fn validate_conformance_suite() {
    let cases = load_suite();
    assert!(!cases.is_empty(), "validation suite is empty");

    let mut failures = Vec::new();

    for case in &cases {
        let label = format!("[{}] {}", case.id, case.name);
        match validate(&case.input) {
            Ok(record) => {
                if !case.expected.valid {
                    failures.push(format!("{}: expected errors, got {:?}", label, record));
                    continue;
                }
                if let Some(expected) = &case.expected.record {
                    let actual = serde_json::to_value(&record).unwrap();
                    if !values_structurally_equal(&actual, expected) {
                        failures.push(format!(
                            "{}: record mismatch\n  expected: {}\n  actual:   {}",
                            label, expected, actual
                        ));
                    }
                }
            }
            Err(errors) => {
                if case.expected.valid {
                    failures.push(format!("{}: expected success, got {:?}", label, errors));
                    continue;
                }
                for (path, message) in &case.expected.errors {
                    let actual = errors.get(field(path));
                    if actual != Some(message.as_str()) {
                        failures.push(format!(
                            "{}: {} expected {:?}, got {:?}",
                            label, path, message, actual
                        ));
                    }
                }
                for path in &case.expected.absent {
                    if errors.contains(field(path)) {
                        failures.push(format!("{}: {} should carry no error", label, path));
                    }
                }
                if case.expected.exact && errors.len() != case.expected.errors.len() {
                    failures.push(format!(
                        "{}: expected exactly {} error(s), got {:?}",
                        label,
                        case.expected.errors.len(),
                        errors
                    ));
                }
            }
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} validation cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn validate_suite_is_idempotent() {
    for case in load_suite() {
        let first = validate(&case.input);
        let second = validate(&case.input);
        assert_eq!(first, second, "[{}] results differ between runs", case.id);
    }
}
