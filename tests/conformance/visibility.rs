use signup_form::{FieldName, FieldValues, visible_fields};

use super::common::fixtures_dir;

#[derive(Debug, serde::Deserialize)]
struct TestCase {
    id: String,
    name: String,
    input: FieldValues,
    visible: Vec<FieldName>,
}

#[test]
fn visibility_conformance_suite() {
    let suite_path = fixtures_dir().join("visibility/suite.yaml");
    let content = std::fs::read_to_string(&suite_path)
        .unwrap_or_else(|e| panic!("cannot read {:?}: {}", suite_path, e));
    let cases: Vec<TestCase> = serde_saphyr::from_str(&content).unwrap();
    assert!(!cases.is_empty());

    for case in &cases {
        let actual: Vec<FieldName> = visible_fields(&case.input).into_iter().collect();
        assert_eq!(
            actual, case.visible,
            "[{}] {}: visible set mismatch",
            case.id, case.name
        );
    }
}
