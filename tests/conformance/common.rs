use std::path::PathBuf;

pub fn fixtures_dir() -> PathBuf {
    std::env::var("SIGNUP_FORM_FIXTURES_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Structural equality: ignore key ordering, treat missing keys as null.
pub fn values_structurally_equal(a: &serde_json::Value, b: &serde_json::Value) -> bool {
    use serde_json::Value;
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            let get = |m: &serde_json::Map<String, Value>, k: &str| {
                m.get(k).cloned().unwrap_or(Value::Null)
            };
            a.keys()
                .chain(b.keys())
                .all(|key| values_structurally_equal(&get(a, key), &get(b, key)))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(a, b)| values_structurally_equal(a, b))
        }
        _ => a == b,
    }
}
