use anyhow::{Context, Result};
use serde_json::Value;
use std::{fs, path::Path};

/// Read a file holding a single JSON value.
///
/// Object key order is kept as written so the corrected output lines up
/// with the input.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read document: {}", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse JSON document: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_document(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_an_object() {
        let file = temp_document(r#"{"b": 1, "a": [true, null]}"#);

        let doc = load_document(file.path()).expect("document loads");

        assert_eq!(doc, json!({"b": 1, "a": [true, null]}));
    }

    #[test]
    fn keeps_key_order() {
        let file = temp_document(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);

        let doc = load_document(file.path()).unwrap();
        let keys: Vec<&str> = doc
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn loads_a_scalar_document() {
        let file = temp_document("42");
        assert_eq!(load_document(file.path()).unwrap(), json!(42));
    }

    #[test]
    fn missing_file_returns_error() {
        let err = load_document(Path::new("non_existent_pivot.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read document"));
    }

    #[test]
    fn malformed_json_returns_error() {
        let file = temp_document(r#"{"a": 1,"#);

        let err = load_document(file.path()).unwrap_err();

        assert!(err.to_string().contains("failed to parse JSON document"));
    }
}
