//! JSON array codec for list-valued columns.
//!
//! `core_principles` and `key_teachings` are stored as JSON text. They are encoded
//! once at write time and decoded on every read, so no caller ever sees the raw text.

use crate::error::{RepoError, RepoResult};

/// Encode a list of strings as a JSON array for storage.
pub fn encode_list(column: &'static str, items: &[String]) -> RepoResult<String> {
    serde_json::to_string(items).map_err(|source| RepoError::Decode { column, source })
}

/// Decode a stored JSON array. A NULL or blank column reads as an empty list.
pub fn decode_list(column: &'static str, raw: Option<&str>) -> RepoResult<Vec<String>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(text) => {
            serde_json::from_str(text).map_err(|source| RepoError::Decode { column, source })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_then_decode_preserves_order() {
        let items = vec!["Wu wei".to_string(), "Return to simplicity".to_string()];
        let raw = encode_list("key_teachings", &items).unwrap();
        assert_eq!(raw, r#"["Wu wei","Return to simplicity"]"#);
        assert_eq!(decode_list("key_teachings", Some(&raw)).unwrap(), items);
    }

    #[test]
    fn null_and_blank_decode_to_empty() {
        assert!(decode_list("core_principles", None).unwrap().is_empty());
        assert!(decode_list("core_principles", Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = decode_list("core_principles", Some("[\"unterminated")).unwrap_err();
        assert!(matches!(err, RepoError::Decode { column: "core_principles", .. }));
    }
}
