use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a contract ABI: a function, event, error, or
/// constructor/fallback/receive declaration.
///
/// Only `name` and `type` are interpreted; every other attribute (inputs,
/// outputs, stateMutability, indexed flags, ...) is carried through the
/// pipeline unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbiFragment {
    /// Absent for constructor/fallback/receive fragments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub r#type: String,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl AbiFragment {
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            name: self.name.clone(),
            r#type: self.r#type.clone(),
        }
    }
}

/// Deduplication identity of a fragment: the (`name`, `type`) pair.
///
/// Deliberately coarse: two fragments with equal keys are treated as the
/// same declaration regardless of any other attribute, so overloaded
/// functions differing only in parameter types share a key and collapse to
/// the earliest declaration. Callers that need overload-safe merging must
/// deduplicate on a canonical parameter signature instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub name: Option<String>,
    pub r#type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_roundtrip_preserves_unknown_attrs() {
        let raw = serde_json::json!({
            "name": "transfer",
            "type": "function",
            "inputs": [{"name": "to", "type": "address"}],
            "outputs": [],
            "stateMutability": "nonpayable"
        });
        let fragment: AbiFragment = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(fragment.name.as_deref(), Some("transfer"));
        assert_eq!(fragment.r#type, "function");
        assert_eq!(fragment.attrs.len(), 3);

        let back = serde_json::to_value(&fragment).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_fragment_without_name() {
        let raw = serde_json::json!({
            "type": "constructor",
            "inputs": []
        });
        let fragment: AbiFragment = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(fragment.name, None);
        assert_eq!(fragment.r#type, "constructor");

        // `name` must not reappear as null on the way out.
        let back = serde_json::to_value(&fragment).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_identity_key_distinguishes_type() {
        let event: AbiFragment =
            serde_json::from_value(serde_json::json!({"name": "Paused", "type": "event"})).unwrap();
        let function: AbiFragment =
            serde_json::from_value(serde_json::json!({"name": "Paused", "type": "function"}))
                .unwrap();
        assert_ne!(event.identity_key(), function.identity_key());
    }

    #[test]
    fn test_identity_key_ignores_other_attrs() {
        let a: AbiFragment = serde_json::from_value(serde_json::json!({
            "name": "transfer", "type": "function", "inputs": [{"type": "address"}]
        }))
        .unwrap();
        let b: AbiFragment = serde_json::from_value(serde_json::json!({
            "name": "transfer", "type": "function", "inputs": []
        }))
        .unwrap();
        assert_eq!(a.identity_key(), b.identity_key());
    }
}
