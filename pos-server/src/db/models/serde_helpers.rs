//! Common serde helpers for handling null values from SurrealDB

use serde::{Deserialize, Deserializer};

/// Deserialize bool that treats null as true
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

/// Deserialize i64 that treats null as 0
pub fn i64_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(|opt| opt.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(default = "default_true", deserialize_with = "bool_true")]
        enabled: bool,
        #[serde(default, deserialize_with = "i64_zero")]
        created_at: i64,
    }

    fn default_true() -> bool {
        true
    }

    #[test]
    fn test_null_defaults() {
        let flags: Flags = serde_json::from_str(r#"{"enabled":null,"created_at":null}"#).unwrap();
        assert!(flags.enabled);
        assert_eq!(flags.created_at, 0);

        let flags: Flags = serde_json::from_str("{}").unwrap();
        assert!(flags.enabled);

        let flags: Flags = serde_json::from_str(r#"{"enabled":false,"created_at":42}"#).unwrap();
        assert!(!flags.enabled);
        assert_eq!(flags.created_at, 42);
    }
}
