//! Custom serde helpers for gateway wire formats.

/// Deserializes an optional Unix-millis integer into `DateTime<Utc>`.
///
/// The gateway sends `time` and `updateTime` as epoch milliseconds, not
/// ISO 8601 strings, and may omit them.
pub mod timestamp_ms_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<i64>::deserialize(deserializer)? {
            None => Ok(None),
            Some(millis) => DateTime::<Utc>::from_timestamp_millis(millis)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis))),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, with = "super::timestamp_ms_opt")]
        updated: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_timestamp_ms_opt_missing() {
        let s: Stamped = serde_json::from_str("{}").unwrap();
        assert!(s.updated.is_none());
    }

    #[test]
    fn test_timestamp_ms_opt_present() {
        let s: Stamped = serde_json::from_str(r#"{"updated": 1700000000123}"#).unwrap();
        assert_eq!(s.updated.unwrap().timestamp_millis(), 1_700_000_000_123);
    }
}
