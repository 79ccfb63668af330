//! # Domain models for weight records and sessions
//!
//! Defines the data structures exchanged with the weight service and kept in
//! client-side storage. Field names are serialised in camelCase so they match
//! the JSON the services speak (`weightId`, `userId`, `fullName`).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`WeightRecord`] | A single logged measurement: the per-user `weight_id` assigned by the service, the owning `user_id`, the `weight` in pounds and the service-assigned `timestamp`. |
//! | [`UserSession`] | Identity cached after a successful login: `user_id`, `full_name` and `email`. Persisted through a [`crate::SessionStore`]. |
//!
//! ## Timestamps
//!
//! The weight service emits naive ISO-8601 date-times
//! (`2024-03-01T08:15:30.123456`). [`WeightRecord`] also accepts RFC 3339
//! strings with an offset and normalises them to UTC, so a service that starts
//! sending `Z`-suffixed values keeps working.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A single weight measurement owned by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRecord {
    /// Per-user identifier assigned by the weight service.
    pub weight_id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Weight in pounds.
    pub weight: f64,
    /// When the measurement was recorded (or last updated).
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl WeightRecord {
    /// Timestamp formatted for the history table: `2024-03-01 08:15`.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Date-only rendering used in confirmation prompts.
    pub fn display_date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Weight with a single decimal, the precision of the input field.
    pub fn display_weight(&self) -> String {
        format_weight(self.weight)
    }
}

/// Format a weight with one decimal place.
pub fn format_weight(weight: f64) -> String {
    format!("{weight:.1}")
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid timestamp: {raw}"))
    })
}

/// Parse a service timestamp, naive or with an offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

/// Identity cached client-side after login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: i64,
    pub full_name: String,
    pub email: String,
}

impl UserSession {
    /// Name shown in the header, falling back to the email when the service
    /// returned an empty name.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_naive_timestamp() {
        let json = r#"{"weightId":3,"userId":7,"weight":181.4,"timestamp":"2024-03-01T08:15:30.123456"}"#;
        let record: WeightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.weight_id, 3);
        assert_eq!(record.user_id, 7);
        assert_eq!(record.display_time(), "2024-03-01 08:15");
        assert_eq!(record.display_weight(), "181.4");
    }

    #[test]
    fn test_decode_offset_timestamp_normalises_to_utc() {
        let json = r#"{"weightId":1,"userId":1,"weight":150,"timestamp":"2024-03-01T08:00:00+02:00"}"#;
        let record: WeightRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_time(), "2024-03-01 06:00");
        assert_eq!(record.display_date(), "2024-03-01");
    }

    #[test]
    fn test_decode_rejects_garbage_timestamp() {
        let json = r#"{"weightId":1,"userId":1,"weight":150,"timestamp":"yesterday"}"#;
        assert!(serde_json::from_str::<WeightRecord>(json).is_err());
    }

    #[test]
    fn test_session_uses_camel_case_keys() {
        let session = UserSession {
            user_id: 42,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"userId\":42"));
        assert!(json.contains("\"fullName\":\"Ada Lovelace\""));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let session = UserSession {
            user_id: 1,
            full_name: "  ".to_string(),
            email: "x@example.com".to_string(),
        };
        assert_eq!(session.display_name(), "x@example.com");
    }
}
