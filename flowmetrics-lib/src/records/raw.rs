//! Raw API shapes shared by the extractors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
pub struct RawUser {
    pub login: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLabel {
    pub name: Option<String>,
}

/// Login of an optional user object, or `None` if either level is missing.
pub fn login(user: Option<RawUser>) -> Option<String> {
    user.and_then(|u| u.login)
}

/// Logins of a list of user objects, skipping entries without one.
pub fn logins(users: Option<Vec<RawUser>>) -> Vec<String> {
    users.unwrap_or_default().into_iter().filter_map(|u| u.login).collect()
}

/// Names of a list of label objects, skipping entries without one.
pub fn label_names(labels: Option<Vec<RawLabel>>) -> Vec<String> {
    labels.unwrap_or_default().into_iter().filter_map(|l| l.name).collect()
}

/// Deserialize an optional RFC 3339 timestamp.
///
/// `null`, a missing field, and the empty string all mean "absent". Any other string must parse.
pub fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.to_utc()))
            .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{s}': {e}"))),
    }
}
