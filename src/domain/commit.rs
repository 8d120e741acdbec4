use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One unreleased commit, as retained in the decision record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub message: String,
    pub author: String,
    pub email: String,
    #[serde(with = "rfc3339")]
    pub date: DateTime<FixedOffset>,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(
        message: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        date: DateTime<FixedOffset>,
    ) -> Self {
        CommitRecord {
            message: message.into(),
            author: author.into(),
            email: email.into(),
            date,
        }
    }

    /// First line of the message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// RFC 3339 timestamps that keep the commit's own UTC offset.
///
/// Years outside 0000..=9999 have no RFC 3339 form and are rejected instead
/// of being written in an extended notation.
mod rfc3339 {
    use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat};
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !(0..=9999).contains(&date.year()) {
            return Err(ser::Error::custom(format!(
                "commit timestamp {:?} cannot be represented as RFC 3339",
                date
            )));
        }
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(de::Error::custom)
    }
}
