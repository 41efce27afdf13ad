use chrono::{DateTime, SecondsFormat, Utc};

/// Formats `time` as ISO-8601 in UTC with millisecond precision and a trailing `Z`,
/// e.g. `2025-01-02T03:04:05.678Z`.
pub fn iso_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso() -> String {
    iso_timestamp(&Utc::now())
}

/// Serde adapter that writes a `DateTime<Utc>` with [`iso_timestamp`].
pub mod iso_millis {
    use super::iso_timestamp;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&iso_timestamp(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|time| time.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
