use core::fmt;
use std::time::Duration;

use serde::de::Visitor;
use serde::Deserializer;
use serde::Serializer;

/// The human-readable duration visitor.
struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a valid duration string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        humantime::parse_duration(v).map_err(|parse_err| {
            serde::de::Error::custom(format!("This is not a valid duration: {parse_err}"))
        })
    }
}

/// Deserializing duration from a human-readable string.
pub fn deserialize_human_time_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(DurationVisitor {})
}

/// Deserializing an optional duration from a human-readable string.
///
/// Only called when the field is present, absent fields fall back to the
/// serde default.
pub fn deserialize_optional_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_human_time_duration(deserializer).map(Some)
}

/// Serialize duration into a human-readable format
pub fn serialize_duration<S: Serializer>(duration: &Duration, ser: S) -> Result<S::Ok, S::Error> {
    S::serialize_str(ser, &humantime::format_duration(*duration).to_string())
}

/// Serialize an optional duration into a human-readable format
pub fn serialize_optional_duration<S: Serializer>(
    duration: &Option<Duration>,
    ser: S,
) -> Result<S::Ok, S::Error> {
    match duration {
        Some(duration) => serialize_duration(duration, ser),
        None => ser.serialize_none(),
    }
}
