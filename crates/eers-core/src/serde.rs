// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// Serialize a `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds,
/// e.g. `2026-08-01T09:30:00.000Z`. API responses use this for every timestamp
/// so clients see one stable format regardless of stored precision.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
