//! Epoch-seconds timestamps.
//!
//! DynamoDB's JSON protocol carries timestamps as a number of seconds since
//! the Unix epoch, possibly fractional (`1525114800.123`). The wire format
//! holds milliseconds, so [`Timestamp`] truncates to milliseconds when it is
//! built and a serialized value always reads back equal.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A UTC instant with millisecond precision.
///
/// ```
/// use chrono::DateTime;
/// use dynastack_model::timestamp::Timestamp;
///
/// let precise = DateTime::from_timestamp(1_525_114_800, 123_456_789).unwrap();
/// let ts = Timestamp::from(precise);
/// assert_eq!(ts.as_epoch_seconds(), 1_525_114_800.123);
/// assert_eq!(ts.as_datetime().timestamp_subsec_nanos(), 123_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time, truncated to milliseconds.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Build a timestamp from fractional epoch seconds, rounding to
    /// milliseconds.
    ///
    /// Returns `None` for non-finite or out-of-range values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_epoch_seconds(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64).map(Self)
    }

    /// Fractional epoch seconds, as sent on the wire.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_epoch_seconds(&self) -> f64 {
        self.0.timestamp_millis() as f64 / 1000.0
    }

    /// The underlying instant.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.trunc_subsecs(3))
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_epoch_seconds())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Self::from_epoch_seconds(seconds)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {seconds}")))
    }
}
