use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use scaledui_proc_macros::{NumBits, Read, Write};
use serde::{Deserialize, Deserializer, Serialize};

/// Unix time in whole seconds, encoded on the wire as a fixed 64-bit field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Read, Write, NumBits,
)]
pub struct TimePointSec {
    utc_seconds: u64,
}

impl TimePointSec {
    #[inline]
    #[must_use]
    pub const fn new(utc_seconds: u64) -> Self {
        Self { utc_seconds }
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.utc_seconds
    }

    /// `true` once `now` has reached this time point.
    #[inline]
    #[must_use]
    pub const fn reached_by(&self, now: TimePointSec) -> bool {
        now.utc_seconds >= self.utc_seconds
    }

    fn to_datetime(self) -> Option<DateTime<Utc>> {
        let seconds = i64::try_from(self.utc_seconds).ok()?;
        match Utc.timestamp_opt(seconds, 0) {
            chrono::LocalResult::Single(datetime) => Some(datetime),
            _ => None,
        }
    }
}

impl From<u64> for TimePointSec {
    fn from(utc_seconds: u64) -> Self {
        Self::new(utc_seconds)
    }
}

impl From<TimePointSec> for u64 {
    fn from(time: TimePointSec) -> Self {
        time.utc_seconds
    }
}

impl fmt::Display for TimePointSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(
                f,
                "{}",
                datetime.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            None => write!(f, "{}s", self.utc_seconds),
        }
    }
}

impl Serialize for TimePointSec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.to_datetime() {
            Some(datetime) => {
                serializer.serialize_str(&datetime.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            None => Err(serde::ser::Error::custom("timestamp out of range")),
        }
    }
}

impl<'de> Deserialize<'de> for TimePointSec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimePointSecVisitor;

        impl<'de> serde::de::Visitor<'de> for TimePointSecVisitor {
            type Value = TimePointSec;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an RFC3339-formatted timestamp string or unix seconds")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(TimePointSec::new(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(v)
                    .map_err(|e| E::custom(format!("failed to parse RFC3339: {e}")))?
                    .with_timezone(&Utc);

                let seconds = u64::try_from(parsed.timestamp())
                    .map_err(|_| E::custom("timestamp before the unix epoch"))?;
                Ok(TimePointSec::new(seconds))
            }
        }

        deserializer.deserialize_any(TimePointSecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use scaledui_serialization::{Read, Write};

    use super::*;

    #[test]
    fn test_time_point_sec_serialize() {
        let time_point = TimePointSec::new(0);
        let serialized = serde_json::to_string(&time_point).unwrap();
        assert_eq!(serialized, "\"1970-01-01T00:00:00Z\"");
    }

    #[test]
    fn test_time_point_sec_deserialize() {
        let time_point: TimePointSec = serde_json::from_str("\"2023-11-14T22:13:20Z\"").unwrap();
        assert_eq!(time_point.as_u64(), 1_700_000_000);
        let time_point: TimePointSec = serde_json::from_str("1700000000").unwrap();
        assert_eq!(time_point.as_u64(), 1_700_000_000);
    }

    #[test]
    fn test_time_point_sec_rejects_pre_epoch() {
        assert!(serde_json::from_str::<TimePointSec>("\"1969-12-31T23:59:59Z\"").is_err());
    }

    #[test]
    fn test_time_point_sec_is_64_bit_on_the_wire() {
        let packed = TimePointSec::new(1).pack().unwrap();
        assert_eq!(packed, vec![0, 0, 0, 0, 0, 0, 0, 1, 0x80]);
        assert_eq!(TimePointSec::unpack(&packed).unwrap(), TimePointSec::new(1));
    }

    #[test]
    fn test_reached_by() {
        let at = TimePointSec::new(100);
        assert!(!at.reached_by(TimePointSec::new(99)));
        assert!(at.reached_by(TimePointSec::new(100)));
        assert!(at.reached_by(TimePointSec::new(101)));
    }

    #[test]
    fn test_display_out_of_range() {
        assert_eq!(TimePointSec::new(u64::MAX).to_string(), format!("{}s", u64::MAX));
    }
}
