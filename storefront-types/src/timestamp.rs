//! Wall-clock timestamps as written into the record files.
//!
//! Registration and order times are stored as local, zone-less strings in
//! the `dd-MM-yyyy_HH:mm:ss` layout (e.g. `07-03-2024_14:05:59`).

use crate::{Error, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `strftime` layout of every timestamp field on disk.
pub const RECORD_TIME_FORMAT: &str = "%d-%m-%Y_%H:%M:%S";

/// A second-precision local timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordTime(NaiveDateTime);

impl RecordTime {
    /// The current local time, truncated to whole seconds.
    #[must_use]
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        Self(now.with_nanosecond(0).unwrap_or(now))
    }

    /// Builds a timestamp from calendar components, or `None` if they do not
    /// form a valid date and time.
    #[must_use]
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .map(Self)
    }

    /// Parses the on-disk representation.
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(s, RECORD_TIME_FORMAT)
            .map(Self)
            .map_err(|e| Error::InvalidTimestamp(format!("{s:?}: {e}")))
    }

    /// Calendar month, 1 through 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the underlying naive date-time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl Default for RecordTime {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for RecordTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RECORD_TIME_FORMAT))
    }
}

impl FromStr for RecordTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for RecordTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
