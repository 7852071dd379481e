//! # Calendar Dates
//!
//! [`CustomDate`] is built from loose components (day, month, year, time and
//! zone) and keeps the resolved instant, or nothing when the components do not
//! describe a real calendar date. Construction never fails; formatting an
//! unresolved date does.

mod pattern;

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone};
use tracing::debug;

use crate::error::DateError;

/// Pattern used when no other is requested.
pub const DEFAULT_PATTERN: &str = "dd-MM-yyyy";

/// The time zone a [`CustomDate`] is resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The zone of the machine running the program.
    #[default]
    Local,
    /// A fixed offset east of UTC, in seconds.
    Fixed { offset_secs: i32 },
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed { offset_secs: 0 }
    }

    /// Pins a wall-clock time to this zone.
    ///
    /// Returns `None` for offsets outside ±24h. A local time skipped by a
    /// daylight saving transition keeps its wall-clock reading at the offset in
    /// force before the change. Ambiguous local times pick the earlier instant.
    fn resolve(self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.with_timezone(&dt.offset().fix())),
            Zone::Fixed { offset_secs } => FixedOffset::east_opt(offset_secs)?
                .from_local_datetime(naive)
                .single(),
        }
    }
}

/// A calendar date that may have failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDate {
    date: Option<DateTime<FixedOffset>>,
}

impl CustomDate {
    /// Midnight of the given day in the local zone.
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self::with_time(day, month, year, 0, 0, Zone::Local)
    }

    pub fn with_time(day: u32, month: u32, year: i32, hour: u32, minute: u32, zone: Zone) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .and_then(|naive| zone.resolve(&naive));

        if date.is_none() {
            debug!(day, month, year, hour, minute, ?zone, "components do not form a calendar date");
        }

        Self { date }
    }

    pub fn is_valid(&self) -> bool {
        self.date.is_some()
    }

    pub fn date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.date.as_ref()
    }

    /// Formats with [`DEFAULT_PATTERN`].
    pub fn formatted(&self) -> Result<String, DateError> {
        self.format(DEFAULT_PATTERN)
    }

    /// Formats the date with a Unicode date-field pattern such as `dd-MM-yyyy`
    /// or `EEEE, d MMMM yyyy 'at' HH:mm`.
    pub fn format(&self, pattern: &str) -> Result<String, DateError> {
        let date = self.date.as_ref().ok_or(DateError::InvalidDate)?;
        pattern::render(date, pattern)
    }
}

impl fmt::Display for CustomDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatted() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "{err}"),
        }
    }
}
