use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use tracing::warn;

use crate::date::{CustomDate, DEFAULT_PATTERN};
use crate::error::DateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateKind {
    Production,
    Release,
}

impl DateKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DateKind::Production => "Production",
            DateKind::Release => "Release",
        }
    }
}

impl fmt::Display for DateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// At most one date per [`DateKind`]. Never empty: it is created with its first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportantDates {
    dates: BTreeMap<DateKind, CustomDate>,
}

impl ImportantDates {
    pub fn new(date: CustomDate, kind: DateKind) -> Self {
        let mut dates = Self {
            dates: BTreeMap::new(),
        };
        dates.add(date, kind);
        dates
    }

    /// Inserts the date, replacing any previous date of the same kind.
    pub fn add(&mut self, date: CustomDate, kind: DateKind) {
        self.dates.insert(kind, date);
    }

    pub fn get(&self, kind: DateKind) -> Option<&CustomDate> {
        self.dates.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, DateKind, CustomDate> {
        self.dates.iter()
    }

    /// One `<kind>:\t<date>` line per entry, dates in `dd-MM-yyyy`.
    ///
    /// A date that never resolved is listed as `invalid date`.
    pub fn list(&self) -> String {
        // The default pattern only holds supported fields.
        self.list_with(DEFAULT_PATTERN).unwrap_or_default()
    }

    /// Like [`list`](Self::list) with a custom pattern.
    ///
    /// Pattern errors are returned; invalid dates are still listed as `invalid date`.
    pub fn list_with(&self, pattern: &str) -> Result<String, DateError> {
        let mut result = String::new();
        for (kind, date) in &self.dates {
            let text = match date.format(pattern) {
                Ok(text) => text,
                Err(DateError::InvalidDate) => {
                    warn!(kind = kind.display_name(), "listing a date that is not valid");
                    DateError::InvalidDate.to_string()
                }
                Err(err) => return Err(err),
            };
            result.push_str(&format!("{kind}:\t{text}\n"));
        }
        Ok(result)
    }
}

impl<'a> IntoIterator for &'a ImportantDates {
    type Item = (&'a DateKind, &'a CustomDate);
    type IntoIter = btree_map::Iter<'a, DateKind, CustomDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
