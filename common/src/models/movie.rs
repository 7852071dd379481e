use std::fmt;

use crate::date::{CustomDate, DEFAULT_PATTERN};
use crate::error::DateError;
use crate::models::actor::Actor;
use crate::models::important_dates::{DateKind, ImportantDates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Drama,
    Comedy,
    Action,
    Romance,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::Action => "Action",
            Genre::Romance => "Romance",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    description: String,
    lead_actor: Actor,
    genre: Genre,
    important_dates: Option<ImportantDates>,
}

impl Movie {
    /// Takes the lead actor by value: the movie keeps the actor as it is now.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        lead_actor: Actor,
        genre: Genre,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            lead_actor,
            genre,
            important_dates: None,
        }
    }

    pub fn with_important_dates(mut self, important_dates: ImportantDates) -> Self {
        self.important_dates = Some(important_dates);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn lead_actor(&self) -> &Actor {
        &self.lead_actor
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn important_dates(&self) -> Option<&ImportantDates> {
        self.important_dates.as_ref()
    }

    pub fn add_date(&mut self, date: CustomDate, kind: DateKind) {
        match self.important_dates.as_mut() {
            Some(dates) => dates.add(date, kind),
            None => self.important_dates = Some(ImportantDates::new(date, kind)),
        }
    }

    pub fn short_summary(&self) -> String {
        // The default pattern only holds supported fields.
        self.summary_with(DEFAULT_PATTERN).unwrap_or_default()
    }

    /// Title, lead actor and genre lines, then the important dates rendered with `pattern`.
    pub fn summary_with(&self, pattern: &str) -> Result<String, DateError> {
        let result = format!(
            "Title:\t {}\nLead Actor:\t{}\nGenre:\t{}\n",
            self.title,
            self.lead_actor.description(),
            self.genre
        );

        let Some(dates) = &self.important_dates else {
            return Ok(result);
        };
        Ok(result + &dates.list_with(pattern)?)
    }
}
