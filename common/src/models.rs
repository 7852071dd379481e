//! # Domain Models
//!
//! The entities and value objects of the movie catalogue.
//!
//! ## Core Entities
//! * [`movie::Movie`]: A film with its lead actor and its important dates.
//! * [`actor::Actor`]: A performer with a filmography and the awards they won.
//!
//! ## Value Objects
//! * [`award::Award`]: A recognition for a category in a given year.
//! * [`important_dates::ImportantDates`]: Production and release dates of a movie.
//!
//! ## Design Principles
//! * **Snapshots**: Every model is a plain `Clone` value. A [`movie::Movie`] keeps
//!   its own copy of the lead actor taken when it was built, so changes made to
//!   the actor afterwards never show up in that movie.
//! * **Deterministic output**: Keyed collections are ordered maps, summaries
//!   always list entries in key order.

pub mod actor;
pub mod award;
pub mod important_dates;
pub mod movie;
