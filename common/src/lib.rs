//! # Marquee Common
//!
//! Shared building blocks for the `marquee` workspace.
//!
//! * **[`models`]**: The entities and value objects (movies, actors, awards).
//! * **[`date`]**: Calendar dates and the pattern engine used to format them.
//! * **[`error`]**: Errors raised while formatting dates.
//! * **[`config`]**: Runtime options shared by the core and the CLI.

pub mod config;
pub mod date;
pub mod error;
pub mod models;
