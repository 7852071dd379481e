//! # Marquee Core
//!
//! Use cases built on top of the models in `marquee-common`.
//!
//! * **[`showcase`]**: Builds the sample cast and renders the summaries shown by the CLI.

pub mod showcase;
