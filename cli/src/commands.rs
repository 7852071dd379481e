pub mod date;
pub mod showcase;

use clap::{ArgAction, Parser, Subcommand};
use marquee_common::date::DEFAULT_PATTERN;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Movies, actors, awards and the dates that matter.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Date pattern using Unicode field symbols
    #[arg(short, long, global = true, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Reduce output, repeat for less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the sample movie summaries (default)
    #[command(alias = "s")]
    Showcase,
    /// Format a single date
    #[command(alias = "d")]
    Date {
        day: u32,
        month: u32,
        year: i32,
        #[arg(long, default_value_t = 0)]
        hour: u32,
        #[arg(long, default_value_t = 0)]
        minute: u32,
        /// Offset east of UTC in seconds, local zone when omitted
        #[arg(long, allow_negative_numbers = true)]
        utc_offset: Option<i32>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
