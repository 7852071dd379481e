mod commands;
mod terminal;

use commands::{CommandLine, Commands, date, showcase};
use marquee_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        date_pattern: commands.pattern,
        quiet: commands.quiet,
    };

    print::banner(cfg.quiet);

    let result = match commands.command.unwrap_or(Commands::Showcase) {
        Commands::Showcase => showcase::showcase(&cfg),
        Commands::Date {
            day,
            month,
            year,
            hour,
            minute,
            utc_offset,
        } => date::date(date::DateArgs { day, month, year, hour, minute, utc_offset }, &cfg),
    };

    print::end_of_program(cfg.quiet);
    result
}
