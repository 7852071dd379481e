use anyhow::Context;
use tracing::debug;

use marquee_common::config::Config;
use marquee_common::date::{CustomDate, Zone};

use crate::terminal::print;

pub struct DateArgs {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset: Option<i32>,
}

pub fn date(args: DateArgs, cfg: &Config) -> anyhow::Result<()> {
    let zone: Zone = match args.utc_offset {
        Some(offset_secs) => Zone::Fixed { offset_secs },
        None => Zone::Local,
    };
    debug!(?zone, pattern = %cfg.date_pattern, "formatting a single date");

    let date = CustomDate::with_time(args.day, args.month, args.year, args.hour, args.minute, zone);
    let text = date.format(&cfg.date_pattern).with_context(|| {
        format!(
            "cannot format day {} month {} year {} at {:02}:{:02}",
            args.day, args.month, args.year, args.hour, args.minute
        )
    })?;

    print::header("date", cfg.quiet);
    print::aligned_line("Date", text);
    if cfg.quiet == 0 {
        print::aligned_line("Zone", describe(zone));
    }
    Ok(())
}

fn describe(zone: Zone) -> String {
    match zone {
        Zone::Local => String::from("local"),
        Zone::Fixed { offset_secs } => format!("UTC{offset_secs:+}s"),
    }
}
