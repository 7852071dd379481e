use colored::{Color, Colorize};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{DefaultFields, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;

const DEFAULT_FILTER: &str = "warn";

/// Renders `<level> <module>: <message> <fields>` on one line, e.g.
/// `warn  important_dates: listing a date that is not valid kind="Production"`.
pub struct LogLine;

impl<S> FormatEvent<S, DefaultFields> for LogLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, DefaultFields>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let (tag, color) = level_tag(meta.level());
        let module = format!("{}:", module_label(meta.target()));

        write!(
            writer,
            "{} {} ",
            format!("{tag:<5}").color(color).bold(),
            module.color(colors::SEPARATOR)
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_tag(level: &Level) -> (&'static str, Color) {
    match *level {
        Level::ERROR => ("error", Color::Red),
        Level::WARN => ("warn", Color::Yellow),
        Level::INFO => ("info", Color::Green),
        Level::DEBUG => ("debug", Color::Blue),
        Level::TRACE => ("trace", Color::BrightBlack),
    }
}

/// Last path segment of a target: `marquee_common::models::important_dates` gives `important_dates`.
fn module_label(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

/// Installs the global subscriber. Verbosity comes from `RUST_LOG`, logs go to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(LogLine)
        .init();
}
