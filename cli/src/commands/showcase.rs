use marquee_common::config::Config;
use marquee_core::showcase;

use crate::terminal::print;

pub fn showcase(cfg: &Config) -> anyhow::Result<()> {
    let showcase = showcase::run(cfg)?;

    for section in &showcase.sections {
        if let Some(title) = &section.title {
            print::section_title(title, cfg.quiet);
        }
        print::block(&section.body);
    }
    Ok(())
}
