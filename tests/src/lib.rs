//! Scenario tests spanning `marquee-common` and `marquee-core`.

mod catalogue;
mod showcase;
