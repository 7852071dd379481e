use crate::date::DEFAULT_PATTERN;

#[derive(Debug, Clone)]
pub struct Config {
    /// Pattern used when dates are rendered inside summaries.
    ///
    /// Follows the Unicode date-field symbols, e.g. `dd-MM-yyyy`.
    pub date_pattern: String,
    /// Output reduction level.
    ///
    /// `1` prints section titles as plain lines instead of decorated headers,
    /// `2` also hides the banner and footer.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_pattern: String::from(DEFAULT_PATTERN),
            quiet: 0,
        }
    }
}
