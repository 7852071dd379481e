//! Unicode date-field patterns (`dd-MM-yyyy`, `EEE d MMM`, ...).
//!
//! Letters form fields, repeated letters widen the field. Text between single
//! quotes is copied verbatim and `''` stands for one apostrophe. Everything
//! else that is not an ASCII letter is literal.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::error::DateError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Field { symbol: char, width: usize },
    Literal(String),
}

pub(super) fn render(date: &DateTime<FixedOffset>, pattern: &str) -> Result<String, DateError> {
    let mut out = String::with_capacity(pattern.len() + 8);
    for token in tokenize(pattern)? {
        match token {
            Token::Literal(text) => out.push_str(&text),
            Token::Field { symbol, width } => out.push_str(&field(date, symbol, width)?),
        }
    }
    Ok(out)
}

fn tokenize(pattern: &str) -> Result<Vec<Token>, DateError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.next_if_eq(&'\'').is_some() {
                literal.push('\'');
                continue;
            }
            let mut closed = false;
            while let Some(quoted) = chars.next() {
                if quoted != '\'' {
                    literal.push(quoted);
                } else if chars.next_if_eq(&'\'').is_some() {
                    literal.push('\'');
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(DateError::UnterminatedQuote);
            }
        } else if c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.next_if_eq(&c).is_some() {
                width += 1;
            }
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Field { symbol: c, width });
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn field(date: &DateTime<FixedOffset>, symbol: char, width: usize) -> Result<String, DateError> {
    let unsupported = DateError::UnsupportedField { symbol, width };
    let text = match symbol {
        'd' => numeric(date.day(), width),
        'D' => numeric(date.ordinal(), width),
        'M' | 'L' => match width {
            1 | 2 => numeric(date.month(), width),
            3 => date.format("%b").to_string(),
            4 => date.format("%B").to_string(),
            5 => narrow(date.format("%B").to_string()),
            _ => return Err(unsupported),
        },
        'y' => year(date.year(), width),
        'E' => match width {
            1..=3 => date.format("%a").to_string(),
            4 => date.format("%A").to_string(),
            5 => narrow(date.format("%A").to_string()),
            _ => return Err(unsupported),
        },
        'H' => numeric(date.hour(), width),
        'h' => numeric(date.hour12().1, width),
        'm' => numeric(date.minute(), width),
        's' => numeric(date.second(), width),
        'a' => date.format("%p").to_string(),
        'Z' => match width {
            1..=5 => offset(date.offset().local_minus_utc(), width),
            _ => return Err(unsupported),
        },
        _ => return Err(unsupported),
    };
    Ok(text)
}

fn numeric(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

fn year(year: i32, width: usize) -> String {
    match width {
        2 => format!("{:02}", year.rem_euclid(100)),
        _ => format!("{year:0width$}"),
    }
}

fn narrow(name: String) -> String {
    name.chars().take(1).collect()
}

fn offset(seconds: i32, width: usize) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);

    match width {
        4 if seconds == 0 => String::from("GMT"),
        4 => format!("GMT{sign}{hours:02}:{minutes:02}"),
        5 if seconds == 0 => String::from("Z"),
        5 => format!("{sign}{hours:02}:{minutes:02}"),
        _ => format!("{sign}{hours:02}{minutes:02}"),
    }
}
