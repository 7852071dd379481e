use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 6;

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn banner(q_level: u8) {
    if q_level > 1 {
        return;
    }

    let text_content: String = format!("⟦ MARQUEE v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&header_line(msg));
}

/// A decorated header at the default level, the bare title once `-q` is given.
pub fn section_title(title: &str, q_level: u8) {
    print(&title_line(title, q_level));
}

fn title_line(title: &str, q_level: u8) -> String {
    match q_level {
        0 => header_line(title),
        _ => String::from(title),
    }
}

fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR)
    .to_string()
}

/// Prints a pre-rendered block followed by exactly one blank line.
pub fn block(body: &str) {
    print!("{}", block_text(body));
}

fn block_text(body: &str) -> String {
    format!("{}\n\n", body.trim_end_matches('\n'))
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let value: ColoredString = value.to_string().color(colors::ACCENT);
    print(&format!("{} {}{} {}", prefix, key.color(colors::PRIMARY), colon, value));
}

pub fn end_of_program(q_level: u8) {
    if q_level > 1 {
        return;
    }

    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
