//! Console formatting with ANSI colors
//!
//! Lines look like `12:04:31 [WEBSERVER ] [INFO   ] message`. Output that
//! fails because the reader went away (broken pipe) is dropped silently.

use super::config::LoggerConfig;
use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::{DateTime, Local};
use colored::*;
use std::io::{stderr, stdout, Write};

const TAG_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 7;

pub fn format_and_log(config: &LoggerConfig, tag: LogTag, level: LogLevel, message: &str) {
    let line = format_line(Local::now(), tag, level, message, config.colors);
    if level.is_stderr() {
        write_safe(&mut stderr(), &line);
    } else {
        write_safe(&mut stdout(), &line);
    }
}

/// Build one log line. Pure, so the layout can be checked in tests.
pub fn format_line(
    now: DateTime<Local>,
    tag: LogTag,
    level: LogLevel,
    message: &str,
    colors: bool,
) -> String {
    let time = now.format("%H:%M:%S").to_string();
    let tag_text = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    let level_text = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);

    if !colors {
        return format!("{} [{}] [{}] {}", time, tag_text, level_text, message);
    }

    format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        color_tag(tag, tag_text),
        color_level(level, level_text),
        message
    )
}

fn color_tag(tag: LogTag, text: String) -> ColoredString {
    match tag {
        LogTag::System => text.bright_yellow().bold(),
        LogTag::Config => text.bright_magenta().bold(),
        LogTag::Webserver => text.bright_cyan().bold(),
        LogTag::Api => text.bright_blue().bold(),
        LogTag::View => text.bright_green().bold(),
    }
}

fn color_level(level: LogLevel, text: String) -> ColoredString {
    match level {
        LogLevel::Error => text.bright_red().bold(),
        LogLevel::Warning => text.yellow().bold(),
        LogLevel::Info => text.normal(),
        LogLevel::Debug => text.cyan(),
        LogLevel::Verbose => text.dimmed(),
    }
}

fn write_safe<W: Write>(out: &mut W, line: &str) {
    // A closed reader (broken pipe under `| head`) leaves nobody to report to
    let _ = writeln!(out, "{}", line);
}
