use anstyle::AnsiColor;
use anstyle::Style;
use colog::format::CologStyle;
use fibload_lib::constants::style_from_fg;
use log::Level;

/// Defines the logging tokens for `colog`.
///
/// Tokens are padded to the same width so that request logs line up.
#[derive(Debug, Clone, Copy)]
pub struct LogTokens;

/// The color of each level.
fn level_style(level: &Level) -> Style {
    match level {
        Level::Error => style_from_fg(AnsiColor::Red).bold(),
        Level::Warn => style_from_fg(AnsiColor::Yellow),
        Level::Info => style_from_fg(AnsiColor::Green),
        Level::Debug => style_from_fg(AnsiColor::Blue),
        Level::Trace => style_from_fg(AnsiColor::Magenta),
    }
}

impl CologStyle for LogTokens {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "error",
            Level::Warn => "warn ",
            Level::Info => "info ",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    fn prefix_token(&self, level: &Level) -> String {
        format!("{} |", self.level_color(level, self.level_token(level)))
    }

    fn level_color(&self, level: &Level, msg: &str) -> String {
        let style = level_style(level);
        format!("{style}{msg}{style:#}")
    }
}
