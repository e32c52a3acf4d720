use chrono::Local;
use colog::format::CologStyle;
use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

pub struct Logger;

struct TimestampPrefix;

impl CologStyle for TimestampPrefix {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}",
            Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
            self.level_color(level, self.level_token(level))
        )
    }
}

impl Logger {
    /// `RUST_LOG` directives still apply on top of `level`
    pub fn init(level: LevelFilter) {
        let mut builder = Builder::new();
        builder
            .format(colog::formatter(TimestampPrefix))
            .filter_level(level)
            .parse_default_env()
            .init();
    }
}
