use log::LevelFilter;

use crate::sources::POSTS_URL;

pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub limit: usize,
    pub pretty: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: POSTS_URL.to_string(),
            limit: DEFAULT_LIMIT,
            pretty: false,
            log_level: LevelFilter::Warn,
        }
    }
}
