use dotenv::dotenv;
use log::LevelFilter;

use crate::config;

const LOG_LEVEL_VAR: &str = "POSTPEEK_LOG";

pub fn parse_arguments_and_env_vars(
    args: pico_args::Arguments,
) -> Result<config::Config, anyhow::Error> {
    dotenv().ok();

    parse_arguments(args, std::env::var(LOG_LEVEL_VAR).ok())
}

/// Builds the config from flags, falling back to `env_log_level` and then to
/// the defaults. A bad `--log-level` is an error; an unreadable environment
/// level falls back to the default so a stray variable never stops the run.
pub fn parse_arguments(
    mut args: pico_args::Arguments,
    env_log_level: Option<String>,
) -> Result<config::Config, anyhow::Error> {
    let defaults = config::Config::default();

    let url: Option<String> = args.opt_value_from_str("--url")?;
    let limit: Option<usize> = args.opt_value_from_str("--limit")?;
    let pretty = args.contains("--pretty");
    let level_flag: Option<String> = args.opt_value_from_str("--log-level")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(anyhow::anyhow!("Unexpected arguments: {:?}", remaining));
    }

    let log_level = match (level_flag, env_log_level) {
        (Some(level), _) => parse_level(&level)?,
        (None, Some(level)) => parse_level(&level).unwrap_or(defaults.log_level),
        (None, None) => defaults.log_level,
    };

    Ok(config::Config {
        url: url.unwrap_or(defaults.url),
        limit: limit.unwrap_or(defaults.limit),
        pretty,
        log_level,
    })
}

fn parse_level(level: &str) -> Result<LevelFilter, anyhow::Error> {
    level
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown log level: {}", level))
}
