use fern::colors::{Color, ColoredLevelConfig};
use std::time::SystemTime;

/// Timestamped, coloured record format shared by every sink.
pub fn dispatch(level: log::LevelFilter) -> fern::Dispatch {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Cyan)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
}

// stdout carries the program's output, so log lines go to stderr
pub fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    dispatch(level).chain(std::io::stderr()).apply()?;
    Ok(())
}
