use crate::config::Config;

/// Install the global logger: stdout plus the configured log file.
///
/// The log file path is first opened (and created) here, not during config
/// load. Call once at startup; a second call fails because the logger is
/// process-wide.
pub fn setup_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(config.env.log_level())
        .chain(std::io::stdout())
        .chain(fern::log_file(&config.logfile)?)
        .apply()?;
    Ok(())
}
