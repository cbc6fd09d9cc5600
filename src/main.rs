use slitherserver::config::Config;
use slitherserver::logging::setup_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load immutable config first; the log sink location comes from it
    let config = Config::load()?;

    setup_logging(&config)?;

    log::info!("slither server starting in {} mode", config.env);
    log::info!(
        "listener: {} (origins {:?}, max {} connections)",
        config.listen_addr(),
        config.origins,
        config.max_connections
    );
    log::info!(
        "world: map size {}, {} starting food in {} colors, sized {}-{}",
        config.map_size,
        config.start_food,
        config.food_colors,
        config.food_size.min,
        config.food_size.max
    );
    log::debug!("effective config: {}", serde_json::to_string(&config)?);

    Ok(())
}
