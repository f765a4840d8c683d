use income_tracker::{
    cli,
    config::{Config, ConfigManager},
    init,
};

fn main() {
    init();

    let manager = ConfigManager::discover();
    let config = match manager.load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default configuration");
            eprintln!(
                "Warning: could not read {}: {err}",
                manager.config_path().display()
            );
            Config::default()
        }
    };

    cli::run_cli(&config);
}
