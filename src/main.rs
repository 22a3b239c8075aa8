//! Command line entry point rendering one list page from exported records.

use std::env;

use dotenvy::dotenv;

use velora_jobs::filters::SystemClock;
use velora_jobs::models::config::{AppConfig, DEFAULT_CONFIG_PATH};
use velora_jobs::repository::JsonHistoryStore;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path = env::var("VELORA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let history = JsonHistoryStore::new(&config.history_path, config.history_limit);

    match velora_jobs::run(&config, env::args().skip(1), &history, SystemClock) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    }
}
