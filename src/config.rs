use config::{Environment, File, FileFormat};
use serde::Deserialize;
use std::sync::LazyLock;

#[derive(Deserialize, Debug)]
pub struct Config {
    /// Origin of the gallery REST API and the /uploads static route.
    pub backend_url: String,
    pub addr: String,
    pub port: u16,
    /// Mount point when served behind a reverse proxy, without slashes.
    pub base_path: String,
    pub title: String,
    /// Backend request timeout in seconds.
    pub timeout_secs: u64,
}

/// A trailing slash on the backend URL would produce double slashes in
/// every resolved resource URL.
fn normalized(mut config: Config) -> Config {
    config.backend_url = config.backend_url.trim_end_matches('/').to_owned();
    config
}

fn load() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .set_default("backend_url", "http://localhost:8888")?
        .set_default("addr", "0.0.0.0")?
        .set_default("port", 8080_i64)?
        .set_default("base_path", "")?
        .set_default("title", "Fotolab")?
        .set_default("timeout_secs", 10_i64)?
        .add_source(File::new("data/config", FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix("fotolab"))
        .build()?
        .try_deserialize()
        .map(normalized)
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match load() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Cannot load configuration: {e}. Check data/config.toml and FOTOLAB_* environment variables.");
        std::process::exit(1);
    }
});
