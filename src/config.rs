use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tokio::fs;

/// User settings stored in `config.ron`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Host serving the artwork, without trailing slash.
    pub image_host: Option<String>,
    /// A JSON dataset to use instead of the bundled one.
    pub data: Option<PathBuf>,
}

impl Config {
    pub async fn load() -> Result<Self, anywho::Error> {
        let path = config_path();

        let mut config: Self = if fs::try_exists(&path).await? {
            ron::from_str(&fs::read_to_string(&path).await?)?
        } else {
            Self::default()
        };

        if let Ok(host) = env::var("POKEDEX_IMAGE_HOST") {
            config.image_host = Some(host);
        }

        Ok(config)
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("config.ron")
}
