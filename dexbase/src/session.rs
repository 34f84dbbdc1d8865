use crate::pokemon::{self, Pokemon};
use crate::Result;

use bytes::Bytes;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

/// Shared state to reach the artwork host.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    image_host: String,
}

impl Session {
    /// Creates a session for the given artwork host, or the default one.
    pub fn new(image_host: Option<String>) -> Self {
        Self {
            client: CLIENT.clone(),
            image_host: image_host
                .map(|host| host.trim_end_matches('/').to_owned())
                .filter(|host| !host.is_empty())
                .unwrap_or_else(|| pokemon::IMAGE_HOST.to_owned()),
        }
    }

    pub fn image_host(&self) -> &str {
        &self.image_host
    }

    pub fn image_url(&self, pokemon: &Pokemon) -> String {
        pokemon.image_url(&self.image_host)
    }

    pub(crate) async fn download(&self, url: &str) -> Result<Bytes> {
        log::info!("Downloading image: {url}");
        let response = retry(2, || self.client.get(url).send()).await;

        Ok(response?.error_for_status()?.bytes().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(3))
        .build()
        .expect("Build reqwest client")
});

async fn retry<T, E, F>(mut retries: usize, f: impl Fn() -> F) -> Result<T, E>
where
    E: fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    loop {
        let result = f().await;

        match result {
            Ok(response) => {
                break Ok(response);
            }
            Err(error) => {
                if retries > 0 {
                    log::warn!(
                        "{error} ({retries} {} left)",
                        if retries == 1 { "retry" } else { "retries" }
                    );
                    retries -= 1;
                } else {
                    break Err(error);
                }
            }
        }
    }
}
