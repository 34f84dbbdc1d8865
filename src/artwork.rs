use crate::dexbase::{Image, Pokemon, Session};

use bytes::Bytes;
use futures_util::TryFutureExt;
use std::future::Future;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tokio::task;

/// Decoded artwork of a Pokémon, kept in the local cache.
#[derive(Debug, Clone)]
pub struct Artwork {
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

impl Artwork {
    pub async fn fetch(pokemon: &Pokemon, session: &Session) -> Result<Self, anywho::Error> {
        let cache = cache_dir().join(format!("{number}.png", number = pokemon.id.number()));

        let download_image = async {
            let image = Image::download(pokemon, session).await?;

            Ok::<_, anywho::Error>(image.bytes)
        };

        Self::fetch_with(cache, download_image).await
    }

    /// Reads the artwork at `cache`, falling back to `download`.
    ///
    /// Downloaded bytes are only cached once they decode.
    async fn fetch_with(
        cache: PathBuf,
        download: impl Future<Output = Result<Bytes, anywho::Error>>,
    ) -> Result<Self, anywho::Error> {
        let fetch_from_cache = async {
            let bytes = fs::read(&cache).await?;

            Ok((Bytes::from(bytes), true))
        };

        let (bytes, is_cached) = fetch_from_cache
            .or_else(|_: anywho::Error| download.map_ok(|bytes| (bytes, false)))
            .await?;

        let (width, height) = match decode(bytes.clone()).await {
            Ok(size) => size,
            Err(error) => {
                if is_cached {
                    let _ = fs::remove_file(&cache).await;
                }

                return Err(error);
            }
        };

        if !is_cached {
            let _ = fs::create_dir_all(cache.parent().unwrap_or(&cache)).await;
            let _ = fs::write(&cache, &bytes).await;
        }

        Ok(Artwork {
            width,
            height,
            path: cache,
        })
    }
}

async fn decode(bytes: Bytes) -> Result<(u32, u32), anywho::Error> {
    // Decode in a background blocking thread
    task::spawn_blocking(move || {
        let image = image::ImageReader::new(io::Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?
            .to_rgba8();

        Ok((image.width(), image.height()))
    })
    .await?
}

fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("artwork")
}

#[cfg(test)]
mod artwork_test {
    use super::Artwork;

    use bytes::Bytes;
    use std::io;
    use std::path::PathBuf;

    fn cache(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pokedex-artwork-{}", std::process::id()))
            .join(name)
    }

    fn png(width: u32, height: u32) -> Bytes {
        let mut bytes = io::Cursor::new(Vec::new());

        image::DynamicImage::new_rgba8(width, height)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();

        Bytes::from(bytes.into_inner())
    }

    #[tokio::test]
    async fn caches_downloads_that_decode() {
        let cache = cache("25.png");
        let _ = std::fs::remove_file(&cache);

        let artwork = Artwork::fetch_with(cache.clone(), async { Ok::<_, anywho::Error>(png(3, 2)) })
            .await
            .unwrap();

        assert_eq!((artwork.width, artwork.height), (3, 2));
        assert_eq!(artwork.path, cache);
        assert!(cache.exists());

        let cached = Artwork::fetch_with(cache.clone(), async {
            Err::<Bytes, _>(anywho::Error::from(io::Error::other("network is down")))
        })
        .await
        .unwrap();

        assert_eq!((cached.width, cached.height), (3, 2));

        let _ = std::fs::remove_file(&cache);
    }

    #[tokio::test]
    async fn skips_caching_undecodable_downloads() {
        let cache = cache("618.png");
        let _ = std::fs::remove_file(&cache);

        let result = Artwork::fetch_with(cache.clone(), async {
            Ok::<_, anywho::Error>(Bytes::from_static(b"<html>not found</html>"))
        })
        .await;

        assert!(result.is_err());
        assert!(!cache.exists());
    }
}
