use crate::{Pokemon, Result, Session};

use bytes::Bytes;
use std::fmt;

/// The encoded artwork of a Pokémon.
#[derive(Clone)]
pub struct Image {
    pub bytes: Bytes,
}

impl Image {
    pub async fn download(pokemon: &Pokemon, session: &Session) -> Result<Self> {
        let url = session.image_url(pokemon);
        let bytes = session.download(&url).await?;

        Ok(Self { bytes })
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
