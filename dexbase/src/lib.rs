pub mod image;

mod error;
mod session;

pub use dexbase_core as core;
pub use dexbase_core::{Ability, Catalog, Pokemon, Search, Stat, Type};
pub use dexbase_core::{ability, pokemon, typing};

pub use error::Error;
pub use image::Image;
pub use session::Session;

pub type Result<T, E = Error> = std::result::Result<T, E>;
