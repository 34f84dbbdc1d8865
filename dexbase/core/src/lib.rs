mod catalog;
mod error;
mod map;

pub mod ability;
pub mod pokemon;
pub mod search;
pub mod typing;

#[cfg(test)]
mod test_util;

pub use ability::Ability;
pub use catalog::Catalog;
pub use error::Error;
pub use map::Map;
pub use pokemon::{Pokemon, Stat};
pub use search::Search;
pub use typing::{Effectiveness, Type};
