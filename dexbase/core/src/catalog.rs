use crate::pokemon;
use crate::{Ability, Error, Map, Pokemon, Stat, Type};

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::Path;

/// The immutable list of every known Pokémon.
#[derive(Clone, PartialEq)]
pub struct Catalog {
    pokemon: Map<pokemon::Id, Pokemon>,
}

impl Catalog {
    /// Decodes the bundled dataset in a background blocking thread.
    pub async fn load() -> Result<Self, Error> {
        use tokio::task;

        task::spawn_blocking(Self::bundled)
            .await
            .map_err(|_| Error::Interrupted)?
    }

    /// Decodes the bundled dataset.
    pub fn bundled() -> Result<Self, Error> {
        use flate2::read::GzDecoder;

        const BUNDLED: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/pokemon.json.gz"));

        let catalog = Self::from_reader(GzDecoder::new(BUNDLED))?;

        log::info!("Loaded bundled catalog with {} pokemon", catalog.len());

        Ok(catalog)
    }

    /// Decodes a dataset stored at the given path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        use std::fs;

        let path = path.as_ref();

        let bytes = fs::read(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => Error::ResourceNotFound(path.to_path_buf()),
            _ => Error::from(error),
        })?;

        let catalog = Self::from_slice(&bytes)?;

        log::info!(
            "Loaded catalog with {} pokemon from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    pub fn from_reader(reader: impl io::Read) -> Result<Self, Error> {
        Self::new(serde_json::from_reader(reader)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Self::new(serde_json::from_slice(bytes)?)
    }

    /// Builds a catalog out of the given records, keeping their order.
    pub fn new(pokemon: Vec<Pokemon>) -> Result<Self, Error> {
        let pokemon = Map::new(pokemon, |pokemon| pokemon.id).map_err(Error::DuplicateEntry)?;

        Ok(Self { pokemon })
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn pokemon(&self) -> &[Pokemon] {
        self.pokemon.values()
    }

    /// Finds a Pokémon by its pokedex number.
    pub fn get(&self, number: u32) -> Option<&Pokemon> {
        self.pokemon.get(&number)
    }

    /// Pokémon having the given type, either as primary or secondary.
    pub fn by_type(&self, type_: Type) -> impl Iterator<Item = &Pokemon> {
        self.pokemon()
            .iter()
            .filter(move |pokemon| pokemon.has_type(type_))
    }

    /// Pokémon having exactly the given ability.
    pub fn by_ability<'a>(&'a self, ability: &'a str) -> impl Iterator<Item = &'a Pokemon> {
        self.pokemon()
            .iter()
            .filter(move |pokemon| pokemon.has_ability(ability))
    }

    /// Groups the catalog by ability, sorted by ability name.
    pub fn abilities(&self) -> Vec<Ability> {
        let names = BTreeSet::from_iter(
            self.pokemon()
                .iter()
                .flat_map(|pokemon| pokemon.abilities.iter().map(String::as_str)),
        );

        names.into_iter().map(|name| self.ability(name)).collect()
    }

    /// The group of Pokémon having exactly the given ability.
    ///
    /// The group is empty if no Pokémon has it.
    pub fn ability(&self, name: &str) -> Ability {
        Ability {
            name: name.to_owned(),
            pokemon: self.by_ability(name).cloned().collect(),
        }
    }

    /// The highest value of the stat in the catalog, or 0 if no Pokémon has it.
    pub fn max(&self, stat: Stat) -> f64 {
        self.pokemon()
            .iter()
            .filter_map(|pokemon| pokemon.stat(stat))
            .fold(0.0, f64::max)
    }

    /// The stat of the Pokémon relative to the catalog's highest.
    pub fn normalized(&self, pokemon: &Pokemon, stat: Stat) -> Option<f64> {
        let value = pokemon.stat(stat)?;
        let max = self.max(stat);

        (max > 0.0).then(|| value / max)
    }

    /// Pokémon having the stat, from lowest to highest.
    pub fn ranking(&self, stat: Stat) -> Vec<&Pokemon> {
        let mut ranking: Vec<_> = self
            .pokemon()
            .iter()
            .filter_map(|pokemon| Some((pokemon.stat(stat)?, pokemon)))
            .collect();

        ranking.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        ranking.into_iter().map(|(_, pokemon)| pokemon).collect()
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("pokemon", &self.pokemon.len())
            .finish()
    }
}
