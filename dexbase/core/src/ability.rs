use crate::{Pokemon, Search, Type};

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// An ability together with every Pokémon that has it.
///
/// Abilities are compared by name only.
#[derive(Debug, Clone)]
pub struct Ability {
    pub name: String,
    pub pokemon: Vec<Pokemon>,
}

impl Ability {
    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    /// The distinct primary types among the Pokémon with this ability, sorted by name.
    pub fn unique_types(&self) -> Vec<Type> {
        BTreeSet::from_iter(self.pokemon.iter().map(|pokemon| pokemon.type1))
            .into_iter()
            .collect()
    }
}

impl PartialEq for Ability {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Ability {}

impl PartialOrd for Ability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Filters abilities whose name starts with the query, ignoring case.
///
/// A blank query matches every ability.
pub fn search(abilities: &[Ability], query: &str) -> Search<Ability> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return Search::new(query, abilities);
    }

    let matches: Vec<_> = abilities
        .iter()
        .filter(|ability| ability.name.to_lowercase().starts_with(&query))
        .cloned()
        .collect();

    Search::new(query, matches)
}
