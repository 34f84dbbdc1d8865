//! Elemental types and how much damage a Pokémon takes from each of them.
use serde::de::{self, Deserialize, Deserializer};

use std::fmt;
use std::str::FromStr;

/// One of the 18 elemental types.
///
/// Variants are declared (and therefore ordered) alphabetically by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Type {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl Type {
    pub const ALL: [Self; 18] = [
        Self::Bug,
        Self::Dark,
        Self::Dragon,
        Self::Electric,
        Self::Fairy,
        Self::Fighting,
        Self::Fire,
        Self::Flying,
        Self::Ghost,
        Self::Grass,
        Self::Ground,
        Self::Ice,
        Self::Normal,
        Self::Poison,
        Self::Psychic,
        Self::Rock,
        Self::Steel,
        Self::Water,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Dark => "dark",
            Self::Dragon => "dragon",
            Self::Electric => "electric",
            Self::Fairy => "fairy",
            Self::Fighting => "fighting",
            Self::Fire => "fire",
            Self::Flying => "flying",
            Self::Ghost => "ghost",
            Self::Grass => "grass",
            Self::Ground => "ground",
            Self::Ice => "ice",
            Self::Normal => "normal",
            Self::Poison => "poison",
            Self::Psychic => "psychic",
            Self::Rock => "rock",
            Self::Steel => "steel",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Type {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|type_| type_.name() == name)
            .ok_or_else(|| ParseTypeError(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;

        name.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type: {0:?}")]
pub struct ParseTypeError(String);

/// The damage multiplier a Pokémon takes from attacks of each type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effectiveness([f64; 18]);

impl Effectiveness {
    pub fn from_fn(multiplier: impl FnMut(Type) -> f64) -> Self {
        Self(Type::ALL.map(multiplier))
    }

    pub fn get(&self, attacker: Type) -> f64 {
        self.0[attacker as usize]
    }

    /// Every type paired with its multiplier, in [`Type::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Type, f64)> {
        Type::ALL.into_iter().zip(self.0)
    }
}
