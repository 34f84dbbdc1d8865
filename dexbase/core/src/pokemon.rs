use crate::typing::{Effectiveness, Type};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Default host serving the official artwork.
pub const IMAGE_HOST: &str = "https://d18bqzgu48wusx.cloudfront.net";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Record")]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub type1: Type,
    pub type2: Option<Type>,
    pub stats: Stats,
    pub height_m: Option<f64>,
    pub weight_kg: Option<f64>,
    pub abilities: Vec<String>,
    pub effectiveness: Effectiveness,
}

impl Pokemon {
    /// The artwork URL of the Pokémon under the given host.
    pub fn image_url(&self, host: &str) -> String {
        format!(
            "{host}/{number}-1024.png",
            host = host.trim_end_matches('/'),
            number = self.id.0
        )
    }

    pub fn types(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.type1).chain(self.type2)
    }

    pub fn has_type(&self, type_: Type) -> bool {
        self.type1 == type_ || self.type2 == Some(type_)
    }

    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|candidate| candidate == ability)
    }

    pub fn stat(&self, stat: Stat) -> Option<f64> {
        Some(match stat {
            Stat::Hp => self.stats.hp,
            Stat::Attack => self.stats.attack,
            Stat::Defense => self.stats.defense,
            Stat::SpecialAttack => self.stats.sp_attack,
            Stat::SpecialDefense => self.stats.sp_defense,
            Stat::Speed => self.stats.speed,
            Stat::Height => self.height_m?,
            Stat::Weight => self.weight_kg?,
        })
    }

    /// The effectiveness breakdown sorted from the most to the least damaging type.
    ///
    /// Types with the same multiplier keep their declared order.
    pub fn weaknesses(&self) -> Vec<(Type, f64)> {
        let mut weaknesses: Vec<_> = self.effectiveness.iter().collect();
        weaknesses.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        weaknesses
    }
}

/// A national pokedex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl Borrow<u32> for Id {
    fn borrow(&self) -> &u32 {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub sp_attack: f64,
    pub sp_defense: f64,
    pub speed: f64,
}

/// Selects one numeric field of a [`Pokemon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Height,
    Weight,
}

impl Stat {
    pub const BASE: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Special Attack",
            Self::SpecialDefense => "Special Defense",
            Self::Speed => "Speed",
            Self::Height => "Height",
            Self::Weight => "Weight",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Dataset row, as found in the JSON resource
#[derive(Deserialize)]
struct Record {
    pokedex_number: u32,
    name: String,
    type1: Type,
    #[serde(default, deserialize_with = "secondary_type")]
    type2: Option<Type>,
    #[serde(deserialize_with = "abilities")]
    abilities: Vec<String>,
    hp: f64,
    attack: f64,
    defense: f64,
    sp_attack: f64,
    sp_defense: f64,
    speed: f64,
    height_m: Option<f64>,
    weight_kg: Option<f64>,
    against_bug: f64,
    against_dark: f64,
    against_dragon: f64,
    against_electric: f64,
    against_fairy: f64,
    #[serde(alias = "against_fighting")]
    against_fight: f64,
    against_fire: f64,
    against_flying: f64,
    against_ghost: f64,
    against_grass: f64,
    against_ground: f64,
    against_ice: f64,
    against_normal: f64,
    against_poison: f64,
    against_psychic: f64,
    against_rock: f64,
    against_steel: f64,
    against_water: f64,
}

impl TryFrom<Record> for Pokemon {
    type Error = String;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let name = record.name.trim().to_owned();

        if record.pokedex_number == 0 {
            return Err(format!("{name} has pokedex number 0"));
        }

        if name.is_empty() {
            return Err(format!(
                "pokemon #{} has no name",
                record.pokedex_number
            ));
        }

        if record.type2 == Some(record.type1) {
            return Err(format!("{name} has {} as both of its types", record.type1));
        }

        let mut seen = BTreeSet::new();

        if let Some(duplicate) = record
            .abilities
            .iter()
            .find(|ability| !seen.insert(ability.as_str()))
        {
            return Err(format!("{name} lists the ability {duplicate:?} twice"));
        }

        let stats = Stats {
            hp: record.hp,
            attack: record.attack,
            defense: record.defense,
            sp_attack: record.sp_attack,
            sp_defense: record.sp_defense,
            speed: record.speed,
        };

        let effectiveness = Effectiveness::from_fn(|attacker| match attacker {
            Type::Bug => record.against_bug,
            Type::Dark => record.against_dark,
            Type::Dragon => record.against_dragon,
            Type::Electric => record.against_electric,
            Type::Fairy => record.against_fairy,
            Type::Fighting => record.against_fight,
            Type::Fire => record.against_fire,
            Type::Flying => record.against_flying,
            Type::Ghost => record.against_ghost,
            Type::Grass => record.against_grass,
            Type::Ground => record.against_ground,
            Type::Ice => record.against_ice,
            Type::Normal => record.against_normal,
            Type::Poison => record.against_poison,
            Type::Psychic => record.against_psychic,
            Type::Rock => record.against_rock,
            Type::Steel => record.against_steel,
            Type::Water => record.against_water,
        });

        let pokemon = Self {
            id: Id(record.pokedex_number),
            name,
            type1: record.type1,
            type2: record.type2,
            stats,
            height_m: record.height_m,
            weight_kg: record.weight_kg,
            abilities: record.abilities,
            effectiveness,
        };

        for stat in Stat::BASE.into_iter().chain([Stat::Height, Stat::Weight]) {
            if let Some(value) = pokemon
                .stat(stat)
                .filter(|value| !(value.is_finite() && *value >= 0.0))
            {
                return Err(format!("{} of {} is invalid: {value}", stat, pokemon.name));
            }
        }

        if let Some((attacker, multiplier)) = pokemon
            .effectiveness
            .iter()
            .find(|(_, multiplier)| !(multiplier.is_finite() && *multiplier >= 0.0))
        {
            return Err(format!(
                "{} has an invalid multiplier against {attacker}: {multiplier}",
                pokemon.name
            ));
        }

        Ok(pokemon)
    }
}

fn secondary_type<'de, D>(deserializer: D) -> Result<Option<Type>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(name) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if name.trim().is_empty() {
        return Ok(None);
    }

    name.parse().map(Some).map_err(de::Error::custom)
}

fn abilities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Abilities {
        List(Vec<String>),
        // e.g. "['Overgrow', 'Chlorophyll']"
        Literal(String),
    }

    Ok(match Abilities::deserialize(deserializer)? {
        Abilities::List(abilities) => abilities,
        Abilities::Literal(literal) => {
            let literal = literal.trim();

            let Some(items) = literal
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            else {
                return Err(de::Error::custom(format!(
                    "invalid ability list: {literal}"
                )));
            };

            items
                .split(',')
                .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"'))
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()
        }
    })
}

#[cfg(test)]
mod pokemon_test {
    use crate::pokemon::{IMAGE_HOST, Id};
    use crate::test_util::{pikachu, record};
    use crate::{Pokemon, Stat, Type};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_dataset_row() {
        let pokemon = pikachu();

        assert_eq!(pokemon.id, Id(25));
        assert_eq!(pokemon.name, "Pikachu");
        assert_eq!(pokemon.type1, Type::Electric);
        assert_eq!(pokemon.type2, None);
        assert_eq!(pokemon.abilities, ["Static", "Lightningrod"]);
        assert_eq!(pokemon.height_m, Some(0.4));
        assert_eq!(pokemon.weight_kg, Some(6.0));
        assert_eq!(pokemon.stat(Stat::Speed), Some(90.0));
        assert_eq!(pokemon.effectiveness.get(Type::Ground), 2.0);
        assert_eq!(pokemon.effectiveness.get(Type::Steel), 0.5);
        assert_eq!(pokemon.effectiveness.get(Type::Fighting), 1.0);
    }

    #[test]
    fn missing_optional_fields_are_absent() {
        let mut row = record(19, "Rattata", "normal", "dark", &["Run Away", "Guts"]);
        let object = row.as_object_mut().unwrap();
        let _ = object.remove("height_m");
        let _ = object.insert("weight_kg".to_owned(), json!(null));

        let pokemon: Pokemon = serde_json::from_value(row).unwrap();

        assert_eq!(pokemon.type2, Some(Type::Dark));
        assert_eq!(pokemon.height_m, None);
        assert_eq!(pokemon.weight_kg, None);
        assert_eq!(pokemon.stat(Stat::Height), None);
        assert_eq!(pokemon.stat(Stat::Weight), None);
    }

    #[test]
    fn secondary_type_may_be_empty_or_missing() {
        let empty: Pokemon =
            serde_json::from_value(record(4, "Charmander", "fire", "", &["Blaze"])).unwrap();

        let mut row = record(4, "Charmander", "fire", "", &["Blaze"]);
        let _ = row.as_object_mut().unwrap().remove("type2");
        let missing: Pokemon = serde_json::from_value(row).unwrap();

        assert_eq!(empty.type2, None);
        assert_eq!(missing.type2, None);
        assert_eq!(empty.types().collect::<Vec<_>>(), [Type::Fire]);
    }

    #[test]
    fn decodes_abilities_written_as_list_literal() {
        let mut row = record(1, "Bulbasaur", "grass", "poison", &[]);
        let _ = row.as_object_mut().unwrap().insert(
            "abilities".to_owned(),
            json!("['Overgrow', 'Chlorophyll']"),
        );

        let pokemon: Pokemon = serde_json::from_value(row).unwrap();

        assert_eq!(pokemon.abilities, ["Overgrow", "Chlorophyll"]);
        assert_eq!(
            pokemon.types().collect::<Vec<_>>(),
            [Type::Grass, Type::Poison]
        );
    }

    #[test]
    fn accepts_long_fighting_key() {
        let mut row = record(448, "Lucario", "fighting", "steel", &["Steadfast"]);
        let object = row.as_object_mut().unwrap();
        let _ = object.remove("against_fight");
        let _ = object.insert("against_fighting".to_owned(), json!(2));

        let pokemon: Pokemon = serde_json::from_value(row).unwrap();

        assert_eq!(pokemon.effectiveness.get(Type::Fighting), 2.0);
    }

    #[test]
    fn rejects_broken_invariants() {
        let same_types = record(25, "Pikachu", "electric", "electric", &["Static"]);
        let no_name = record(25, " ", "electric", "", &["Static"]);
        let no_number = record(0, "Pikachu", "electric", "", &["Static"]);
        let repeated = record(25, "Pikachu", "electric", "", &["Static", "Static"]);
        let unknown_type = record(25, "Pikachu", "shadow", "", &["Static"]);

        let mut negative = record(25, "Pikachu", "electric", "", &["Static"]);
        let _ = negative
            .as_object_mut()
            .unwrap()
            .insert("attack".to_owned(), json!(-1));

        let mut incomplete = record(25, "Pikachu", "electric", "", &["Static"]);
        let _ = incomplete.as_object_mut().unwrap().remove("against_water");

        for row in [
            same_types,
            no_name,
            no_number,
            repeated,
            unknown_type,
            negative,
            incomplete,
        ] {
            assert!(serde_json::from_value::<Pokemon>(row).is_err());
        }
    }

    #[test]
    fn builds_image_url_from_pokedex_number() {
        let pokemon = pikachu();

        assert_eq!(
            pokemon.image_url(IMAGE_HOST),
            "https://d18bqzgu48wusx.cloudfront.net/25-1024.png"
        );
        assert_eq!(
            pokemon.image_url("http://localhost:8080/"),
            "http://localhost:8080/25-1024.png"
        );
    }

    #[test]
    fn sorts_weaknesses_by_multiplier() {
        let weaknesses = pikachu().weaknesses();

        assert_eq!(weaknesses.len(), 18);
        assert_eq!(weaknesses[0], (Type::Ground, 2.0));
        assert_eq!(weaknesses[1], (Type::Bug, 1.0));
        assert_eq!(
            &weaknesses[15..],
            [
                (Type::Electric, 0.5),
                (Type::Flying, 0.5),
                (Type::Steel, 0.5)
            ]
        );
    }

    #[test]
    fn formats_pokedex_number() {
        assert_eq!(Id(25).to_string(), "#025");
        assert_eq!(Id(618).to_string(), "#618");
    }
}
