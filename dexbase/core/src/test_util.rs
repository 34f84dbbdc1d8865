use crate::{Catalog, Pokemon};

use serde_json::{Value, json};

/// A dataset row with neutral stats and multipliers.
pub fn record(number: u32, name: &str, type1: &str, type2: &str, abilities: &[&str]) -> Value {
    let mut row = json!({
        "pokedex_number": number,
        "name": name,
        "type1": type1,
        "type2": type2,
        "abilities": abilities,
        "hp": 50,
        "attack": 50,
        "defense": 50,
        "sp_attack": 50,
        "sp_defense": 50,
        "speed": 50,
        "height_m": 1.0,
        "weight_kg": 10.0,
    });

    let object = row.as_object_mut().expect("row is an object");

    for against in [
        "bug", "dark", "dragon", "electric", "fairy", "fight", "fire", "flying", "ghost", "grass",
        "ground", "ice", "normal", "poison", "psychic", "rock", "steel", "water",
    ] {
        let _ = object.insert(format!("against_{against}"), json!(1));
    }

    row
}

pub fn pikachu() -> Pokemon {
    serde_json::from_value(json!({
        "abilities": ["Static", "Lightningrod"],
        "against_bug": 1, "against_dark": 1, "against_dragon": 1, "against_electric": 0.5,
        "against_fairy": 1, "against_fight": 1, "against_fire": 1, "against_flying": 0.5,
        "against_ghost": 1, "against_grass": 1, "against_ground": 2, "against_ice": 1,
        "against_normal": 1, "against_poison": 1, "against_psychic": 1, "against_rock": 1,
        "against_steel": 0.5, "against_water": 1,
        "attack": 55, "defense": 40, "generation": 1, "height_m": 0.4, "hp": 35,
        "is_legendary": 0, "name": "Pikachu", "pokedex_number": 25, "sp_attack": 50,
        "sp_defense": 50, "speed": 90, "type1": "electric", "type2": "", "weight_kg": 6.0
    }))
    .expect("decode pikachu")
}

pub fn stunfisk() -> Pokemon {
    serde_json::from_value(json!({
        "abilities": ["Static", "Limber", "Sand Veil"],
        "against_bug": 1, "against_dark": 1, "against_dragon": 1, "against_electric": 0,
        "against_fairy": 1, "against_fight": 1, "against_fire": 1, "against_flying": 0.5,
        "against_ghost": 1, "against_grass": 2, "against_ground": 2, "against_ice": 2,
        "against_normal": 1, "against_poison": 0.5, "against_psychic": 1, "against_rock": 0.5,
        "against_steel": 0.5, "against_water": 2,
        "attack": 66, "defense": 84, "generation": 5, "height_m": 0.7, "hp": 109,
        "is_legendary": 0, "name": "Stunfisk", "pokedex_number": 618, "sp_attack": 81,
        "sp_defense": 99, "speed": 32, "type1": "ground", "type2": "electric", "weight_kg": 11.0
    }))
    .expect("decode stunfisk")
}

pub fn decode(row: Value) -> Pokemon {
    serde_json::from_value(row).expect("decode pokemon")
}

/// Pikachu and Stunfisk, in that order.
pub fn electric_catalog() -> Catalog {
    Catalog::new(vec![pikachu(), stunfisk()]).expect("build catalog")
}
