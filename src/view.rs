use crate::artwork::Artwork;
use crate::dexbase::{Ability, Catalog, Pokemon, Stat};

use std::fmt::Write;

const BAR_WIDTH: usize = 30;

pub fn row(pokemon: &Pokemon) -> String {
    format!(
        "{id} {name:<16} {types}",
        id = pokemon.id,
        name = pokemon.name,
        types = types(pokemon)
    )
}

pub fn ability(ability: &Ability) -> String {
    let types: Vec<_> = ability
        .unique_types()
        .into_iter()
        .map(|type_| type_.name())
        .collect();

    format!(
        "{name} - {count} [{types}]",
        name = ability.name,
        count = ability.len(),
        types = types.join(", ")
    )
}

/// A titled block listing every Pokémon of the ability group.
pub fn section(ability: &Ability) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", self::ability(ability));

    if ability.is_empty() {
        let _ = writeln!(output, "  no pokemon");
    }

    for pokemon in &ability.pokemon {
        let _ = writeln!(output, "  {}", row(pokemon));
    }

    output
}

pub fn detail(catalog: &Catalog, pokemon: &Pokemon, artwork: Option<&Artwork>) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{} {}", pokemon.id, pokemon.name);
    let _ = writeln!(output, "Types: {}", types(pokemon));
    let _ = writeln!(output, "Abilities: {}", pokemon.abilities.join(", "));

    if let Some(artwork) = artwork {
        let _ = writeln!(
            output,
            "Artwork: {}x{} ({})",
            artwork.width,
            artwork.height,
            artwork.path.display()
        );
    }

    let _ = writeln!(output);

    for stat in Stat::BASE {
        let value = pokemon.stat(stat).unwrap_or_default();
        let ratio = catalog.normalized(pokemon, stat).unwrap_or_default();

        let _ = writeln!(
            output,
            "{label:<16}{value:>4} {bar}",
            label = stat.label(),
            bar = bar(ratio, BAR_WIDTH)
        );
    }

    let _ = writeln!(output);

    for (stat, unit) in [(Stat::Height, "m"), (Stat::Weight, "kg")] {
        let Some(value) = pokemon.stat(stat) else {
            let _ = writeln!(output, "{:<16}unknown", stat.label());
            continue;
        };

        let ranking = catalog.ranking(stat);
        let rank = ranking
            .iter()
            .position(|candidate| candidate.id == pokemon.id)
            .map(|position| position + 1)
            .unwrap_or_default();

        let _ = writeln!(
            output,
            "{label:<16}{value} {unit} ({rank} of {total})",
            label = stat.label(),
            total = ranking.len()
        );
    }

    let _ = writeln!(output, "\nDamage taken:");

    for (type_, multiplier) in pokemon.effectiveness.iter() {
        let _ = writeln!(output, "  {:<10}x{multiplier}", type_.name());
    }

    let weakest: Vec<_> = pokemon
        .weaknesses()
        .into_iter()
        .take_while(|(_, multiplier)| *multiplier > 1.0)
        .map(|(type_, multiplier)| format!("{type_} (x{multiplier})"))
        .collect();

    if weakest.is_empty() {
        let _ = writeln!(output, "\nWeakest against: nothing");
    } else {
        let _ = writeln!(output, "\nWeakest against: {}", weakest.join(", "));
    }

    output
}

fn types(pokemon: &Pokemon) -> String {
    pokemon
        .types()
        .map(|type_| type_.name())
        .collect::<Vec<_>>()
        .join("/")
}

fn bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;

    format!("{}{}", "█".repeat(filled), "·".repeat(width - filled))
}
