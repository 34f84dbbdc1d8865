use dexbase;

mod artwork;
mod config;
mod view;

use crate::artwork::Artwork;
use crate::config::Config;
use crate::dexbase::{Catalog, Session, Type, ability};

use std::env;
use std::path::PathBuf;
use tokio::task;

const USAGE: &str = "\
Usage: pokedex [--data <path>] <command>

Commands:
    list                  List every Pokémon
    type <type>           List Pokémon of the given type
    ability <names>       List Pokémon per ability, names separated by commas
    abilities [query]     List abilities, optionally starting with the query
    show <number>         Show the details of a Pokémon";

#[tokio::main]
pub async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let arguments = Arguments::parse(env::args().skip(1))?;

    if let Command::Help = arguments.command {
        println!("{USAGE}");
        return Ok(());
    }

    let config = Config::load().await?;

    let catalog = match arguments.data.or(config.data) {
        Some(path) => task::spawn_blocking(move || Catalog::from_path(path)).await??,
        None => Catalog::load().await?,
    };

    let session = Session::new(config.image_host);

    match arguments.command {
        Command::Help => {}
        Command::List => {
            for pokemon in catalog.pokemon() {
                println!("{}", view::row(pokemon));
            }
        }
        Command::Type(type_) => {
            for pokemon in catalog.by_type(type_) {
                println!("{}", view::row(pokemon));
            }
        }
        Command::Ability(names) => {
            let sections: Vec<_> = names
                .iter()
                .map(|name| view::section(&catalog.ability(name)))
                .collect();

            print!("{}", sections.join("\n"));
        }
        Command::Abilities(query) => {
            let abilities = catalog.abilities();
            let search = ability::search(&abilities, &query);

            if search.is_empty() {
                println!("No abilities were found matching: {query:?}");
            }

            for ability in search.matches() {
                println!("{}", view::ability(ability));
            }
        }
        Command::Show(number) => {
            let pokemon = catalog.get(number).ok_or(Error::UnknownPokemon(number))?;

            let artwork = match Artwork::fetch(pokemon, &session).await {
                Ok(artwork) => Some(artwork),
                Err(error) => {
                    log::warn!("Artwork of {} is not available: {error}", pokemon.name);
                    None
                }
            };

            print!("{}", view::detail(&catalog, pokemon, artwork.as_ref()));
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
struct Arguments {
    data: Option<PathBuf>,
    command: Command,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    List,
    Type(Type),
    Ability(Vec<String>),
    Abilities(String),
    Show(u32),
}

impl Arguments {
    fn parse(arguments: impl IntoIterator<Item = String>) -> Result<Self, Error> {
        let mut data = None;
        let mut words = Vec::new();
        let mut arguments = arguments.into_iter();

        while let Some(argument) = arguments.next() {
            match argument.as_str() {
                "--data" => {
                    data = Some(PathBuf::from(
                        arguments.next().ok_or(Error::MissingValue("--data"))?,
                    ));
                }
                "-h" | "--help" => words = vec!["help".to_owned()],
                _ => words.push(argument),
            }
        }

        let Some((command, rest)) = words.split_first() else {
            return Ok(Self {
                data,
                command: Command::Help,
            });
        };

        let rest = rest.join(" ");

        let command = match command.as_str() {
            "help" => Command::Help,
            "list" => Command::List,
            "type" => Command::Type(rest.parse().map_err(|_| Error::InvalidType(rest))?),
            "ability" => Command::Ability(ability_names(&rest)?),
            "abilities" => Command::Abilities(rest),
            "show" => Command::Show(
                rest.trim_start_matches('#')
                    .parse()
                    .map_err(|_| Error::InvalidNumber(rest))?,
            ),
            _ => Err(Error::UnknownCommand(command.clone()))?,
        };

        Ok(Self { data, command })
    }
}

/// Splits a comma-separated list of ability names, dropping blanks and repeats.
fn ability_names(list: &str) -> Result<Vec<String>, Error> {
    let mut names: Vec<String> = Vec::new();

    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !names.iter().any(|known| known == name) {
            names.push(name.to_owned());
        }
    }

    if names.is_empty() {
        return Err(Error::MissingValue("ability"));
    }

    Ok(names)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
enum Error {
    #[error("unknown command: {0} (see `pokedex help`)")]
    UnknownCommand(String),
    #[error("missing value for {0} (see `pokedex help`)")]
    MissingValue(&'static str),
    #[error("invalid type: {0:?}")]
    InvalidType(String),
    #[error("invalid pokedex number: {0:?}")]
    InvalidNumber(String),
    #[error("no pokemon with number {0}")]
    UnknownPokemon(u32),
}
