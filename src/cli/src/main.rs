#![warn(clippy::pedantic)]

mod config;
mod render;
mod store;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use config::Config;
use cube_core::{CubeState, Move, facelets, notation, scramble, validate};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info, warn};
use owo_colors::OwoColorize;
use store::SaveStore;

/// Plays move sequences on a 3x3x3 cube and keeps named cube states
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print the net with letters instead of colors
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence and print the resulting cube
    Apply {
        /// The move sequence to apply, e.g. "R U' F2"
        sequence: String,
        /// Start from a saved state instead of a solved cube
        #[arg(long, value_name = "SAVE")]
        from: Option<String>,
        /// Reject unrecognized moves instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Print the sequence that undoes a move sequence
    Invert {
        sequence: String,
    },
    /// Generate a random move sequence
    Scramble {
        /// Number of moves; defaults to the configured scramble length
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that a saved state could be a real cube
    Validate {
        save: String,
    },
    /// Print the facelet string of the cube after a move sequence
    Facelets {
        sequence: String,
    },
    /// Save the cube reached from solved by a move sequence
    Save {
        name: String,
        #[arg(default_value = "")]
        sequence: String,
    },
    /// List the saved states
    List,
    /// Print a saved state
    Show {
        name: String,
    },
    /// Delete a saved state
    Delete {
        name: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let config = Config::load(&config_path)?;
    info!("Saves are kept in {}", config.saves.display());

    let print_net = |state: &CubeState| {
        if cli.plain {
            println!("{}", render::plain_net(state));
        } else {
            println!("{}", render::net(state));
        }
    };

    match cli.command {
        Commands::Apply {
            sequence,
            from,
            strict,
        } => {
            let moves = read_moves(&sequence, strict)?;
            let start = match from {
                Some(name) => SaveStore::open(&config.saves)?.get(&name)?.clone(),
                None => CubeState::solved_with(&config.scheme),
            };
            let end = start.apply_moves(&moves);
            print_net(&end);
            if end.is_solved() && validate(&end).is_ok() {
                println!("{}", "Solved".green());
            } else {
                println!("Not solved");
            }
        }
        Commands::Invert { sequence } => {
            let moves = read_moves(&sequence, false)?;
            println!("{}", notation::format(&notation::invert(&moves)));
        }
        Commands::Scramble { length, seed } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let length = length.unwrap_or(config.scramble_length);
            let moves = scramble::random_moves(length, &mut rng);
            println!("{}", notation::format(&moves));
            print_net(&CubeState::solved_with(&config.scheme).apply_moves(&moves));
        }
        Commands::Validate { save } => {
            let store = SaveStore::open(&config.saves)?;
            let result = validate(store.get(&save)?);
            if result.is_ok() {
                println!("{}", "Valid".green());
            } else {
                for error in &result.errors {
                    println!("{} {error}", "error:".red().bold());
                }
                let faces = result.faces_needing_correction();
                if !faces.is_empty() {
                    println!("Faces needing correction: {}", faces.iter().join(" "));
                }
                return Err(eyre!("`{save}` is not a valid cube"));
            }
        }
        Commands::Facelets { sequence } => {
            let moves = read_moves(&sequence, false)?;
            let state = CubeState::solved_with(&config.scheme).apply_moves(&moves);
            println!("{}", facelets::to_facelet_string(&state)?);
        }
        Commands::Save { name, sequence } => {
            let moves = read_moves(&sequence, false)?;
            let state = CubeState::solved_with(&config.scheme).apply_moves(&moves);
            let mut store = SaveStore::open(&config.saves)?;
            if store.insert(name.clone(), state).is_some() {
                warn!("Overwriting the save `{name}`");
            }
            store.write()?;
        }
        Commands::List => {
            for name in SaveStore::open(&config.saves)?.names() {
                println!("{name}");
            }
        }
        Commands::Show { name } => {
            let store = SaveStore::open(&config.saves)?;
            let state = store.get(&name)?;
            print_net(state);
            if let Some(facelets) = facelets_of(&name, state) {
                println!("{facelets}");
            }
        }
        Commands::Delete { name } => {
            let mut store = SaveStore::open(&config.saves)?;
            store.remove(&name)?;
            store.write()?;
        }
    }

    Ok(())
}

fn read_moves(sequence: &str, strict: bool) -> color_eyre::Result<Vec<Move>> {
    if strict {
        Ok(notation::parse_strict(sequence)?)
    } else {
        Ok(notation::parse(sequence))
    }
}

/// The facelet string of a saved state, or `None` (logged) when the state
/// has unknown stickers or ambiguous centers.
fn facelets_of(name: &str, state: &CubeState) -> Option<String> {
    match facelets::to_facelet_string(state) {
        Ok(facelets) => Some(facelets),
        Err(e) => {
            debug!("No facelet string for `{name}`: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_skips_facelets_for_unscanned_cubes() {
        assert_eq!(facelets_of("blank", &CubeState::unclassified()), None);
        assert_eq!(
            facelets_of("solved", &CubeState::solved()).as_deref(),
            Some("UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB")
        );
    }
}
