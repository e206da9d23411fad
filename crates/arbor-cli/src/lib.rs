//! CLI logic for the Arbor family tree tool.
//!
//! This module contains the core CLI logic for the Arbor family tree tool:
//! obtaining a snapshot (from a JSON file or the built-in sample family),
//! resolving the root person, computing the layout, and writing the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io, path::PathBuf};

use log::{debug, info};
use thiserror::Error;

use arbor::{ArborError, TreeBuilder, identifier::Id, model::Person};
use arbor_source::{FamilySource, SourceError, json::JsonSource, memory::MemorySource};

/// Errors raised by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Arbor(#[from] ArborError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Failed to parse TOML configuration: {0}")]
    ConfigParse(String),

    #[error("Missing configuration file: {0}")]
    MissingConfigFile(PathBuf),

    #[error("Root person `{0}` not found in the snapshot")]
    RootNotFound(String),

    #[error("No input snapshot given; pass a file path or --sample")]
    MissingInput,
}

/// Run the Arbor CLI application
///
/// This function obtains the snapshot, computes the layout for the chosen
/// root, and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Snapshot parsing errors
/// - An explicitly named root that is not in the snapshot
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(output_path = args.output; "Processing family tree");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Obtain the snapshot; the mock-vs-file decision stays here, the engine
    // only ever sees the records.
    let source: Box<dyn FamilySource> = if args.sample {
        info!("Using the built-in sample family");
        Box::new(MemorySource::with_sample_family())
    } else {
        match args.input.as_ref() {
            Some(input) => Box::new(JsonSource::open(input)?),
            None => return Err(CliError::MissingInput),
        }
    };

    let people = source.fetch_all_people()?;
    let relationships = source.fetch_all_relationships()?;

    let root = resolve_root(args.root.as_deref(), &people)?;
    debug!(root:? = root.map(|id| id.to_string()); "Root resolved");

    // Compute the layout and render it
    let builder = TreeBuilder::new(app_config)?;
    let layout = builder.layout(&people, &relationships, root);
    let svg = builder.render_svg(&layout)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Resolves the root selection against the people snapshot.
///
/// An explicit selection matches a person by exact display name or by id
/// and is an error if nobody matches. Without a selection, the
/// earliest-born person is chosen (ties broken by name, then id); an empty
/// snapshot yields `None` and, downstream, the empty layout.
fn resolve_root(selection: Option<&str>, people: &[Person]) -> Result<Option<Id>, CliError> {
    match selection {
        Some(selection) => people
            .iter()
            .find(|person| person.name == selection || person.id == selection)
            .map(|person| Some(person.id))
            .ok_or_else(|| CliError::RootNotFound(selection.to_string())),
        None => Ok(people
            .iter()
            .min_by_key(|person| (person.birth_year, person.name.clone(), person.id.to_string()))
            .map(|person| person.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, name: &str, birth_year: i32) -> Person {
        Person::new(Id::new(id), name, birth_year)
    }

    #[test]
    fn test_resolve_root_by_name() {
        let people = [person("p1", "Ana Gray", 1950), person("p2", "Ben Gray", 1948)];

        let root = resolve_root(Some("Ana Gray"), &people).unwrap();
        assert_eq!(root, Some(Id::new("p1")));
    }

    #[test]
    fn test_resolve_root_by_id() {
        let people = [person("p1", "Ana Gray", 1950), person("p2", "Ben Gray", 1948)];

        let root = resolve_root(Some("p2"), &people).unwrap();
        assert_eq!(root, Some(Id::new("p2")));
    }

    #[test]
    fn test_resolve_root_unknown_selection_is_an_error() {
        let people = [person("p1", "Ana Gray", 1950)];

        let result = resolve_root(Some("Nobody"), &people);
        assert!(matches!(result, Err(CliError::RootNotFound(_))));
    }

    #[test]
    fn test_default_root_is_earliest_born() {
        let people = [
            person("p1", "Ana Gray", 1950),
            person("p2", "Ben Gray", 1948),
            person("p3", "Cal Gray", 1975),
        ];

        let root = resolve_root(None, &people).unwrap();
        assert_eq!(root, Some(Id::new("p2")));
    }

    #[test]
    fn test_default_root_tie_breaks_by_name() {
        let people = [person("p1", "Zoe Gray", 1950), person("p2", "Ana Gray", 1950)];

        let root = resolve_root(None, &people).unwrap();
        assert_eq!(root, Some(Id::new("p2")));
    }

    #[test]
    fn test_default_root_on_empty_snapshot_is_none() {
        let root = resolve_root(None, &[]).unwrap();
        assert_eq!(root, None);
    }
}
