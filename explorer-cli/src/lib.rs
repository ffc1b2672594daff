//! Command-line inspector for the landmark explorer.
//!
//! The CLI is a headless presentation surface: it replays chip toggles and a
//! marker click against a [`Session`] and prints what a map front end would
//! render.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use explorer_core::{Catalog, Session};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

mod dataset;
mod error;

use dataset::DatasetSource;
pub use error::CliError;

pub(crate) const ARG_DATA_DIR: &str = "data-dir";
const ARG_TAG: &str = "tag";
const ARG_SELECT: &str = "select";

/// Run the explorer CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Tags(args) => {
            let config = resolve_tags_config(args)?;
            let catalog = config.dataset.load()?;
            write_tags(writer, &catalog)
        }
        Command::Landmarks(args) => {
            let config = resolve_landmarks_config(args)?;
            let catalog = config.dataset.load()?;
            let mut session = Session::new(&catalog);
            for tag in &config.tags {
                session.toggle_tag(tag);
            }
            write_json(writer, &session.visible_landmarks())
        }
        Command::Browse(args) => {
            let config = resolve_browse_config(args)?;
            let catalog = config.dataset.load()?;
            let session = replay_browse(&catalog, &config)?;
            write_json(writer, &session.view())
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "explorer",
    about = "Inspect landmark datasets and filter sessions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the sorted tag index, one tag per line.
    Tags(TagsArgs),
    /// Print the landmarks that carry every given tag.
    Landmarks(LandmarksArgs),
    /// Replay filter toggles and a marker click, then print the session view.
    Browse(BrowseArgs),
}

/// CLI arguments for the `tags` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "tags", about = "Print the sorted tag index")]
#[ortho_config(prefix = "EXPLORER")]
struct TagsArgs {
    /// Directory of per-city JSON files; defaults to the bundled dataset.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    data_dir: Option<Utf8PathBuf>,
}

/// CLI arguments for the `landmarks` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "landmarks",
    about = "Print the landmarks visible under the given filters",
    long_about = "Print the landmarks visible under the given filters as \
                 JSON. A landmark is visible only when it carries every \
                 --tag value."
)]
#[ortho_config(prefix = "EXPLORER")]
struct LandmarksArgs {
    /// Directory of per-city JSON files; defaults to the bundled dataset.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    data_dir: Option<Utf8PathBuf>,
    /// Tag chips to toggle, in order.
    #[arg(long = ARG_TAG, value_name = "tag")]
    #[serde(default)]
    tag: Vec<String>,
}

/// CLI arguments for the `browse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "browse",
    about = "Print the session view after toggles and a selection",
    long_about = "Toggle each --tag chip in order, then click the --select \
                 marker, and print the resulting session view (chips, \
                 markers, map bounds and detail panel) as JSON."
)]
#[ortho_config(prefix = "EXPLORER")]
struct BrowseArgs {
    /// Directory of per-city JSON files; defaults to the bundled dataset.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    data_dir: Option<Utf8PathBuf>,
    /// Tag chips to toggle, in order.
    #[arg(long = ARG_TAG, value_name = "tag")]
    #[serde(default)]
    tag: Vec<String>,
    /// Identifier of the marker to click after toggling.
    #[arg(long = ARG_SELECT, value_name = "id")]
    #[serde(default)]
    select: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TagsConfig {
    dataset: DatasetSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LandmarksConfig {
    dataset: DatasetSource,
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BrowseConfig {
    dataset: DatasetSource,
    tags: Vec<String>,
    select: Option<String>,
}

impl From<TagsArgs> for TagsConfig {
    fn from(args: TagsArgs) -> Self {
        Self {
            dataset: DatasetSource::from_option(args.data_dir),
        }
    }
}

impl From<LandmarksArgs> for LandmarksConfig {
    fn from(args: LandmarksArgs) -> Self {
        Self {
            dataset: DatasetSource::from_option(args.data_dir),
            tags: args.tag,
        }
    }
}

impl From<BrowseArgs> for BrowseConfig {
    fn from(args: BrowseArgs) -> Self {
        Self {
            dataset: DatasetSource::from_option(args.data_dir),
            tags: args.tag,
            select: args.select,
        }
    }
}

fn resolve_tags_config(args: TagsArgs) -> Result<TagsConfig, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = TagsConfig::from(merged);
    config.dataset.validate()?;
    Ok(config)
}

fn resolve_landmarks_config(args: LandmarksArgs) -> Result<LandmarksConfig, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = LandmarksConfig::from(merged);
    config.dataset.validate()?;
    Ok(config)
}

fn resolve_browse_config(args: BrowseArgs) -> Result<BrowseConfig, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = BrowseConfig::from(merged);
    config.dataset.validate()?;
    Ok(config)
}

/// Apply the configured interactions to a fresh session.
///
/// A real surface only renders clickable markers for visible landmarks, so a
/// selection the filters hide is rejected rather than forwarded.
fn replay_browse<'c>(catalog: &'c Catalog, config: &BrowseConfig) -> Result<Session<'c>, CliError> {
    let mut session = Session::new(catalog);
    for tag in &config.tags {
        session.toggle_tag(tag);
    }
    if let Some(id) = &config.select {
        let is_marker = session.visible_landmarks().iter().any(|l| &l.id == id);
        if !is_marker {
            return Err(if catalog.get(id).is_some() {
                CliError::HiddenLandmark { id: id.clone() }
            } else {
                CliError::UnknownLandmark { id: id.clone() }
            });
        }
        session.select_by_id(id);
    }
    Ok(session)
}

fn write_tags(writer: &mut dyn Write, catalog: &Catalog) -> Result<(), CliError> {
    for tag in catalog.tag_index().iter() {
        writeln!(writer, "{tag}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn browse_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<BrowseConfig, CliError> {
    let merged = BrowseArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(BrowseConfig::from(merged))
}

#[cfg(test)]
mod tests;
