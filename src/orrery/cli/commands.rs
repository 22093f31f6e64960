//! # CLI Layer
//!
//! One possible presenter for orrery. This is the only place that:
//! - Parses arguments
//! - Writes to stdout/stderr
//! - Resolves the data directory from flags and the environment
//!
//! Every handler follows the same shape: call the API, persist after a
//! successful mutation, print the messages, then re-render the catalog.

use super::render::{print_bodies, print_messages};
use super::setup::{BodyFields, Cli, Commands};
use super::shell;
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use orrery::api::{CmdResult, ConfigAction, OrreryApi, OrreryPaths};
use orrery::config::OrreryConfig;
use orrery::error::{OrreryError, Result};
use orrery::index::DisplayIndex;
use orrery::model::{Direction, Field};
use orrery::store::fs::FileStore;
use std::path::PathBuf;

const HOME_ENV: &str = "ORRERY_HOME";

pub(super) struct AppContext {
    pub api: OrreryApi<FileStore>,
    pub config: OrreryConfig,
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;
    let command = cli.command.unwrap_or(Commands::List);

    match command {
        Commands::Reset => handle_reset(&mut ctx),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
        Commands::Shell => {
            load_catalog(&mut ctx)?;
            shell::run(&mut ctx)
        }
        other => {
            load_catalog(&mut ctx)?;
            execute(&mut ctx, other)
        }
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "orrery", "orrery")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| OrreryError::Config("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = OrreryConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone()).with_data_file(&config.data_file);
    let api = OrreryApi::new(store, OrreryPaths::new(data_dir));

    Ok(AppContext {
        api,
        config,
        verbose: cli.verbose,
    })
}

pub(super) fn load_catalog(ctx: &mut AppContext) -> Result<()> {
    match ctx.api.load() {
        Ok(result) => {
            print_messages(&result.messages, ctx.verbose);
            Ok(())
        }
        Err(e @ OrreryError::CorruptData { .. }) => {
            eprintln!(
                "{}",
                "Run `orrery reset` to discard the data file and start from the default dataset."
                    .yellow()
            );
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Runs one catalog command against an already loaded context.
pub(super) fn execute(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::List => handle_list(ctx),
        Commands::Add { fields } => handle_add(ctx, fields),
        Commands::Edit { index, fields } => handle_edit(ctx, index, fields),
        Commands::Remove { index } => handle_remove(ctx, index),
        Commands::Sort { field, desc } => handle_sort(ctx, field, desc),
        Commands::Reset => handle_reset(ctx),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Shell => {
            eprintln!("{}", "Already in a shell session.".yellow());
            Ok(())
        }
    }
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_records()?;
    print_bodies(&result.listed_bodies, ctx.config.precision, None);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: BodyFields) -> Result<()> {
    let result = ctx.api.add_record(&fields.to_input())?;
    finish_mutation(ctx, result)
}

fn handle_edit(ctx: &mut AppContext, index: DisplayIndex, fields: BodyFields) -> Result<()> {
    let result = ctx.api.edit_record(index, &fields.to_input())?;
    finish_mutation(ctx, result)
}

fn handle_remove(ctx: &mut AppContext, index: DisplayIndex) -> Result<()> {
    let result = ctx.api.remove_record(index)?;
    finish_mutation(ctx, result)
}

/// Saves after a mutation. A failed save keeps the in-memory change and is
/// reported as an error so the caller can decide what to do.
fn finish_mutation(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages, ctx.verbose);
    match ctx.api.persist() {
        Ok(saved) => print_messages(&saved.messages, ctx.verbose),
        Err(e) => {
            eprintln!("{}", "Warning: the change was not saved.".yellow());
            return Err(e);
        }
    }
    handle_list(ctx)
}

fn handle_sort(ctx: &mut AppContext, field: Field, desc: bool) -> Result<()> {
    if desc {
        ctx.api.set_sort_direction(field, Direction::Descending);
    }
    let result = ctx.api.sort_by_field(field)?;
    print_bodies(&result.listed_bodies, ctx.config.precision, result.sorted);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset()?;
    print_messages(&result.messages, ctx.verbose);
    handle_list(ctx)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages, true);
    if let Some(config) = result.config {
        ctx.config.precision = config.precision;
        if config.data_file != ctx.config.data_file {
            eprintln!(
                "{}",
                "The new data file takes effect on the next run.".dimmed()
            );
        }
    }
    Ok(())
}
