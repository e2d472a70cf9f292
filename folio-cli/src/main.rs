//! folio - command-line front end for the dashboard table engine.
//!
//! Reads rows from a JSON file, applies filters, sorting, paging, moves and
//! selection, and prints the resulting page. `--submit` runs a row through
//! the detail view's simulated save.

mod args;
mod error;
mod paths;
mod render;

use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;

use clap::Parser;
use folio_lib::detail::{DetailView, SaveOutcome, SimulatedSaver};
use folio_lib::model::{Status, assigned_reviewers, dashboard_table, parse_rows};
use folio_lib::notify::{Notification, NotificationKind};
use folio_lib::query::{Direction, FilterValue, SortSpec};
use folio_lib::{Row, TableConfig, TableState};
use log::{LevelFilter, debug, info, warn};
use simplelog::{Config, WriteLogger};

use crate::args::Args;
use crate::error::CliError;
use crate::paths::AppDirs;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let dirs = AppDirs::discover();
    init_logging(dirs.as_ref(), args.verbose);

    if let Err(e) = run(args, dirs.as_ref()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to the cache dir. Logging is best-effort; the CLI runs without it.
fn init_logging(dirs: Option<&AppDirs>, verbose: bool) {
    let Some(dirs) = dirs else {
        return;
    };
    if let Err(e) = dirs.rotate_logs() {
        eprintln!("Warning: could not rotate logs: {}", e);
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    match File::create(dirs.log_file()) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Warning: could not start logging: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: could not open log file: {}", e),
    }
}

async fn run(args: Args, dirs: Option<&AppDirs>) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref(), dirs)?;

    let json = fs::read_to_string(&args.rows).map_err(|e| CliError::read(&args.rows, e))?;
    let rows = parse_rows(&json)?;
    info!("Loaded {} rows from {}", rows.len(), args.rows.display());
    let mut table = dashboard_table(rows, &config)?;

    apply_view(&mut table, &args, &config)?;

    if let Some(id) = args.submit {
        submit(&mut table, id, &args, &config).await?;
    }

    print!("{}", render::page(&table));

    if let Some(column) = &args.facets {
        println!();
        for (value, count) in table.faceted_values(column) {
            println!("{:>4}  {}", count, value);
        }
    }

    if args.reviewers {
        println!();
        for name in assigned_reviewers(table.rows()) {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Load config from `--config`, else the platform config file if present,
/// else defaults.
fn load_config(explicit: Option<&Path>, dirs: Option<&AppDirs>) -> Result<TableConfig, CliError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match dirs.map(AppDirs::config_file) {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No config file, using defaults");
                return Ok(TableConfig::default());
            }
        },
    };
    let text = fs::read_to_string(&path).map_err(|e| CliError::read(&path, e))?;
    let config =
        serde_json::from_str(&text).map_err(|source| CliError::Config { path: path.clone(), source })?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply the view options in the order a user would click them.
fn apply_view(
    table: &mut TableState<Row>,
    args: &Args,
    config: &TableConfig,
) -> Result<(), CliError> {
    for column in &args.hidden {
        if !table.set_column_visible(column, false) {
            warn!("Column '{}' cannot be hidden", column);
        }
    }

    for (column, text) in &args.filters {
        if table.column(column).is_none() {
            warn!("Cannot filter by unknown column '{}'", column);
            continue;
        }
        table.set_column_filter(column, Some(FilterValue::contains(text.as_str())));
    }
    if !args.statuses.is_empty() {
        let labels = args
            .statuses
            .iter()
            .map(|s| Status::from_str(s).map(Status::label))
            .collect::<Result<Vec<_>, _>>()?;
        table.set_column_filter("status", Some(FilterValue::one_of(labels)));
    }

    if !args.sorts.is_empty() {
        let mut spec = SortSpec::none();
        for (column, direction) in &args.sorts {
            if !table.column(column).is_some_and(|c| c.sortable) {
                warn!("Cannot sort by column '{}'", column);
                continue;
            }
            spec = match direction {
                Direction::Asc => spec.then_asc(column.as_str()),
                Direction::Desc => spec.then_desc(column.as_str()),
            };
        }
        table.set_sort_spec(spec);
    }

    for (from, to) in &args.moves {
        if !table.move_row(from, to) {
            warn!("Move {}:{} ignored", from, to);
        }
    }

    if let Some(size) = args.page_size {
        if !config.is_offered_page_size(size) {
            warn!("Page size {} is not one of {:?}", size, config.page_size_options);
        }
        table.set_page_size(size)?;
    }
    if let Some(page) = args.page {
        table.set_page(page.saturating_sub(1));
    }

    for id in &args.selected {
        if !table.toggle_row_selected(id, true) {
            warn!("No row with id {} to select", id);
        }
    }
    if args.select_page {
        table.toggle_all_on_page(true);
    }
    Ok(())
}

/// Open a row in the detail view, apply `--set` edits and save it.
async fn submit(
    table: &mut TableState<Row>,
    id: u32,
    args: &Args,
    config: &TableConfig,
) -> Result<(), CliError> {
    let Some(mut view) = DetailView::open_key(table, &id) else {
        eprintln!("No row with id {}", id);
        return Ok(());
    };
    if let Some(draft) = view.draft_mut() {
        for (field, value) in &args.edits {
            set_field(draft, field, value)?;
        }
    }

    let outcome = if args.fail {
        SaveOutcome::Fail
    } else {
        SaveOutcome::Succeed
    };
    let saver = SimulatedSaver::from_config(config).with_outcome(outcome);
    let notifier = |note: Notification| println!("{} {}", kind_tag(note.kind), note.message);

    match view.submit(&saver, &notifier).await {
        Ok(saved) => {
            table.update_row(saved);
        }
        Err(e) => warn!("Save of row {} failed: {}", id, e),
    }
    Ok(())
}

fn set_field(row: &mut Row, field: &str, value: &str) -> Result<(), CliError> {
    match field {
        "header" => row.header = value.to_string(),
        "type" => row.kind = value.to_string(),
        "status" => row.status = Status::from_str(value)?,
        "target" => row.target = value.to_string(),
        "limit" => row.limit = value.to_string(),
        "reviewer" => row.reviewer = value.to_string(),
        other => return Err(CliError::UnknownField(other.to_string())),
    }
    Ok(())
}

fn kind_tag(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "[info]",
        NotificationKind::Pending => "[....]",
        NotificationKind::Success => "[ ok ]",
        NotificationKind::Failure => "[fail]",
    }
}
