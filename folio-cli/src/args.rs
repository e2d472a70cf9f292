//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use folio_lib::query::Direction;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    about = "Filter, sort, page and edit dashboard table rows"
)]
pub struct Args {
    /// JSON file holding an array of rows
    #[arg(value_name = "ROWS")]
    pub rows: PathBuf,

    /// Config file (default: config.json in the platform config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep rows whose column contains TEXT (case-insensitive)
    #[arg(long = "filter", value_name = "COL=TEXT", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Keep rows with one of these status labels
    #[arg(long = "status", value_name = "LABEL")]
    pub statuses: Vec<String>,

    /// Sort by column; repeat for tie-breaking keys
    #[arg(long = "sort", value_name = "COL[:asc|desc]", value_parser = parse_sort)]
    pub sorts: Vec<(String, Direction)>,

    /// Hide a column
    #[arg(long = "hide", value_name = "COL")]
    pub hidden: Vec<String>,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Page to show, starting at 1
    #[arg(long, value_name = "N")]
    pub page: Option<usize>,

    /// Move the row with id FROM to the position of row TO
    #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move)]
    pub moves: Vec<(u32, u32)>,

    /// Select a row by id
    #[arg(long = "select", value_name = "ID")]
    pub selected: Vec<u32>,

    /// Select every row on the shown page
    #[arg(long)]
    pub select_page: bool,

    /// List distinct values of a column with their counts
    #[arg(long, value_name = "COL")]
    pub facets: Option<String>,

    /// List the reviewers assigned to any row
    #[arg(long)]
    pub reviewers: bool,

    /// Open the row with this id in the detail view and save it
    #[arg(long, value_name = "ID")]
    pub submit: Option<u32>,

    /// Edit a field of the submitted row before saving
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_filter, requires = "submit")]
    pub edits: Vec<(String, String)>,

    /// Make the simulated save fail
    #[arg(long, requires = "submit")]
    pub fail: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse `KEY=VALUE`.
fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse `COL`, `COL:asc` or `COL:desc`.
fn parse_sort(s: &str) -> Result<(String, Direction), String> {
    let (column, direction) = match s.split_once(':') {
        None => (s, Direction::Asc),
        Some((column, dir)) => match dir.to_ascii_lowercase().as_str() {
            "asc" => (column, Direction::Asc),
            "desc" => (column, Direction::Desc),
            other => return Err(format!("unknown sort direction '{}'", other)),
        },
    };
    if column.is_empty() {
        return Err(format!("missing column in '{}'", s));
    }
    Ok((column.to_string(), direction))
}

/// Parse `FROM:TO` row ids.
fn parse_move(s: &str) -> Result<(u32, u32), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", s))?;
    let parse = |id: &str| {
        id.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid row id '{}': {}", id, e))
    };
    Ok((parse(from)?, parse(to)?))
}
