//! roster: browse a team roster as a gridwork table.
//!
//! ```text
//! roster --search infra --sort -age
//! roster --filter team=Core --filter 'age>=40' --show email
//! roster --preview 3 --expand --page 2
//! roster --config table.yaml --json
//! ```

mod member;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use gridwork::{
    ColumnFilter, HostCallbacks, Number, Op, RowAction, RowCallbacks, Snapshot, SortKey,
    TableConfig, TableController, TableShell,
};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::member::Member;

const SAMPLE: &str = include_str!("../data/members.json");

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse a team roster as a searchable, sortable table")]
struct Cli {
    /// Roster JSON file (defaults to the bundled sample)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Table config, YAML or JSON by extension
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search across searchable columns
    #[arg(short, long)]
    search: Option<String>,

    /// Sort column, `-name` for descending; repeat for tie-breakers
    #[arg(long = "sort", allow_hyphen_values = true)]
    sort: Vec<String>,

    /// Column filter: `col=text`, `col>=n`, `col<n`, `col:a,b` or `col~regex`
    #[arg(short, long = "filter")]
    filters: Vec<String>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Collapse to this many preview rows
    #[arg(long)]
    preview: Option<usize>,

    /// Expand a collapsed table
    #[arg(long)]
    expand: bool,

    /// Show a hidden column
    #[arg(long)]
    show: Vec<String>,

    /// Hide a column
    #[arg(long)]
    hide: Vec<String>,

    /// Mark members as selected by id
    #[arg(long)]
    select: Vec<u32>,

    /// Run the edit action on a member
    #[arg(long)]
    edit: Option<u32>,

    /// Render as if the roster were still loading
    #[arg(long)]
    loading: bool,

    /// Render the error state with this message
    #[arg(long)]
    error: Option<String>,

    /// Print the view model as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let members = load_members(cli.data.as_deref())?;
    let config = build_config(&cli)?;

    let callbacks = RowCallbacks::new()
        .on_edit(|m: &Member| info!("edit requested for {} <{}>", m.name, m.email))
        .on_delete(|m: &Member| info!("delete requested for {}", m.name));
    let controller =
        TableController::from_definition(&member::definition(), config, &callbacks);
    let mut shell = TableShell::new(
        controller,
        HostCallbacks::new()
            .on_row_click(|m: &Member| info!("opened {}", m.name))
            .on_add_click(|| info!("add member"))
            .on_retry(|| info!("retry")),
    );

    apply_actions(&mut shell, &cli, &members)?;

    if let Some(id) = cli.edit {
        let member = members
            .iter()
            .find(|m| m.id == id)
            .with_context(|| format!("no member with id {}", id))?;
        if !shell.activate(member, "actions", RowAction::Edit) {
            bail!("edit is not available");
        }
    }

    let mut snapshot = Snapshot::new(&members).loading(cli.loading);
    if let Some(message) = cli.error.as_deref() {
        snapshot = snapshot.error(message);
    }
    let presentation = shell.render(&snapshot);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&presentation)?);
    } else {
        println!("{}", presentation);
    }
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")
}

fn load_members(path: Option<&Path>) -> Result<Vec<Member>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => SAMPLE.to_string(),
    };
    let members: Vec<Member> = serde_json::from_str(&text).context("invalid roster JSON")?;
    debug!("loaded {} members", members.len());
    Ok(members)
}

fn build_config(cli: &Cli) -> Result<TableConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let parsed = match path.extension().and_then(|e| e.to_str()) {
                Some("json") => TableConfig::from_json(&text),
                _ => TableConfig::from_yaml(&text),
            };
            parsed.with_context(|| format!("invalid config {}", path.display()))?
        }
        None => TableConfig::default(),
    };
    config.add_button_label = "Add member".to_string();

    if let Some(size) = cli.page_size {
        config = config.page_size(size);
    }
    if let Some(rows) = cli.preview {
        config = config.expandable(rows);
    }
    config.validate()?;
    Ok(config)
}

fn apply_actions(shell: &mut TableShell<Member>, cli: &Cli, members: &[Member]) -> Result<()> {
    let table = shell.controller_mut();

    for id in &cli.show {
        table.set_column_visibility(id, true);
    }
    for id in &cli.hide {
        table.set_column_visibility(id, false);
    }

    let sorting = cli
        .sort
        .iter()
        .map(|key| match key.strip_prefix('-') {
            Some(field) => SortKey::desc(field),
            None => SortKey::asc(key.as_str()),
        })
        .collect();
    table.set_sorting(sorting);

    for spec in &cli.filters {
        table.set_column_filter(parse_filter(spec)?);
    }
    if let Some(query) = &cli.search {
        table.set_global_filter(query.as_str());
    }

    for member in members.iter().filter(|m| cli.select.contains(&m.id)) {
        table.toggle_row_selected(member);
    }

    if cli.expand {
        table.toggle_expanded();
    }

    let page_count = table.derive(members, cli.loading).page_count;
    debug!("{} pages", page_count);
    table.set_page_index(cli.page.saturating_sub(1));
    Ok(())
}

/// Parses a command-line filter such as `team=Core` or `age>=40`.
fn parse_filter(spec: &str) -> Result<ColumnFilter> {
    const OPS: [(&str, Op); 4] = [(">=", Op::Gte), ("<=", Op::Lte), (">", Op::Gt), ("<", Op::Lt)];

    for (token, op) in OPS {
        if let Some((field, operand)) = spec.split_once(token) {
            let number: f64 = operand
                .trim()
                .parse()
                .with_context(|| format!("'{}' is not a number", operand))?;
            return Ok(ColumnFilter::compare(field.trim(), op, Number::F64(number))?);
        }
    }
    if let Some((field, pattern)) = spec.split_once('~') {
        return Ok(ColumnFilter::regex(field.trim(), pattern)?);
    }
    if let Some((field, options)) = spec.split_once(':') {
        return Ok(ColumnFilter::one_of(field.trim(), options.split(',').map(str::trim)));
    }
    if let Some((field, text)) = spec.split_once('=') {
        return Ok(ColumnFilter::text(field.trim(), text));
    }
    bail!("cannot parse filter '{}'", spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwork::FilterValue;

    #[test]
    fn parses_text_and_comparison_filters() {
        let text = parse_filter("team=Core").unwrap();
        assert_eq!(text.field, "team");
        assert!(matches!(text.value, FilterValue::Text(ref t) if t == "Core"));

        let cmp = parse_filter("age>=40").unwrap();
        assert_eq!(cmp.field, "age");
        assert!(cmp.matches(&gridwork::Value::Number(Number::U64(40))));
        assert!(!cmp.matches(&gridwork::Value::Number(Number::U64(39))));

        let one_of = parse_filter("role:admin, editor").unwrap();
        assert!(one_of.matches(&gridwork::Value::from("editor")));
        assert!(!one_of.matches(&gridwork::Value::from("viewer")));
    }

    #[test]
    fn rejects_bad_filters() {
        assert!(parse_filter("age>=old").is_err());
        assert!(parse_filter("name~(").is_err());
        assert!(parse_filter("nonsense").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
