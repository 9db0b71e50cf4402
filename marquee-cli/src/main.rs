mod args;
mod error;
mod output;
mod paths;
mod settings;

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::time::Duration;

use clap::Parser;
use log::{debug, info};
use marquee_lib::console::{ConsoleScreen, fixtures, screens};
use marquee_lib::table::{
    Column, DataTable, Direction, FilterClause, MemorySource, TableListener, TableRecord,
    ViewConfig,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::Args;
use crate::error::CliError;
use crate::settings::{Scope, SettingsProvider};

/// Logs every state change the table reports.
struct ChangeLog;

impl TableListener for ChangeLog {
    fn on_pagination_change(&self, page: usize, page_size: usize) {
        debug!("page {} (size {})", page, page_size);
    }

    fn on_search_change(&self, term: &str) {
        debug!("search {:?}", term);
    }

    fn on_sort_change(&self, column: Option<&str>, direction: Direction) {
        debug!("sort {:?} {}", column, direction);
    }

    fn on_filter_change(&self, clauses: &[FilterClause]) {
        debug!("{} filter clause(s)", clauses.len());
    }
}

/// Resolved run options after merging arguments with saved preferences.
struct Options {
    page_size: usize,
    latency: Option<Duration>,
}

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

async fn resolve_options(args: &Args, prefs: &SettingsProvider) -> Result<Options, CliError> {
    let screen = Scope::Screen(args.screen);
    if args.reset {
        prefs.clear(screen).await?;
        prefs.clear(Scope::Global).await?;
        info!("cleared saved preferences for {}", args.screen);
    }

    let page_size = match args.page_size {
        Some(size) => size,
        None => prefs
            .get::<u64>(screen, settings::PAGE_SIZE)
            .await?
            .filter(|&saved| saved > 0)
            .map_or(ViewConfig::default().page_size, |saved| saved as usize),
    };
    let latency_ms = match args.latency_ms {
        Some(ms) => ms,
        None => prefs.get_or(Scope::Global, settings::LATENCY_MS, 0u64).await?,
    };

    if args.save {
        prefs.set(screen, settings::PAGE_SIZE, &(page_size as u64)).await?;
        prefs.set(Scope::Global, settings::LATENCY_MS, &latency_ms).await?;
        info!(
            "saved page size {} for {} and latency {}ms",
            page_size, args.screen, latency_ms
        );
    }

    Ok(Options {
        page_size,
        latency: (latency_ms > 0).then(|| Duration::from_millis(latency_ms)),
    })
}

/// Applies the requested search, filters and sort to a table.
fn apply_intent<T: TableRecord>(table: &DataTable<T>, args: &Args) -> Result<(), CliError> {
    if let Some(term) = &args.search {
        table.set_search(term.as_str());
    }

    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (column, value) in &args.filters {
        grouped.entry(column.as_str()).or_default().push(value.as_str());
    }
    for (column, values) in grouped {
        table.set_filter(column, values)?;
    }

    if let Some((column, direction)) = &args.sort {
        table.set_sort(column, *direction)?;
    }
    Ok(())
}

/// Drives one screen and returns the text to print.
async fn run_screen<T: TableRecord>(
    screen: ConsoleScreen,
    args: &Args,
    opts: &Options,
    records: Vec<T>,
    columns: Vec<Column<T>>,
) -> Result<String, CliError> {
    let config = ViewConfig::new().with_page_size(opts.page_size);

    if let Some(column) = &args.options {
        let table = DataTable::new(columns, records).with_config(config);
        let values = table.filter_options(column)?;
        return Ok(output::options(column, &values));
    }

    let table = if args.delegated {
        DataTable::delegated(columns.clone())
    } else {
        DataTable::new(columns.clone(), records.clone())
    }
    .with_config(config)
    .with_listener(ChangeLog);
    table.set_page_size(opts.page_size)?;
    apply_intent(&table, args)?;

    if args.delegated {
        let mut source = MemorySource::new(records, columns);
        if let Some(latency) = opts.latency {
            source = source.with_latency(latency);
        }
        table.refresh(&source).await?;
        if table.set_page(args.page) != 1 {
            table.refresh(&source).await?;
        }
        debug!("served {} fetch(es)", source.fetch_count());
    } else {
        table.set_page(args.page);
    }

    let rendered = table.render();
    if args.json {
        Ok(output::json(&rendered)?)
    } else {
        Ok(output::text(screen.title(), &rendered))
    }
}

async fn run(args: Args) -> Result<String, CliError> {
    let prefs = SettingsProvider::open_default().await;
    let opts = resolve_options(&args, &prefs).await?;
    info!(
        "listing {} ({} mode, page size {})",
        args.screen,
        if args.delegated { "delegated" } else { "local" },
        opts.page_size
    );

    match args.screen {
        ConsoleScreen::Theatres => {
            run_screen(args.screen, &args, &opts, fixtures::theatres(), screens::theatre_columns())
                .await
        }
        ConsoleScreen::Screens => {
            run_screen(args.screen, &args, &opts, fixtures::screens(), screens::screen_columns())
                .await
        }
        ConsoleScreen::Devices => {
            run_screen(args.screen, &args, &opts, fixtures::devices(), screens::device_columns())
                .await
        }
        ConsoleScreen::Tasks => {
            run_screen(args.screen, &args, &opts, fixtures::tasks(), screens::task_columns()).await
        }
        ConsoleScreen::Partners => {
            run_screen(
                args.screen,
                &args,
                &opts,
                fixtures::partner_requests(),
                screens::partner_columns(),
            )
            .await
        }
        ConsoleScreen::Mappings => {
            run_screen(
                args.screen,
                &args,
                &opts,
                fixtures::identifier_mappings(),
                screens::mapping_columns(),
            )
            .await
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();

    match run(args).await {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
