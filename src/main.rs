use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use tablesort::cli::Args;
use tablesort::components::table::{headers_for, render_text};
use tablesort::{Row, SearchParams, SortHeader, SortedTable, config, errors, logging};

fn main() -> Result<()> {
    errors::init()?;

    let args = Args::parse();
    let config = config::Config::new(args.config.clone())?;
    logging::init(&config)?;

    let rows = load_rows(&args.input)?;
    info!(rows = rows.len(), input = %args.input.display(), "Loaded rows");

    let mut params = SearchParams::parse(&args.query);
    for click in &args.clicks {
        SortHeader::new(&click.column, &click.column).mode(click.mode).activate(&mut params);
    }
    debug!(query = %params, "Query after clicks");

    let headers = headers_for(&rows, config.indicator);
    let mut table = SortedTable::new();
    let view = table.view(&rows, &params);

    let mut out = io::stdout().lock();
    writeln!(out, "?{params}")?;
    if args.json {
        let rows: Vec<&Row> = view.iter().map(Arc::as_ref).collect();
        serde_json::to_writer_pretty(&mut out, &rows)?;
        writeln!(out)?;
    } else {
        out.write_all(render_text(&headers, &view, &params).as_bytes())?;
    }
    Ok(())
}

fn load_rows(input: &Path) -> Result<Arc<[Arc<Row>]>> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("Fail to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Fail to read file `{}`", input.display()))?
    };
    let rows: Vec<Row> = serde_json::from_str(&content)
        .with_context(|| format!("Fail to parse rows from `{}`", input.display()))?;
    Ok(rows.into_iter().map(Arc::new).collect())
}
