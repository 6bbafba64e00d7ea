use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::catalog::{Category, StandardCatalog, UnitCatalog};
use crate::clipboard::copy_to_clipboard;
use crate::converter::parse_value;
use crate::logging::{self, LogTarget};
use crate::models::HistoryRecord;
use crate::summary::summary;
use crate::tui;

#[derive(Parser)]
#[command(name = "convertr")]
#[command(version)]
#[command(about = "Convert between units of measurement", long_about = None)]
pub struct Cli {
    /// Append logs to this file
    #[arg(long, global = true, env = "CONVERTR_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Category preselected in the interactive converter
    #[arg(long)]
    pub category: Option<Category>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List measurement categories
    Categories,
    /// List the units of a category
    Units {
        /// Category name (length, mass, ...)
        category: Category,
    },
    /// Convert a single value and print the summary
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true, value_parser = finite_value)]
        value: f64,
        /// Source unit abbreviation
        from: String,
        /// Target unit abbreviation
        to: String,
        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
        /// Also copy the summary to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = LogTarget::select(cli.log_file.as_deref(), cli.command.is_none());
    logging::init(target)?;

    let catalog = StandardCatalog::new();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Some(Commands::Categories) => list_categories(&mut out)?,
        Some(Commands::Units { category }) => list_units(&mut out, &catalog, category)?,
        Some(Commands::Convert { value, from, to, json, copy }) => {
            let record = convert_once(&catalog, value, &from, &to)?;
            let line = summary(&record);
            if json {
                serde_json::to_writer_pretty(&mut out, &record)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", line)?;
            }
            if copy {
                copy_to_clipboard(&line)?;
            }
        }
        None => {
            drop(out);
            tui::run_interactive(catalog, cli.category)?;
        }
    }

    Ok(())
}

/// Value parser for `convert`: a finite number, as the form accepts
fn finite_value(raw: &str) -> Result<f64, String> {
    parse_value(raw).ok_or_else(|| format!("'{}' is not a finite number", raw))
}

fn list_categories(out: &mut impl Write) -> Result<()> {
    for category in Category::ALL {
        writeln!(out, "{}", category)?;
    }
    Ok(())
}

fn list_units(out: &mut impl Write, catalog: &impl UnitCatalog, category: Category) -> Result<()> {
    for unit in catalog.list_units(category) {
        writeln!(out, "{}\t{}", unit.abbreviation, unit.display_name)?;
    }
    Ok(())
}

/// Run one conversion outside the interactive form
fn convert_once(
    catalog: &StandardCatalog,
    value: f64,
    from: &str,
    to: &str,
) -> Result<HistoryRecord> {
    let converted = catalog
        .convert(value, from, to)
        .with_context(|| format!("Failed to convert {} {} to {}", value, from, to))?;
    let name = |abbr: &str| {
        catalog.describe(abbr).map(|u| u.display_name).unwrap_or_else(|| abbr.to_string())
    };

    Ok(HistoryRecord {
        left_value: value,
        left_unit_abbr: from.to_string(),
        left_unit_full: name(from),
        right_value: converted,
        right_unit_abbr: to.to_string(),
        right_unit_full: name(to),
    })
}
