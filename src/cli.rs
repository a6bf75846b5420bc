// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    catalog::{Catalog, CatalogView},
    config::consts::SUGGESTION_LIMIT,
    config::options::{ExportFormat, ExportOptions, ExportType},
    error::CatalogError,
    file::{self, Columns},
    log::{self, Sink},
    store,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "drug_finder",
    version,
    about = "Look up products in a static drug catalog",
    long_about = "Look up products in a static drug catalog: name suggestions, exact lookup, \
                  products sharing an active ingredient, and category listings.\n\n\
                  Examples:\n  cli suggest 타이레놀\n  cli lookup 노바스크정5mg --same-dose\n  \
                  cli category 고혈압약 --format csv\n  cli --data my_drugs.csv export --all-categories -o out/"
)]
pub struct CliArgs {
    #[arg(
        short = 'd',
        long = "data",
        value_name = "FILE",
        global = true,
        help_heading = "Input",
        help = "Catalog file (.json, .csv, .tsv). Defaults to the bundled dataset."
    )]
    pub data: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true,
        help_heading = "Output",
        help = "Output format for listings."
    )]
    pub format: OutputFormat,

    #[arg(
        long = "no-headers",
        global = true,
        help_heading = "Output",
        help = "Omit the header row (table/csv/tsv)."
    )]
    pub no_headers: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help_heading = "Output",
        help = "Increase log verbosity on stderr (-v, -vv)."
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Names starting with PREFIX (case-insensitive).
    Suggest {
        prefix: String,
        #[arg(short = 'n', long = "limit", default_value_t = SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// Exact product name → every product with the same ingredient.
    Lookup {
        name: String,
        /// Keep only products with the same dose as NAME.
        #[arg(short = 's', long = "same-dose")]
        same_dose: bool,
    },
    /// List categories with product counts.
    Categories,
    /// Every product in CATEGORY.
    Category { name: String },
    /// Write results to files.
    Export {
        /// Same-ingredient results for this exact product name.
        #[arg(long = "name", conflicts_with_all = ["category", "all_categories"])]
        name: Option<String>,
        #[arg(short = 's', long = "same-dose", requires = "name")]
        same_dose: bool,
        /// One category into a single file.
        #[arg(long = "category", conflicts_with = "all_categories")]
        category: Option<String>,
        /// One file per category into the output directory.
        #[arg(long = "all-categories")]
        all_categories: bool,
        #[arg(short = 'o', long = "out", value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    fn export_format(self) -> ExportFormat {
        match self {
            OutputFormat::Table | OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Tsv => ExportFormat::Tsv,
            OutputFormat::Json => ExportFormat::Json,
        }
    }
}

pub fn run() -> Result<()> {
    execute(CliArgs::parse(), &mut io::stdout().lock())
}

/// Run parsed arguments against `out`. Split from `run` so tests can drive it.
pub fn execute<W: Write>(args: CliArgs, out: &mut W) -> Result<()> {
    log::init(Sink::Stderr, args.verbose);

    let (catalog, source) = store::resolve_catalog(args.data.as_deref())
        .wrap_err("could not load the catalog")?;
    logd!("CLI: catalog from {} rows={}", source, catalog.len());

    match &args.command {
        Command::Suggest { prefix, limit } => {
            for r in catalog.suggest(prefix, *limit) {
                writeln!(out, "{}", r.name)?;
            }
        }
        Command::Lookup { name, same_dose } => {
            let base = find(&catalog, name)?;
            let view = catalog.same_ingredient(base, *same_dose);
            print_view(out, &view, Columns::Product, &args)?;
        }
        Command::Categories => {
            for (category, count) in catalog.category_counts() {
                writeln!(out, "{category}\t{count}")?;
            }
        }
        Command::Category { name } => {
            let view = category_view(&catalog, name)?;
            print_view(out, &view, Columns::WithCategory, &args)?;
        }
        Command::Export { name, same_dose, category, all_categories, out: path } => {
            let mut export = ExportOptions {
                format: args.format.export_format(),
                include_headers: !args.no_headers,
                ..ExportOptions::default()
            };

            if *all_categories {
                export.set_export_type(ExportType::PerCategory);
                if let Some(p) = path {
                    export.set_path(&p.to_string_lossy());
                }
                let written = file::write_export_per_category(&catalog, &[], &export)?;
                for p in &written {
                    writeln!(out, "{}", p.display())?;
                }
                logf!("CLI: exported {} category file(s)", written.len());
                return Ok(());
            }

            if let Some(p) = path {
                export.set_path(&p.to_string_lossy());
            }
            let (view, columns) = match (name, category) {
                (Some(n), _) => (catalog.same_ingredient(find(&catalog, n)?, *same_dose), Columns::Product),
                (None, Some(c)) => (category_view(&catalog, c)?, Columns::WithCategory),
                (None, None) => return Err(eyre!("export needs --name, --category or --all-categories")),
            };
            let written = file::write_export_single(&view, columns, &export)?;
            writeln!(out, "{}", written.display())?;
        }
    }
    Ok(())
}

fn find<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a crate::catalog::DrugRecord> {
    catalog.find_exact(name).ok_or_else(|| {
        let hint: Vec<&str> = catalog.suggest(name, 3).into_iter().map(|r| r.name.as_str()).collect();
        let err = eyre!(CatalogError::NotFound(s!(name)));
        if hint.is_empty() { err } else { err.wrap_err(format!("did you mean: {}", hint.join(", "))) }
    })
}

fn category_view<'a>(catalog: &'a Catalog, name: &str) -> Result<CatalogView<'a>> {
    let view = catalog.by_category(name);
    if view.is_empty() {
        return Err(eyre!(CatalogError::UnknownCategory(s!(name))));
    }
    Ok(view)
}

fn print_view<W: Write>(out: &mut W, view: &CatalogView<'_>, columns: Columns, args: &CliArgs) -> Result<()> {
    if args.format == OutputFormat::Table {
        let rows: Vec<Vec<String>> = view
            .iter()
            .map(|r| match columns {
                Columns::Product => r.to_row(),
                Columns::WithCategory => r.to_row_with_category(),
            })
            .collect();
        let headers = (!args.no_headers).then(|| columns.headers());
        write!(out, "{}", render_table(headers, &rows))?;
        return Ok(());
    }

    let export = ExportOptions {
        format: args.format.export_format(),
        include_headers: !args.no_headers,
        ..ExportOptions::default()
    };
    write!(out, "{}", file::to_export_string(view, columns, &export)?)?;
    Ok(())
}

/// Plain aligned columns, two spaces apart. Width counts chars, not cells.
pub fn render_table(headers: Option<&[&str]>, rows: &[Vec<String>]) -> String {
    let ncols = headers.map(|h| h.len()).or_else(|| rows.first().map(Vec::len)).unwrap_or(0);
    let mut widths = vec![0usize; ncols];
    let header_cells = headers.unwrap_or(&[]);
    for (i, h) in header_cells.iter().enumerate() {
        widths[i] = widths[i].max(h.chars().count());
    }
    for r in rows {
        for (i, c) in r.iter().enumerate().take(ncols) {
            widths[i] = widths[i].max(c.chars().count());
        }
    }

    let line = |cells: &mut dyn Iterator<Item = &str>| -> String {
        let mut s = s!();
        for (i, c) in cells.enumerate() {
            if i > 0 {
                s.push_str("  ");
            }
            s.push_str(c);
            let pad = widths.get(i).copied().unwrap_or(0).saturating_sub(c.chars().count());
            s.extend(std::iter::repeat_n(' ', pad));
        }
        let mut s = s!(s.trim_end());
        s.push('\n');
        s
    };

    let mut out = s!();
    if headers.is_some() {
        out.push_str(&line(&mut header_cells.iter().copied()));
    }
    for r in rows {
        out.push_str(&line(&mut r.iter().map(String::as_str)));
    }
    out
}
