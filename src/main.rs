mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::error::{AppError, ConfigError};
use crate::input::{LoadOptions, load_matrix};
use crate::model::summary::ExtremumParams;
use crate::pipeline::stage3_extrema::summarize;
use crate::pipeline::stage4_report::{ReportOptions, Stage4Input, write_reports};
use crate::report::TopN;
use crate::report::text::{render_extrema_section, render_input_section};

/// Per-gene and per-tissue count totals with min/max summaries for an
/// expression count matrix (.tsv or .tsv.gz).
#[derive(Debug, Parser)]
#[command(name = "kira-exprsummary", version)]
struct Cli {
    /// Expression count matrix: header `<ignored>\t<ignored>\tTISSUE...`, rows `GENE\tSTAT\tVALUES...`
    input: PathBuf,

    /// Directory for the HTML report, charts and summary.json
    #[arg(long, default_value = "web_report")]
    out: PathBuf,

    /// Bars per chart: a number or "all"
    #[arg(long, default_value = "10")]
    top_n: String,

    /// Linear y axis instead of the default log scale
    #[arg(long)]
    linear: bool,

    /// Maximum number of tied names listed per minimum / maximum
    #[arg(long, default_value_t = crate::model::summary::DEFAULT_CAP)]
    cap: usize,

    /// Fail on count rows whose length differs from the header
    #[arg(long)]
    strict: bool,

    /// Print the console summary only
    #[arg(long)]
    no_report: bool,

    /// Open the HTML report in the default browser
    #[arg(long, conflicts_with = "no_report")]
    open: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input: PathBuf,
    out_dir: PathBuf,
    load: LoadOptions,
    extremum: ExtremumParams,
    report: ReportOptions,
    write_report: bool,
    open_report: bool,
}

impl TryFrom<&Cli> for RunConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.cap == 0 {
            return Err(ConfigError::ZeroCap);
        }
        let top_n = cli.top_n.parse::<TopN>().map_err(ConfigError::TopN)?;
        Ok(RunConfig {
            input: cli.input.clone(),
            out_dir: cli.out.clone(),
            load: LoadOptions {
                strict_row_length: cli.strict,
            },
            extremum: ExtremumParams {
                cap: cli.cap,
                ..ExtremumParams::default()
            },
            report: ReportOptions {
                top_n,
                log_scale: !cli.linear,
            },
            write_report: !cli.no_report,
            open_report: cli.open,
        })
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = RunConfig::try_from(cli)?;

    let loaded = load_matrix(&config.input, &config.load)?;
    let matrix = &loaded.matrix;
    let input_display = loaded.path.display().to_string();
    print!(
        "{}",
        render_input_section(&input_display, matrix.n_tissues(), matrix.n_genes())
    );

    let stage3 = summarize(matrix, &config.extremum)?;
    print!("{}", render_extrema_section(&stage3.extrema));

    if !config.write_report {
        return Ok(());
    }

    let report_path = write_reports(
        &Stage4Input {
            input_path: &loaded.path,
            n_tissues: matrix.n_tissues(),
            n_genes: matrix.n_genes(),
            gene_totals: &stage3.totals.gene_totals,
            tissue_totals: &stage3.totals.tissue_totals,
            summary: &stage3.extrema,
            load_report: &loaded.report,
        },
        &config.out_dir,
        &config.report,
    )?;
    println!("\nReport: {}", report_path.display());

    if config.open_report {
        open_in_browser(&report_path);
    }
    Ok(())
}

fn open_in_browser(path: &Path) {
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    match opener_command(&target).spawn() {
        Ok(_) => tracing::info!("opened {}", target.display()),
        Err(err) => tracing::warn!("could not open {} in a browser: {err}", target.display()),
    }
}

#[cfg(target_os = "macos")]
fn opener_command(target: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(target: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
