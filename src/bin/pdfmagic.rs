//! pdfmagic CLI tool
//!
//! A command-line tool for merging PDFs and extracting pages.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::bail;
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use pdfmagic::naming::default_merge_output;
use pdfmagic::pdf::{merge_pdfs_with_progress, ExtractOptions, Extraction, MergeOptions};
use pdfmagic::{InputSpec, PageSelection};

/// Tool for .pdf manipulation
#[derive(Parser)]
#[command(name = "pdfmagic")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Merge files in the order given
    pdfmagic merge intro.pdf body.pdf appendix.pdf --outpath book.pdf

    # Merge every .pdf in a folder, alphabetically
    pdfmagic merge chapters/

    # Extract page 6 and pages 1 to 3 (writes report_6,1,2,3.pdf)
    pdfmagic extract report.pdf 6 1-3")]
struct Cli {
    /// Increase log output (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Hide the progress bar and status messages
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge all pdf files given in INPUTS
    ///
    /// INPUTS can be a list of files, merged in the order they are declared.
    /// If INPUTS is a single folder, all .pdf files inside it are merged in
    /// alphabetical order.
    Merge {
        /// Input PDF files (in order), or a single directory
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Path to the output file [default: "<stems>_merged.pdf"]
        #[arg(long)]
        outpath: Option<PathBuf>,
    },

    /// Extract page numbers from a PDF (page numbers start on 1)
    Extract {
        /// PDF file to extract from
        file: PathBuf,

        /// Pages to extract: a number, e.g. 6, or a range, e.g. 1-9
        #[arg(required = true)]
        pages: Vec<String>,

        /// Path to the output file [default: "<stem>_<pages>.pdf"]
        #[arg(long)]
        outpath: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Merge { inputs, outpath } => cmd_merge(inputs, outpath, cli.quiet),
        Commands::Extract {
            file,
            pages,
            outpath,
        } => cmd_extract(file, pages, outpath),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn ensure_not_directory(path: &Path) -> anyhow::Result<()> {
    if path.is_dir() {
        bail!("Output path is a directory: {}", path.display());
    }
    Ok(())
}

/// Merge multiple PDFs into one
fn cmd_merge(inputs: Vec<PathBuf>, outpath: Option<PathBuf>, quiet: bool) -> anyhow::Result<()> {
    let files = InputSpec::from_args(inputs).resolve()?;
    let output = outpath.unwrap_or_else(|| default_merge_output(&files));
    ensure_not_directory(&output)?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let options = MergeOptions {
        input_paths: files,
        output_path: output.clone(),
    };

    let result = merge_pdfs_with_progress(&options, |path| {
        progress.set_message(path.display().to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();
    let pages = result?;

    if !quiet {
        eprintln!(
            "Merged {} files ({} pages) into {}",
            options.input_paths.len(),
            pages,
            output.display()
        );
    }

    Ok(())
}

/// Extract selected pages into a new PDF
fn cmd_extract(file: PathBuf, pages: Vec<String>, outpath: Option<PathBuf>) -> anyhow::Result<()> {
    let options = ExtractOptions {
        input_path: file,
        selection: PageSelection::parse(pages.as_slice())?,
        output_path: outpath,
    };

    let extraction = Extraction::plan(&options)?;
    ensure_not_directory(extraction.output_path())?;
    println!("{}", extraction.output_path().display());
    extraction.write()?;

    Ok(())
}
