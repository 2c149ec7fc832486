use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use sort_reads::{parse_input_paths, sort_reads};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sort-reads")]
#[command(version)]
#[command(about = "Sort FASTQ files into singleEnd/pairedEnd directories by read layout")]
#[command(group(ArgGroup::new("inputs").required(true).args(["inputpaths", "files"])))]
struct Args {
    #[arg(short = 'i', long, help = "Input files as a list literal, e.g. \"[a_1.fastq.gz, a_2.fastq.gz]\"")]
    inputpaths: Option<String>,

    #[arg(value_name = "FILES", help = "Input files (1 = single-end, 2 = paired-end, 3 = paired-end with unmatched reads)")]
    files: Vec<String>,

    #[arg(short = 'o', long, default_value = ".", help = "Directory in which singleEnd/ and pairedEnd/ are created")]
    output_dir: PathBuf,

    #[arg(short = 'v', long, default_value = "false", help = "Verbose output showing each link")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    // The list-literal form is only understood here; the library takes a plain list.
    let inputs = match args.inputpaths {
        Some(raw) => parse_input_paths(&raw),
        None => args.files,
    };

    sort_reads(&inputs, &args.output_dir)
        .with_context(|| format!("Failed to sort reads into {}", args.output_dir.display()))?;

    Ok(())
}
