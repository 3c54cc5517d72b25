use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use sielib::{
    config::SieConfig,
    formats::{csv::Csv, sie::SieChart},
    traits::{ReadChart, WriteChart},
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Sie,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "sie", version, about = "Convert charts of accounts between SIE and CSV")]
struct Cli {
    /// Input file (stdin by default)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Output file (stdout by default)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Input format
    #[arg(long = "in-format", value_enum)]
    in_format: Fmt,

    /// Output format
    #[arg(long = "out-format", value_enum)]
    out_format: Fmt,

    /// Written to #TEXT when producing SIE
    #[arg(long, default_value = "")]
    description: String,

    /// Program name written to #PROGRAM
    #[arg(long, default_value = "sie")]
    program: String,

    /// Program version written to #PROGRAM
    #[arg(long = "program-version", default_value = env!("CARGO_PKG_VERSION"))]
    program_version: String,

    /// Creator written to #GEN
    #[arg(long, env = "SIE_CREATOR", default_value = "sie")]
    creator: String,
}

/// Reads one chart from `input` and writes it to `output`.
fn convert<R: BufRead, W: Write>(cli: &Cli, input: R, mut output: W) -> Result<()> {
    let sie = SieChart {
        config: SieConfig::default()
            .with_program(&cli.program, &cli.program_version)
            .with_creator(&cli.creator),
        description: cli.description.clone(),
    };

    let chart = match cli.in_format {
        Fmt::Sie => sie.read(input),
        Fmt::Csv => Csv.read(input),
    }
    .context("reading chart of accounts")?;
    info!("read {} accounts ({})", chart.len(), chart.chart_type());

    match cli.out_format {
        Fmt::Sie => sie.write(&mut output, &chart),
        Fmt::Csv => Csv.write(&mut output, &chart),
    }
    .context("writing chart of accounts")?;

    output.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).with_context(|| format!("opening {path}"))?),
        None => Box::new(io::stdin()),
    };

    // writer
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {path}"))?),
        None => Box::new(io::stdout()),
    };

    convert(&cli, BufReader::new(reader), writer)
}
