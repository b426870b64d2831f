use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use xml2pdf::config::RendererConfig;

#[derive(Parser)]
#[command(
    name = "xml2pdf",
    version,
    about = "Convert an XML document to a tagged, archival PDF"
)]
struct Cli {
    /// Input XML file to convert; the PDF is written next to it
    input: PathBuf,
}

fn main() {
    init_logging();

    println!("XML to PDF Converter");
    println!("--------------------\n");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return;
        }
        Err(_) => {
            println!("Requires exactly one argument: the XML file to be converted into PDF");
            println!("Usage: xml2pdf <input-xml-path>");
            process::exit(1);
        }
    };

    if !cli.input.is_file() {
        println!("The file {} does not exist!", cli.input.display());
        process::exit(1);
    }
    let output = derive_output_path(&cli.input);

    println!("Input XML file:  {}", cli.input.display());
    println!("Output PDF file: {}", output.display());
    println!();
    println!("Transforming...");

    if let Err(err) = run(&cli.input, &output) {
        eprintln!("Error: {err:#}");
        process::exit(-1);
    }

    println!("Success!");
}

/// Replace the input's extension with `.pdf`; a file name without an
/// extension gets `.pdf` appended.
fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

fn run(input: &Path, output: &Path) -> Result<()> {
    let config = RendererConfig::bundled().context("loading bundled renderer configuration")?;

    let result = xml2pdf::convert_with_config(input, &config)
        .with_context(|| format!("converting {}", input.display()))?;

    for warning in &result.warnings {
        eprintln!("Warning: {warning}");
    }

    // Creates or truncates; closed on every exit path when the writer drops.
    let file = File::create(output)
        .with_context(|| format!("creating output file {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&result.pdf)
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing output to {}", output.display()))?;

    Ok(())
}

fn init_logging() {
    if std::env::var_os("XML2PDF_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("XML2PDF_LOG"))
            .with_writer(std::io::stderr)
            .init();
    }
}
