use clap::Parser;
use std::path::PathBuf;

use docxtract::config::Settings;
use docxtract::{OutputFormat, export, extract_docx};

#[derive(Parser)]
#[command(name = "docxtract", about = "Extract DOCX content to JSON/CSV tables")]
struct Args {
    /// Input DOCX file (defaults to the DOCUMENT_PATH environment variable)
    input: Option<PathBuf>,
    /// Output path prefix (defaults to the OUTPUT_PATH environment variable)
    #[arg(short, long)]
    output_prefix: Option<String>,
    /// Formats to export; both CSV and JSON when omitted
    #[arg(short, long, value_enum)]
    format: Vec<OutputFormat>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings::from_env();

    let Some(input) = args.input.or(settings.document_path.map(PathBuf::from)) else {
        eprintln!("Error: no input document given and DOCUMENT_PATH is not set");
        std::process::exit(1);
    };
    let prefix = args
        .output_prefix
        .or(settings.output_path)
        .unwrap_or_default();
    let formats = if args.format.is_empty() {
        vec![OutputFormat::Csv, OutputFormat::Json]
    } else {
        args.format
    };

    let collection = match extract_docx(&input) {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for format in formats {
        if let Err(e) = export(&collection, format, &prefix) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
