//! awards-import CLI - convert an awards JSON export into an SQL import script
//!
//! Reads the export, writes `<input>_converted.sql` next to it and prints the
//! steps to run the script.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use awards_import::{convert_file, ConvertError, ConverterConfig};

#[derive(Parser)]
#[command(name = "awards-import")]
#[command(version, about = "Convert an awards JSON export into SQL INSERT statements", long_about = None)]
struct Cli {
    /// JSON export to convert
    input: PathBuf,

    /// Write the script here instead of <input>_converted.sql
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Database product named in the generated script (env: AWARDS_IMPORT_TARGET)
    #[arg(long)]
    target: Option<String>,

    /// Omit the users-by-role and votes-by-category statistics
    #[arg(long)]
    no_breakdown: bool,
}

impl Cli {
    fn into_config(self) -> ConverterConfig {
        let mut config = ConverterConfig::new(self.input).with_breakdown(!self.no_breakdown);
        if let Some(output) = self.output {
            config = config.with_output(output);
        }
        if let Some(target) = self.target {
            config = config.with_target(target);
        }
        config
    }
}

fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let usage = ConvertError::Usage(format!(
                "{}\nUsage: awards-import <export.json>",
                e.render().to_string().trim_end()
            ));
            fail(&usage);
        }
    };

    let config = cli.into_config();
    println!("🔄 Converting {}...", config.input.display());

    match convert_file(&config) {
        Ok(report) => {
            println!("✅ Conversion complete!");
            println!("📁 Generated file: {}", report.output.display());
            println!("  ✓ {} records converted", report.summary.record_count());
            println!("📋 Instructions:");
            println!("1. Copy the contents of {}", report.output.display());
            println!("2. Open the {} SQL editor", config.target);
            println!("3. Paste and run");
        }
        Err(e) => fail(&e),
    }
}

fn fail(err: &ConvertError) -> ! {
    match err {
        ConvertError::Usage(msg) => eprintln!("{}", msg),
        ConvertError::Decode(_) => eprintln!("❌ {}", err),
        _ => eprintln!("❌ Error: {}", err),
    }
    process::exit(1);
}
