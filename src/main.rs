//! guidemark CLI - Markdown user guides to HTML
//!
//! Provides commands for:
//! - `build`: Convert a guide tree into pages plus `index.json`
//! - `convert`: Print the HTML fragment for one document

use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guidemark::site::{self, CliSettings, ConfigError, SiteConfig, SiteError};
use guidemark::{Converter, Options};

/// guidemark - Markdown user guides to HTML.
#[derive(Parser)]
#[command(name = "guidemark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every guide under the source directory.
    Build(BuildArgs),
    /// Convert one document and print the HTML fragment.
    Convert(ConvertArgs),
}

/// Arguments for the build command.
#[derive(Args)]
struct BuildArgs {
    /// Path to configuration file (default: auto-discover guidemark.toml).
    #[arg(short, long, env = "GUIDEMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output root (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Site name shown in page titles (overrides config).
    #[arg(long)]
    site_name: Option<String>,

    /// Publish this guide slug as "coming soon". Repeatable.
    #[arg(long = "disable", value_name = "SLUG")]
    disabled: Vec<String>,

    /// Omit heading id attributes.
    #[arg(long)]
    no_heading_ids: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

/// Arguments for the convert command.
#[derive(Args)]
struct ConvertArgs {
    /// Input file, or `-` for stdin.
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Omit heading id attributes.
    #[arg(long)]
    no_heading_ids: bool,

    /// Keep `images/...` sources as written.
    #[arg(long)]
    no_rebase_images: bool,
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("all {0} guide(s) failed to convert")]
    AllFailed(usize),
}

impl BuildArgs {
    fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source,
            output_dir: self.output,
            site_name: self.site_name,
            disabled: self.disabled,
            heading_ids: self.no_heading_ids.then_some(false),
        };
        let config = SiteConfig::load(self.config.as_deref(), Some(&cli_settings))?;

        let report = site::build(&config)?;
        if report.all_failed() {
            return Err(CliError::AllFailed(report.failed.len()));
        }

        println!(
            "Conversion complete: {} successful, {} failed",
            report.converted.len(),
            report.failed.len()
        );
        Ok(())
    }
}

impl ConvertArgs {
    fn execute(self) -> Result<(), CliError> {
        let input = if self.file.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(&self.file)?
        };

        let options = Options {
            heading_ids: !self.no_heading_ids,
            rebase_images: !self.no_rebase_images,
        };
        let html = Converter::new(options).convert(&input);

        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let verbose = matches!(&cli.command, Commands::Build(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Convert(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
