use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hemline::{
    AppError, AuditOptions, BuildOptions, ConvertOptions, DoctorOptions, FetchOptions, FixOptions,
};

#[derive(Parser)]
#[command(name = "hemline")]
#[command(version)]
#[command(
    about = "Build and maintain the Skirts History static site",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new site workspace in the current directory
    #[clap(visible_alias = "i")]
    Init,
    /// Print the era lookup table
    #[clap(visible_alias = "e")]
    Eras {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Download era imagery listed in research.json
    #[clap(visible_alias = "f")]
    Fetch {
        /// Restrict to a single era index
        #[arg(long)]
        era: Option<u8>,
        /// Ignore the checkpoint and re-download everything
        #[arg(long)]
        fresh: bool,
        /// Skip the randomized delay between downloads
        #[arg(long)]
        no_jitter: bool,
    },
    /// Convert downloaded originals to WebP renditions
    #[clap(visible_alias = "c")]
    Convert {
        /// Restrict to a single era index
        #[arg(long)]
        era: Option<u8>,
    },
    /// Report missing, dark, tiny, flat, and duplicate images
    #[clap(visible_alias = "a")]
    Audit {
        /// Restrict to a single era index
        #[arg(long)]
        era: Option<u8>,
        /// Emit JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Apply curated image repairs from site.toml
    #[clap(visible_alias = "fx")]
    Fix {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Render the static site into the output directory
    #[clap(visible_alias = "b")]
    Build {
        /// Override the configured output directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate the site workspace
    #[clap(visible_alias = "d")]
    Doctor {
        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init => hemline::init().map(|_| 0),
        Commands::Eras { json } => hemline::eras(json).map(|_| 0),
        Commands::Fetch { era, fresh, no_jitter } => {
            hemline::fetch(FetchOptions { era, fresh, no_jitter }).map(|_| 0)
        }
        Commands::Convert { era } => hemline::convert(ConvertOptions { era }).map(|_| 0),
        Commands::Audit { era, json } => hemline::audit(AuditOptions { era }, json).map(|_| 0),
        Commands::Fix { yes } => hemline::fix(FixOptions { yes }).map(|_| 0),
        Commands::Build { out } => hemline::build(BuildOptions { out }).map(|_| 0),
        Commands::Doctor { strict } => {
            hemline::doctor(DoctorOptions { strict }).map(|outcome| outcome.exit_code)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
