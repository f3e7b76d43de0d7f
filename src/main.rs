// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcag-check CLI - WCAG accessibility checks for HTML files and color pairs

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wcag_engine::config::{default_config_path, CheckerConfig};
use wcag_engine::contrast;
use wcag_engine::report::{generate_contrast_report, generate_report, ContrastEntry, OutputFormat};
use wcag_engine::scanner;
use wcag_engine::{AccessibilityChecker, WcagLevel};

/// Color pairs shown when `contrast` is run without arguments
const DEMO_PALETTE: &[(&str, &str, &str)] = &[
    ("#000000", "#FFFFFF", "Black on White"),
    ("#FFFFFF", "#000000", "White on Black"),
    ("#0066CC", "#FFFFFF", "Blue on White"),
    ("#767676", "#FFFFFF", "Gray on White"),
    ("#FF0000", "#FFFFFF", "Red on White"),
];

/// Rule-based WCAG accessibility checker
#[derive(Parser)]
#[command(name = "wcag-check")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an HTML file, or every HTML file under a directory
    Check {
        /// File or directory to check
        path: PathBuf,

        /// WCAG conformance level (overrides the config file)
        #[arg(long)]
        level: Option<WcagLevelArg>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file (defaults to .wcag-check.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Measure the contrast of a color pair, or show example pairs
    Contrast {
        /// Foreground color (6-digit hex)
        #[arg(requires = "background")]
        foreground: Option<String>,

        /// Background color (6-digit hex)
        background: Option<String>,

        /// Font size in points
        #[arg(long, default_value_t = contrast::DEFAULT_FONT_SIZE)]
        font_size: f64,

        /// Text is bold
        #[arg(long)]
        bold: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// WCAG conformance level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum WcagLevelArg {
    /// Level A - minimum
    A,
    /// Level AA - standard
    Aa,
    /// Level AAA - enhanced
    Aaa,
}

impl From<WcagLevelArg> for WcagLevel {
    fn from(arg: WcagLevelArg) -> Self {
        match arg {
            WcagLevelArg::A => WcagLevel::A,
            WcagLevelArg::Aa => WcagLevel::AA,
            WcagLevelArg::Aaa => WcagLevel::AAA,
        }
    }
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wcag_engine=debug,wcag_check=debug")
    } else {
        EnvFilter::new("wcag_engine=warn,wcag_check=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path, level, format, output, config, verbose } => {
            init_logging(verbose);

            let mut settings = load_config(config.as_deref())?;
            if let Some(level) = level {
                settings.level = level.into();
            }
            debug!(level = %settings.level, "Checking {}", path.display());

            let checker = AccessibilityChecker::with_config(&settings);
            let scan = scanner::scan_path(&path, &checker, &settings.exclude)?;
            let report = generate_report(&scan, format.into());
            write_output(&report, output.as_deref())?;

            if !scan.passed() {
                std::process::exit(1);
            }
        }

        Commands::Contrast { foreground, background, font_size, bold, format, verbose } => {
            init_logging(verbose);

            let pairs: Vec<(String, String, String)> = match (foreground, background) {
                (Some(fg), Some(bg)) => vec![(fg.clone(), bg.clone(), format!("{} on {}", fg, bg))],
                _ => DEMO_PALETTE
                    .iter()
                    .map(|(fg, bg, name)| (fg.to_string(), bg.to_string(), name.to_string()))
                    .collect(),
            };

            let mut entries = Vec::with_capacity(pairs.len());
            for (fg, bg, name) in pairs {
                let result = contrast::check_contrast(&fg, &bg, font_size, bold)?;
                entries.push(ContrastEntry {
                    name,
                    foreground: fg,
                    background: bg,
                    result,
                    recommendation: contrast::recommended_ratio(font_size, bold),
                });
            }

            println!("{}", generate_contrast_report(&entries, format.into()));

            if entries.len() == 1 && !entries[0].result.passes_aa {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Explicit config path, else the default file when it exists, else defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<CheckerConfig> {
    match path {
        Some(p) => Ok(CheckerConfig::load(p)?),
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                Ok(CheckerConfig::load(&default_path)?)
            } else {
                Ok(CheckerConfig::default())
            }
        }
    }
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
