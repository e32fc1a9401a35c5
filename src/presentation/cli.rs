//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --quiet, --dry-run) are inherited by all subcommands
//! - Every subcommand option falls back to a `HELM_IMAGE_UPDATER_*` environment variable
//! - Commands are converted into an `UpdateRequest` so dispatch is a single call

use std::path::{Path, PathBuf};

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use helm_image_updater::{ImageUpdate, Target, UpdateRequest};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// helm-image-updater - update image repository/tag in Helm values files
#[derive(Parser, Debug)]
#[command(name = "helm-image-updater")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (--verbose, repeat for more)
    #[arg(long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show the rewritten file as a diff without saving it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Update image version and/or repository in a values.yaml file
    Image {
        /// Path to the values.yaml file
        #[arg(short, long, value_name = "PATH", env = "HELM_IMAGE_UPDATER_FILE")]
        file: PathBuf,

        /// New version to set in values.yaml
        #[arg(short = 'v', long, env = "HELM_IMAGE_UPDATER_VERSION", value_parser = NonEmptyStringValueParser::new())]
        version: Option<String>,

        /// New repository to set in values.yaml
        #[arg(short, long, env = "HELM_IMAGE_UPDATER_REPOSITORY", value_parser = NonEmptyStringValueParser::new())]
        repository: Option<String>,

        /// Chart to update in the values file (for subcharts)
        #[arg(short, long, env = "HELM_IMAGE_UPDATER_CHART", value_parser = NonEmptyStringValueParser::new())]
        chart: Option<String>,
    },

    /// Update image tag in a values.yaml file
    Tag {
        /// Path to the values.yaml file
        #[arg(short, long, value_name = "PATH", env = "HELM_IMAGE_UPDATER_FILE")]
        file: PathBuf,

        /// New version to set in values.yaml
        #[arg(short = 'v', long, env = "HELM_IMAGE_UPDATER_VERSION", value_parser = NonEmptyStringValueParser::new())]
        version: String,

        /// Chart to update in the values file (for subcharts)
        #[arg(short, long, env = "HELM_IMAGE_UPDATER_CHART", value_parser = NonEmptyStringValueParser::new())]
        chart: Option<String>,
    },

    /// Update image repository in a values.yaml file
    Repository {
        /// Path to the values.yaml file
        #[arg(short, long, value_name = "PATH", env = "HELM_IMAGE_UPDATER_FILE")]
        file: PathBuf,

        /// New repository to set in values.yaml
        #[arg(short, long, env = "HELM_IMAGE_UPDATER_REPOSITORY", value_parser = NonEmptyStringValueParser::new())]
        repository: String,

        /// Chart to update in the values file (for subcharts)
        #[arg(short, long, env = "HELM_IMAGE_UPDATER_CHART", value_parser = NonEmptyStringValueParser::new())]
        chart: Option<String>,
    },

    /// Update appVersion in a Chart.yaml file
    Chart {
        /// Path to the Chart.yaml file
        #[arg(short, long, value_name = "PATH", env = "HELM_IMAGE_UPDATER_FILE")]
        file: PathBuf,

        /// New appVersion to set
        #[arg(short = 'v', long, env = "HELM_IMAGE_UPDATER_VERSION", value_parser = NonEmptyStringValueParser::new())]
        version: String,
    },
}

impl Commands {
    /// File the command operates on
    pub fn file(&self) -> &Path {
        match self {
            Commands::Image { file, .. }
            | Commands::Tag { file, .. }
            | Commands::Repository { file, .. }
            | Commands::Chart { file, .. } => file,
        }
    }

    /// Convert parsed arguments into the request the use case executes
    pub fn to_request(&self) -> UpdateRequest {
        match self {
            Commands::Image {
                version,
                repository,
                chart,
                ..
            } => UpdateRequest::Image(ImageUpdate {
                target: Target::from_chart(chart.clone()),
                version: version.clone(),
                repository: repository.clone(),
            }),
            Commands::Tag { version, chart, .. } => UpdateRequest::Tag {
                target: Target::from_chart(chart.clone()),
                version: version.clone(),
            },
            Commands::Repository {
                repository, chart, ..
            } => UpdateRequest::Repository {
                target: Target::from_chart(chart.clone()),
                repository: repository.clone(),
            },
            Commands::Chart { version, .. } => UpdateRequest::AppVersion {
                version: version.clone(),
            },
        }
    }
}

impl Cli {
    /// Log level forced by `--verbose`; `None` leaves `RUST_LOG` in charge
    pub fn verbosity(&self) -> Option<log::LevelFilter> {
        match self.verbose {
            0 => None,
            1 => Some(log::LevelFilter::Info),
            2 => Some(log::LevelFilter::Debug),
            _ => Some(log::LevelFilter::Trace),
        }
    }

    /// Initialize logging based on verbosity level, falling back to `RUST_LOG` (default warn)
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(level) = self.verbosity() {
            builder.filter_level(level);
        }
        builder.init();
    }
}
