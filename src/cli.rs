use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seoscore",
    version,
    about = "Deterministic SEO scoring for media assets and blog posts"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project root holding seoscore.toml and the score cache
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file used instead of <root>/seoscore.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one media snapshot
    Media(MediaCommand),
    /// Score one blog post snapshot
    Blog(BlogCommand),
    /// Score every snapshot under a directory
    Batch(BatchCommand),
    /// Print the slug of a text, or an SEO filename derived from it
    Slug(SlugCommand),
    /// Validate an alt text
    CheckAlt(CheckAltCommand),
}

#[derive(Args)]
pub struct MediaCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BlogCommand {
    pub file: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Media snapshot file or directory used to look up the featured image
    #[arg(long)]
    pub media_library: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Rescore everything and leave the cache untouched
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Args)]
pub struct SlugCommand {
    pub text: String,
    /// Original file name; prints an SEO filename built from TEXT instead
    #[arg(long)]
    pub filename: Option<String>,
}

#[derive(Args)]
pub struct CheckAltCommand {
    pub text: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
