mod analyze;
mod cache;
mod cli;
mod config;
mod error;
mod naming;
mod report;
mod scan;
mod telemetry;
mod text;
mod types;

use crate::analyze::blog::{reading_metrics, ImageSeoLookup, NoImages};
use crate::analyze::Scorers;
use crate::cache::{input_digest, needs_refresh, rules_digest, CachedScore, ScoreCache};
use crate::error::Result;
use crate::report::{BatchEntry, BatchSummary, OutputFormat, ScoreReport};
use crate::scan::MediaLibrary;
use crate::types::scoring::{Grade, ScoreResult};
use crate::types::snapshot::{present, ImageSeoMetadata, Snapshot};
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const FAILING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn exit_code_for<'a>(results: impl IntoIterator<Item = &'a ScoreResult>) -> i32 {
    let mut code = exit_code::SUCCESS;
    for result in results {
        if result.grade == Grade::F {
            return exit_code::FAILING;
        }
        if !result.is_clean() {
            code = exit_code::WARNINGS;
        }
    }
    code
}

fn output_format(format: cli::ReportFormat) -> OutputFormat {
    match format {
        cli::ReportFormat::Json => OutputFormat::Json,
        cli::ReportFormat::Md => OutputFormat::Md,
    }
}

fn score_report(
    scorers: &Scorers,
    snapshot: &Snapshot,
    images: &dyn ImageSeoLookup,
) -> ScoreReport {
    let result = scorers.score(snapshot, images);
    let reading = match snapshot {
        Snapshot::Blog(post) => Some(reading_metrics(post.content.as_deref())),
        Snapshot::Media(_) => None,
    };
    ScoreReport {
        subject: snapshot.display_name(),
        kind: snapshot.kind(),
        result,
        reading,
    }
}

fn featured_image_path(snapshot: &Snapshot) -> Option<&str> {
    match snapshot {
        Snapshot::Blog(post) => present(post.image.as_ref()),
        Snapshot::Media(_) => None,
    }
}

fn featured_image(snapshot: &Snapshot, images: &dyn ImageSeoLookup) -> Option<ImageSeoMetadata> {
    featured_image_path(snapshot).and_then(|image| images.lookup_image_seo(image))
}

fn relative_key(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn run_batch(cli: &cli::Cli, cmd: &cli::BatchCommand) -> Result<i32> {
    let config = config::load_config(&cli.root, cli.config.as_deref())?;
    let scorers = Scorers::from_config(&config);
    let files = scan::discover(&cmd.dir)?;
    let library = MediaLibrary::from_assets(files.iter().filter_map(|file| match &file.snapshot {
        Snapshot::Media(asset) => Some(asset),
        Snapshot::Blog(_) => None,
    }));

    let mut cache = if cmd.no_cache {
        None
    } else {
        Some(ScoreCache::load(&cli.root, &rules_digest(&config)?))
    };
    let now = Utc::now();
    let max_age = config.cache_max_age();

    let mut entries = Vec::with_capacity(files.len());
    for file in &files {
        let key = relative_key(&cli.root, &file.path);
        let digest = input_digest(
            &file.snapshot,
            featured_image(&file.snapshot, &library).as_ref(),
        )?;
        let hit = cache
            .as_ref()
            .and_then(|cache| cache.get(&key))
            .filter(|cached| !needs_refresh(Some(cached), &digest, now, max_age))
            .cloned();

        let (score, grade, issue_count, cached) = match hit {
            Some(cached) => (cached.score, cached.grade, cached.issue_count, true),
            None => {
                let result = scorers.score(&file.snapshot, &library);
                let scored = (result.score, result.grade, result.issues.len(), false);
                if let Some(cache) = cache.as_mut() {
                    cache.record(key, CachedScore::new(&result, digest, now));
                }
                scored
            }
        };
        entries.push(BatchEntry {
            path: relative_key(&cmd.dir, &file.path),
            kind: file.snapshot.kind(),
            subject: file.snapshot.display_name(),
            score,
            grade,
            issue_count,
            cached,
        });
    }

    if let Some(cache) = cache.as_mut() {
        if let Some(path) = cache.save(&cli.root)? {
            debug!(path = %path.display(), entries = cache.len(), "score cache written");
        }
    }

    let summary = BatchSummary::new(entries);
    info!(
        entities = summary.totals.entities,
        cached = summary.totals.cached,
        failing = summary.totals.failing,
        "batch scored"
    );
    println!("{}", report::render_batch(&summary, output_format(cmd.format))?);

    if summary.totals.failing > 0 {
        Ok(exit_code::FAILING)
    } else if summary.totals.with_issues > 0 {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    match &cli.command {
        cli::Commands::Media(cmd) => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            let scorers = Scorers::from_config(&config);
            let snapshot = scan::load_snapshot_of_kind(&cmd.file, "media")?;
            let report = score_report(&scorers, &snapshot, &NoImages);
            println!("{}", report::render(&report, output_format(cmd.format))?);
            Ok(exit_code_for([&report.result]))
        }
        cli::Commands::Blog(cmd) => {
            let config = config::load_config(&cli.root, cli.config.as_deref())?;
            let scorers = Scorers::from_config(&config);
            let snapshot = scan::load_snapshot_of_kind(&cmd.file, "blog")?;
            let library = match &cmd.media_library {
                Some(path) => MediaLibrary::load(path)?,
                None => MediaLibrary::default(),
            };
            if library.is_empty() && featured_image_path(&snapshot).is_some() {
                debug!("no media library given; featured image metadata is unavailable");
            }
            let report = score_report(&scorers, &snapshot, &library);
            println!("{}", report::render(&report, output_format(cmd.format))?);
            Ok(exit_code_for([&report.result]))
        }
        cli::Commands::Batch(cmd) => run_batch(&cli, cmd),
        cli::Commands::Slug(cmd) => {
            let output = match &cmd.filename {
                Some(original) => naming::seo_filename(original, Some(&cmd.text), Utc::now()),
                None => naming::slugify(&cmd.text),
            };
            println!("{output}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::CheckAlt(cmd) => {
            let verdict = naming::validate_alt_text(&cmd.text);
            println!("{}", verdict.message);
            if verdict.valid {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::FAILING)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
