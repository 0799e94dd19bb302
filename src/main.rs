mod catalog;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use crate::input::timestamp::load_timestamp;
use crate::input::trusted::{SubmitterPolicy, load_trusted_users};
use crate::logging::LogLevel;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_catalog::run_stage1;
use crate::pipeline::stage2_snapshot::run_stage2;
use crate::pipeline::stage3_candidates::{Stage3Input, run_stage3};
use crate::pipeline::stage4_report::{Stage4Input, write_reports};

/// Maintains per-level score frontiers and renders the leaderboard table.
#[derive(Parser, Debug)]
#[command(name = "om-leaderboard", version, about)]
struct Cli {
    /// Level catalog CSV (`name,type`)
    #[arg(long, default_value = "levels.csv")]
    levels: PathBuf,

    /// Frontier snapshot CSV (`name,scores`), read at start and rewritten at the end
    #[arg(long, default_value = "scores.csv")]
    scores: PathBuf,

    /// Candidate stream, one `<level>\t<score>` per line; `-` reads stdin
    #[arg(long)]
    candidates: Option<PathBuf>,

    /// Submitter names, one per line; lines from anyone else are dropped
    #[arg(long)]
    trusted_users: Option<PathBuf>,

    /// Accept candidates from every submitter, ignoring --trusted-users
    #[arg(long)]
    trust_everybody: bool,

    /// Last-run stamp (unix seconds); stamped lines not newer are dropped, rewritten at the end
    #[arg(long)]
    timestamp: Option<PathBuf>,

    /// Keep every stamped line instead of reading the previous stamp
    #[arg(long, requires = "timestamp")]
    no_load_timestamp: bool,

    /// Start from empty frontiers instead of the snapshot
    #[arg(long)]
    no_load_scores: bool,

    /// Leave the snapshot file untouched
    #[arg(long)]
    no_save_scores: bool,

    /// Do not print the table to stdout
    #[arg(long)]
    no_print: bool,

    /// Directory for table.md, document.md and summary.json
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Text placed before the table in document.md
    #[arg(long, requires = "out_dir")]
    prefix: Option<PathBuf>,

    /// Text placed after the build stamp in document.md
    #[arg(long, requires = "out_dir")]
    suffix: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "warning")]
    log_level: LogLevel,
}

#[derive(Debug, Clone)]
struct RunConfig {
    levels_path: PathBuf,
    scores_path: PathBuf,
    candidates_path: Option<PathBuf>,
    trusted_users_path: Option<PathBuf>,
    timestamp_path: Option<PathBuf>,
    load_timestamp: bool,
    load_scores: bool,
    save_scores: bool,
    print: bool,
    out_dir: Option<PathBuf>,
    prefix_path: Option<PathBuf>,
    suffix_path: Option<PathBuf>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            levels_path: cli.levels,
            scores_path: cli.scores,
            candidates_path: cli.candidates,
            trusted_users_path: cli.trusted_users.filter(|_| !cli.trust_everybody),
            timestamp_path: cli.timestamp,
            load_timestamp: !cli.no_load_timestamp,
            load_scores: !cli.no_load_scores,
            save_scores: !cli.no_save_scores,
            print: !cli.no_print,
            out_dir: cli.out_dir,
            prefix_path: cli.prefix,
            suffix_path: cli.suffix,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);
    if let Err(err) = run(RunConfig::from(cli)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(config: RunConfig) -> Result<(), PipelineError> {
    let built_at = Utc::now();

    let mut catalog = run_stage1(&config.levels_path)?;

    if config.load_scores {
        run_stage2(&config.scores_path, &mut catalog)?;
    }

    if let Some(path) = &config.candidates_path {
        let submitters = match &config.trusted_users_path {
            Some(users) => SubmitterPolicy::Trusted(load_trusted_users(users)?),
            None => SubmitterPolicy::Everybody,
        };
        let newer_than = match &config.timestamp_path {
            Some(stamp) if config.load_timestamp => Some(load_timestamp(stamp)?),
            _ => None,
        };
        run_stage3(
            &Stage3Input {
                candidates_path: path,
                submitters: &submitters,
                newer_than,
            },
            &mut catalog,
        )?;
    }

    write_reports(&Stage4Input {
        catalog: &catalog,
        scores_path: config.save_scores.then_some(config.scores_path.as_path()),
        timestamp_path: config.timestamp_path.as_deref(),
        out_dir: config.out_dir.as_deref(),
        prefix_path: config.prefix_path.as_deref(),
        suffix_path: config.suffix_path.as_deref(),
        print: config.print,
        built_at,
    })?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
