//! Analyze command — match a résumé against a job description.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use skill_screen_core::config::Config;
use skill_screen_core::{Lexicon, MatchEngine};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Résumé text file.
    pub resume: Utf8PathBuf,

    /// Job-description text file.
    pub job: Utf8PathBuf,

    /// N-gram window for multi-word skills (default 3).
    #[arg(long)]
    pub window: Option<usize>,
}

/// Build the match engine from loaded configuration.
pub fn build_engine(config: &Config, window_override: Option<usize>) -> MatchEngine {
    let mut engine = MatchEngine::new(Lexicon::from_config(config));
    if let Some(window) = window_override.or(config.ngram_window) {
        engine = engine.with_window(window);
    }
    engine
}

/// Run the résumé / job-description match.
#[instrument(name = "cmd_analyze", skip_all, fields(resume = %args.resume, job = %args.job))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(resume = %args.resume, job = %args.job, "executing analyze command");

    let resume_text = super::read_input_file(&args.resume, max_input)?;
    let job_text = super::read_input_file(&args.job, max_input)?;

    let engine = build_engine(config, args.window);
    let report = engine
        .analyze(&job_text, &resume_text)
        .with_context(|| format!("failed to analyze {} against {}", args.resume, args.job))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} ~ {}", args.resume.bold(), args.job.bold());

    let score = format!("{:.1}%", report.match_percentage);
    let score_str = if report.match_percentage >= 80.0 {
        score.green().to_string()
    } else if report.match_percentage >= 60.0 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    };
    println!("\n  {} {}", "Match:".cyan(), score_str);

    println!(
        "\n  {} ({}) {}",
        "Job skills:".cyan(),
        report.job_skills.len(),
        report.job_skills.join(", "),
    );
    println!(
        "\n  {} ({}) {}",
        "Résumé skills:".cyan(),
        report.resume_skills.len(),
        report.resume_skills.join(", "),
    );

    if report.missing_skills.is_empty() {
        println!("\n  {} none", "Missing:".green());
    } else {
        // Importance order: most frequent in the job description first.
        println!(
            "\n  {} ({}) {}",
            "Missing:".yellow(),
            report.missing_skills.len(),
            report.missing_skills.join(", "),
        );
    }

    Ok(())
}
