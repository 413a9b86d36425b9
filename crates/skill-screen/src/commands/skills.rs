//! Skills command — extract the skill set of a single text file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use skill_screen_core::config::Config;

use super::analyze::build_engine;

/// Arguments for the `skills` subcommand.
#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Text file to extract skills from.
    pub file: Utf8PathBuf,

    /// N-gram window for multi-word skills (default 3).
    #[arg(long)]
    pub window: Option<usize>,
}

/// Extract and print the skill set of one file.
#[instrument(name = "cmd_skills", skip_all, fields(file = %args.file))]
pub fn cmd_skills(
    args: SkillsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing skills command");

    let content = super::read_input_file(&args.file, max_input)?;

    let engine = build_engine(config, args.window);
    let skills = engine
        .extract_skills(&content)
        .with_context(|| format!("failed to extract skills from {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&skills)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    if skills.is_empty() {
        println!("\n  {} none", "Skills:".cyan());
        return Ok(());
    }
    println!("\n  {} ({})", "Skills:".cyan(), skills.len());
    for skill in skills.iter() {
        println!("    {skill}");
    }

    Ok(())
}
