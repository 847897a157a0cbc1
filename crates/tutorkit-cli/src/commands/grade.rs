//! The `tutorkit grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use tutorkit_core::model::Submission;
use tutorkit_core::score::ScoreBreakdown;
use tutorkit_store::load_config_from;

use super::build_engine;

pub fn execute(
    topic: String,
    submission_path: PathBuf,
    user: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let engine = build_engine(&config);
    let user = user.unwrap_or_else(|| config.default_user.clone());

    let raw = std::fs::read_to_string(&submission_path)
        .with_context(|| format!("failed to read submission {}", submission_path.display()))?;
    let submission: Submission = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse submission {}", submission_path.display()))?;

    let result = engine.grade(&user, &topic, &submission)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Score: {:.1}%", result.score * 100.0);
    println!("Category: {}", result.category);
    print_breakdown(&result.breakdown);

    Ok(())
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    let mut table = Table::new();
    table.set_header(vec!["Component", "Value"]);
    table.add_row(vec![
        Cell::new("Accuracy"),
        Cell::new(format!("{:.2}", breakdown.accuracy)),
    ]);
    table.add_row(vec![
        Cell::new("Time factor"),
        Cell::new(format!("{:.2}", breakdown.time_factor)),
    ]);
    table.add_row(vec![
        Cell::new("Confidence factor"),
        Cell::new(format!("{:.2}", breakdown.confidence_factor)),
    ]);
    table.add_row(vec![
        Cell::new("Difficulty"),
        Cell::new(format!("{:.2}", breakdown.difficulty_factor)),
    ]);
    table.add_row(vec![
        Cell::new("Hint penalty"),
        Cell::new(format!("{:.2}", breakdown.hint_penalty)),
    ]);
    table.add_row(vec![
        Cell::new("Raw score"),
        Cell::new(format!("{:.4}", breakdown.raw_score)),
    ]);
    println!("\n{table}");
}
