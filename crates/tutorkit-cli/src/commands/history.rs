//! The `tutorkit history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tutorkit_store::load_config_from;

use super::build_engine;

pub fn execute(user: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let engine = build_engine(&config);
    let user = user.unwrap_or_else(|| config.default_user.clone());

    let history = engine.history(&user)?;
    if history.is_empty() {
        println!("No attempts recorded for {user}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["When (UTC)", "Topic", "Score", "Category", "Answered"]);
    for attempt in &history {
        table.add_row(vec![
            Cell::new(attempt.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&attempt.topic),
            Cell::new(format!("{:.1}%", attempt.score * 100.0)),
            Cell::new(attempt.category),
            Cell::new(attempt.answered),
        ]);
    }
    println!("{table}");

    Ok(())
}
