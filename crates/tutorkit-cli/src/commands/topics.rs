//! The `tutorkit topics` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tutorkit_store::load_config_from;

use super::build_engine;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let engine = build_engine(&config);

    let topics = engine.topics()?;
    if topics.is_empty() {
        println!("No topics found. Run `tutorkit init` to create sample data.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Topic", "File", "Auth required"]);
    for summary in &topics {
        table.add_row(vec![
            Cell::new(&summary.topic),
            Cell::new(&summary.filename),
            Cell::new(if summary.auth_required { "yes" } else { "no" }),
        ]);
    }
    println!("{table}");

    Ok(())
}
