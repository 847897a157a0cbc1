//! The `tutorkit questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tutorkit_store::load_config_from;

use super::build_engine;

pub fn execute(topic: String, format: String, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let engine = build_engine(&config);

    let questions = engine.questions(&topic)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Options"]);
    for question in &questions {
        table.add_row(vec![
            Cell::new(question.id),
            Cell::new(&question.text),
            Cell::new(question.options.join(" | ")),
        ]);
    }
    println!("{table}");
    println!("\n{} question(s). Answer with zero-based option indexes.", questions.len());

    Ok(())
}
