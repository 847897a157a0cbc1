//! The `tutorkit content` command.

use std::path::PathBuf;

use anyhow::Result;

use tutorkit_store::load_config_from;

use super::build_engine;

pub fn execute(
    topic: String,
    level: Option<String>,
    prefs: String,
    user: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let engine = build_engine(&config);
    let user = user.unwrap_or_else(|| config.default_user.clone());

    // No explicit level: follow the user's latest graded category, or start
    // at beginner when they have no history yet.
    let level = match level {
        Some(level) => level,
        None => engine
            .latest_category(&user)?
            .map(|category| category.as_str().to_ascii_lowercase())
            .unwrap_or_else(|| "beginner".to_string()),
    };

    let preferences: Vec<String> = prefs
        .split(',')
        .map(|pref| pref.trim().to_string())
        .filter(|pref| !pref.is_empty())
        .collect();

    let view = engine.content(&topic, &level, &preferences)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("Topic: {} (level: {})", view.topic, view.level);
    if view.blocks.is_empty() {
        println!("\nNo content matches those preferences for this topic.");
        return Ok(());
    }
    for block in &view.blocks {
        println!("\n## {}\n", block.title);
        println!("{}", block.body);
    }

    Ok(())
}
