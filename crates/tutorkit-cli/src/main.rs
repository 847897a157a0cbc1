//! tutorkit CLI — the user-facing entry point.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tutorkit")]
#[command(about = "Adaptive quiz and study-content engine for markdown topics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the topics available in the configured store
    Topics {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a topic's study content filtered by level and preferences
    Content {
        /// Topic to load (document file stem)
        #[arg(short, long)]
        topic: String,

        /// Proficiency level (beginner, intermediate, advanced); defaults to
        /// the user's latest graded category
        #[arg(short, long)]
        level: Option<String>,

        /// Comma-separated preference keys
        #[arg(short, long, default_value = "examples,code_python,visuals")]
        prefs: String,

        /// User whose attempt history picks the default level
        #[arg(short, long)]
        user: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show a topic's quiz questions (answer key withheld)
    Questions {
        /// Topic whose question bank to show
        #[arg(short, long)]
        topic: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Grade a submission file and record the attempt
    Grade {
        /// Topic the submission answers
        #[arg(short, long)]
        topic: String,

        /// Path to a submission JSON file
        #[arg(short, long)]
        submission: PathBuf,

        /// User to record the attempt under
        #[arg(short, long)]
        user: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show a user's graded attempts, newest first
    History {
        /// User whose attempts to show
        #[arg(short, long)]
        user: Option<String>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check topic documents for authoring problems
    Validate {
        /// Topic file or directory (defaults to the configured topics dir)
        #[arg(short, long)]
        topics: Option<PathBuf>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Create starter config, a sample topic, and a question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tutorkit=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Topics { config } => commands::topics::execute(config),
        Commands::Content {
            topic,
            level,
            prefs,
            user,
            format,
            config,
        } => commands::content::execute(topic, level, prefs, user, format, config),
        Commands::Questions {
            topic,
            format,
            config,
        } => commands::questions::execute(topic, format, config),
        Commands::Grade {
            topic,
            submission,
            user,
            format,
            config,
        } => commands::grade::execute(topic, submission, user, format, config),
        Commands::History { user, config } => commands::history::execute(user, config),
        Commands::Validate { topics, config } => commands::validate::execute(topics, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
