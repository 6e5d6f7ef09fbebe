mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "brunn",
    version,
    about = "Water potability screening: classifier verdict with guideline-threshold overrides"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one or more water samples from a JSON file
    Evaluate {
        /// Path to a JSON file holding one sample object or an array of them
        input_file: PathBuf,

        /// Exported scaler artifact (default: bundled demo scaler)
        #[arg(long, value_name = "FILE")]
        scaler: Option<PathBuf>,

        /// Exported forest artifact (default: bundled demo forest)
        #[arg(long, value_name = "FILE")]
        model: Option<PathBuf>,

        /// Custom JSON rule file
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Predefined ruleset (default: who)
        #[arg(short, long = "preset", value_name = "NAME")]
        preset: Option<String>,

        /// Also apply the optional TDS (solids) limit
        #[arg(long)]
        include_tds: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show per-rule detail even when nothing is breached
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect rulesets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
    /// Inspect model artifacts
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rulesets
    List,
    /// Explain a ruleset in plain language
    Explain {
        /// Preset name (e.g., "who")
        preset: String,
    },
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum ModelAction {
    /// Print structure statistics for a forest artifact
    Inspect {
        /// Path to forest JSON file (default: bundled demo forest)
        file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            input_file,
            scaler,
            model,
            rules,
            preset,
            include_tds,
            output,
            verbose,
        } => commands::evaluate::run(
            input_file,
            scaler,
            model,
            rules,
            preset,
            include_tds,
            &output,
            verbose,
        ),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => commands::rules::explain(&preset),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
        Commands::Model { action } => match action {
            ModelAction::Inspect { file } => commands::model::inspect(file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
