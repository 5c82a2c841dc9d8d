//! adforge - CLI tool to analyze ad designs and apply suggestions.

mod io;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use adforge_core::fonts::pairings_in;
use adforge_core::{
    analyze_design, analyze_suggestions, generate_palettes, validate_design, AdType, Design,
    PairingCategory, SuggestionBoard, FONT_PAIRINGS,
};

/// Analyze ad designs and apply color, typography and layout suggestions.
#[derive(Parser, Debug)]
#[command(name = "adforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report suggestions, palettes and font pairings for a design
    Analyze {
        /// Design JSON file
        design: PathBuf,

        /// Ad format (social-media, display, banner, story, landing-page)
        #[arg(long)]
        ad_type: Option<AdType>,

        /// Rule thresholds JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Look inside groups, not only at top-level layers
        #[arg(long)]
        recursive: bool,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply one suggestion and write the updated design
    Apply {
        /// Design JSON file
        design: PathBuf,

        /// Suggestion id, as printed by `analyze`
        #[arg(short, long)]
        suggestion: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rule thresholds JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Look inside groups, not only at top-level layers
        #[arg(long)]
        recursive: bool,
    },

    /// Generate harmony palettes from a base color
    Palettes {
        /// Base color as #RRGGBB
        base: String,

        /// Print the palettes as JSON
        #[arg(long)]
        json: bool,
    },

    /// List curated font pairings
    Fonts {
        /// Only show one category (modern, classic, elegant, bold, friendly)
        #[arg(long)]
        category: Option<PairingCategory>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Analyze {
            design,
            ad_type,
            config,
            recursive,
            json,
        } => {
            let config = io::load_rule_config(config.as_deref(), recursive)?;
            let doc = load_checked(&design)?;

            let analysis = analyze_design(&doc, ad_type, &config)?;
            info!(
                "Found {} suggestion(s) in {} ({} scope)",
                analysis.suggestions.len(),
                design.display(),
                config.scope
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", report::render_analysis(&analysis));
            }
        }

        Command::Apply {
            design,
            suggestion,
            output,
            config,
            recursive,
        } => {
            let config = io::load_rule_config(config.as_deref(), recursive)?;
            let doc = load_checked(&design)?;

            let mut board = SuggestionBoard::new(analyze_suggestions(&doc, None, &config));
            let updated = board
                .apply(&suggestion, &doc)
                .with_context(|| format!("Failed to apply {}", suggestion))?;

            info!("Applied: {} ({} suggestion(s) left)", suggestion, board.len());
            io::write_design(&updated, output.as_deref())?;
        }

        Command::Palettes { base, json } => {
            let palettes = generate_palettes(&base)
                .with_context(|| format!("Cannot build palettes from {}", base))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&palettes)?);
            } else {
                print!("{}", report::render_palettes(&palettes));
            }
        }

        Command::Fonts { category } => {
            let pairings = match category {
                Some(category) => pairings_in(category),
                None => FONT_PAIRINGS.iter().collect(),
            };
            print!("{}", report::render_fonts(&pairings));
        }
    }

    Ok(())
}

/// Load a design and surface validation findings; structural errors abort.
fn load_checked(path: &std::path::Path) -> Result<Design> {
    info!("Processing: {}", path.display());
    let design = io::load_design(path)?;

    let validation = validate_design(&design);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    Ok(design)
}
