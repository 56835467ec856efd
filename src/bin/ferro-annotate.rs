// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-annotate CLI
//!
//! Command-line interface for variant notation normalization and knowledge
//! base query helpers.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ferro_annotate::cli::{
    run_cna, run_convert, run_fusion, run_level, run_query_type, split_header_line, OutputFormat,
};
use ferro_annotate::config::{AnnotateConfig, Settings};
use ferro_annotate::QueryType;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ferro-annotate")]
#[command(author, version, about = "Variant notation normalizer for knowledge base annotation")]
#[command(
    long_about = "Normalize variant descriptions and resolve knowledge base query settings.

Examples:
  ferro-annotate convert 'p.Val600Glu'
  ferro-annotate fusion 'EML4-ALK fusion - archer'
  ferro-annotate cna --gain-loss 2 1 -1.5
  ferro-annotate query-type --header-line $'HUGO_SYMBOL\\tHGVSP_SHORT'
  ferro-annotate level '{\"LEVEL_1\": [\"x\"], \"LEVEL_R1\": [\"y\"]}' --direction sensitive"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (default: .ferro-annotate.toml or ~/.config/ferro/annotate.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert 3-letter amino acid codes to 1-letter codes
    Convert {
        /// Protein change descriptions
        #[arg(required = true)]
        values: Vec<String>,

        /// Convert only the first code in each value
        #[arg(long)]
        first: bool,
    },

    /// Extract partner genes from fusion names
    Fusion {
        /// Fusion descriptions (e.g. "BCR-ABL1 fusion")
        #[arg(required = true)]
        names: Vec<String>,

        /// Regex whose first capture group matches "GENE1-GENE2"
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Classify copy number alteration values
    Cna {
        /// Category names or numeric copy number scores
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Report single-copy Gain and Loss calls
        #[arg(long)]
        gain_loss: bool,
    },

    /// Resolve the query type from a header row
    QueryType {
        /// Column names (repeat or separate with commas)
        #[arg(long = "header", value_delimiter = ',', required_unless_present = "header_line")]
        headers: Vec<String>,

        /// Header row as it appears in the input (tab or comma separated)
        #[arg(long)]
        header_line: Option<String>,

        /// Required query type (HGVSp_Short, HGVSp, HGVSg, Genomic_Change)
        #[arg(short, long)]
        query_type: Option<String>,
    },

    /// Resolve the highest therapeutic level from a JSON evidence map
    Level {
        /// JSON object mapping level names to record arrays
        evidence: String,

        /// Therapy direction (sensitive or resistance)
        #[arg(short, long)]
        direction: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("ferro_annotate=debug,info")
    } else {
        EnvFilter::new("ferro_annotate=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = match &cli.config {
        Some(path) => AnnotateConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnnotateConfig::load()?.unwrap_or_default(),
    };
    let format: OutputFormat = cli.format.parse()?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Convert { values, first } => {
            run_convert(&mut writer, &values, first, format)?;
        }
        Commands::Fusion { names, pattern } => {
            let settings = config.merge_with_cli(None, false, None, pattern.as_deref())?;
            run_fusion(&mut writer, &names, &settings, format)?;
        }
        Commands::Cna { values, gain_loss } => {
            let settings = config.merge_with_cli(None, gain_loss, None, None)?;
            run_cna(&mut writer, &values, &settings, format)?;
        }
        Commands::QueryType {
            mut headers,
            header_line,
            query_type,
        } => {
            if let Some(line) = header_line {
                headers.extend(split_header_line(&line));
            }
            let query_type = query_type
                .as_deref()
                .map(str::parse::<QueryType>)
                .transpose()?;
            let settings: Settings = config.merge_with_cli(query_type, false, None, None)?;
            if let Err(e) = run_query_type(&mut writer, &headers, &settings, format) {
                writer.flush()?;
                anyhow::bail!("query type resolution failed ({})", e.code());
            }
        }
        Commands::Level {
            evidence,
            direction,
        } => {
            let settings = config.merge_with_cli(None, false, direction.as_deref(), None)?;
            if let Err(e) = run_level(&mut writer, &evidence, &settings, format) {
                writer.flush()?;
                anyhow::bail!("invalid evidence map ({})", e.code());
            }
        }
    }

    writer.flush()?;
    Ok(())
}
