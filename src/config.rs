//! Configuration file support for ferro-annotate.
//!
//! This module provides loading of `.ferro-annotate.toml` configuration
//! files which set defaults for query type selection, CNA calling, level
//! direction and fusion name parsing.
//!
//! # Example Configuration
//!
//! ```toml
//! [annotation]
//! query-type = "HGVSp_Short"
//! annotate-gain-loss = true
//! direction = "sensitive"
//! fusion-pattern = "([A-Za-z0-9]+-[A-Za-z0-9]+)"
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-annotate.toml` in current directory
//! 2. `~/.config/ferro/annotate.toml`
//!
//! CLI flags take precedence over config file settings.

use crate::error::AnnotateError;
use crate::fusion::FusionParser;
use crate::level::TxDirection;
use crate::query_type::QueryType;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".ferro-annotate.toml";

/// Parsed configuration from a .ferro-annotate.toml file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotateConfig {
    /// Annotation defaults.
    #[serde(default)]
    pub annotation: AnnotationConfig,
}

/// Annotation section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AnnotationConfig {
    /// Query type to force instead of resolving it from the header row.
    pub query_type: Option<String>,
    /// Report single-copy Gain and Loss CNA calls.
    #[serde(default)]
    pub annotate_gain_loss: bool,
    /// Therapy direction used when picking the highest level.
    pub direction: Option<String>,
    /// Custom regex for extracting fusion partners.
    pub fusion_pattern: Option<String>,
}

/// Fully validated settings, ready to be used by callers.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Forced query type, if any.
    pub query_type: Option<QueryType>,
    /// Report Gain and Loss CNA calls.
    pub annotate_gain_loss: bool,
    /// Direction filter for level resolution.
    pub direction: Option<TxDirection>,
    /// Fusion name parser.
    pub fusion_parser: FusionParser,
}

impl AnnotateConfig {
    /// Load configuration from the default locations.
    ///
    /// Searches for config in:
    /// 1. `.ferro-annotate.toml` in current directory
    /// 2. `~/.config/ferro/annotate.toml`
    ///
    /// Returns `Ok(None)` if no file exists.
    pub fn load() -> Result<Option<Self>, AnnotateError> {
        for path in default_paths() {
            if path.exists() {
                tracing::debug!("loading configuration from {}", path.display());
                return Self::load_from_path(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, AnnotateError> {
        let content = fs::read_to_string(path).map_err(|e| AnnotateError::Io {
            msg: format!("{}: {}", path.display(), e),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, AnnotateError> {
        toml::from_str(content).map_err(|e| AnnotateError::Config { msg: e.to_string() })
    }

    /// Validate the raw values into [`Settings`].
    pub fn to_settings(&self) -> Result<Settings, AnnotateError> {
        let annotation = &self.annotation;

        let query_type = annotation
            .query_type
            .as_deref()
            .map(str::parse::<QueryType>)
            .transpose()
            .map_err(|e| AnnotateError::Config { msg: e.to_string() })?;

        let direction = annotation.direction.as_deref().and_then(parse_direction);

        let fusion_parser = match annotation.fusion_pattern.as_deref() {
            Some(pattern) => FusionParser::with_pattern(compile_pattern(pattern)?),
            None => FusionParser::new(),
        };

        Ok(Settings {
            query_type,
            annotate_gain_loss: annotation.annotate_gain_loss,
            direction,
            fusion_parser,
        })
    }

    /// Merge this config with CLI arguments.
    /// CLI arguments take precedence.
    pub fn merge_with_cli(
        &self,
        cli_query_type: Option<QueryType>,
        cli_gain_loss: bool,
        cli_direction: Option<&str>,
        cli_fusion_pattern: Option<&str>,
    ) -> Result<Settings, AnnotateError> {
        let mut settings = self.to_settings()?;

        if cli_query_type.is_some() {
            settings.query_type = cli_query_type;
        }
        if cli_gain_loss {
            settings.annotate_gain_loss = true;
        }
        if let Some(name) = cli_direction {
            settings.direction = parse_direction(name);
        }
        if let Some(pattern) = cli_fusion_pattern {
            settings.fusion_parser = FusionParser::with_pattern(compile_pattern(pattern)?);
        }

        Ok(settings)
    }
}

/// Unrecognized names mean no direction filter.
fn parse_direction(name: &str) -> Option<TxDirection> {
    let direction = TxDirection::from_name(name);
    if direction.is_none() {
        tracing::warn!("unrecognized direction {:?}; considering all levels", name);
    }
    direction
}

fn compile_pattern(pattern: &str) -> Result<Regex, AnnotateError> {
    Regex::new(pattern).map_err(|e| AnnotateError::Config {
        msg: format!("invalid fusion pattern {:?}: {}", pattern, e),
    })
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home) = dirs_home() {
        paths.push(home.join(".config").join("ferro").join("annotate.toml"));
    }
    paths
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
