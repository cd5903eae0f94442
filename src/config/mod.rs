//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

#[cfg(test)]
mod tests;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "rilega";
const DEFAULT_EXPORT_DIR: &str = "exported";
const DEFAULT_STYLESHEET: &str = "styles.css";
const DEFAULT_SCRIPT: &str = "script.js";

/// Command-line arguments for the rilega binary.
#[derive(Debug, Parser)]
#[command(
    name = "rilega",
    version,
    about = "Save a story or article as a single themed HTML file"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "RILEGA_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render one story and save it to the export directory.
    Save(Box<SaveArgs>),
}

#[derive(Debug, Args, Default, Clone)]
pub struct SaveArgs {
    #[command(flatten)]
    pub overrides: SaveOverrides,

    #[command(flatten)]
    pub story: StoryArgs,

    /// Read the story fields from a JSON file; field flags override its values.
    #[arg(long = "input", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}

/// Story fields supplied directly on the command line.
#[derive(Debug, Args, Default, Clone)]
pub struct StoryArgs {
    /// Main title of the story.
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Short tagline or summary.
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Author of the story.
    #[arg(long, value_name = "TEXT")]
    pub author: Option<String>,

    /// Publisher or website host.
    #[arg(long, value_name = "TEXT")]
    pub publisher: Option<String>,

    /// Category of the story.
    #[arg(long, value_name = "TEXT")]
    pub category: Option<String>,

    /// Direct link to the story.
    #[arg(long = "story-link", value_name = "URL")]
    pub story_link: Option<String>,

    /// Direct link to the author profile.
    #[arg(long = "author-profile-link", value_name = "URL")]
    pub author_profile_link: Option<String>,

    /// Direct link to the category of the story.
    #[arg(long = "category-link", value_name = "URL")]
    pub category_link: Option<String>,

    /// Story content, inline.
    #[arg(long, value_name = "TEXT", conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the story content from a file.
    #[arg(long = "body-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub body_file: Option<PathBuf>,

    /// Treat the story content as Markdown.
    #[arg(
        long,
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub markdown: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct SaveOverrides {
    /// Override the export directory.
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<PathBuf>,

    /// Override the stylesheet asset path.
    #[arg(long = "stylesheet", value_name = "PATH")]
    pub stylesheet: Option<PathBuf>,

    /// Override the script asset path.
    #[arg(long = "script", value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputSettings,
    pub assets: AssetSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub directory: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AssetSettings {
    pub stylesheet: PathBuf,
    pub script: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("RILEGA").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    match cli.command.as_ref() {
        Some(Command::Save(args)) => raw.apply_save_overrides(&args.overrides),
        None => raw.apply_save_overrides(&SaveOverrides::default()),
    }

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    output: RawOutputSettings,
    assets: RawAssetSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawOutputSettings {
    directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawAssetSettings {
    stylesheet: Option<PathBuf>,
    script: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_save_overrides(&mut self, overrides: &SaveOverrides) {
        if let Some(dir) = overrides.export_dir.as_ref() {
            self.output.directory = Some(dir.clone());
        }
        if let Some(path) = overrides.stylesheet.as_ref() {
            self.assets.stylesheet = Some(path.clone());
        }
        if let Some(path) = overrides.script.as_ref() {
            self.assets.script = Some(path.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            output,
            assets,
            logging,
        } = raw;

        Ok(Self {
            output: build_output_settings(output)?,
            assets: build_asset_settings(assets)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_output_settings(output: RawOutputSettings) -> Result<OutputSettings, LoadError> {
    let directory = output
        .directory
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));
    if directory.as_os_str().is_empty() {
        return Err(LoadError::invalid("output.directory", "must not be empty"));
    }

    Ok(OutputSettings { directory })
}

fn build_asset_settings(assets: RawAssetSettings) -> Result<AssetSettings, LoadError> {
    let stylesheet = assets
        .stylesheet
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STYLESHEET));
    if stylesheet.as_os_str().is_empty() {
        return Err(LoadError::invalid("assets.stylesheet", "must not be empty"));
    }

    let script = assets.script.unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT));
    if script.as_os_str().is_empty() {
        return Err(LoadError::invalid("assets.script", "must not be empty"));
    }

    Ok(AssetSettings { stylesheet, script })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}
