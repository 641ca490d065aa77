pub mod platform;

pub use platform::PlatformEngine;

use crate::context::AppContext;
use crate::extractor::ExtractorRegistry;
use crate::model::ExtractionOverride;
use clap::ValueEnum;
use std::path::PathBuf;

/// Output format for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Parameters handed to the query-execution entry point.
#[derive(Debug, Clone)]
pub struct QueryRunOptions {
    pub database: Option<PathBuf>,
    pub format: OutputFormat,
    /// Result files are named after each script, with the format's extension.
    pub output: PathBuf,
    pub timeout: u64,
    pub scripts: Vec<PathBuf>,
}

/// Parameters handed to the database-creation entry point.
#[derive(Debug, Clone)]
pub struct DatabaseCreateOptions {
    pub source_root: PathBuf,
    pub languages: Vec<String>,
    pub output: PathBuf,
    pub timeout: u64,
    pub overwrite: bool,
    pub extraction_config_file: Option<PathBuf>,
    pub extraction_config: Vec<ExtractionOverride>,
}

/// Parameters handed to the rebuild entry point.
#[derive(Debug, Clone)]
pub struct RebuildOptions {
    /// Library names, or the single literal `all`.
    pub languages: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("entry point '{tool}' not found under {}", .home.display())]
    ToolNotFound { tool: String, home: PathBuf },

    #[error("failed to launch '{tool}': {source}")]
    Launch {
        tool: String,
        source: std::io::Error,
    },

    #[error("'{tool}' exited with status {status}")]
    Tool { tool: String, status: i32 },

    #[error("failed to prepare extraction config '{path}': {reason}")]
    ExtractionConfig { path: String, reason: String },
}

/// Seam to the platform collaborators, one method per entry point.
///
/// Implementations own timeout enforcement and all extraction, query,
/// and rebuild mechanics; the CLI only maps arguments and calls at most
/// one of these per invocation.
pub trait SparrowEngine {
    fn query_run(&mut self, opts: &QueryRunOptions, ctx: &AppContext) -> Result<(), EngineError>;

    fn database_create(
        &mut self,
        opts: &DatabaseCreateOptions,
        ctx: &AppContext,
    ) -> Result<(), EngineError>;

    fn rebuild_lib(&mut self, opts: &RebuildOptions, ctx: &AppContext) -> Result<(), EngineError>;
}

/// Names of the Godel libraries the rebuild tool can refresh.
pub fn open_lib() -> Vec<String> {
    ExtractorRegistry::builtin().languages()
}
