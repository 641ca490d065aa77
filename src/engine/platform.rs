use super::{DatabaseCreateOptions, EngineError, QueryRunOptions, RebuildOptions, SparrowEngine};
use crate::context::AppContext;
use crate::model::extraction;
use log::debug;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::process::Command;

const QUERY_TOOL: &str = "bin/sparrow-query";
const DATABASE_TOOL: &str = "bin/sparrow-database";
const REBUILD_TOOL: &str = "bin/sparrow-rebuild";

/// Production collaborator shim.
///
/// Locates the platform tools under the resolved home, runs exactly one
/// of them per invocation, and propagates the tool's exit status
/// unchanged. Timeouts are forwarded as arguments; the tools enforce
/// them.
pub struct PlatformEngine;

impl PlatformEngine {
    pub fn new() -> Self {
        Self
    }

    fn tool_path(&self, home: &Path, tool: &str) -> Result<PathBuf, EngineError> {
        let path = home.join(tool);
        if path.is_file() {
            Ok(path)
        } else {
            Err(EngineError::ToolNotFound {
                tool: tool.to_string(),
                home: home.to_path_buf(),
            })
        }
    }

    fn run_tool(&self, home: &Path, tool: &str, args: Vec<OsString>) -> Result<(), EngineError> {
        let path = self.tool_path(home, tool)?;
        debug!("Launching {} with {:?}", path.display(), args);

        let status = Command::new(&path)
            .args(&args)
            .status()
            .map_err(|source| EngineError::Launch {
                tool: tool.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(EngineError::Tool {
                tool: tool.to_string(),
                status: status.code().unwrap_or(-1),
            })
        }
    }

    /// Produce the single extraction config document the extractors read.
    ///
    /// CLI overrides win over file values. With overrides present the
    /// merged document is written to a scratch file; without them the
    /// user's file (if any) is handed through untouched.
    fn extraction_config_arg(
        &self,
        opts: &DatabaseCreateOptions,
    ) -> Result<Option<PathBuf>, EngineError> {
        if opts.extraction_config.is_empty() {
            return Ok(opts.extraction_config_file.clone());
        }

        let base = match &opts.extraction_config_file {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| EngineError::ExtractionConfig {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                let value =
                    serde_json::from_str(&text).map_err(|e| EngineError::ExtractionConfig {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                Some(value)
            }
            None => None,
        };

        let merged = extraction::merged_config(base, &opts.extraction_config);
        let scratch =
            env::temp_dir().join(format!("sparrow-extraction-config-{}.json", process::id()));
        let text = serde_json::to_string_pretty(&merged).map_err(|e| {
            EngineError::ExtractionConfig {
                path: scratch.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&scratch, text).map_err(|e| EngineError::ExtractionConfig {
            path: scratch.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(scratch))
    }
}

impl Default for PlatformEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SparrowEngine for PlatformEngine {
    fn query_run(&mut self, opts: &QueryRunOptions, ctx: &AppContext) -> Result<(), EngineError> {
        let mut args: Vec<OsString> = vec![
            "--home".into(),
            ctx.home.clone().into(),
            "--format".into(),
            opts.format.as_str().into(),
            "--output".into(),
            opts.output.clone().into(),
            "--timeout".into(),
            opts.timeout.to_string().into(),
        ];
        if let Some(database) = &opts.database {
            args.push("--database".into());
            args.push(database.clone().into());
        }
        for script in &opts.scripts {
            args.push(script.clone().into());
        }

        self.run_tool(&ctx.home, QUERY_TOOL, args)
    }

    fn database_create(
        &mut self,
        opts: &DatabaseCreateOptions,
        ctx: &AppContext,
    ) -> Result<(), EngineError> {
        let mut args: Vec<OsString> = vec![
            "--home".into(),
            ctx.home.clone().into(),
            "--source-root".into(),
            opts.source_root.clone().into(),
            "--output".into(),
            opts.output.clone().into(),
            "--timeout".into(),
            opts.timeout.to_string().into(),
        ];
        for language in &opts.languages {
            args.push("--lang".into());
            args.push(language.into());
        }
        if opts.overwrite {
            args.push("--overwrite".into());
        }
        if let Some(config) = self.extraction_config_arg(opts)? {
            args.push("--extraction-config-file".into());
            args.push(config.into());
        }

        self.run_tool(&ctx.home, DATABASE_TOOL, args)
    }

    fn rebuild_lib(&mut self, opts: &RebuildOptions, ctx: &AppContext) -> Result<(), EngineError> {
        let mut args: Vec<OsString> = vec!["--home".into(), ctx.home.clone().into()];
        for language in &opts.languages {
            args.push("--lang".into());
            args.push(language.into());
        }

        self.run_tool(&ctx.home, REBUILD_TOOL, args)
    }
}
