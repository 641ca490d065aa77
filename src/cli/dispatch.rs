use crate::cli::args::{Cli, Commands, DatabaseCommands, QueryCommands, RebuildCommands};
use crate::context::AppContext;
use crate::engine::{DatabaseCreateOptions, QueryRunOptions, RebuildOptions, SparrowEngine};
use log::{debug, error, info, warn};
use std::env;
use std::path::PathBuf;

/// Map the parsed invocation to at most one entry-point call.
pub fn handle(cli: Cli, ctx: &AppContext, engine: &mut dyn SparrowEngine) {
    debug!("Sparrow home: {}", ctx.home.display());

    match cli.command {
        Some(Commands::Query {
            command:
                Some(QueryCommands::Run {
                    database,
                    format,
                    output,
                    timeout,
                    gdl,
                    ..
                }),
        }) => {
            info!("Running QUERY RUN command");
            let opts = QueryRunOptions {
                database,
                format,
                output: output.unwrap_or_else(current_dir),
                timeout,
                scripts: gdl,
            };

            debug!("Output format: {}", opts.format.as_str());
            debug!("Output directory: {}", opts.output.display());
            debug!("Timeout: {}s", opts.timeout);
            if let Err(e) = engine.query_run(&opts, ctx) {
                error!("Query run failed: {}", e);
                std::process::exit(1);
            }
        }

        Some(Commands::Database {
            command:
                Some(DatabaseCommands::Create {
                    source_root,
                    language,
                    output,
                    timeout,
                    overwrite,
                    extraction_config_file,
                    extraction_config,
                    ..
                }),
        }) => {
            info!("Running DATABASE CREATE command");
            let opts = DatabaseCreateOptions {
                source_root,
                languages: language,
                output,
                timeout,
                overwrite,
                extraction_config_file,
                extraction_config,
            };

            debug!("Source root: {}", opts.source_root.display());
            debug!("Languages: {}", opts.languages.join(", "));
            debug!("Output directory: {}", opts.output.display());
            debug!("Overwrite: {}", opts.overwrite);
            if let Err(e) = engine.database_create(&opts, ctx) {
                error!("Database create failed: {}", e);
                std::process::exit(1);
            }
        }

        Some(Commands::Rebuild {
            command: Some(RebuildCommands::Lib { language, .. }),
        }) => {
            info!("Running REBUILD LIB command");
            let opts = RebuildOptions { languages: language };

            debug!("Libraries: {}", opts.languages.join(", "));
            if let Err(e) = engine.rebuild_lib(&opts, ctx) {
                error!("Rebuild lib failed: {}", e);
                std::process::exit(1);
            }
        }

        _ => {
            warn!(
                "Sparrow requires a configuration to start. Please provide the necessary configuration to proceed."
            );
        }
    }
}

fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
