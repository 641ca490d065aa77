use crate::engine::{self, OutputFormat};
use crate::extractor::ExtractorRegistry;
use crate::model::{ExtractionOverride, OverrideParseError};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI entry point for sparrow-cli
#[derive(Parser, Debug)]
#[command(
    name = "sparrow-cli",
    version,
    disable_version_flag = true,
    about = "Command-line front end for the Sparrow code-intelligence platform"
)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Sparrow home, you can specify the sparrow location yourself
    #[arg(long)]
    pub sparrow_home: Option<String>,

    #[arg(long = "sparrow-cli-internal", hide = true)]
    pub sparrow_home_internal: Option<String>,

    /// Enable verbose mode
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute Godel scripts
    Query {
        #[command(subcommand)]
        command: Option<QueryCommands>,
    },

    /// Extract a source tree into a queryable database
    Database {
        #[command(subcommand)]
        command: Option<DatabaseCommands>,
    },

    /// Rebuild extractor libraries
    Rebuild {
        #[command(subcommand)]
        command: Option<RebuildCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum QueryCommands {
    /// Execute one or more Godel scripts
    Run {
        /// Directory of a Godel database to query
        #[arg(long, short = 'd')]
        database: Option<PathBuf>,

        /// Select output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output directory; result files are named after each script with
        /// the format's extension. Defaults to the current working directory
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Query timeout in seconds
        #[arg(long, short = 't', default_value_t = 3600)]
        timeout: u64,

        /// Godel scripts to execute
        #[arg(long, required = true, num_args = 1..)]
        gdl: Vec<PathBuf>,

        /// Enable verbose mode
        #[arg(long)]
        verbose: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DatabaseCommands {
    /// Extract source code into a database
    Create {
        /// Root of the source tree to extract
        #[arg(long, short = 's')]
        source_root: PathBuf,

        /// Languages to extract, separated by whitespace, e.g. --lang java xml
        #[arg(
            long = "data-language-type",
            alias = "lang",
            required = true,
            num_args = 1..,
            value_parser = parse_data_language
        )]
        language: Vec<String>,

        /// Database generation directory
        #[arg(long, short = 'o')]
        output: PathBuf,

        /// Extraction timeout in seconds
        #[arg(long, short = 't', default_value_t = 3600)]
        timeout: u64,

        /// Enable verbose mode
        #[arg(long)]
        verbose: bool,

        /// Overwrite an existing database at the output directory
        #[arg(long)]
        overwrite: bool,

        /// JSON document of per-language extractor options
        #[arg(long)]
        extraction_config_file: Option<PathBuf>,

        /// Per-language option overrides, e.g. java.a=b; these win over
        /// values from --extraction-config-file
        #[arg(long, num_args = 0.., value_parser = parse_extraction_override)]
        extraction_config: Vec<ExtractionOverride>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RebuildCommands {
    /// Rebuild the named Godel libraries
    Lib {
        /// Library languages to rebuild, or "all"
        #[arg(
            long = "data-language-type",
            alias = "lang",
            required = true,
            num_args = 1..,
            value_parser = parse_rebuild_target
        )]
        language: Vec<String>,

        /// Enable verbose mode
        #[arg(long)]
        verbose: bool,
    },
}

impl Cli {
    /// Verbose is honored at the top level and on each leaf command.
    pub fn effective_verbose(&self) -> bool {
        if self.verbose {
            return true;
        }
        match &self.command {
            Some(Commands::Query {
                command: Some(QueryCommands::Run { verbose, .. }),
            }) => *verbose,
            Some(Commands::Database {
                command: Some(DatabaseCommands::Create { verbose, .. }),
            }) => *verbose,
            Some(Commands::Rebuild {
                command: Some(RebuildCommands::Lib { verbose, .. }),
            }) => *verbose,
            _ => false,
        }
    }
}

fn parse_data_language(value: &str) -> Result<String, String> {
    check_choice(value, &ExtractorRegistry::builtin().languages())
}

fn parse_rebuild_target(value: &str) -> Result<String, String> {
    let mut choices = engine::open_lib();
    choices.push("all".to_string());
    check_choice(value, &choices)
}

fn check_choice(value: &str, choices: &[String]) -> Result<String, String> {
    if choices.iter().any(|c| c == value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "'{}' is not a supported language (choose from: {})",
            value,
            choices.join(", ")
        ))
    }
}

fn parse_extraction_override(value: &str) -> Result<ExtractionOverride, OverrideParseError> {
    value.parse()
}
