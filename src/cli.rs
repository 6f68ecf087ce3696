/*!
 * Command-line surface shared by the standalone binaries and the
 * `ue4-proto-tools` multi-tool.
 *
 * Every failure, including argument parse errors, ends the process with
 * status 1. Only `--help` and `--version` exit with 0.
 */

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::app_config::{self, Config};
use crate::errors::ToolError;
use crate::headers::{IncludeFixer, PragmaInjector};
use crate::logging::CustomLogger;
use crate::proto::ProtoFilter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Options accepted by every utility
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    pub log_level: Option<CliLogLevel>,
}

/// Strip gateway-only constructs from a .proto file for the UE4 generator
#[derive(Parser, Debug, Clone)]
#[command(name = "convert-proto", version)]
pub struct ConvertArgs {
    /// Input .proto file
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Where the converted .proto file is written
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Use .pb.h includes in generated wrappers for Windows builds
#[derive(Parser, Debug, Clone)]
#[command(name = "fix-includes", version)]
pub struct FixIncludesArgs {
    /// Generated source file to patch in place
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Service name used in the wrapper include paths
    #[arg(long)]
    pub service: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Prepend MSVC warning pragmas to a generated file
#[derive(Parser, Debug, Clone)]
#[command(name = "fix-pragmas", version)]
pub struct FixPragmasArgs {
    /// Generated source file to patch in place
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Turn an optional flag value into a path, rejecting absent or empty values
pub fn required_path(
    value: Option<&str>,
    what: &'static str,
    flag: &'static str,
) -> Result<PathBuf, ToolError> {
    match value {
        Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
        _ => Err(ToolError::MissingArgument { what, flag }),
    }
}

/// Parse the process arguments, exiting with status 1 on any parse error
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}

/// Install the logger and load the configuration
fn prepare(common: &CommonArgs) -> Result<Config> {
    // Fails only when a logger is already installed
    if let Err(e) = CustomLogger::init(app_config::LogLevel::default().to_level_filter()) {
        debug!("Keeping the installed logger: {}", e);
    }

    let mut config = Config::load_or_default(common.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(level) = &common.log_level {
        config.log_level = level.clone().into();
    }
    CustomLogger::set_level(config.log_level.to_level_filter());

    debug!("Using configuration: {:?}", config);
    Ok(config)
}

/// Proto transform filter entry point
pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let input = required_path(args.input.as_deref(), "input file", "--input")?;
    let output = required_path(args.output.as_deref(), "output file", "--output")?;
    prepare(&args.common)?;

    let report = ProtoFilter::convert_file(&input, &output)
        .with_context(|| format!("Failed to convert {:?}", input))?;

    if let Some(region) = report.removed_region {
        info!(
            "Removed gateway option block (lines {}-{})",
            region.start_line + 1,
            region.end_line
        );
    }
    info!(
        "Inlined {} well-known import(s), stripped {} import(s) and {} http option(s), renamed {} type reference(s)",
        report.inlined_imports,
        report.stripped_imports,
        report.stripped_http_options,
        report.renamed_references
    );
    Ok(())
}

/// Include-path fixer entry point
pub fn run_fix_includes(args: &FixIncludesArgs) -> Result<()> {
    let file = required_path(args.file.as_deref(), "input file", "--file")?;
    let mut config = prepare(&args.common)?;

    if let Some(service) = &args.service {
        config.service_name = service.clone();
        config.validate().context("Invalid --service value")?;
    }

    IncludeFixer::new(&config.service_name)
        .fix_file(&file)
        .with_context(|| format!("Failed to fix includes in {:?}", file))?;
    Ok(())
}

/// Pragma injector entry point
pub fn run_fix_pragmas(args: &FixPragmasArgs) -> Result<()> {
    let file = required_path(args.file.as_deref(), "input file", "--file")?;
    let config = prepare(&args.common)?;

    PragmaInjector::new(config.pragma_warnings)
        .inject_file(&file)
        .with_context(|| format!("Failed to inject pragmas into {:?}", file))?;
    Ok(())
}

/// Map a run result to the process exit status, printing any error
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ToolError>() {
                Some(tool_error) if tool_error.is_argument_error() => eprintln!("{}", tool_error),
                _ => eprintln!("Error: {:#}", e),
            }
            ExitCode::from(1)
        }
    }
}
