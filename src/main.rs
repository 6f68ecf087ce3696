// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::process::ExitCode;

use ue4_proto_tools::cli::{self, ConvertArgs, FixIncludesArgs, FixPragmasArgs};

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip gateway-only constructs from a .proto file
    Convert(ConvertArgs),

    /// Use .pb.h includes in generated wrappers
    FixIncludes(FixIncludesArgs),

    /// Prepend MSVC warning pragmas to a generated file
    FixPragmas(FixPragmasArgs),

    /// Generate shell completions for ue4-proto-tools
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Build helpers for the UE4 gRPC client plugin
#[derive(Parser, Debug)]
#[command(name = "ue4-proto-tools")]
#[command(version)]
#[command(about = "Build helpers for the UE4 gRPC client plugin")]
#[command(long_about = "Prepares a .proto file for the UE4 gRPC code generator and patches the generated C++ for Windows builds.

EXAMPLES:
    ue4-proto-tools convert --input economy_service.proto --output ue4/economy_service.proto
    ue4-proto-tools fix-includes --file Source/EconomyService/Private/EconomyServiceClient.cpp
    ue4-proto-tools fix-pragmas --file Source/EconomyService/Private/Wrappers/economy_service/economy_service.pb.cc
    ue4-proto-tools completions bash > ue4-proto-tools.bash

Each step is apply-once: fix-pragmas run twice writes the pragma block twice.

CONFIGURATION:
    --config <PATH> points at a JSON file with optional keys
    service_name, pragma_warnings and log_level.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let options: CommandLineOptions = cli::parse_or_exit();

    match options.command {
        Commands::Convert(args) => cli::exit_code(cli::run_convert(&args)),
        Commands::FixIncludes(args) => cli::exit_code(cli::run_fix_includes(&args)),
        Commands::FixPragmas(args) => cli::exit_code(cli::run_fix_pragmas(&args)),
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ue4-proto-tools", &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
