//! Reduce a .proto file to what the UE4 gRPC generator understands.
//!
//! Usage: `convert-proto --input <path> --output <path>`

use std::process::ExitCode;

use ue4_proto_tools::cli::{self, ConvertArgs};

fn main() -> ExitCode {
    let args: ConvertArgs = cli::parse_or_exit();
    cli::exit_code(cli::run_convert(&args))
}
