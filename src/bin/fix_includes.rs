//! Switch generated wrapper includes from `.pb.hpp` to `.pb.h`.
//!
//! Usage: `fix-includes --file <path> [--service <name>]`

use std::process::ExitCode;

use ue4_proto_tools::cli::{self, FixIncludesArgs};

fn main() -> ExitCode {
    let args: FixIncludesArgs = cli::parse_or_exit();
    cli::exit_code(cli::run_fix_includes(&args))
}
