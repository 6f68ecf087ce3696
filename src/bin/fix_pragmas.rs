//! Prepend MSVC warning pragmas to a generated source file.
//!
//! Usage: `fix-pragmas --file <path>`

use std::process::ExitCode;

use ue4_proto_tools::cli::{self, FixPragmasArgs};

fn main() -> ExitCode {
    let args: FixPragmasArgs = cli::parse_or_exit();
    cli::exit_code(cli::run_fix_pragmas(&args))
}
