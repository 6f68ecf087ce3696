/*!
 * # ue4-proto-tools
 *
 * Build-time helpers for the Unreal Engine gRPC client plugin.
 *
 * ## Features
 *
 * - Convert a `.proto` file into the reduced form the UE4 code generator
 *   accepts (gateway options removed, well-known types inlined, imports
 *   and `google.api.http` options stripped)
 * - Switch generated wrapper includes from `.pb.hpp` to `.pb.h`
 * - Prepend MSVC warning pragmas to generated sources
 *
 * ## Architecture
 *
 * - `proto`: the transform filter
 *   - `proto::brace_scan`: line-based brace-balance block removal
 *   - `proto::rules`: ordered substitution rules and inlined messages
 *   - `proto::http_options`: `google.api.http` option removal
 * - `headers`: in-place patches of generated C++ (`includes`, `pragmas`)
 * - `cli`: argument structs and entry points shared by the binaries
 * - `app_config`: optional JSON configuration
 * - `file_utils`: file read/write helpers
 * - `logging`: stderr logger
 * - `errors`: error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod cli;
pub mod errors;
pub mod file_utils;
pub mod headers;
pub mod logging;
pub mod proto;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::ToolError;
pub use headers::{IncludeFixer, PragmaInjector};
pub use proto::{ProtoFilter, SourceDocument, TransformReport};
