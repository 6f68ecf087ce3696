/*!
 * In-place patches for the C++ code generated from the proto file.
 *
 * Both patches are apply-once: neither checks whether it already ran, so
 * callers are responsible for running each step exactly once per file.
 */

pub mod includes;
pub mod pragmas;

pub use includes::IncludeFixer;
pub use pragmas::PragmaInjector;
