/*!
 * Line-based brace-balance scan.
 *
 * Locates the grpc-gateway OpenAPI option block in a proto file and cuts it
 * out as a whole, however deeply its `{...}` values are nested. Only the
 * first block is removed: once a region closes, scanning stops.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Start of the file-level swagger option emitted by protoc-gen-swagger
static GATEWAY_OPTION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"option\s?\(grpc\.gateway\.protoc_gen_swagger\.options\.openapiv2_swagger\)")
        .expect("Invalid gateway option regex")
});

/// Half-open line range `[start_line, end_line)` of a removed block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceScanRegion {
    /// Index of the line that matched the start pattern
    pub start_line: usize,
    /// One past the line where the brace count went back to zero
    pub end_line: usize,
}

impl BraceScanRegion {
    /// Number of lines covered by the region
    pub fn len(&self) -> usize {
        self.end_line - self.start_line
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lines before the region followed by lines after it
    pub fn remove_from<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        lines[..self.start_line]
            .iter()
            .chain(lines[self.end_line..].iter())
            .copied()
            .collect()
    }
}

/// Net brace count of a line: `{` minus `}`
pub fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Find the first block opened on a line matching `start_pattern`.
///
/// Counting starts on the start line. The region ends on the first later
/// line where the running count is exactly zero. A trigger line seen again
/// before the region closes moves the start, without resetting the count.
pub fn find_region(lines: &[&str], start_pattern: &Regex) -> Option<BraceScanRegion> {
    let mut open: i64 = 0;
    let mut start_line: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        if start_pattern.is_match(line) {
            start_line = Some(index);
        }
        let Some(start) = start_line else {
            continue;
        };

        open += brace_delta(line);

        if open == 0 && start != index {
            return Some(BraceScanRegion {
                start_line: start,
                end_line: index + 1,
            });
        }
    }

    None
}

/// Locate the gateway swagger option block, if any
pub fn find_gateway_option_region(lines: &[&str]) -> Option<BraceScanRegion> {
    find_region(lines, &GATEWAY_OPTION_START)
}

/// Remove the gateway swagger option block from `text`.
///
/// Returns the text unchanged (and `None`) when no complete block exists.
pub fn remove_gateway_option_block(text: &str) -> (String, Option<BraceScanRegion>) {
    let lines: Vec<&str> = text.split('\n').collect();

    match find_gateway_option_region(&lines) {
        Some(region) => {
            debug!(
                "Removing gateway option block at lines {}..{}",
                region.start_line + 1,
                region.end_line
            );
            (region.remove_from(&lines).join("\n"), Some(region))
        }
        None => (text.to_string(), None),
    }
}
