/*!
 * Proto transform filter.
 *
 * Rewrites a `.proto` file into the reduced form accepted by the UE4
 * gRPC code generator:
 * 1. the grpc-gateway swagger option block is cut out (first one only)
 * 2. `struct.proto` and `timestamp.proto` imports become inline messages
 * 3. all remaining imports are dropped
 * 4. `google.api.http` method options are dropped
 * 5. `google.protobuf.*` references are renamed to the inlined types
 */

pub mod brace_scan;
pub mod http_options;
pub mod rules;

use log::{debug, info};
use std::path::Path;

use crate::errors::ToolError;
use crate::file_utils::FileManager;

pub use brace_scan::BraceScanRegion;
pub use rules::{INLINE_STRUCT, INLINE_TIMESTAMP, SubstitutionRule};

/// The input file as read, split into lines
#[derive(Debug, Clone)]
pub struct SourceDocument {
    text: String,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a document from disk
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ToolError> {
        FileManager::read_to_string(path).map(Self::new)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines split on `\n`; a `\r` before the break stays on its line
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}

/// What each step of a transform changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Gateway option block that was removed, if any
    pub removed_region: Option<BraceScanRegion>,
    /// Well-known imports replaced by inline definitions
    pub inlined_imports: usize,
    /// Other import statements dropped
    pub stripped_imports: usize,
    /// `google.api.http` option blocks dropped
    pub stripped_http_options: usize,
    /// `google.protobuf.*` references renamed
    pub renamed_references: usize,
}

impl TransformReport {
    /// True when no step touched the document
    pub fn is_unchanged(&self) -> bool {
        *self == Self::default()
    }
}

/// Result of a transform: the output document and its report
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub text: String,
    pub report: TransformReport,
}

/// Stateless proto filter
pub struct ProtoFilter;

impl ProtoFilter {
    /// Run all five steps over `document`
    pub fn transform(document: &SourceDocument) -> TransformOutput {
        let mut report = TransformReport::default();

        let (text, region) = brace_scan::remove_gateway_option_block(document.text());
        report.removed_region = region;

        let (text, inlined) = rules::apply_all(&text, rules::WELL_KNOWN_IMPORTS);
        report.inlined_imports = inlined;

        let (text, stripped) = rules::STRIP_IMPORTS.apply(&text);
        report.stripped_imports = stripped;

        let (text, http_options) = http_options::strip_http_options(&text);
        report.stripped_http_options = http_options;

        let (text, renamed) = rules::apply_all(&text, rules::TYPE_RENAMES);
        report.renamed_references = renamed;

        debug!("Transform report: {:?}", report);
        TransformOutput { text, report }
    }

    /// Transform a string directly
    pub fn transform_str(source: &str) -> TransformOutput {
        Self::transform(&SourceDocument::new(source))
    }

    /// Read `input`, transform it and write the result to `output`
    pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        input: P1,
        output: P2,
    ) -> Result<TransformReport, ToolError> {
        let input = input.as_ref();
        let output = output.as_ref();

        let document = SourceDocument::read(input)?;
        let TransformOutput { text, report } = Self::transform(&document);
        FileManager::write_to_file(output, &text)?;

        info!("Converted {:?} -> {:?}", input, output);
        Ok(report)
    }
}
