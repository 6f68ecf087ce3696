/*!
 * Full conversion of a realistic service definition
 */

use anyhow::Result;
use ue4_proto_tools::proto::{ProtoFilter, SourceDocument};
use crate::common;

fn convert_sample() -> Result<String> {
    let document = SourceDocument::read(common::test_resource_path("economy_service.proto"))?;
    Ok(ProtoFilter::transform(&document).text)
}

#[test]
fn test_economyProto_shouldDropGatewayConstructs() -> Result<()> {
    let converted = convert_sample()?;

    assert!(!converted.contains("import"));
    assert!(!converted.contains("openapiv2_swagger"));
    assert!(!converted.contains("google.api.http"));
    assert!(!converted.contains("google.protobuf"));
    assert!(!converted.contains("option"));
    assert!(!converted.contains("json_schema"));
    Ok(())
}

#[test]
fn test_economyProto_shouldKeepMessagesAndService() -> Result<()> {
    let converted = convert_sample()?;

    assert!(converted.starts_with("syntax = \"proto3\";\n\npackage v1;\n"));
    assert!(converted.contains("  Struct metadata = 3;"));
    assert!(converted.contains("  Timestamp created_at = 4;"));
    assert!(converted.contains("  Value extra = 3;"));
    assert!(converted.contains("rpc GetItem(GetItemRequest) returns (GetItemResponse) {"));
    assert!(converted.contains("rpc ListItems(GetItemRequest) returns (GetItemResponse) {"));
    Ok(())
}

#[test]
fn test_economyProto_shouldInlineEachWellKnownTypeOnce() -> Result<()> {
    let converted = convert_sample()?;

    for definition in [
        "message Struct {",
        "message Value {",
        "enum NullValue {",
        "message ListValue {",
        "message Timestamp {",
    ] {
        assert_eq!(converted.matches(definition).count(), 1, "{}", definition);
    }
    Ok(())
}

#[test]
fn test_economyProto_shouldStayBraceBalanced() -> Result<()> {
    let converted = convert_sample()?;

    assert_eq!(converted.matches('{').count(), converted.matches('}').count());
    Ok(())
}

#[test]
fn test_economyProto_reportShouldListEveryStep() -> Result<()> {
    let document = SourceDocument::read(common::test_resource_path("economy_service.proto"))?;
    let report = ProtoFilter::transform(&document).report;

    let region = report.removed_region.expect("gateway option block should be found");
    assert_eq!(region.start_line, 9);
    assert_eq!(report.inlined_imports, 2);
    assert_eq!(report.stripped_imports, 2);
    assert_eq!(report.stripped_http_options, 2);
    assert_eq!(report.renamed_references, 3);
    Ok(())
}
