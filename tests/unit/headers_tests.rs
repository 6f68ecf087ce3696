/*!
 * Tests for the generated-code patches
 */

use anyhow::Result;
use std::fs;
use ue4_proto_tools::app_config::PragmaWarning;
use ue4_proto_tools::headers::pragmas::PRAGMA_BANNER;
use ue4_proto_tools::headers::{IncludeFixer, PragmaInjector};
use crate::common;

const GENERATED_CLIENT: &str = "#include \"EconomyServiceClient.h\"
#include \"Wrappers/economy_service/economy_service.pb.hpp\"
#include \"Wrappers/economy_service/economy_service.grpc.pb.hpp\"

void UEconomyServiceClient::Init() {}
";

/// Both wrapper includes are switched to the .h extension
#[test]
fn test_fixFile_withGeneratedIncludes_shouldRewriteBoth() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "EconomyServiceClient.cpp", GENERATED_CLIENT)?;

    let replaced = IncludeFixer::new("economy_service").fix_file(&file)?;

    let contents = fs::read_to_string(&file)?;
    assert_eq!(replaced, 2);
    assert!(contents.contains("#include \"Wrappers/economy_service/economy_service.pb.h\"\n"));
    assert!(contents.contains("#include \"Wrappers/economy_service/economy_service.grpc.pb.h\"\n"));
    assert!(!contents.contains(".hpp"));
    assert!(contents.contains("#include \"EconomyServiceClient.h\""));
    Ok(())
}

/// A different service name only touches that service's includes
#[test]
fn test_apply_withCustomService_shouldIgnoreOtherServices() {
    let fixer = IncludeFixer::new("inventory_service");
    let text = "#include \"Wrappers/inventory_service/inventory_service.grpc.pb.hpp\"\n#include \"Wrappers/economy_service/economy_service.pb.hpp\"\n";

    let (out, count) = fixer.apply(text);

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "#include \"Wrappers/inventory_service/inventory_service.grpc.pb.h\"\n#include \"Wrappers/economy_service/economy_service.pb.hpp\"\n"
    );
}

/// The pragma block goes in front of the untouched original content
#[test]
fn test_injectFile_shouldPrependBlock() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = "// Generated by the gRPC C++ plugin.\n#include <grpcpp/impl/codegen/async_stream.h>\n";
    let file = common::create_test_file(temp_dir.path(), "economy_service.grpc.pb.cc", original)?;

    let injector = PragmaInjector::default();
    injector.inject_file(&file)?;

    let contents = fs::read_to_string(&file)?;
    assert!(contents.starts_with(PRAGMA_BANNER));
    assert!(contents.ends_with(original));
    assert_eq!(contents, format!("{}{}", injector.header(), original));
    Ok(())
}

/// Injecting twice duplicates the block: the step is apply-once by contract
#[test]
fn test_injectFile_runTwice_shouldDuplicateBlock() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "economy_service.pb.h", "#pragma once\n")?;

    let injector = PragmaInjector::default();
    injector.inject_file(&file)?;
    injector.inject_file(&file)?;

    let contents = fs::read_to_string(&file)?;
    assert_eq!(contents.matches(PRAGMA_BANNER).count(), 2);
    assert_eq!(contents.matches("#pragma warning (disable : 4800)").count(), 2);
    assert_eq!(contents, format!("{0}{0}#pragma once\n", injector.header()));
    Ok(())
}

/// Custom warning lists are written in order
#[test]
fn test_header_withCustomWarnings_shouldListThemInOrder() {
    let injector = PragmaInjector::new(vec![
        PragmaWarning::new(4996, "deprecated"),
        PragmaWarning::new(4267, "conversion from size_t"),
    ]);
    let header = injector.header();
    let lines: Vec<&str> = header.lines().collect();

    assert_eq!(lines[1], "#pragma warning (disable : 4996) // deprecated");
    assert_eq!(lines[2], "#pragma warning (disable : 4267) // conversion from size_t");
    assert!(header.ends_with("\n\n"));
}

/// Missing files are reported as errors
#[test]
fn test_fixFile_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.cpp");

    assert!(IncludeFixer::new("economy_service").fix_file(&missing).is_err());
    assert!(PragmaInjector::default().inject_file(&missing).is_err());
    assert!(!missing.exists());
    Ok(())
}
