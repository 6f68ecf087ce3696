/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use ue4_proto_tools::errors::ToolError;
use ue4_proto_tools::file_utils::FileManager;
use crate::common;

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content = "syntax = \"proto3\";\r\n";
    let test_file = common::create_test_file(temp_dir.path(), "crlf.proto", content)?;

    assert_eq!(FileManager::read_to_string(&test_file)?, content);
    Ok(())
}

/// Test that read_to_string reports the path of a missing file
#[test]
fn test_read_to_string_withMissingFile_shouldReturnIoError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.proto");

    match FileManager::read_to_string(&missing) {
        Err(ToolError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {:?}", other),
    }
    Ok(())
}

/// Test that write_to_file replaces existing content
#[test]
fn test_write_to_file_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "out.proto", "old content, longer than the new one")?;

    FileManager::write_to_file(&test_file, "new")?;

    assert_eq!(fs::read_to_string(&test_file)?, "new");
    Ok(())
}

/// Test that rewrite_in_place feeds the current content to the edit
#[test]
fn test_rewrite_in_place_shouldApplyEdit() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "header.h", "body")?;

    FileManager::rewrite_in_place(&test_file, |contents| format!("// top\n{}", contents))?;

    assert_eq!(fs::read_to_string(&test_file)?, "// top\nbody");
    Ok(())
}
