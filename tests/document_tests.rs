mod common;

use common::fixtures::mixed_documents;
use common::{TestResult, init_logger};
use std::process::Command;
use textframe::{Document, Frame, FrameError, LayoutError, Render};

#[test]
fn test_mixed_document_file() -> TestResult {
    init_logger();
    let documents = Document::load_all(&mixed_documents().to_string())?;
    let frames = documents
        .iter()
        .map(Document::render)
        .collect::<Result<Vec<_>, _>>()?;

    assert!(matches!(frames[0], Frame::Divider(_)));
    assert_eq!(frames[0].lines(), ["---+--"]);
    assert_eq!(frames[1].lines(), ["#######", "#Texty#", "#######"]);
    assert_eq!(
        frames[2].lines(),
        ["+-+--+", "|k|v |", "+=+==+", "|a|1 |", "|b|22|", "+-+--+"]
    );
    Ok(())
}

#[test]
fn test_row_document_with_fixed_size() -> TestResult {
    let document = Document::from_json(
        r#"{
            "type": "row",
            "cells": ["a", { "lines": ["b"], "alignment": "center" }],
            "width": 7,
            "height": 2,
            "style": { "joiner": ":" }
        }"#,
    )?;
    let frame = document.render()?;
    assert_eq!(frame.lines(), ["a  : b ", "   :   "]);
    Ok(())
}

#[test]
fn test_layout_errors_surface_from_documents() -> TestResult {
    let document = Document::from_json(r#"{ "type": "table", "title": ["empty"] }"#)?;
    assert!(matches!(document.render(), Err(LayoutError::Empty("table"))));

    let overflow = Document::from_json(
        r#"{ "type": "cell", "lines": ["wide"], "size": { "width": 2, "height": 1 } }"#,
    )?;
    assert!(matches!(
        overflow.render(),
        Err(LayoutError::ContentOverflow { .. })
    ));
    Ok(())
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        Document::load_all("{ not json"),
        Err(FrameError::Json(_))
    ));
}

#[test]
fn test_cli_renders_to_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("frames.json");
    let output = dir.path().join("frames.txt");
    std::fs::write(&input, mixed_documents().to_string())?;

    let status = Command::new(env!("CARGO_BIN_EXE_textframe"))
        .arg("--crlf")
        .arg("-o")
        .arg(&output)
        .arg(&input)
        .status()?;
    assert!(status.success());

    let written = std::fs::read_to_string(&output)?;
    assert!(written.starts_with("---+--\r\n#######\r\n#Texty#\r\n"));
    assert!(written.ends_with("|b|22|\r\n+-+--+\r\n"));
    Ok(())
}

#[test]
fn test_cli_fails_on_layout_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("bad.json");
    std::fs::write(&input, r#"{ "type": "divider", "column-widths": [] }"#)?;

    let output = Command::new(env!("CARGO_BIN_EXE_textframe"))
        .arg(&input)
        .output()?;
    assert!(!output.status.success());
    Ok(())
}
