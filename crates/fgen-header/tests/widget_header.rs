//! Scans a complete header written in the style the generator targets.

use fgen_header::{parse_header, parse_header_file, ParsedHeader};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/widget_api.h")
}

fn scan() -> ParsedHeader {
    parse_header_file(fixture()).expect("fixture header should be readable")
}

#[test]
fn test_defines_in_order() {
    let header = scan();
    let defines: Vec<(&str, &str)> = header
        .defines
        .iter()
        .map(|c| (c.name.as_str(), c.value.as_str()))
        .collect();
    assert_eq!(
        defines,
        vec![
            ("WGT_INVALID_HANDLE", "-1"),
            ("WGT_MAJOR_VERSION", "1"),
            ("WGT_MINOR_VERSION", "2"),
            ("WGT_ERR_NO_ERROR", "0"),
            ("WGT_ERR_UNKNOWN_HANDLE", "1000"),
        ]
    );
}

#[test]
fn test_enum_groups() {
    let header = scan();
    let groups: Vec<Vec<(&str, i64)>> = header
        .enums
        .iter()
        .map(|g| g.members.iter().map(|m| (m.name.as_str(), m.value)).collect())
        .collect();
    assert_eq!(
        groups,
        vec![
            vec![("WIDGET_UNKNOWN", 0), ("WIDGET_BUTTON", 1), ("WIDGET_SLIDER", 2)],
            vec![("RED", 0), ("GREEN", 1), ("BLUE", 2)],
        ]
    );
}

#[test]
fn test_enum_values_are_contiguous_from_zero() {
    for group in scan().enums {
        for (expected, member) in group.members.iter().enumerate() {
            assert_eq!(member.value, expected as i64);
        }
    }
}

#[test]
fn test_functions_skip_pointer_returns() {
    let header = scan();
    let names: Vec<&str> = header.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Widget_Create",
            "Widget_SetValue",
            "Widget_CopyName",
            "Widget_ReadValues",
            "Widget_SetMnemonic",
            "Widget_Destroy",
        ]
    );
}

#[test]
fn test_parameter_types_and_names_correspond() {
    let header = scan();
    let copy_name = header
        .functions
        .iter()
        .find(|f| f.name == "Widget_CopyName")
        .unwrap();
    assert_eq!(copy_name.param_types().collect::<Vec<_>>(), vec!["WgtHandle", "char*", "int"]);
    assert_eq!(
        copy_name.param_names().collect::<Vec<_>>(),
        vec!["handle", "buffer", "bufferLength"]
    );
}

#[test]
fn test_file_and_text_scans_agree() {
    let text = std::fs::read_to_string(fixture()).unwrap();
    assert_eq!(parse_header(&text), scan());
}

#[test]
fn test_exported_count() {
    // 6 functions, 5 defines, 3 + 3 enum members
    assert_eq!(scan().exported_count(), 17);
}
