//! Edge case and boundary condition tests
//!
//! Unusual inputs for the validator, the palette and the tools.

use std::time::Duration;

use folio_core::tools::{base64, json};
use folio_core::{
    generate_palette, hex_to_hsl, validate, FolioError, Hsl, PaletteRole, Rgb, SubmissionWorkflow,
    SubmitOutcome,
};

// ============================================================================
// Validation Boundaries
// ============================================================================

#[test]
fn test_lengths_count_code_units_not_bytes() {
    // Two code units, four bytes
    assert!(validate("name", "Żó").valid);
    // Ten code units, more than ten bytes
    assert!(validate("message", "ąęśćżźńółą").valid);
    assert!(!validate("message", "ąęśćżźńół").valid);
}

#[test]
fn test_astral_character_counts_as_two() {
    // One scalar value, two UTF-16 code units
    assert!(validate("name", "😀").valid);
    assert!(validate("message", "😀😀😀😀😀").valid);
    assert!(!validate("message", "😀😀😀😀").valid);
}

#[test]
fn test_byte_order_mark_is_whitespace() {
    assert_eq!(validate("name", "\u{FEFF}").message, "Name is required.");
    assert_eq!(validate("name", "\u{FEFF} Al \u{FEFF}").message, "");
    assert!(!validate("name", "\u{FEFF}A\u{FEFF}").valid);

    assert!(validate("email", "\u{FEFF}a@b.co\u{FEFF}").valid);
    assert!(!validate("email", "a\u{FEFF}b@c.co").valid);
}

#[test]
fn test_next_line_is_content() {
    // U+0085 is not trimmed by a browser, so it counts toward the length
    assert!(validate("name", "A\u{85}").valid);
    assert!(validate("email", "a\u{85}@b.co").valid);
}

#[test]
fn test_trimmed_before_length_checks() {
    assert!(!validate("message", "   123456789   ").valid);
    assert!(validate("message", "   1234567890   ").valid);
}

#[test]
fn test_email_trimmed_before_matching() {
    assert!(validate("email", "\n a@b.co \t").valid);
}

#[test]
fn test_required_message_for_odd_names() {
    assert_eq!(validate("éclair", "").message, "Éclair is required.");
    assert_eq!(validate("_x", " ").message, "_x is required.");
    assert_eq!(validate("", "").message, " is required.");
}

// ============================================================================
// Color Boundaries
// ============================================================================

#[test]
fn test_black_and_white_palettes() {
    let black = generate_palette("#000000").unwrap();
    assert_eq!(black.get(PaletteRole::Base), Rgb::new(0, 0, 0));
    // Darkening clamps up to the 0.1 floor.
    assert_eq!(black.get(PaletteRole::Darker), Rgb::new(26, 26, 26));
    let lighter = black.get(PaletteRole::Lighter);
    assert!(lighter.r == lighter.g && lighter.g == lighter.b);
    assert!((lighter.to_hsl().l - 0.3).abs() < 0.01);

    let white = generate_palette("#ffffff").unwrap();
    assert_eq!(white.get(PaletteRole::Base), Rgb::new(255, 255, 255));
    assert_eq!(white.get(PaletteRole::Light), Rgb::new(230, 230, 230));
}

#[test]
fn test_malformed_palette_input_fails() {
    for bad in ["", "#fff", "red", "#12345g", "0x336699", "#336699 "] {
        assert!(
            matches!(generate_palette(bad), Err(FolioError::MalformedColor(_))),
            "accepted {:?}",
            bad
        );
    }
}

#[test]
fn test_out_of_range_hsl_is_clamped() {
    assert_eq!(Hsl::new(0.0, 1.0, 1.5).to_rgb(), Rgb::new(255, 255, 255));
    assert_eq!(Hsl::new(0.0, 1.0, -0.5).to_rgb(), Rgb::new(0, 0, 0));
    // Negative hue wraps like any other.
    assert_eq!(
        Hsl::new(-120.0, 1.0, 0.5).to_rgb(),
        Hsl::new(240.0, 1.0, 0.5).to_rgb()
    );
}

#[test]
fn test_pure_hues() {
    let green = hex_to_hsl("#00ff00").unwrap();
    assert!((green.h - 120.0).abs() < 1e-9);
    let blue = hex_to_hsl("#0000ff").unwrap();
    assert!((blue.h - 240.0).abs() < 1e-9);
    let magenta = hex_to_hsl("#ff00ff").unwrap();
    assert!((magenta.h - 300.0).abs() < 1e-9);
}

// ============================================================================
// Tools
// ============================================================================

#[test]
fn test_json_deeply_nested() {
    let input = format!("{}1{}", "[".repeat(64), "]".repeat(64));
    let out = json::format_json(&input, json::JsonStyle::Minified).unwrap();
    assert_eq!(out, input);
}

#[test]
fn test_json_unicode_is_kept() {
    let out = json::format_json(r#"{"emoji":"✅"}"#, json::JsonStyle::Minified).unwrap();
    assert_eq!(out, r#"{"emoji":"✅"}"#);
}

#[test]
fn test_base64_whitespace_only_is_empty() {
    assert!(matches!(
        base64::decode(" \t\r\n"),
        Err(FolioError::EmptyInput(_))
    ));
    // But encoding whitespace is fine.
    assert_eq!(base64::encode("\t").unwrap(), "CQ==");
}

// ============================================================================
// Workflow
// ============================================================================

#[test]
fn test_empty_form_is_accepted() {
    let mut workflow = SubmissionWorkflow::new(Duration::ZERO);
    let SubmitOutcome::Accepted { delay, ticket, .. } = workflow.submit(&[]) else {
        panic!("a form without fields has nothing to reject");
    };
    assert_eq!(delay, Duration::ZERO);
    assert!(workflow.complete(ticket).is_some());
}

#[test]
fn test_stale_ticket_after_new_submission() {
    let mut workflow = SubmissionWorkflow::default();
    let fields = [folio_core::Field::new("subject", "hello")];

    let SubmitOutcome::Accepted { ticket: first, .. } = workflow.submit(&fields) else {
        panic!("expected acceptance");
    };
    workflow.complete(first).unwrap();

    let SubmitOutcome::Accepted { ticket: second, .. } = workflow.submit(&fields) else {
        panic!("expected acceptance");
    };
    assert_ne!(first, second);
    assert!(workflow.complete(first).is_none());
    assert!(workflow.fail(first, "late").is_none());
    assert!(workflow.is_busy());
    assert!(workflow.complete(second).is_some());
}
