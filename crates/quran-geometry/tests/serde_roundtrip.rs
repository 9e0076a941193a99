//! Serde serialization/deserialization round-trip tests.
//!
//! These tests verify that all public data types can be serialized to JSON
//! and deserialized back, producing equal values.

#![cfg(feature = "serde")]

use quran_geometry::*;

/// Helper: serialize to JSON string, deserialize back, assert equality.
fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

// --- Geometry types ---

#[test]
fn test_serde_point() {
    roundtrip(&Point::new(3.14, 2.72));
}

#[test]
fn test_serde_size() {
    roundtrip(&Size::new(1080.0, 1733.0));
}

#[test]
fn test_serde_rect() {
    roundtrip(&Rect::new(10.0, 20.0, 300.0, 400.0));
}

#[test]
fn test_serde_insets() {
    roundtrip(&Insets::new(154, 104, 234, 104));
    roundtrip(&Insets::default());
}

#[test]
fn test_serde_scale() {
    roundtrip(&WordFrameScale {
        scale: 0.5,
        x_offset: 12.0,
        y_offset: 0.0,
    });
}

// --- Identity types ---

#[test]
fn test_serde_ayah_number() {
    roundtrip(&AyahNumber::new(2, 255));
}

#[test]
fn test_serde_word() {
    roundtrip(&Word::new(2, 255, 7));
}

// --- Frame types ---

#[test]
fn test_serde_word_frame() {
    roundtrip(&WordFrame::new(5, Word::new(2, 255, 7), 120, 340, 400, 470));
}

#[test]
fn test_serde_word_frame_line() {
    let line = WordFrameLine::new(vec![
        WordFrame::new(1, Word::new(1, 1, 1), 600, 900, 100, 160),
        WordFrame::new(1, Word::new(1, 1, 2), 300, 600, 100, 160),
    ]);
    roundtrip(&line);
}

#[test]
fn test_serde_word_frame_collection() {
    let collection = WordFrameCollection::new(vec![
        WordFrameLine::new(vec![WordFrame::new(1, Word::new(1, 1, 1), 600, 900, 100, 160)]),
        WordFrameLine::new(vec![WordFrame::new(2, Word::new(1, 1, 2), 300, 900, 160, 220)]),
    ]);
    roundtrip(&collection);
}

// --- JSON structure verification ---

#[test]
fn test_word_frame_json_fields() {
    let frame = WordFrame::new(5, Word::new(2, 255, 7), 120, 340, 400, 470);
    let json: serde_json::Value = serde_json::to_value(frame).unwrap();
    assert_eq!(json["line"], 5);
    assert_eq!(json["min_x"], 120);
    assert_eq!(json["max_x"], 340);
    assert_eq!(json["min_y"], 400);
    assert_eq!(json["max_y"], 470);
    assert!(json["word"].is_object());
    assert_eq!(json["word"]["word_number"], 7);
    assert_eq!(json["word"]["verse"]["sura"], 2);
    assert_eq!(json["word"]["verse"]["ayah"], 255);
}
