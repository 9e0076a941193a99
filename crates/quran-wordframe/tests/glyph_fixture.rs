//! Processing of deserialized glyph records.
//!
//! Glyph sources ship integer pixel boxes keyed by line and word identity.
//! These tests exercise the wire field names end to end: JSON records into
//! frames, frames through the processor, and a processed page back out.

#![cfg(feature = "serde")]

use quran_geometry::{Point, Word, WordFrame, WordFrameScale};
use quran_wordframe::WordFrameProcessor;

/// Opening of sura 112 as it sits on page 604: two lines, ink-hugging
/// boxes with gaps between words and lines.
const GLYPH_RECORDS: &str = r#"[
    {"line": 2, "word": {"verse": {"sura": 112, "ayah": 1}, "word_number": 1}, "min_x": 806, "max_x": 918, "min_y": 330, "max_y": 377},
    {"line": 2, "word": {"verse": {"sura": 112, "ayah": 1}, "word_number": 2}, "min_x": 694, "max_x": 797, "min_y": 332, "max_y": 374},
    {"line": 2, "word": {"verse": {"sura": 112, "ayah": 1}, "word_number": 3}, "min_x": 503, "max_x": 683, "min_y": 328, "max_y": 376},
    {"line": 2, "word": {"verse": {"sura": 112, "ayah": 1}, "word_number": 4}, "min_x": 355, "max_x": 493, "min_y": 331, "max_y": 375},
    {"line": 3, "word": {"verse": {"sura": 112, "ayah": 2}, "word_number": 1}, "min_x": 733, "max_x": 918, "min_y": 392, "max_y": 438},
    {"line": 3, "word": {"verse": {"sura": 112, "ayah": 2}, "word_number": 2}, "min_x": 540, "max_x": 722, "min_y": 390, "max_y": 440}
]"#;

#[test]
fn glyph_records_deserialize() {
    let frames: Vec<WordFrame> = serde_json::from_str(GLYPH_RECORDS).expect("glyph records parse");
    assert_eq!(frames.len(), 6);
    let first = frames[0];
    assert_eq!(first.line, 2);
    assert_eq!(first.word, Word::new(112, 1, 1));
    assert_eq!((first.min_x, first.max_x), (806, 918));
    assert_eq!((first.min_y, first.max_y), (330, 377));
}

#[test]
fn deserialized_page_processes_to_tiling() {
    let frames: Vec<WordFrame> = serde_json::from_str(GLYPH_RECORDS).expect("glyph records parse");
    let collection = WordFrameProcessor::process(&frames);
    assert_eq!(collection.lines.len(), 2);

    // Neighboring words on each line now touch.
    for line in &collection.lines {
        for pair in line.frames.windows(2) {
            assert_eq!(pair[1].max_x, pair[0].min_x);
        }
    }
    // The inter-line gap closed at its midpoint: floor((377 + 390) / 2).
    assert_eq!(collection.lines[0].frames[0].max_y, 383);
    assert_eq!(collection.lines[1].frames[0].min_y, 383);

    // A touch in what used to be the gap between words now resolves: the
    // gap 683..694 was split at 688, so 690 belongs to word 2.
    let scale = WordFrameScale::default();
    assert_eq!(
        collection.word_at(Point::new(690.0, 350.0), &scale),
        Some(Word::new(112, 1, 2))
    );
}

#[test]
fn processed_collection_serializes() {
    let frames: Vec<WordFrame> = serde_json::from_str(GLYPH_RECORDS).expect("glyph records parse");
    let collection = WordFrameProcessor::process(&frames);
    let json = serde_json::to_value(&collection).expect("collection serializes");
    assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    assert_eq!(json["lines"][0]["frames"][0]["word"]["verse"]["sura"], 112);
}
