//! quran-wordframe: word-frame processing for Quran page images.
//!
//! This crate turns the raw per-word bounding boxes of a rendered page into
//! an ordered, gap-free tiling of touch targets. It depends on
//! quran-geometry for the shared data model.

pub mod processor;

pub use processor::WordFrameProcessor;
pub use quran_geometry;
