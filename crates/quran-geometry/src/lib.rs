//! quran-geometry: word-frame geometry model for Quran page images.
//!
//! Data types shared by the word-frame pipeline and its consumers: verse
//! and word identity, per-word bounding frames, processed per-page frame
//! collections, and the page-to-view transform used for hit-testing and
//! highlight overlays. Pure data and arithmetic, no I/O.
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on all
//! model types.

pub mod collection;
pub mod frame;
pub mod geometry;
pub mod scale;
pub mod word;

pub use collection::{WordFrameCollection, WordFrameLine};
pub use frame::WordFrame;
pub use geometry::{Insets, Point, Rect, Size};
pub use scale::WordFrameScale;
pub use word::{AyahNumber, Word};
