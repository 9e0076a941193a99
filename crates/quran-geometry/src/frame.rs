use crate::geometry::{Insets, Rect};
use crate::word::Word;

/// One word's bounding box on a rendered page image.
///
/// Coordinates are integer pixels of the page image, top-left origin:
/// larger `x` is further right, larger `y` is lower on the page. Raw glyph
/// data may carry edges in either order; [`normalized`](WordFrame::normalized)
/// restores `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFrame {
    /// Line index on the page. Indices need not start at zero or be
    /// contiguous; only their relative order matters.
    pub line: i32,
    /// Identity of the word this frame belongs to.
    pub word: Word,
    /// Left edge.
    pub min_x: i32,
    /// Right edge.
    pub max_x: i32,
    /// Top edge.
    pub min_y: i32,
    /// Bottom edge.
    pub max_y: i32,
}

impl WordFrame {
    pub fn new(line: i32, word: Word, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            line,
            word,
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Width of the frame in page-image pixels.
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    /// Height of the frame in page-image pixels.
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// The frame with reversed edges swapped so that `min <= max` holds on
    /// both axes.
    pub fn normalized(&self) -> WordFrame {
        let mut frame = *self;
        if frame.min_x > frame.max_x {
            std::mem::swap(&mut frame.min_x, &mut frame.max_x);
        }
        if frame.min_y > frame.max_y {
            std::mem::swap(&mut frame.min_y, &mut frame.max_y);
        }
        frame
    }

    /// The frame translated from uncropped-render coordinates into the
    /// cropped page image's coordinate space.
    pub fn inset_by(&self, insets: Insets) -> WordFrame {
        WordFrame {
            min_x: self.min_x - insets.left,
            max_x: self.max_x - insets.left,
            min_y: self.min_y - insets.top,
            max_y: self.max_y - insets.top,
            ..*self
        }
    }

    /// The frame's box as an `f64` rectangle for view-space math.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.min_x as f64,
            self.min_y as f64,
            self.max_x as f64,
            self.max_y as f64,
        )
    }
}
