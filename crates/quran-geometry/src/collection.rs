use crate::frame::WordFrame;
use crate::geometry::{Point, Rect};
use crate::scale::WordFrameScale;
use crate::word::{AyahNumber, Word};

/// One visual line of word frames.
///
/// In processed output the frames sit in reading order, rightmost word
/// first, and tile the line without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFrameLine {
    pub frames: Vec<WordFrame>,
}

impl WordFrameLine {
    pub fn new(frames: Vec<WordFrame>) -> Self {
        Self { frames }
    }

    /// The frame of the given word, if it lies on this line.
    pub fn frame_for_word(&self, word: Word) -> Option<&WordFrame> {
        self.frames.iter().find(|frame| frame.word == word)
    }

    /// Union rectangle of this line's frames belonging to the given verse,
    /// or `None` if the verse has no words on this line.
    pub fn rect_for_verse(&self, verse: AyahNumber) -> Option<Rect> {
        self.frames
            .iter()
            .filter(|frame| frame.word.verse == verse)
            .map(WordFrame::rect)
            .reduce(|a, b| a.union(&b))
    }
}

/// Processed word frames of one page: lines ordered top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFrameCollection {
    pub lines: Vec<WordFrameLine>,
}

impl WordFrameCollection {
    pub fn new(lines: Vec<WordFrameLine>) -> Self {
        Self { lines }
    }

    /// Whether the page has no frames at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All frames on the page, line by line.
    pub fn frames(&self) -> impl Iterator<Item = &WordFrame> {
        self.lines.iter().flat_map(|line| line.frames.iter())
    }

    /// The line containing the given word.
    pub fn line_for_word(&self, word: Word) -> Option<&WordFrameLine> {
        self.lines
            .iter()
            .find(|line| line.frame_for_word(word).is_some())
    }

    /// The frame of the given word, anywhere on the page.
    pub fn frame_for_word(&self, word: Word) -> Option<&WordFrame> {
        self.frames().find(|frame| frame.word == word)
    }

    /// All frames belonging to the given verse, in reading order.
    pub fn frames_for_verse(&self, verse: AyahNumber) -> Vec<&WordFrame> {
        self.frames()
            .filter(|frame| frame.word.verse == verse)
            .collect()
    }

    /// One highlight rectangle per line the verse touches, in page
    /// coordinates, top to bottom.
    pub fn line_rects_for_verse(&self, verse: AyahNumber) -> Vec<Rect> {
        self.lines
            .iter()
            .filter_map(|line| line.rect_for_verse(verse))
            .collect()
    }

    /// The word under a view-space point, given the page-to-view transform.
    ///
    /// A point on an edge shared by two frames resolves to the frame
    /// earlier in reading order.
    pub fn word_at(&self, location: Point, scale: &WordFrameScale) -> Option<Word> {
        self.frames()
            .find(|frame| frame.rect().scaled(scale).contains(location))
            .map(|frame| frame.word)
    }
}
