//! Word-frame processing: from raw glyph boxes to a gap-free page tiling.
//!
//! Raw glyph bounds hug the ink of each word, so neighboring words leave
//! slivers of dead space between them and line height varies word by word.
//! A tap in any of that dead space would select nothing. Processing
//! stretches every frame until the text area is tiled edge to edge and each
//! touch resolves to exactly one word.

use std::collections::BTreeMap;

use quran_geometry::{Insets, WordFrame, WordFrameCollection, WordFrameLine};

/// Turns raw per-word bounding boxes into a gap-free tiling of the page.
pub struct WordFrameProcessor;

impl WordFrameProcessor {
    /// Process one page's raw word frames into a finalized collection.
    ///
    /// The pipeline runs in a fixed order:
    /// 1. Group frames by line index (ascending), keeping input order
    ///    within each line.
    /// 2. Normalize reversed edges so `min <= max` holds on both axes.
    /// 3. Stretch every frame to its line's full vertical extent.
    /// 4. Close the vertical gap or overlap between adjacent lines at the
    ///    midpoint between them, except across sura boundaries.
    /// 5. Sort each line right to left and close the horizontal gap or
    ///    overlap between neighboring words.
    /// 6. Align every line's outer edges to the page-wide right and left
    ///    margins.
    ///
    /// Input order matters: step 4 reads each line's last and first frames
    /// as supplied, before the right-to-left sort of step 5. Any input is
    /// accepted, including reversed edges and an empty slice.
    pub fn process(frames: &[WordFrame]) -> WordFrameCollection {
        let mut lines = Self::group_by_line(frames);

        for line in &mut lines {
            for frame in line.iter_mut() {
                *frame = frame.normalized();
            }
            Self::unify_line_height(line);
        }

        Self::close_vertical_seams(&mut lines);

        for line in &mut lines {
            Self::close_horizontal_seams(line);
        }

        Self::align_outer_edges(&mut lines);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            frames = frames.len(),
            lines = lines.len(),
            "processed word frames"
        );

        WordFrameCollection::new(lines.into_iter().map(WordFrameLine::new).collect())
    }

    /// Like [`process`](Self::process), for frames whose coordinates target
    /// the uncropped page render: shifts every frame by the crop insets
    /// first.
    pub fn process_with_insets(frames: &[WordFrame], insets: Insets) -> WordFrameCollection {
        let shifted: Vec<WordFrame> = frames.iter().map(|frame| frame.inset_by(insets)).collect();
        Self::process(&shifted)
    }

    /// Partition frames into lines by line index, ascending. Frames keep
    /// their input order within each line.
    fn group_by_line(frames: &[WordFrame]) -> Vec<Vec<WordFrame>> {
        let mut groups: BTreeMap<i32, Vec<WordFrame>> = BTreeMap::new();
        for frame in frames {
            groups.entry(frame.line).or_default().push(*frame);
        }
        groups.into_values().collect()
    }

    /// Stretch every frame on the line to the line's full vertical extent,
    /// removing the ascender/descender variation between words.
    fn unify_line_height(line: &mut [WordFrame]) {
        let min_y = line.iter().map(|f| f.min_y).fold(i32::MAX, i32::min);
        let max_y = line.iter().map(|f| f.max_y).fold(i32::MIN, i32::max);
        for frame in line {
            frame.min_y = min_y;
            frame.max_y = max_y;
        }
    }

    /// Close the vertical gap or overlap between each adjacent pair of
    /// lines: both lines meet at the midpoint of the space between them.
    ///
    /// Runs top to bottom. A pair whose boundary words belong to different
    /// suras is left untouched: a sura header sits between those lines and
    /// the space it occupies must stay unselectable.
    fn close_vertical_seams(lines: &mut [Vec<WordFrame>]) {
        for i in 1..lines.len() {
            if !Self::shares_sura_at_boundary(&lines[i - 1], &lines[i]) {
                #[cfg(feature = "tracing")]
                tracing::trace!(pair = i, "sura boundary, keeping vertical gap");
                continue;
            }
            let upper_max_y = lines[i - 1].iter().map(|f| f.max_y).fold(i32::MIN, i32::max);
            let lower_min_y = lines[i].iter().map(|f| f.min_y).fold(i32::MAX, i32::min);
            let middle = floor_avg(upper_max_y, lower_min_y);
            #[cfg(feature = "tracing")]
            tracing::trace!(upper_max_y, lower_min_y, middle, "closing vertical seam");
            for frame in lines[i - 1].iter_mut() {
                frame.max_y = middle;
            }
            for frame in lines[i].iter_mut() {
                frame.min_y = middle;
            }
        }
    }

    /// Whether two adjacent lines' boundary words belong to the same sura.
    ///
    /// The boundary words are the upper line's last frame and the lower
    /// line's first frame, in the lines' current frame order.
    fn shares_sura_at_boundary(upper: &[WordFrame], lower: &[WordFrame]) -> bool {
        match (upper.last(), lower.first()) {
            (Some(a), Some(b)) => a.word.sura() == b.word.sura(),
            _ => false,
        }
    }

    /// Sort the line's frames right to left, then close the horizontal gap
    /// or overlap between each neighboring pair.
    ///
    /// The seam sits between the left word's right edge and the right
    /// word's left edge. An overlap (or exact touch) clamps the left
    /// word's right edge to the right word's left edge; a gap is split at
    /// its midpoint so both words grow toward each other. Afterwards each
    /// neighboring pair shares exactly one boundary.
    fn close_horizontal_seams(line: &mut [WordFrame]) {
        line.sort_by(|a, b| b.min_x.cmp(&a.min_x));
        for i in 1..line.len() {
            let right_min_x = line[i - 1].min_x;
            let left_max_x = line[i].max_x;
            if left_max_x >= right_min_x {
                line[i].max_x = right_min_x;
            } else {
                let middle = floor_avg(left_max_x, right_min_x);
                line[i].max_x = middle;
                line[i - 1].min_x = middle;
            }
        }
    }

    /// Align the page's outer columns: every line's rightmost frame takes
    /// the page-wide maximum right edge and every line's leftmost frame the
    /// page-wide minimum left edge, so shorter lines sit flush with the
    /// longest one.
    fn align_outer_edges(lines: &mut [Vec<WordFrame>]) {
        let right_edge = lines
            .iter()
            .filter_map(|line| line.first())
            .map(|f| f.max_x)
            .fold(i32::MIN, i32::max);
        let left_edge = lines
            .iter()
            .filter_map(|line| line.last())
            .map(|f| f.min_x)
            .fold(i32::MAX, i32::min);
        for line in lines {
            if let Some(first) = line.first_mut() {
                first.max_x = right_edge;
            }
            if let Some(last) = line.last_mut() {
                last.min_x = left_edge;
            }
        }
    }
}

/// Midpoint of two integer edges, rounded toward negative infinity.
/// Widened to `i64` so the sum is exact for any `i32` pair.
fn floor_avg(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64).div_euclid(2)) as i32
}
