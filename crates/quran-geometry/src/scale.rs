use crate::geometry::{Rect, Size};

/// Page-image to view transform: a uniform scale plus centering offsets.
///
/// Produced by aspect-fitting a page image into a view. Page rectangles are
/// mapped through it before hit-testing touches or drawing highlights.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFrameScale {
    /// Uniform scale factor from page-image pixels to view points.
    pub scale: f64,
    /// Horizontal offset of the fitted image inside the view.
    pub x_offset: f64,
    /// Vertical offset of the fitted image inside the view.
    pub y_offset: f64,
}

impl Default for WordFrameScale {
    /// The identity transform: page coordinates are view coordinates.
    fn default() -> Self {
        Self {
            scale: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl WordFrameScale {
    /// Aspect-fit `image_size` into `view_size`.
    ///
    /// The image is scaled uniformly to the largest size that fits the view
    /// and centered along the slack axis.
    pub fn scaling(image_size: Size, view_size: Size) -> WordFrameScale {
        let image_aspect = image_size.width / image_size.height;
        let view_aspect = view_size.width / view_size.height;
        let scale = if image_aspect < view_aspect {
            view_size.height / image_size.height
        } else {
            view_size.width / image_size.width
        };
        WordFrameScale {
            scale,
            x_offset: (view_size.width - scale * image_size.width) / 2.0,
            y_offset: (view_size.height - scale * image_size.height) / 2.0,
        }
    }
}

impl Rect {
    /// The rectangle mapped from page-image space into view space.
    pub fn scaled(&self, scale: &WordFrameScale) -> Rect {
        Rect::new(
            self.x0 * scale.scale + scale.x_offset,
            self.top * scale.scale + scale.y_offset,
            self.x1 * scale.scale + scale.x_offset,
            self.bottom * scale.scale + scale.y_offset,
        )
    }
}
