//! Render size policy for ticket images.
//!
//! Images are only ever scaled down: the result fits the bounding box and
//! keeps the source aspect ratio within one pixel of rounding.

use super::size::PixelSize;
use crate::exam::QuestionImage;
use serde::{Deserialize, Serialize};

/// Widest image a ticket page accepts, in pixels
pub const DEFAULT_MAX_WIDTH: u32 = 520;

/// Size used when neither the header nor the markup tells us anything
pub const DEFAULT_FALLBACK_SIZE: PixelSize = PixelSize {
    width: 420,
    height: 260,
};

/// Fit `source` inside `max_width` x `max_height` without enlarging it.
///
/// # Examples
///
/// ```
/// use bilet_domain::media::{PixelSize, scaling::fit_within};
///
/// let big = PixelSize::try_new(1040, 600).unwrap();
/// assert_eq!(fit_within(big, 520, None), PixelSize::try_new(520, 300).unwrap());
///
/// let small = PixelSize::try_new(100, 50).unwrap();
/// assert_eq!(fit_within(small, 520, Some(400)), small);
/// ```
pub fn fit_within(source: PixelSize, max_width: u32, max_height: Option<u32>) -> PixelSize {
    let width_scale = (max_width as f64 / source.width as f64).min(1.0);
    let height_scale = max_height
        .map(|max| (max as f64 / source.height as f64).min(1.0))
        .unwrap_or(1.0);
    let scale = width_scale.min(height_scale).min(1.0);

    PixelSize {
        width: scale_axis(source.width, scale),
        height: scale_axis(source.height, scale),
    }
}

fn scale_axis(value: u32, scale: f64) -> u32 {
    ((value as f64) * scale).round().max(1.0) as u32
}

/// Page layout limits for images (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLayout {
    pub max_width: u32,
    pub max_height: Option<u32>,
    pub fallback: PixelSize,
}

impl Default for ImageLayout {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: None,
            fallback: DEFAULT_FALLBACK_SIZE,
        }
    }
}

impl ImageLayout {
    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Final placement size for an image.
    ///
    /// Header dimensions win over markup hints, which win over the fallback.
    pub fn render_size(&self, image: &QuestionImage) -> PixelSize {
        let source = image
            .intrinsic()
            .or(image.declared())
            .unwrap_or(self.fallback);
        fit_within(source, self.max_width, self.max_height)
    }
}
