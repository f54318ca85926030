//! Pixel size value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Width and height of an image in pixels (Value Object)
///
/// Both axes are positive whenever the value comes out of [`PixelSize::new`]
/// or [`PixelSize::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    /// Create a size, rejecting zero on either axis
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        Self::try_new(width, height).ok_or(DomainError::InvalidImageSize { width, height })
    }

    /// Create a size, returning None if either axis is zero
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for PixelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
