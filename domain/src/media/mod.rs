//! Embedded image handling
//!
//! - [`payload`] - `data:` URI → bytes + MIME type
//! - [`probe`] - pixel size from PNG/GIF/BMP/JPEG headers
//! - [`scaling`] - render size within the page bounds

pub mod format;
pub mod payload;
pub mod probe;
pub mod scaling;
pub mod size;

pub use format::ImageFormat;
pub use payload::{EmbeddedPayload, decode_data_uri};
pub use probe::probe_dimensions;
pub use scaling::{ImageLayout, fit_within};
pub use size::PixelSize;
