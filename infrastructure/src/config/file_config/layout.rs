//! Image layout configuration from TOML (`[layout]` section)

use bilet_domain::media::scaling::{DEFAULT_FALLBACK_SIZE, DEFAULT_MAX_WIDTH};
use bilet_domain::{ConfigIssue, ConfigIssueCode, ImageLayout, PixelSize};
use serde::{Deserialize, Serialize};

/// Raw layout configuration from TOML
///
/// # Example
///
/// ```toml
/// [layout]
/// max_width = 480
/// max_height = 640
/// fallback_width = 400
/// fallback_height = 240
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayoutConfig {
    /// Widest image on a ticket, in pixels
    pub max_width: u32,
    /// Tallest image on a ticket; unbounded when absent
    pub max_height: Option<u32>,
    /// Size assumed for images whose dimensions cannot be read
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for FileLayoutConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_height: None,
            fallback_width: DEFAULT_FALLBACK_SIZE.width,
            fallback_height: DEFAULT_FALLBACK_SIZE.height,
        }
    }
}

impl FileLayoutConfig {
    /// Convert to domain `ImageLayout`, returning validation issues.
    ///
    /// Zero values fall back to the defaults field by field.
    pub fn to_image_layout(&self) -> (ImageLayout, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut layout = ImageLayout::default();

        if self.max_width == 0 {
            issues.push(zero_issue("layout.max_width"));
        } else {
            layout.max_width = self.max_width;
        }

        match self.max_height {
            Some(0) => issues.push(zero_issue("layout.max_height")),
            Some(height) => layout.max_height = Some(height),
            None => {}
        }

        match PixelSize::try_new(self.fallback_width, self.fallback_height) {
            Some(size) => layout.fallback = size,
            None => issues.push(zero_issue("layout.fallback_width/fallback_height")),
        }

        (layout, issues)
    }
}

fn zero_issue(field: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::InvalidConstraint {
            field: field.to_string(),
        },
        format!("{} cannot be 0, using the default", field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_config_default() {
        let (layout, issues) = FileLayoutConfig::default().to_image_layout();
        assert!(issues.is_empty());
        assert_eq!(layout, ImageLayout::default());
    }

    #[test]
    fn test_layout_config_deserialize() {
        let toml_str = r#"
[layout]
max_width = 480
max_height = 640
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let (layout, issues) = config.layout.to_image_layout();
        assert!(issues.is_empty());
        assert_eq!(layout.max_width, 480);
        assert_eq!(layout.max_height, Some(640));
        assert_eq!(layout.fallback, DEFAULT_FALLBACK_SIZE);
    }

    #[test]
    fn test_zero_bounds_fall_back_to_defaults() {
        let config = FileLayoutConfig {
            max_width: 0,
            max_height: Some(0),
            fallback_width: 0,
            fallback_height: 100,
        };
        let (layout, issues) = config.to_image_layout();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| !i.is_error()));
        assert_eq!(layout, ImageLayout::default());
    }
}
