//! Image extraction from a document subtree.

use super::tree::DocumentNode;
use crate::exam::QuestionImage;
use crate::media::{PixelSize, decode_data_uri, probe_dimensions};
use regex::Regex;
use std::sync::LazyLock;

static STYLE_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])width\s*:\s*([0-9]+(?:\.[0-9]+)?)\s*px").expect("style width pattern is valid")
});

static STYLE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])height\s*:\s*([0-9]+(?:\.[0-9]+)?)\s*px").expect("style height pattern is valid")
});

/// Collect every embedded image in `node`'s subtree, in document order.
///
/// The node itself counts when it is an `<img>`. References that are not
/// base64 `data:` URIs are dropped.
pub fn extract_images<N: DocumentNode>(node: &N) -> Vec<QuestionImage> {
    let mut candidates = Vec::new();
    if node.is("img") {
        candidates.push(node.clone());
    }
    candidates.extend(node.descendants_named("img"));

    candidates.iter().filter_map(image_from_element).collect()
}

fn image_from_element<N: DocumentNode>(img: &N) -> Option<QuestionImage> {
    let payload = decode_data_uri(img.attribute("src")?)?;
    let intrinsic = probe_dimensions(&payload.data);
    Some(QuestionImage::new(
        payload.content_type,
        payload.data,
        intrinsic,
        declared_size(img),
    ))
}

/// Size claimed by markup; each axis tries its attribute, then inline style
fn declared_size<N: DocumentNode>(img: &N) -> Option<PixelSize> {
    let style = img.attribute("style").unwrap_or_default();
    let width = declared_axis(img, "width", &STYLE_WIDTH, style)?;
    let height = declared_axis(img, "height", &STYLE_HEIGHT, style)?;
    PixelSize::try_new(width, height)
}

fn declared_axis<N: DocumentNode>(img: &N, name: &str, pattern: &Regex, style: &str) -> Option<u32> {
    img.attribute(name)
        .and_then(parse_dimension_hint)
        .or_else(|| style_px(pattern, style))
}

fn style_px(pattern: &Regex, style: &str) -> Option<u32> {
    let captures = pattern.captures(style)?;
    parse_dimension_hint(captures.get(1)?.as_str())
}

fn parse_dimension_hint(raw: &str) -> Option<u32> {
    let value = raw.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim();
    let parsed = value.parse::<f64>().ok()?;
    if !parsed.is_finite() || parsed < 1.0 {
        return None;
    }
    Some(parsed.round() as u32)
}
