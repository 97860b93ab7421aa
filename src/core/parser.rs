use crate::domain::model::ImageReference;
use crate::utils::error::{PublishError, Result};
use regex::Regex;
use std::sync::LazyLock;

// Greedy prefix up to the last '/' that still has a ':' after it, then the
// repository up to the next ':', then the tag to the end.
static IMAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*/(.*?):(.*)").expect("image name pattern is valid")
});

/// Extract repository and tag from a full image name like `host/path/repo:tag`.
pub fn parse_image_reference(image_name: &str) -> Result<ImageReference> {
    let captures = IMAGE_NAME_RE
        .captures(image_name)
        .ok_or_else(|| PublishError::InvalidImageReference {
            input: image_name.to_string(),
        })?;

    let repository = captures.get(1).map_or("", |m| m.as_str());
    let tag = captures.get(2).map_or("", |m| m.as_str());

    tracing::debug!(repository, tag, "parsed image name {}", image_name);

    Ok(ImageReference::new(repository, tag))
}
