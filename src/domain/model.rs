use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::utils::error::PublishError;

/// Repository and tag extracted from a full image name such as
/// `registry.example.com/team/app:v1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    pub repository: String,
    pub tag: String,
}

impl ImageReference {
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

impl FromStr for ImageReference {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::core::parser::parse_image_reference(s)
    }
}

/// Invocation of the helper script: `<helper> <repository> <source_tag> <destination_tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCommand {
    pub helper: PathBuf,
    pub repository: String,
    pub source_tag: String,
    pub destination_tag: String,
}

impl TagCommand {
    /// Source and destination tag are both the reference's tag.
    pub fn new(helper: impl Into<PathBuf>, image: &ImageReference) -> Self {
        Self {
            helper: helper.into(),
            repository: image.repository.clone(),
            source_tag: image.tag.clone(),
            destination_tag: image.tag.clone(),
        }
    }

    pub fn helper(&self) -> &Path {
        &self.helper
    }

    pub fn args(&self) -> [&str; 3] {
        [
            self.repository.as_str(),
            self.source_tag.as_str(),
            self.destination_tag.as_str(),
        ]
    }
}

impl fmt::Display for TagCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.helper.display(),
            self.repository,
            self.source_tag,
            self.destination_tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_command_line() {
        let image = ImageReference::new("myapp", "v1.2.3");
        let cmd = TagCommand::new("/opt/release/docker-tag.sh", &image);

        assert_eq!(
            cmd.to_string(),
            "/opt/release/docker-tag.sh myapp v1.2.3 v1.2.3"
        );
        assert_eq!(cmd.args(), ["myapp", "v1.2.3", "v1.2.3"]);
    }

    #[test]
    fn test_image_reference_display() {
        let image = ImageReference::new("myapp", "latest");
        assert_eq!(image.to_string(), "myapp:latest");
    }
}
