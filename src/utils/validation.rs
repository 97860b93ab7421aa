use crate::utils::error::{PublishError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A directory given on the command line: not blank, no NUL bytes.
pub fn validate_dir_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.trim().is_empty() {
        "Path cannot be empty or whitespace-only"
    } else if path.contains('\0') {
        "Path contains null bytes"
    } else {
        return Ok(());
    };

    Err(PublishError::InvalidConfigValue {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dir_path() {
        assert!(validate_dir_path("helper_dir", "/opt/release").is_ok());
        assert!(validate_dir_path("helper_dir", "").is_err());
        assert!(validate_dir_path("helper_dir", "   ").is_err());
        assert!(validate_dir_path("helper_dir", "bad\0path").is_err());
    }
}
