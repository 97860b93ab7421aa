use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("No image name was given")]
    MissingArgument,

    #[error("Invalid image reference '{input}': expected <registry>/<repository>:<tag>")]
    InvalidImageReference { input: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not resolve the program directory: {0}")]
    ProgramDir(#[source] std::io::Error),

    #[error("Failed to run {}: {source}", helper.display())]
    Spawn {
        helper: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Helper script exited with {}", exit_label(*code))]
    HelperFailed { code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl PublishError {
    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PublishError::MissingArgument => 1,
            PublishError::InvalidImageReference { .. } | PublishError::InvalidConfigValue { .. } => 2,
            PublishError::ProgramDir(_) | PublishError::Spawn { .. } | PublishError::Io(_) => 3,
            PublishError::HelperFailed { code } => match code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PublishError::MissingArgument => "Usage: docker-tag-publish.py <full_image_name>".to_string(),
            PublishError::InvalidImageReference { input } => {
                format!("'{}' is not a full image name", input)
            }
            PublishError::InvalidConfigValue { field, reason, .. } => {
                format!("Option {} is invalid: {}", field, reason)
            }
            PublishError::Spawn { helper, .. } => {
                format!("Could not start the helper script {}", helper.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PublishError::MissingArgument => "Pass the full image name as the only argument",
            PublishError::InvalidImageReference { .. } => {
                "Use the form registry.example.com/repository:tag"
            }
            PublishError::InvalidConfigValue { .. } => "Check the command line options",
            PublishError::ProgramDir(_) => "Pass --helper-dir to point at the directory holding docker-tag.sh",
            PublishError::Spawn { .. } => "Make sure docker-tag.sh exists and is executable",
            PublishError::HelperFailed { .. } => "Check the helper script output above",
            PublishError::Io(_) => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
