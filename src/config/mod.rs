pub mod cli;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::publish::DispatchPolicy;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_dir_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "docker-tag-publish")]
    #[command(about = "Re-tag and publish a container image through docker-tag.sh")]
    pub struct CliConfig {
        /// Full image name, e.g. registry.example.com/myapp:v1.2.3
        #[arg(value_name = "FULL_IMAGE_NAME", allow_hyphen_values = true)]
        pub image_name: Option<String>,

        /// Anything after the image name is accepted and ignored.
        #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        pub ignored: Vec<String>,

        /// Directory containing docker-tag.sh [default: directory of this program]
        #[arg(long)]
        pub helper_dir: Option<String>,

        /// Print the helper command without running it
        #[arg(long)]
        pub dry_run: bool,

        /// Exit with an error when the helper fails or cannot be started
        #[arg(long)]
        pub check_status: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn policy(&self) -> DispatchPolicy {
            if self.check_status {
                DispatchPolicy::Propagate
            } else {
                DispatchPolicy::Ignore
            }
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(dir) = &self.helper_dir {
                validate_dir_path("helper_dir", dir)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_args() {
            let config = CliConfig::parse_from([
                "docker-tag-publish",
                "--check-status",
                "--helper-dir",
                "/opt/release",
                "registry.example.com/myapp:v1",
            ]);

            assert_eq!(config.image_name.as_deref(), Some("registry.example.com/myapp:v1"));
            assert_eq!(config.helper_dir.as_deref(), Some("/opt/release"));
            assert_eq!(config.policy(), DispatchPolicy::Propagate);
            assert!(!config.dry_run);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_image_name_is_optional() {
            let config = CliConfig::parse_from(["docker-tag-publish"]);
            assert!(config.image_name.is_none());
            assert_eq!(config.policy(), DispatchPolicy::Ignore);
        }

        #[test]
        fn test_arguments_after_image_name_are_ignored() {
            let config = CliConfig::parse_from([
                "docker-tag-publish",
                "registry.example.com/myapp:v1",
                "extra",
                "--unknown",
            ]);

            assert_eq!(config.image_name.as_deref(), Some("registry.example.com/myapp:v1"));
            assert_eq!(config.ignored, vec!["extra", "--unknown"]);
        }

        #[test]
        fn test_image_name_may_start_with_hyphen() {
            let config = CliConfig::parse_from(["docker-tag-publish", "-x/app:1"]);
            assert_eq!(config.image_name.as_deref(), Some("-x/app:1"));
        }

        #[test]
        fn test_blank_helper_dir_is_invalid() {
            let config = CliConfig {
                helper_dir: Some("  ".to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }
}
