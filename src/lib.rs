pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::ProcessDispatcher;
pub use crate::core::parser::parse_image_reference;
pub use crate::core::publish::{DispatchPolicy, PublishEngine, PublishReport};
pub use crate::domain::model::{ImageReference, TagCommand};
pub use crate::utils::error::{PublishError, Result};
