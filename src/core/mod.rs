pub mod command;
pub mod parser;
pub mod publish;

pub use crate::domain::model::{ImageReference, TagCommand};
pub use crate::domain::ports::{DispatchOutcome, Dispatcher};
pub use crate::utils::error::Result;
