//! ATS resume scoring and feedback library

pub mod advisory;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;
pub mod suggestions;

pub use config::Config;
pub use engine::{evaluate, AtsEngine};
pub use error::{AtsScorerError, ErrorKind, Result};
pub use input::StructuredResumeData;
pub use output::report::AtsReport;
