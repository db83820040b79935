//! Input handling module
//! Loads upstream resume JSON and normalizes it into the typed model

pub mod file_detector;
pub mod lenient;
pub mod manager;
pub mod resume;

pub use manager::InputManager;
pub use resume::StructuredResumeData;
