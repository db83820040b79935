//! Report shapes, presentation structuring and formatters

pub mod formatter;
pub mod report;
pub mod structurer;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::AtsReport;
