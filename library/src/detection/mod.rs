pub mod findings;
pub mod runner;

pub use findings::{sample_findings, timecode, Finding, Severity, Summary};
pub use runner::DetectionRunner;
