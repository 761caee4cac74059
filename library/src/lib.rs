pub mod auth;
pub mod cli;
pub mod detection;
pub mod editor;
pub mod error;
pub mod model;
pub mod preset;
pub mod report;
pub mod storage;

pub use cli::run;
pub use error::QcError;
