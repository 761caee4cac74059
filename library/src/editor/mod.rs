//! Editor services - public API for UI interaction.
//!
//! This module contains the services a front end should use to edit the
//! active safe-zone template.

pub mod handlers;
pub mod template_service;

// Re-exports for convenient access
pub use template_service::TemplateService;
