pub mod guideline_handler;
pub mod zone_handler;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::QcError;
use crate::model::template::Template;

/// Acquire a write lock on the template, converting poison errors to QcError.
pub fn write_template(
    template: &Arc<RwLock<Template>>,
) -> Result<RwLockWriteGuard<'_, Template>, QcError> {
    template
        .write()
        .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))
}

/// Acquire a read lock on the template, converting poison errors to QcError.
pub fn read_template(
    template: &Arc<RwLock<Template>>,
) -> Result<RwLockReadGuard<'_, Template>, QcError> {
    template
        .read()
        .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))
}
