use std::sync::{Arc, RwLock};

use crate::error::QcError;
use crate::model::template::Template;

use super::write_template;

pub struct ZoneHandler;

impl ZoneHandler {
    /// Toggle a zone's visibility. Hidden zones stay in the template; they
    /// are a display filter, not a deletion.
    pub fn set_visible(
        template: &Arc<RwLock<Template>>,
        zone_id: &str,
        visible: bool,
    ) -> Result<(), QcError> {
        let mut tmpl = write_template(template)?;
        let zone = tmpl
            .get_zone_mut(zone_id)
            .ok_or_else(|| QcError::Validation(format!("Zone with ID {} not found", zone_id)))?;
        zone.visible = visible;
        Ok(())
    }
}
