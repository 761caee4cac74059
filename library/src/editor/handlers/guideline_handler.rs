use std::sync::{Arc, RwLock};

use crate::error::QcError;
use crate::model::geometry::pixel_to_percent;
use crate::model::template::{Guideline, GuidelineAxis, Template};

use super::write_template;

pub struct GuidelineHandler;

impl GuidelineHandler {
    /// Append a new guideline at a pixel offset along its axis. The label is
    /// computed from the axis extent at creation time.
    pub fn add_guideline(
        template: &Arc<RwLock<Template>>,
        axis: GuidelineAxis,
        position: f64,
        axis_extent_px: u32,
    ) -> Result<String, QcError> {
        let label = format!("{}%", pixel_to_percent(position, axis_extent_px)?);
        let guideline = Guideline::new(axis, position, label);
        let id = guideline.id.clone();

        let mut tmpl = write_template(template)?;
        tmpl.guidelines.push(guideline);
        Ok(id)
    }

    /// Move an existing guideline to a new pixel offset, refreshing its label
    /// against the given axis extent. Guidelines other than `guideline_id`
    /// are never touched.
    pub fn move_guideline(
        template: &Arc<RwLock<Template>>,
        guideline_id: &str,
        position: f64,
        axis_extent_px: u32,
    ) -> Result<(), QcError> {
        let label = format!("{}%", pixel_to_percent(position, axis_extent_px)?);

        let mut tmpl = write_template(template)?;
        let guideline = tmpl
            .guidelines
            .iter_mut()
            .find(|g| g.id == guideline_id)
            .ok_or_else(|| {
                QcError::Validation(format!("Guideline with ID {} not found", guideline_id))
            })?;
        guideline.position = position;
        guideline.label = label;
        Ok(())
    }

    /// Remove a guideline by ID.
    pub fn remove_guideline(
        template: &Arc<RwLock<Template>>,
        guideline_id: &str,
    ) -> Result<(), QcError> {
        let mut tmpl = write_template(template)?;
        tmpl.remove_guideline(guideline_id).ok_or_else(|| {
            QcError::Validation(format!("Guideline with ID {} not found", guideline_id))
        })?;
        Ok(())
    }

    /// Remove all guidelines (canvas reset).
    pub fn clear_guidelines(template: &Arc<RwLock<Template>>) -> Result<(), QcError> {
        let mut tmpl = write_template(template)?;
        tmpl.guidelines.clear();
        Ok(())
    }
}
