use std::sync::{Arc, Mutex, RwLock};

use crate::editor::handlers::guideline_handler::GuidelineHandler;
use crate::editor::handlers::zone_handler::ZoneHandler;
use crate::editor::handlers::{read_template, write_template};
use crate::error::QcError;
use crate::model::geometry::{CanvasSize, RULER_MARGIN_PX};
use crate::model::template::{AspectRatio, GuidelineAxis, Template};
use crate::preset;

/// The guideline drag currently in progress. Only the recorded guideline is
/// moved by pointer updates; earlier guidelines are never touched.
struct ActiveDrag {
    axis: GuidelineAxis,
    guideline_id: String,
}

/// Edits the active safe-zone template on behalf of the UI.
///
/// All mutation goes through the handlers; the service adds the drag state
/// machine and the two-step import protocol on top.
pub struct TemplateService {
    template: Arc<RwLock<Template>>,
    drag: Mutex<Option<ActiveDrag>>,
}

impl TemplateService {
    pub fn new() -> Self {
        Self::with_template(Template::new())
    }

    pub fn with_template(template: Template) -> Self {
        Self {
            template: Arc::new(RwLock::new(template)),
            drag: Mutex::new(None),
        }
    }

    pub fn template(&self) -> Arc<RwLock<Template>> {
        Arc::clone(&self.template)
    }

    pub fn snapshot(&self) -> Result<Template, QcError> {
        Ok(read_template(&self.template)?.clone())
    }

    pub fn set_name(&self, name: &str) -> Result<(), QcError> {
        let mut tmpl = write_template(&self.template)?;
        tmpl.name = name.to_string();
        Ok(())
    }

    pub fn set_aspect_ratio(&self, aspect_ratio: AspectRatio) -> Result<(), QcError> {
        let mut tmpl = write_template(&self.template)?;
        tmpl.aspect_ratio = aspect_ratio;
        Ok(())
    }

    pub fn set_platform_requirements(&self, requirements: &str) -> Result<(), QcError> {
        let mut tmpl = write_template(&self.template)?;
        tmpl.platform_requirements = requirements.to_string();
        Ok(())
    }

    pub fn set_zone_visibility(&self, zone_id: &str, visible: bool) -> Result<(), QcError> {
        ZoneHandler::set_visible(&self.template, zone_id, visible)
    }

    pub fn remove_guideline(&self, guideline_id: &str) -> Result<(), QcError> {
        GuidelineHandler::remove_guideline(&self.template, guideline_id)
    }

    pub fn clear_guidelines(&self) -> Result<(), QcError> {
        GuidelineHandler::clear_guidelines(&self.template)
    }

    // --- Guideline drag protocol ---

    /// Start a guideline drag from a pointer-down at `(x, y)` on the canvas.
    ///
    /// A press within the ruler margin of the top edge creates a horizontal
    /// guideline; within the margin of the left edge, a vertical one. The
    /// guideline is appended immediately at a provisional position and its ID
    /// is returned. Presses elsewhere, or while a drag is already active,
    /// are a no-op (`Ok(None)`).
    pub fn begin_drag(
        &self,
        x: f64,
        y: f64,
        canvas: CanvasSize,
    ) -> Result<Option<String>, QcError> {
        if canvas.is_degenerate() {
            return Err(QcError::ZeroExtent);
        }

        let mut drag = self.lock_drag()?;
        if drag.is_some() {
            // Concurrent multi-guideline dragging is unsupported.
            return Ok(None);
        }

        let (axis, extent) = if y <= RULER_MARGIN_PX {
            (GuidelineAxis::Horizontal, canvas.height)
        } else if x <= RULER_MARGIN_PX {
            (GuidelineAxis::Vertical, canvas.width)
        } else {
            return Ok(None);
        };

        let id =
            GuidelineHandler::add_guideline(&self.template, axis, RULER_MARGIN_PX, extent)?;
        *drag = Some(ActiveDrag {
            axis,
            guideline_id: id.clone(),
        });
        Ok(Some(id))
    }

    /// Update the active drag from a pointer-move at `(x, y)`. Only the
    /// guideline created by the current gesture is moved. Returns `false`
    /// when no drag is active.
    pub fn update_drag(&self, x: f64, y: f64, canvas: CanvasSize) -> Result<bool, QcError> {
        if canvas.is_degenerate() {
            return Err(QcError::ZeroExtent);
        }

        let drag = self.lock_drag()?;
        let Some(active) = drag.as_ref() else {
            return Ok(false);
        };

        let (position, extent) = match active.axis {
            GuidelineAxis::Horizontal => (y, canvas.height),
            GuidelineAxis::Vertical => (x, canvas.width),
        };
        GuidelineHandler::move_guideline(&self.template, &active.guideline_id, position, extent)?;
        Ok(true)
    }

    /// End the active drag, freezing the guideline's label at its last
    /// computed value. Returns the ID of the guideline that was being
    /// dragged, if any.
    pub fn end_drag(&self) -> Result<Option<String>, QcError> {
        let mut drag = self.lock_drag()?;
        Ok(drag.take().map(|d| d.guideline_id))
    }

    // --- Presets, reset, import/export ---

    /// Apply a platform preset: its aspect ratio, zone set, and requirement
    /// text. An unknown or absent key applies the default broadcast pair.
    pub fn apply_preset(&self, key: Option<&str>) -> Result<(), QcError> {
        let (aspect_ratio, zones) = preset::resolve(key);
        let requirements = key
            .and_then(preset::Platform::from_key)
            .map(|p| {
                p.requirements()
                    .iter()
                    .map(|line| format!("• {}", line))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        let mut tmpl = write_template(&self.template)?;
        tmpl.aspect_ratio = aspect_ratio;
        tmpl.safe_zones = zones;
        tmpl.platform_requirements = requirements;
        Ok(())
    }

    /// Reset the canvas: default zones back, guidelines and requirements
    /// cleared. Name and aspect ratio are kept.
    pub fn reset(&self) -> Result<(), QcError> {
        let mut tmpl = write_template(&self.template)?;
        tmpl.safe_zones = Template::default_safe_zones();
        tmpl.guidelines.clear();
        tmpl.platform_requirements.clear();
        drop(tmpl);

        if let Ok(mut drag) = self.drag.lock() {
            *drag = None;
        }
        Ok(())
    }

    /// Serialize the active template to the interchange format.
    pub fn export(&self) -> Result<String, QcError> {
        read_template(&self.template)?.save()
    }

    /// Parse an uploaded template document into a candidate for preview.
    /// The active template is not touched; committing the candidate is a
    /// separate, explicit `apply_import` call.
    pub fn preview_import(&self, json_str: &str) -> Result<Template, QcError> {
        match Template::load(json_str) {
            Ok(candidate) => Ok(candidate),
            Err(e) => {
                log::warn!("Rejected template import: {}", e);
                Err(e)
            }
        }
    }

    /// Commit a previewed candidate as the active template.
    pub fn apply_import(&self, candidate: Template) -> Result<(), QcError> {
        log::info!("Applying imported template '{}'", candidate.name);
        let mut tmpl = write_template(&self.template)?;
        *tmpl = candidate;
        Ok(())
    }

    fn lock_drag(&self) -> Result<std::sync::MutexGuard<'_, Option<ActiveDrag>>, QcError> {
        self.drag
            .lock()
            .map_err(|_| QcError::Runtime("Lock Poisoned".to_string()))
    }
}

impl Default for TemplateService {
    fn default() -> Self {
        Self::new()
    }
}
