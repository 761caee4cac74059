use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QcError;
use crate::model::template::Template;
use crate::storage::{templates_key, Storage};

/// A template persisted in a user's library. The template fields stay flat
/// so a saved entry is itself a valid interchange document.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub template: Template,
}

/// Per-user saved-template lists on top of the key-value store.
pub struct TemplateRepository {
    storage: Arc<dyn Storage>,
}

impl TemplateRepository {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn list(&self, user_id: &str) -> Result<Vec<SavedTemplate>, QcError> {
        let key = templates_key(user_id);
        match self.storage.get(&key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Save a template into the user's library, returning the saved entry.
    pub fn save(&self, user_id: &str, template: Template) -> Result<SavedTemplate, QcError> {
        let mut templates = self.list(user_id)?;
        let saved = SavedTemplate {
            id: Uuid::new_v4().to_string(),
            created_at: Some(Utc::now()),
            template,
        };
        templates.push(saved.clone());
        self.persist(user_id, &templates)?;
        log::info!("Saved template '{}' for user {}", saved.template.name, user_id);
        Ok(saved)
    }

    /// Delete a saved template by ID. Unknown IDs are a no-op, matching the
    /// filter-and-rewrite behavior of the account page.
    pub fn delete(&self, user_id: &str, template_id: &str) -> Result<(), QcError> {
        let mut templates = self.list(user_id)?;
        templates.retain(|t| t.id != template_id);
        self.persist(user_id, &templates)
    }

    fn persist(&self, user_id: &str, templates: &[SavedTemplate]) -> Result<(), QcError> {
        let json = serde_json::to_string(templates)?;
        self.storage.set(&templates_key(user_id), &json)
    }
}
