//! Defines `SavedPrompt`, `Folder` and partial updates.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Domain;
use crate::engine::Generation;
use crate::preprocessing::{Request, StyleFlag};

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrompt {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub query: String,
    pub generated_prompt: String,
    pub llm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Vec<String>>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl SavedPrompt {
    /// A fresh record for `generation`, named after the template it used.
    pub fn from_generation<S: StyleFlag>(
        kind: Domain,
        request: &Request<S>,
        generation: &Generation<'_>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            name: generation.selected.map(|m| m.name().to_string()),
            query: request.query().to_string(),
            generated_prompt: generation.prompt.clone(),
            llm: request.model().label.clone(),
            tone: tone_of(request),
            style: style_of(request),
            timestamp: now_millis(),
            folder_id: None,
            is_favorite: false,
        }
    }

    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    /// Apply the fields set in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: PromptUpdate) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(query) = update.query {
            self.query = query;
        }
        if let Some(prompt) = update.generated_prompt {
            self.generated_prompt = prompt;
        }
        if let Some(llm) = update.llm {
            self.llm = llm;
        }
        if let Some(tone) = update.tone {
            self.tone = tone;
        }
        if let Some(style) = update.style {
            self.style = style;
        }
        if let Some(folder_id) = update.folder_id {
            self.folder_id = folder_id;
        }
        if let Some(is_favorite) = update.is_favorite {
            self.is_favorite = is_favorite;
        }
    }
}

/// Partial update of a saved prompt. `None` means "leave as is".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptUpdate {
    pub name: Option<String>,
    pub query: Option<String>,
    pub generated_prompt: Option<String>,
    pub llm: Option<String>,
    /// `Some(None)` clears the field.
    pub tone: Option<Option<String>>,
    pub style: Option<Option<Vec<String>>>,
    /// `Some(None)` moves the prompt back to the root.
    pub folder_id: Option<Option<String>>,
    pub is_favorite: Option<bool>,
}

impl PromptUpdate {
    /// Rewrites everything a fresh generation produces for an existing
    /// record; name, folder and favorite flag stay as they are.
    pub fn regenerated<S: StyleFlag>(request: &Request<S>, generation: &Generation<'_>) -> Self {
        Self {
            query: Some(request.query().to_string()),
            generated_prompt: Some(generation.prompt.clone()),
            llm: Some(request.model().label.clone()),
            tone: Some(tone_of(request)),
            style: Some(style_of(request)),
            ..Self::default()
        }
    }
}

fn tone_of<S: StyleFlag>(request: &Request<S>) -> Option<String> {
    request.tone().map(|tone| tone.as_str().to_string())
}

fn style_of<S: StyleFlag>(request: &Request<S>) -> Option<Vec<String>> {
    let styles = request.styles();
    (!styles.is_empty()).then(|| styles.to_strings())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub created_at: i64,
    #[serde(default)]
    pub order: u32,
}

impl Folder {
    pub fn new(name: impl Into<String>, parent_id: Option<String>, order: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            parent_id,
            created_at: now_millis(),
            order,
        }
    }
}
