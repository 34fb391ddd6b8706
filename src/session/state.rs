use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    catalogue::template::Catalogue,
    credentials::store::CredentialSet,
    provider::{gateway::GenerationRequest, kind::Provider},
};

/// Tunable parameters shown next to the preview.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationParams {
    pub duration: f64,
    pub ease: String,
    pub delay: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            duration: 1.0,
            ease: "power2.out".to_string(),
            delay: 0.0,
            extra: BTreeMap::new(),
        }
    }
}

/// One successful generation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub code: String,
    pub params: AnimationParams,
}

impl HistoryEntry {
    /// Description shortened to `max_chars` characters, with `...` appended when cut.
    pub fn label(&self, max_chars: usize) -> String {
        if self.description.chars().count() > max_chars {
            let head: String = self.description.chars().take(max_chars).collect();
            format!("{head}...")
        } else {
            self.description.clone()
        }
    }
}

/// Why `submit` did not start a generation.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a generation is already in flight")]
    Busy,

    #[error("please enter an animation description")]
    BlankPrompt,

    #[error("please set the {} API key first", .0.display_name())]
    MissingCredential(Provider),
}

/// Editor state: the current script, the prompt, and the generation history.
///
/// The machine is either idle or generating (one request in flight). Fields are read through
/// accessors and changed only by the transition methods.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GenerationState {
    current_code: String,
    current_params: AnimationParams,
    history: Vec<HistoryEntry>,
    selected_template_id: Option<String>,
    current_provider: Provider,
    user_prompt: String,
    error: Option<String>,
    #[serde(skip)]
    default_provider: Provider,
    #[serde(skip)]
    in_flight: Option<String>, // prompt of the pending request
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new(Provider::default())
    }
}

impl GenerationState {
    /// Fresh state; `reset` returns to `default_provider`.
    pub fn new(default_provider: Provider) -> Self {
        Self {
            current_code: String::new(),
            current_params: AnimationParams::default(),
            history: Vec::new(),
            selected_template_id: None,
            current_provider: default_provider,
            user_prompt: String::new(),
            error: None,
            default_provider,
            in_flight: None,
        }
    }

    pub fn current_code(&self) -> &str {
        &self.current_code
    }

    pub fn current_params(&self) -> &AnimationParams {
        &self.current_params
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn selected_template_id(&self) -> Option<&str> {
        self.selected_template_id.as_deref()
    }

    pub fn current_provider(&self) -> Provider {
        self.current_provider
    }

    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.user_prompt = prompt.into();
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.current_provider = provider;
    }

    pub fn set_params(&mut self, params: AnimationParams) {
        self.current_params = params;
    }

    /// idle -> generating.
    ///
    /// Blank prompts and a missing credential for the current provider leave the machine idle
    /// with a user-facing error. While a request is in flight this is a no-op.
    pub fn submit(
        &mut self,
        prompt: impl Into<String>,
        credentials: &CredentialSet,
    ) -> Result<GenerationRequest, SubmitRejected> {
        if self.is_generating() {
            tracing::debug!("submit ignored: generation in flight");
            return Err(SubmitRejected::Busy);
        }

        self.user_prompt = prompt.into();
        let rejected = if self.user_prompt.trim().is_empty() {
            Some(SubmitRejected::BlankPrompt)
        } else if !credentials.has(self.current_provider) {
            Some(SubmitRejected::MissingCredential(self.current_provider))
        } else {
            None
        };
        if let Some(rejected) = rejected {
            self.error = Some(rejected.to_string());
            return Err(rejected);
        }

        self.error = None;
        self.in_flight = Some(self.user_prompt.clone());
        tracing::info!(provider = %self.current_provider, "generation started");
        Ok(GenerationRequest {
            prompt: self.user_prompt.clone(),
            provider: self.current_provider,
            credential: credentials.get(self.current_provider).to_string(),
        })
    }

    /// generating -> idle with a new script and a history entry. Returns `false` when idle.
    pub fn resolve_ok(&mut self, script: impl Into<String>, explanation: &str) -> bool {
        let Some(prompt) = self.in_flight.take() else {
            tracing::warn!("resolve_ok without a pending generation");
            return false;
        };

        self.current_code = script.into();
        self.error = None;

        let now = Utc::now();
        let timestamp = self
            .history
            .last()
            .map_or(now, |last| last.timestamp.max(now));
        self.history.push(HistoryEntry {
            id: Uuid::new_v4(),
            timestamp,
            description: prompt,
            code: self.current_code.clone(),
            params: self.current_params.clone(),
        });
        tracing::info!(explanation, history_len = self.history.len(), "generation finished");
        true
    }

    /// generating -> idle with an error; the current script is kept. Returns `false` when idle.
    pub fn resolve_error(&mut self, message: impl Into<String>) -> bool {
        if self.in_flight.take().is_none() {
            tracing::warn!("resolve_error without a pending generation");
            return false;
        }
        let message = message.into();
        tracing::info!(error = %message, "generation failed");
        self.error = Some(message);
        true
    }

    /// Apply a catalogue template. Unknown ids are ignored without an error.
    pub fn select_template(&mut self, catalogue: &Catalogue, id: &str) -> bool {
        match catalogue.by_id(id) {
            Some(t) => {
                self.current_code = t.code.clone();
                self.selected_template_id = Some(t.id.clone());
                true
            }
            None => {
                tracing::debug!(id, "template not found");
                false
            }
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Most recent prompts first, at most `limit`.
    pub fn recent_prompts(&self, limit: usize) -> Vec<&str> {
        self.history
            .iter()
            .rev()
            .take(limit)
            .map(|h| h.description.as_str())
            .collect()
    }

    /// Copy a history entry's description back into the prompt.
    pub fn recall(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(entry) => {
                self.user_prompt = entry.description.clone();
                true
            }
            None => false,
        }
    }

    /// Back to the initial state. A pending request is dropped: its late result is ignored.
    pub fn reset(&mut self) {
        *self = Self::new(self.default_provider);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
