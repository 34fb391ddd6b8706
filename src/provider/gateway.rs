use std::{fmt, time::Duration};

use async_trait::async_trait;

use crate::{
    foundation::{
        config::{AnimatorConfig, DEFAULT_LATENCY_MS},
        error::{AnimatorError, AnimatorResult},
    },
    provider::kind::Provider,
    resolve::snippet::resolve,
};

const PROMPT_TEMPLATE: &str = "\
Generate GSAP animation code for the following description:

{userPrompt}

Return only executable GSAP code, with no explanation or any other content. \
The code must apply directly to the HTML element with id \"animationTarget\".
";

/// Wrap a user description in the instruction template sent to providers.
pub fn format_prompt(user_prompt: &str) -> String {
    PROMPT_TEMPLATE.replacen("{userPrompt}", user_prompt, 1)
}

/// One call to a provider.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub provider: Provider,
    pub credential: String,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("prompt", &self.prompt)
            .field("provider", &self.provider)
            .field("credential", &"<redacted>")
            .finish()
    }
}

/// A provider's successful answer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Generated {
    pub script: String,
    pub explanation: String,
}

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ProviderError {
    #[error("please set the {} API key first", .0.display_name())]
    MissingCredential(Provider),

    #[error("{0}")]
    Failed(String),
}

impl From<ProviderError> for AnimatorError {
    fn from(err: ProviderError) -> Self {
        Self::provider(err.to_string())
    }
}

/// Boundary to a text-generation backend. A real network client can replace [`MockGateway`]
/// without touching the state machine.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    async fn request(&self, req: &GenerationRequest) -> Result<Generated, ProviderError>;
}

type Handler = fn(&str, Provider) -> AnimatorResult<Generated>;

fn handler_for(provider: Provider) -> Handler {
    match provider {
        Provider::Qianwen | Provider::OpenAi | Provider::Doubao | Provider::DeepSeek => {
            keyword_handler
        }
    }
}

fn keyword_handler(prompt: &str, provider: Provider) -> AnimatorResult<Generated> {
    let script = resolve(prompt);
    if script.trim().is_empty() {
        return Err(AnimatorError::provider("resolver produced an empty script"));
    }
    Ok(Generated {
        script,
        explanation: format!(
            "animation code generated by the {} model",
            provider.display_name()
        ),
    })
}

/// Stub gateway: waits a fixed latency, then answers from the keyword resolver.
#[derive(Clone, Debug)]
pub struct MockGateway {
    latency: Duration,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LATENCY_MS))
    }
}

impl MockGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(cfg: &AnimatorConfig) -> Self {
        Self::new(cfg.latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl ProviderGateway for MockGateway {
    #[tracing::instrument(skip(self, req), fields(provider = %req.provider))]
    async fn request(&self, req: &GenerationRequest) -> Result<Generated, ProviderError> {
        if req.credential.is_empty() {
            tracing::debug!("no credential, skipping provider call");
            return Err(ProviderError::MissingCredential(req.provider));
        }

        tokio::time::sleep(self.latency).await;

        let wrapped = format_prompt(&req.prompt);
        let out = handler_for(req.provider)(&wrapped, req.provider).map_err(|e| {
            tracing::warn!(error = %e, "mock provider failed");
            ProviderError::Failed(format!("error generating animation code: {e}"))
        })?;
        tracing::debug!(script_len = out.script.len(), "mock provider answered");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/gateway.rs"]
mod tests;
