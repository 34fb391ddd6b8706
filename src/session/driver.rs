use crate::{
    credentials::store::CredentialSet,
    provider::gateway::ProviderGateway,
    session::state::{GenerationState, SubmitRejected},
};

/// How a `generate` call ended. The state already reflects the outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A new script was produced; carries the provider's explanation.
    Generated { explanation: String },
    /// The provider failed; carries the message now stored as the state's error.
    Failed { message: String },
    /// `submit` refused to start.
    Rejected(SubmitRejected),
}

/// Run one full generation: submit, call the gateway, resolve.
#[tracing::instrument(skip(state, credentials, gateway))]
pub async fn generate<G>(
    state: &mut GenerationState,
    prompt: &str,
    credentials: &CredentialSet,
    gateway: &G,
) -> GenerateOutcome
where
    G: ProviderGateway + ?Sized,
{
    let req = match state.submit(prompt, credentials) {
        Ok(req) => req,
        Err(rejected) => return GenerateOutcome::Rejected(rejected),
    };

    match gateway.request(&req).await {
        Ok(out) => {
            state.resolve_ok(out.script, &out.explanation);
            GenerateOutcome::Generated {
                explanation: out.explanation,
            }
        }
        Err(e) => {
            let message = e.to_string();
            state.resolve_error(message.clone());
            GenerateOutcome::Failed { message }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
