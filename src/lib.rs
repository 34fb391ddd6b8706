//! `animator` turns natural-language effect descriptions into small GSAP animation scripts.
//!
//! The crate is the core of a prompt-driven animation editor:
//!
//! 1. **Resolve**: a prompt is matched against bilingual keyword groups
//!    ([`classify`] / [`resolve`]) to pick one canned [`Tween`]
//! 2. **Generate**: [`GenerationState`] guards submission, a [`ProviderGateway`] answers
//!    (the shipped [`MockGateway`] simulates latency and delegates to the resolver) and the
//!    result lands in the current script plus the history
//! 3. **Browse**: the static [`Catalogue`] offers ready-made templates
//! 4. **Export**: [`format`] wraps a script as raw JS, an HTML page or a React component
//!
//! Provider credentials live in a [`CredentialSet`] persisted through a [`KeyValueStorage`].
#![forbid(unsafe_code)]

mod animation;
mod catalogue;
mod credentials;
mod export;
mod foundation;
mod provider;
mod resolve;
mod session;

pub use animation::ease::{DEFAULT_BACK_OVERSHOOT, Ease};
pub use animation::tween::{Prop, TARGET_ID, Target, Tween};
pub use catalogue::template::{AnimationTemplate, Catalogue};
pub use credentials::store::{
    CREDENTIALS_KEY, CredentialSet, FileStorage, KeyValueStorage, MemoryStorage,
};
pub use export::format::{COMPONENT_TARGET_BINDING, ExportMode, format};
pub use foundation::config::{AnimatorConfig, DEFAULT_LATENCY_MS};
pub use foundation::error::{AnimatorError, AnimatorResult};
pub use provider::gateway::{
    Generated, GenerationRequest, MockGateway, ProviderError, ProviderGateway, format_prompt,
};
pub use provider::kind::Provider;
pub use resolve::snippet::{Effect, classify, resolve};
pub use session::driver::{GenerateOutcome, generate};
pub use session::state::{AnimationParams, GenerationState, HistoryEntry, SubmitRejected};
