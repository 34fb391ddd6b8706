use super::*;
use crate::resolve::snippet::{Effect, classify};

fn req(prompt: &str, provider: Provider, credential: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: prompt.to_string(),
        provider,
        credential: credential.to_string(),
    }
}

#[test]
fn template_itself_carries_no_keywords() {
    assert_eq!(classify(&format_prompt("")), Effect::RiseIn);
}

#[test]
fn template_embeds_prompt_once() {
    let p = format_prompt("bounce twice");
    assert!(p.contains("\n\nbounce twice\n\n"));
    assert!(p.contains("executable"));
}

#[test]
fn debug_redacts_credential() {
    let s = format!("{:?}", req("x", Provider::OpenAi, "sk-secret"));
    assert!(!s.contains("sk-secret"));
    assert!(s.contains("redacted"));
}

#[test]
fn missing_credential_message_names_provider() {
    let err = ProviderError::MissingCredential(Provider::Doubao);
    assert_eq!(err.to_string(), "please set the Doubao API key first");
    let wrapped: AnimatorError = err.into();
    assert!(matches!(wrapped, AnimatorError::Provider(_)));
}

#[tokio::test(start_paused = true)]
async fn missing_credential_returns_without_latency() {
    let gw = MockGateway::default();
    let start = tokio::time::Instant::now();
    let err = gw.request(&req("fade in", Provider::DeepSeek, "")).await.unwrap_err();
    assert_eq!(err, ProviderError::MissingCredential(Provider::DeepSeek));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn success_waits_for_latency_and_resolves() {
    let gw = MockGateway::default();
    let start = tokio::time::Instant::now();
    let out = gw.request(&req("rotate 360", Provider::Qianwen, "k")).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1500));
    assert!(out.script.contains("rotation: 360"));
    assert_eq!(out.explanation, "animation code generated by the Qianwen model");
}

#[tokio::test(start_paused = true)]
async fn all_providers_produce_identical_scripts() {
    let gw = MockGateway::new(Duration::from_millis(10));
    let mut scripts = Vec::new();
    for p in Provider::ALL {
        let out = gw.request(&req("slide from the left", p, "k")).await.unwrap();
        assert!(out.explanation.contains(p.display_name()));
        scripts.push(out.script);
    }
    assert!(scripts.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn from_config_uses_configured_latency() {
    let cfg = AnimatorConfig {
        latency_ms: 42,
        ..AnimatorConfig::default()
    };
    assert_eq!(MockGateway::from_config(&cfg).latency(), Duration::from_millis(42));
}
