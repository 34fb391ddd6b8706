use super::*;

#[test]
fn default_is_first_provider() {
    assert_eq!(Provider::default(), Provider::Qianwen);
}

#[test]
fn serde_uses_wire_ids() {
    for p in Provider::ALL {
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, format!("\"{}\"", p.id()));
        let back: Provider = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAi);
    assert_eq!(" deepseek ".parse::<Provider>().unwrap(), Provider::DeepSeek);
    assert!("gemini".parse::<Provider>().is_err());
}

#[test]
fn display_uses_user_facing_name() {
    assert_eq!(Provider::OpenAi.to_string(), "OpenAI");
    assert_eq!(Provider::Doubao.display_name(), "Doubao");
}
