use std::{fmt, str::FromStr};

use crate::foundation::error::AnimatorError;

/// The four text-generation backends the editor knows about.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Qianwen,
    #[serde(rename = "openai")]
    OpenAi,
    Doubao,
    #[serde(rename = "deepseek")]
    DeepSeek,
}

impl Provider {
    pub const ALL: [Self; 4] = [Self::Qianwen, Self::OpenAi, Self::Doubao, Self::DeepSeek];

    /// Wire identifier (credential blob keys, CLI values).
    pub fn id(self) -> &'static str {
        match self {
            Self::Qianwen => "qianwen",
            Self::OpenAi => "openai",
            Self::Doubao => "doubao",
            Self::DeepSeek => "deepseek",
        }
    }

    /// Name shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Qianwen => "Qianwen",
            Self::OpenAi => "OpenAI",
            Self::Doubao => "Doubao",
            Self::DeepSeek => "DeepSeek",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| AnimatorError::validation(format!("unknown provider '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/kind.rs"]
mod tests;
