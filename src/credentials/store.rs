use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    foundation::error::{AnimatorError, AnimatorResult},
    provider::kind::Provider,
};

/// Storage key the credential blob lives under.
pub const CREDENTIALS_KEY: &str = "ai_animator_api_keys";

/// A string key/value store with browser local-storage semantics.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> AnimatorResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AnimatorResult<()>;
}

/// In-memory storage with an optional quota on the total stored bytes (keys + values).
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AnimatorResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AnimatorResult<()> {
        if let Some(quota) = self.quota_bytes {
            let needed = self.used_bytes_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(AnimatorError::storage(format!(
                    "quota exceeded writing '{key}' ({needed} > {quota} bytes)"
                )));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys in one JSON object file. A missing file reads as empty.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AnimatorResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) if s.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(s) => serde_json::from_str(&s).map_err(|e| {
                AnimatorError::storage(format!("parse '{}': {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AnimatorError::storage(format!(
                "read '{}': {e}",
                self.path.display()
            ))),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> AnimatorResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> AnimatorResult<()> {
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());
        let body = serde_json::to_string_pretty(&items)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AnimatorError::storage(format!("create dir '{}': {e}", parent.display()))
            })?;
        }
        fs::write(&self.path, body)
            .map_err(|e| AnimatorError::storage(format!("write '{}': {e}", self.path.display())))
    }
}

/// One secret per provider. Always holds exactly four entries; unset is the empty string.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "BTreeMap<Provider, String>", into = "BTreeMap<Provider, String>")]
pub struct CredentialSet {
    keys: BTreeMap<Provider, String>,
}

impl Default for CredentialSet {
    fn default() -> Self {
        Self {
            keys: Provider::ALL.into_iter().map(|p| (p, String::new())).collect(),
        }
    }
}

impl From<BTreeMap<Provider, String>> for CredentialSet {
    fn from(mut keys: BTreeMap<Provider, String>) -> Self {
        for p in Provider::ALL {
            keys.entry(p).or_default();
        }
        Self { keys }
    }
}

impl From<CredentialSet> for BTreeMap<Provider, String> {
    fn from(set: CredentialSet) -> Self {
        set.keys
    }
}

impl std::fmt::Debug for CredentialSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.keys
                    .iter()
                    .map(|(p, k)| (p.id(), if k.is_empty() { "" } else { "<set>" })),
            )
            .finish()
    }
}

impl CredentialSet {
    pub fn get(&self, provider: Provider) -> &str {
        self.keys.get(&provider).map_or("", String::as_str)
    }

    pub fn set(&mut self, provider: Provider, credential: impl Into<String>) {
        self.keys.insert(provider, credential.into());
    }

    pub fn has(&self, provider: Provider) -> bool {
        !self.get(provider).is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Load the blob, falling back to all-empty credentials when it is missing or unreadable.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        let raw = match storage.get_item(CREDENTIALS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read saved API keys");
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse saved API keys");
                Self::default()
            }
        }
    }

    /// Overwrite the stored blob with this set.
    pub fn save(&self, storage: &mut dyn KeyValueStorage) -> AnimatorResult<()> {
        let blob = serde_json::to_string(self)
            .map_err(|e| AnimatorError::storage(format!("serialize API keys: {e}")))?;
        storage.set_item(CREDENTIALS_KEY, &blob)?;
        tracing::debug!("saved API keys");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/credentials/store.rs"]
mod tests;
