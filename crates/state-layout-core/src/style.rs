//! Commitment style profiles.
//!
//! A [`StyleProfile`] names a hypothetical commitment scheme and supplies the
//! hash size used for every node of its tree. Profiles are collected in a
//! [`StyleRegistry`], which is assembled once at startup and only read
//! afterwards.
//!
//! # Example
//!
//! ```
//! # use state_layout_core::style::StyleRegistry;
//! let registry = StyleRegistry::builtin();
//! let zama = registry.resolve("zama").unwrap();
//! assert_eq!(zama.hash_bytes(), 48);
//! assert!(registry.resolve("unknown").is_err());
//! ```

use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{InputIssue, LayoutError, Result};

/// Key of the profile used when none is requested.
pub const DEFAULT_STYLE: &str = "aztec";

/// A named hash-size profile.
///
/// The note is free-text guidance carried along for display only; it never
/// influences a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStyleProfile", rename_all(serialize = "camelCase"))]
pub struct StyleProfile {
    key: String,
    name: String,
    hash_bytes: u32,
    note: String,
}

impl StyleProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] if `key` is empty or
    /// `hash_bytes` is zero.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        hash_bytes: u32,
        note: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(InputIssue::EmptyStyleKey.into());
        }
        if hash_bytes == 0 {
            return Err(InputIssue::ZeroHashBytes(key).into());
        }

        Ok(Self {
            key,
            name: name.into(),
            hash_bytes,
            note: note.into(),
        })
    }

    /// Returns the lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size of one node hash in bytes.
    pub fn hash_bytes(&self) -> u32 {
        self.hash_bytes
    }

    /// Returns the descriptive note.
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Unvalidated profile as it appears in configuration files.
#[derive(Deserialize)]
struct RawStyleProfile {
    key: String,
    #[serde(default)]
    name: Option<String>,
    hash_bytes: u32,
    #[serde(default)]
    note: String,
}

impl TryFrom<RawStyleProfile> for StyleProfile {
    type Error = LayoutError;

    fn try_from(raw: RawStyleProfile) -> Result<Self> {
        let name = raw.name.unwrap_or_else(|| raw.key.clone());
        StyleProfile::new(raw.key, name, raw.hash_bytes, raw.note)
    }
}

/// Read-only lookup table of style profiles, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    profiles: IndexMap<String, StyleProfile>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `aztec`, `zama`, and
    /// `soundness` profiles.
    pub fn builtin() -> Self {
        let profiles = [
            (
                "aztec",
                "Aztec-style privacy rollup",
                32,
                "Optimised for zk commitments over encrypted state roots.",
            ),
            (
                "zama",
                "Zama-style FHE compute stack",
                48,
                "FHE-heavy designs often tolerate slightly larger commitments.",
            ),
            (
                "soundness",
                "Soundness-first protocol lab",
                32,
                "Prefers simple, standard-sized commitments for verifiable semantics.",
            ),
        ];

        profiles
            .into_iter()
            .fold(Self::new(), |registry, (key, name, hash_bytes, note)| {
                registry.with_profile(StyleProfile {
                    key: key.to_string(),
                    name: name.to_string(),
                    hash_bytes,
                    note: note.to_string(),
                })
            })
    }

    /// Adds a profile, replacing any existing profile with the same key.
    pub fn with_profile(mut self, profile: StyleProfile) -> Self {
        let key = profile.key().to_string();
        if self.profiles.insert(key.clone(), profile).is_some() {
            warn!(style = key; "Style profile replaced");
        } else {
            debug!(style = key; "Style profile registered");
        }
        self
    }

    /// Adds every profile in `profiles`, in order.
    pub fn with_profiles(self, profiles: impl IntoIterator<Item = StyleProfile>) -> Self {
        profiles.into_iter().fold(self, Self::with_profile)
    }

    /// Looks up a profile by key.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] if no profile is registered
    /// under `key`.
    pub fn resolve(&self, key: &str) -> Result<&StyleProfile> {
        self.profiles
            .get(key)
            .ok_or_else(|| InputIssue::UnknownStyle(key.to_string()).into())
    }

    /// Returns the profile registered under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&StyleProfile> {
        self.profiles.get(key)
    }

    /// Iterates over the profiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleProfile> {
        self.profiles.values()
    }

    /// Iterates over the registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles() {
        let registry = StyleRegistry::builtin();

        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, ["aztec", "zama", "soundness"]);

        assert_eq!(registry.resolve("aztec").unwrap().hash_bytes(), 32);
        assert_eq!(registry.resolve("zama").unwrap().hash_bytes(), 48);
        assert_eq!(registry.resolve("soundness").unwrap().hash_bytes(), 32);
        assert!(registry.get(DEFAULT_STYLE).is_some());
    }

    #[test]
    fn test_unknown_style() {
        let registry = StyleRegistry::builtin();
        let err = registry.resolve("unknown").unwrap_err();
        assert_eq!(err.issue(), &InputIssue::UnknownStyle("unknown".to_string()));
    }

    #[test]
    fn test_new_rejects_invalid_profiles() {
        let err = StyleProfile::new("", "Empty", 32, "").unwrap_err();
        assert_eq!(err.issue(), &InputIssue::EmptyStyleKey);

        let err = StyleProfile::new("tiny", "Tiny", 0, "").unwrap_err();
        assert_eq!(err.issue(), &InputIssue::ZeroHashBytes("tiny".to_string()));
    }

    #[test]
    fn test_with_profile_replaces_existing_key() {
        let custom = StyleProfile::new("zama", "Zama, wide hashes", 64, "").unwrap();
        let registry = StyleRegistry::builtin().with_profile(custom);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.resolve("zama").unwrap().hash_bytes(), 64);
        // Replacement keeps the original position
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, ["aztec", "zama", "soundness"]);
    }

    #[test]
    fn test_with_profiles_appends_new_keys() {
        let extra = [
            StyleProfile::new("poseidon", "Poseidon sponge", 32, "Field-native").unwrap(),
            StyleProfile::new("sha512", "SHA-512", 64, "").unwrap(),
        ];
        let registry = StyleRegistry::new().with_profiles(extra);

        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, ["poseidon", "sha512"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_raw_profile_defaults_name_to_key() {
        let raw = RawStyleProfile {
            key: "blake3".to_string(),
            name: None,
            hash_bytes: 32,
            note: String::new(),
        };
        let profile = StyleProfile::try_from(raw).unwrap();
        assert_eq!(profile.name(), "blake3");
    }
}
