//! Language packs and direction-aware string lookup
//!
//! Built-in packs are embedded at compile time from `lang/<code>.json`.
//! Lookups fall back to the English pack, then to the key itself, so a
//! missing translation never breaks rendering.

use log::{debug, warn};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::Path;
use std::sync::Arc;

use crate::error::{FolderError, Result};

#[derive(RustEmbed)]
#[folder = "lang/"]
#[include = "*.json"]
struct BuiltinPacks;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Writing direction of a language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

#[derive(Debug, Deserialize)]
struct PackFile {
    direction: Option<TextDirection>,
    strings: BTreeMap<String, String>,
}

/// A loaded language pack
///
/// Cheap to clone; strings are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lang {
    code: String,
    direction: TextDirection,
    strings: Arc<HashMap<String, String>>,
    fallback: Arc<HashMap<String, String>>,
    fingerprint: u64,
}

impl Lang {
    /// Load a built-in language pack by code (e.g. "en", "ar")
    pub fn load(code: &str) -> Result<Self> {
        let pack = builtin_pack(code)?;
        let fallback = if code == DEFAULT_LANGUAGE {
            pack.strings.clone()
        } else {
            builtin_pack(DEFAULT_LANGUAGE)?.strings
        };
        Ok(Self::build(
            code,
            pack.direction.unwrap_or_default(),
            pack.strings,
            fallback,
        ))
    }

    /// Load a built-in pack, merging user overrides from a JSON file on top.
    ///
    /// The override file uses the same format as the built-in packs; a
    /// missing file leaves the pack untouched.
    pub fn load_with_overrides(code: &str, overrides: &Path) -> Result<Self> {
        let base = Self::load(code)?;
        if !overrides.exists() {
            return Ok(base);
        }
        let file: PackFile = config::load_json_file(overrides)?;
        debug!(
            "Applying {} string overrides from {}",
            file.strings.len(),
            overrides.display()
        );
        let mut strings: BTreeMap<String, String> = base
            .strings
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        strings.extend(file.strings);
        let fallback = base.fallback.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let direction = file.direction.unwrap_or(base.direction);
        Ok(Self::build(code, direction, strings, fallback))
    }

    /// Load the requested pack, falling back to English when it is unknown
    pub fn load_or_default(code: &str) -> Self {
        match Self::load(code) {
            Ok(lang) => lang,
            Err(e) => {
                warn!("Failed to load language pack '{}': {}, using English", code, e);
                Self::load(DEFAULT_LANGUAGE).unwrap_or_else(|_| Self::empty())
            }
        }
    }

    /// Build a pack from explicit strings (used by tests and tools)
    pub fn from_strings<I, K, V>(code: &str, direction: TextDirection, strings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let strings: BTreeMap<String, String> = strings
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::build(code, direction, strings, BTreeMap::new())
    }

    /// A pack with no strings; every lookup returns its key
    pub fn empty() -> Self {
        Self::build(DEFAULT_LANGUAGE, TextDirection::Ltr, BTreeMap::new(), BTreeMap::new())
    }

    fn build(
        code: &str,
        direction: TextDirection,
        strings: BTreeMap<String, String>,
        fallback: BTreeMap<String, String>,
    ) -> Self {
        let mut hasher = DefaultHasher::new();
        code.hash(&mut hasher);
        direction.hash(&mut hasher);
        strings.hash(&mut hasher);
        Self {
            code: code.to_string(),
            direction,
            strings: Arc::new(strings.into_iter().collect()),
            fallback: Arc::new(fallback.into_iter().collect()),
            fingerprint: hasher.finish(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl
    }

    /// Stable hash of the pack contents, for cache keys
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Look up a string by key
    pub fn get(&self, key: &str) -> String {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up a string and substitute `{name}` placeholders
    pub fn format(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.get(key), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
    }
}

/// Codes of all built-in language packs
pub fn builtin_languages() -> Vec<String> {
    let mut codes: Vec<String> = BuiltinPacks::iter()
        .filter_map(|file| file.strip_suffix(".json").map(str::to_string))
        .collect();
    codes.sort();
    codes
}

fn builtin_pack(code: &str) -> Result<PackFile> {
    let file = BuiltinPacks::get(&format!("{code}.json"))
        .ok_or_else(|| FolderError::UnknownLanguage(code.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|source| FolderError::MalformedLanguage {
        code: code.to_string(),
        source,
    })
}
