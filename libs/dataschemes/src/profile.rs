use serde::Deserialize;

use crate::converter::{Converters, Registry};
use crate::error::ConfigError;
use crate::types::{Kind, TypeSet};

// ═══════════════════════════════════════════════════════════════
//  Format Profile
// ═══════════════════════════════════════════════════════════════

/// Named set of primitive kinds a wire format can carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormatProfile {
    /// Format name (e.g., "json", "csv").
    pub name: String,
    /// Primitive kinds the format can write without further encoding.
    pub types: TypeSet,
}

impl FormatProfile {
    pub fn new(name: impl Into<String>, types: TypeSet) -> Self {
        Self {
            name: name.into(),
            types,
        }
    }

    /// Registry view restricted to this format's kinds.
    pub fn converters<'r>(&self, registry: &'r Registry) -> Converters<'r> {
        registry.bind(Some(&self.types))
    }
}

// ═══════════════════════════════════════════════════════════════
//  Profiles file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    formats: Vec<FormatProfile>,
}

/// Known format profiles: the built-ins plus anything loaded from config.
#[derive(Debug, Clone)]
pub struct Profiles {
    formats: Vec<FormatProfile>,
}

impl Default for Profiles {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Profiles {
    pub fn builtin() -> Self {
        let text = TypeSet::from([Kind::String]);
        Self {
            formats: vec![
                FormatProfile::new("json", TypeSet::ATOMIC),
                FormatProfile::new("toml", TypeSet::ATOMIC),
                FormatProfile::new("yaml", TypeSet::ATOMIC),
                FormatProfile::new("csv", text),
                FormatProfile::new("env", text),
                FormatProfile::new("ini", text.with(Kind::Boolean)),
            ],
        }
    }

    /// Built-ins overlaid with the `[[formats]]` tables of a TOML file.
    ///
    /// ```toml
    /// [[formats]]
    /// name = "msgpack"
    /// types = ["str", "bool", "int", "float"]
    /// ```
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let profiles = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        tracing::info!(path, formats = profiles.formats.len(), "format profiles loaded");
        Ok(profiles)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ProfilesFile = toml::from_str(content)?;
        let mut profiles = Self::builtin();
        for format in file.formats {
            profiles.insert(format);
        }
        Ok(profiles)
    }

    /// Add a profile, replacing any existing one with the same name.
    pub fn insert(&mut self, profile: FormatProfile) {
        if let Some(existing) = self.formats.iter_mut().find(|p| p.name == profile.name) {
            tracing::debug!(format = %profile.name, "overriding format profile");
            *existing = profile;
        } else {
            self.formats.push(profile);
        }
    }

    pub fn get(&self, name: &str) -> Result<&FormatProfile, ConfigError> {
        self.formats
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::FormatNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatProfile> {
        self.formats.iter()
    }
}
