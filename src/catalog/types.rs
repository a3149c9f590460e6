use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CatalogError, Result};

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Values starting with this marker are unfilled placeholders in the source data.
const PLACEHOLDER_PREFIX: &str = "[待添加";

/// The full catalog document as served by `data/skills.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: CatalogMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    pub skills: Vec<SkillRecord>,
}

impl CatalogDocument {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| CatalogError::Parse(format!("catalog document: {err}")))
    }

    /// Soft data-quality checks. Problems are reported, never fatal.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for skill in &self.skills {
            if skill.id.trim().is_empty() {
                warnings.push(format!("skill '{}' has no id", skill.name));
            }
            if !self.categories.is_empty() && !self.categories.contains(&skill.category) {
                warnings.push(format!(
                    "skill '{}' has undeclared category '{}'",
                    skill.id, skill.category
                ));
            }
            if !(0.0..=MAX_RATING).contains(&skill.rating) {
                warnings.push(format!(
                    "skill '{}' rating {} outside 0-5",
                    skill.id, skill.rating
                ));
            }
            if let SkillType::Other(raw) = &skill.skill_type {
                warnings.push(format!("skill '{}' has unknown type '{raw}'", skill.id));
            }
        }
        warnings
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub survey_url: String,
}

impl CatalogMeta {
    #[must_use]
    pub fn repo_url(&self) -> Option<&str> {
        filled(&self.repo_url)
    }

    #[must_use]
    pub fn survey_url(&self) -> Option<&str> {
        filled(&self.survey_url)
    }
}

/// One catalog entry. Every field is optional on input so a single broken
/// record degrades to blanks instead of failing the whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub skill_type: SkillType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doc_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
}

impl SkillRecord {
    #[must_use]
    pub const fn is_built(&self) -> bool {
        matches!(self.skill_type, SkillType::Built)
    }

    #[must_use]
    pub fn github_link(&self) -> Option<&str> {
        filled(&self.github_url)
    }

    #[must_use]
    pub fn doc_link(&self) -> Option<&str> {
        filled(&self.doc_url)
    }

    /// Rating clamped to the 0-5 scale, with NaN treated as zero.
    #[must_use]
    pub fn display_rating(&self) -> f64 {
        if self.rating.is_nan() {
            0.0
        } else {
            self.rating.clamp(0.0, MAX_RATING)
        }
    }
}

/// Whether a skill was built in-house or evaluated from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillType {
    Built,
    Evaluated,
    Other(String),
}

impl Default for SkillType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl SkillType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Built => "built",
            Self::Evaluated => "evaluated",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SkillType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "built" => Self::Built,
            "evaluated" => Self::Evaluated,
            _ => Self::Other(value),
        }
    }
}

impl From<SkillType> for String {
    fn from(value: SkillType) -> Self {
        match value {
            SkillType::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn filled(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.starts_with(PLACEHOLDER_PREFIX) {
        None
    } else {
        Some(trimmed)
    }
}
