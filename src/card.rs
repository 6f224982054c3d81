use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ----------------- Localized strings -----------------

/// Language code -> translated text for one logical field.
///
/// Manifests usually write `{"en": "...", "nl": "..."}`, but a bare string is
/// accepted too and stored as the `en` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedString(HashMap<String, String>);

impl LocalizedString {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedString {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(lang, text)| (lang.to_string(), text.to_string()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Map(HashMap<String, String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Plain(text) => Self(HashMap::from([("en".to_string(), text)])),
            Raw::Map(map) => Self(map),
        })
    }
}

// ----------------- Arguments -----------------

/// One selectable choice of a `dropdown` or `multiselect` argument.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ArgumentValueOption {
    pub id: String,
    pub title: Option<LocalizedString>,
    pub label: Option<LocalizedString>,
}

/// A typed, named parameter of a flow card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<LocalizedString>,
    pub placeholder: Option<LocalizedString>,
    pub required: Option<bool>,
    /// Default value; kept raw since manifests put strings, numbers and booleans here.
    pub value: Option<Value>,
    #[serde(default)]
    pub values: Vec<ArgumentValueOption>,
    pub conjunction: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Unit label of a `range` slider.
    pub label: Option<String>,
    pub label_multiplier: Option<f64>,
    pub label_decimals: Option<f64>,
    pub filter: Option<String>,
}

impl ArgumentDefinition {
    pub fn new(name: &str, kind: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            ..Default::default()
        }
    }

    /// Arguments are required unless the manifest says `"required": false`.
    pub fn is_required(&self) -> bool {
        self.required != Some(false)
    }
}

// ----------------- Cards -----------------

/// A value a trigger hands to the rest of the flow.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputToken {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: LocalizedString,
    pub example: Option<LocalizedString>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub id: Option<String>,
    #[serde(default)]
    pub title: LocalizedString,
    pub title_formatted: Option<LocalizedString>,
    pub hint: Option<LocalizedString>,
    #[serde(default)]
    pub args: Vec<ArgumentDefinition>,
    #[serde(default)]
    pub tokens: Vec<OutputToken>,
    /// Token types that can be dropped onto the card.
    #[serde(default)]
    pub droptoken: Vec<String>,
    #[serde(default)]
    pub duration: bool,
}

/// What the host app contributes to every card it owns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppMeta {
    pub name: LocalizedString,
    pub brand_color: String,
}
