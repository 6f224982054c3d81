// Loading flow cards out of an app manifest (`app.json`, or the same shape as YAML).
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;
use tracing::{debug, warn};
use yaml_rust2::{Yaml, YamlLoader};

use crate::card::{AppMeta, CardDefinition, LocalizedString};

pub const DEFAULT_BRAND_COLOR: &str = "#000000";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("Empty YAML document")]
    EmptyYaml,

    #[error("No flow card with id '{0}'")]
    CardNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Trigger,
    Condition,
    Action,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Trigger => "trigger",
            CardKind::Condition => "condition",
            CardKind::Action => "action",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowSection {
    #[serde(default)]
    pub triggers: Vec<CardDefinition>,
    #[serde(default)]
    pub conditions: Vec<CardDefinition>,
    #[serde(default)]
    pub actions: Vec<CardDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    pub id: Option<String>,
    #[serde(default)]
    pub name: LocalizedString,
    pub brand_color: Option<String>,
    #[serde(default)]
    pub flow: FlowSection,
}

impl AppManifest {
    /// `.yaml`/`.yml` files are read as YAML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading app manifest");
        if is_yaml_file(path) {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        let docs = YamlLoader::load_from_str(content).map_err(|e| ManifestError::Yaml(e.to_string()))?;
        let doc = docs.first().ok_or(ManifestError::EmptyYaml)?;
        Ok(serde_json::from_value(yaml_to_json(doc))?)
    }

    /// Owner name and brand color, as handed to the composer.
    pub fn meta(&self) -> AppMeta {
        AppMeta {
            name: self.name.clone(),
            brand_color: self
                .brand_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BRAND_COLOR.to_string()),
        }
    }

    /// Every card, triggers first, then conditions, then actions.
    pub fn cards(&self) -> impl Iterator<Item = (CardKind, &CardDefinition)> {
        let flow = &self.flow;
        flow.triggers
            .iter()
            .map(|card| (CardKind::Trigger, card))
            .chain(flow.conditions.iter().map(|card| (CardKind::Condition, card)))
            .chain(flow.actions.iter().map(|card| (CardKind::Action, card)))
    }

    pub fn find_card(&self, id: &str) -> Option<(CardKind, &CardDefinition)> {
        self.cards().find(|(_, card)| card.id.as_deref() == Some(id))
    }

    pub fn card(&self, id: &str) -> Result<&CardDefinition, ManifestError> {
        match self.find_card(id) {
            Some((_, card)) => Ok(card),
            None => {
                warn!(card = id, "flow card not found in manifest");
                Err(ManifestError::CardNotFound(id.to_string()))
            }
        }
    }
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

fn yaml_key(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Turn a YAML tree into JSON so the serde model can be reused.
/// Aliases and unparsable nodes become `null`.
fn yaml_to_json(yaml: &Yaml) -> Value {
    match yaml {
        Yaml::Real(s) => s
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(s.clone())),
        Yaml::Integer(i) => Value::from(*i),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Boolean(b) => Value::Bool(*b),
        Yaml::Array(items) => Value::Array(items.iter().map(yaml_to_json).collect()),
        Yaml::Hash(hash) => {
            let mut map = Map::new();
            for (key, value) in hash {
                if let Some(key) = yaml_key(key) {
                    map.insert(key, yaml_to_json(value));
                }
            }
            Value::Object(map)
        }
        _ => Value::Null,
    }
}
