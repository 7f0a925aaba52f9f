use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    automaton::{
        Automaton, Label,
        error::{AutomatonError, AutomatonResult},
        transition::TransitionTable,
    },
    config::AutomatonConfig,
};

/// A state or symbol as it appears in a definition file. Files may contain
/// any value where a label is expected, non-text values are reported by the
/// automaton validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefinitionLabel {
    Text(String),
    Other(serde_json::Value),
}

impl Display for DefinitionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionLabel::Text(text) => write!(f, "{}", text),
            DefinitionLabel::Other(value) => write!(f, "{}", value),
        }
    }
}

impl Label for DefinitionLabel {
    fn as_text(&self) -> Option<&str> {
        match self {
            DefinitionLabel::Text(text) => Some(text.as_str()),
            DefinitionLabel::Other(_) => None,
        }
    }
}

impl From<&str> for DefinitionLabel {
    fn from(text: &str) -> Self {
        DefinitionLabel::Text(text.to_string())
    }
}

impl From<String> for DefinitionLabel {
    fn from(text: String) -> Self {
        DefinitionLabel::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: String,
    pub symbol: String,
    pub to: String,
}

/// Serializable description of an automaton. Nothing is checked until
/// [`AutomatonDefinition::build`] is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    pub states: Vec<DefinitionLabel>,
    pub alphabet: Vec<DefinitionLabel>,
    pub initial_state: DefinitionLabel,
    #[serde(default)]
    pub accepted_states: Vec<DefinitionLabel>,
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
}

impl AutomatonDefinition {
    pub fn transition_table(&self) -> TransitionTable {
        let mut table = TransitionTable::new();
        for transition in &self.transitions {
            table.add_transition(
                transition.from.as_str(),
                transition.symbol.as_str(),
                transition.to.as_str(),
            );
        }
        table
    }

    pub fn build(&self) -> AutomatonResult<Automaton> {
        self.build_with_config(AutomatonConfig::default())
    }

    pub fn build_with_config(&self, config: AutomatonConfig) -> AutomatonResult<Automaton> {
        Automaton::with_config(
            self.states.as_slice(),
            self.alphabet.as_slice(),
            self.initial_state.clone(),
            self.accepted_states.as_slice(),
            self.transition_table(),
            config,
        )
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_json_file(&self, path: &str) -> anyhow::Result<()> {
        Ok(std::fs::write(path, self.to_json()?)?)
    }

    pub fn to_toml_file(&self, path: &str) -> anyhow::Result<()> {
        Ok(std::fs::write(path, self.to_toml()?)?)
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let path = std::path::Path::new(path);
        let definition = match path.extension() {
            Some(ext) if ext == "json" => Self::from_json(&std::fs::read_to_string(path)?)?,
            Some(ext) if ext == "toml" => Self::from_toml(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(anyhow::anyhow!(
                    "Unsupported automaton definition file: {}",
                    path.display()
                ));
            }
        };

        tracing::debug!(
            path = %path.display(),
            states = definition.states.len(),
            transitions = definition.transitions.len(),
            "loaded automaton definition"
        );

        Ok(definition)
    }
}

impl TryFrom<AutomatonDefinition> for Automaton {
    type Error = AutomatonError;

    fn try_from(definition: AutomatonDefinition) -> Result<Self, Self::Error> {
        definition.build()
    }
}

impl Automaton {
    /// Exports the automaton. Transitions are listed state by state in the
    /// order of the allowed states, and per state in alphabet order.
    pub fn to_definition(&self) -> AutomatonDefinition {
        let transitions = self
            .states()
            .iter()
            .flat_map(|state| {
                self.alphabet().iter().filter_map(move |symbol| {
                    self.transitions()
                        .next_state(state, symbol)
                        .map(|to| TransitionDefinition {
                            from: state.clone(),
                            symbol: symbol.clone(),
                            to: to.to_string(),
                        })
                })
            })
            .collect();

        AutomatonDefinition {
            states: self.states().iter().cloned().map(Into::into).collect(),
            alphabet: self.alphabet().iter().cloned().map(Into::into).collect(),
            initial_state: self.initial_state().into(),
            accepted_states: self
                .accepted_states()
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
            transitions,
        }
    }
}
