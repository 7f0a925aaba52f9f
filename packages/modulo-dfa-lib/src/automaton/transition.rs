use hashbrown::HashMap;

use crate::automaton::error::{AutomatonError, AutomatonResult};

/// The transition function of a DFA, stored as `state -> symbol -> next
/// state`. States and symbols are opaque, case-sensitive text tokens.
///
/// Registering the same `(state, symbol)` pair twice keeps the last next
/// state. The table itself performs no validation, that happens when it is
/// handed to an [`Automaton`](crate::automaton::Automaton).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    transitions: HashMap<String, HashMap<String, String>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        TransitionTable {
            transitions: HashMap::new(),
        }
    }

    pub fn add_transition(
        &mut self,
        state: impl Into<String>,
        symbol: impl Into<String>,
        next_state: impl Into<String>,
    ) {
        self.transitions
            .entry(state.into())
            .or_default()
            .insert(symbol.into(), next_state.into());
    }

    /// Builder style variant of [`TransitionTable::add_transition`].
    pub fn with_transition(
        mut self,
        state: impl Into<String>,
        symbol: impl Into<String>,
        next_state: impl Into<String>,
    ) -> Self {
        self.add_transition(state, symbol, next_state);
        self
    }

    pub fn has_transition(&self, state: &str, symbol: &str) -> bool {
        self.next_state(state, symbol).is_some()
    }

    /// Whether `state` has at least one outgoing transition. States that only
    /// appear as a target do not count.
    pub fn has_transitions_for_state(&self, state: &str) -> bool {
        self.transitions_count_for_state(state) > 0
    }

    pub fn transitions_count_for_state(&self, state: &str) -> usize {
        self.transitions.get(state).map_or(0, |symbols| symbols.len())
    }

    /// Number of distinct states with at least one outgoing transition.
    pub fn states_count(&self) -> usize {
        self.transitions
            .values()
            .filter(|symbols| !symbols.is_empty())
            .count()
    }

    pub fn next_state(&self, state: &str, symbol: &str) -> Option<&str> {
        self.transitions
            .get(state)
            .and_then(|symbols| symbols.get(symbol))
            .map(String::as_str)
    }

    pub fn execute(&self, state: &str, symbol: &str) -> AutomatonResult<&str> {
        self.next_state(state, symbol)
            .ok_or_else(|| AutomatonError::UnknownTransition {
                state: state.to_string(),
                symbol: symbol.to_string(),
            })
    }

    /// All `(state, symbol, next_state)` triples, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.transitions.iter().flat_map(|(state, symbols)| {
            symbols.iter().map(move |(symbol, next_state)| {
                (state.as_str(), symbol.as_str(), next_state.as_str())
            })
        })
    }
}
