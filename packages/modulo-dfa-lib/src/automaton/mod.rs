use std::fmt::Display;

use hashbrown::HashSet;
use itertools::Itertools;

use crate::{
    automaton::{
        error::{AutomatonError, AutomatonResult},
        transition::TransitionTable,
    },
    config::{AutomatonConfig, TransitionPolicy},
};

pub mod definition;
pub mod error;
pub mod transition;

/// This trait represents values that can be handed to an [`Automaton`] as a
/// state or a symbol. Only values that are text can become a label, everything
/// else is rejected during construction.
pub trait Label: Display {
    fn as_text(&self) -> Option<&str>;
}

impl Label for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Label for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Label + ?Sized> Label for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelRole {
    Symbol,
    State,
}

impl LabelRole {
    fn empty_list(self) -> AutomatonError {
        match self {
            LabelRole::Symbol => AutomatonError::EmptyAlphabet,
            LabelRole::State => AutomatonError::EmptyStates,
        }
    }

    fn non_text(self, value: String, position: usize) -> AutomatonError {
        match self {
            LabelRole::Symbol => AutomatonError::NonTextSymbol { value, position },
            LabelRole::State => AutomatonError::NonTextState { value, position },
        }
    }

    fn empty(self, position: usize) -> AutomatonError {
        match self {
            LabelRole::Symbol => AutomatonError::EmptySymbol { position },
            LabelRole::State => AutomatonError::EmptyState { position },
        }
    }

    fn duplicate(self, label: String) -> AutomatonError {
        match self {
            LabelRole::Symbol => AutomatonError::DuplicateSymbol { symbol: label },
            LabelRole::State => AutomatonError::DuplicateState { state: label },
        }
    }
}

/// Checks that `labels` is a non-empty list of unique, non-empty text
/// tokens and returns them in the order given.
fn collect_labels<T: Label>(labels: &[T], role: LabelRole) -> AutomatonResult<Vec<String>> {
    if labels.is_empty() {
        return Err(role.empty_list());
    }

    let mut seen = HashSet::with_capacity(labels.len());
    let mut collected = Vec::with_capacity(labels.len());

    for (position, label) in labels.iter().enumerate() {
        let text = label
            .as_text()
            .ok_or_else(|| role.non_text(label.to_string(), position))?;

        if text.is_empty() {
            return Err(role.empty(position));
        }

        if !seen.insert(text) {
            return Err(role.duplicate(text.to_string()));
        }

        collected.push(text.to_string());
    }

    Ok(collected)
}

/// A deterministic finite automaton `(Q, Σ, δ, q0, F)`.
///
/// All invariants are checked once in [`Automaton::new`]: the alphabet and
/// the allowed states are non-empty lists of unique, non-empty tokens, the
/// initial and accepted states are allowed states, and the transition table
/// is total and closed over `Q × Σ`. An automaton is never mutated after
/// that, so [`Automaton::execute`] can be called from any number of threads.
///
/// Every symbol is a single character of the input text, so alphabet entries
/// longer than one character can never be consumed.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<String>,
    alphabet: Vec<String>,
    initial_state: String,
    accepted_states: Vec<String>,
    transitions: TransitionTable,
    state_set: HashSet<String>,
    symbol_set: HashSet<String>,
    accepted_set: HashSet<String>,
    config: AutomatonConfig,
}

impl Automaton {
    pub fn new<T: Label>(
        states: &[T],
        alphabet: &[T],
        initial_state: T,
        accepted_states: &[T],
        transitions: TransitionTable,
    ) -> AutomatonResult<Self> {
        Self::with_config(
            states,
            alphabet,
            initial_state,
            accepted_states,
            transitions,
            AutomatonConfig::default(),
        )
    }

    /// Validates the five components and builds the automaton.
    ///
    /// The checks run in a fixed order and the first violation is returned:
    /// alphabet, allowed states, accepted states, initial state and finally
    /// the transition function.
    pub fn with_config<T: Label>(
        states: &[T],
        alphabet: &[T],
        initial_state: T,
        accepted_states: &[T],
        transitions: TransitionTable,
        config: AutomatonConfig,
    ) -> AutomatonResult<Self> {
        let alphabet = collect_labels(alphabet, LabelRole::Symbol)?;
        let states = collect_labels(states, LabelRole::State)?;
        let state_set: HashSet<String> = states.iter().cloned().collect();

        let mut accepted = Vec::with_capacity(accepted_states.len());
        for state in accepted_states {
            match state.as_text() {
                Some(text) if state_set.contains(text) => accepted.push(text.to_string()),
                _ => {
                    return Err(AutomatonError::UnknownAcceptedState {
                        state: state.to_string(),
                    });
                }
            }
        }

        let initial_state = match initial_state.as_text() {
            Some(text) if state_set.contains(text) => text.to_string(),
            _ => {
                return Err(AutomatonError::UnknownInitialState {
                    state: initial_state.to_string(),
                });
            }
        };

        validate_transitions(
            &states,
            &alphabet,
            &state_set,
            &transitions,
            *config.get_transition_policy(),
        )?;

        tracing::debug!(
            states = states.len(),
            symbols = alphabet.len(),
            accepted = accepted.len(),
            "constructed automaton"
        );

        Ok(Automaton {
            symbol_set: alphabet.iter().cloned().collect(),
            accepted_set: accepted.iter().cloned().collect(),
            states,
            alphabet,
            initial_state,
            accepted_states: accepted,
            transitions,
            state_set,
            config,
        })
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    pub fn accepted_states(&self) -> &[String] {
        &self.accepted_states
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    pub fn is_state(&self, state: &str) -> bool {
        self.state_set.contains(state)
    }

    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepted_set.contains(state)
    }

    /// Runs the automaton on `input`, one character per symbol, and returns
    /// the final state.
    ///
    /// Fails with [`AutomatonError::UnknownSymbol`] on the first character
    /// outside the alphabet and with [`AutomatonError::Rejected`] if the final
    /// state is not accepting. The empty input ends in the initial state.
    pub fn execute(&self, input: &str) -> AutomatonResult<&str> {
        let trace = *self.config.get_trace_execution();
        let mut state = self.initial_state.as_str();
        let mut buffer = [0u8; 4];

        for (position, c) in input.chars().enumerate() {
            let symbol: &str = c.encode_utf8(&mut buffer);

            if !self.symbol_set.contains(symbol) {
                return Err(AutomatonError::UnknownSymbol {
                    symbol: symbol.to_string(),
                    input: input.to_string(),
                    position,
                    alphabet: self.alphabet.iter().join(", "),
                });
            }

            let next_state = self.transitions.execute(state, symbol)?;
            if trace {
                tracing::trace!(position, symbol, from = state, to = next_state, "step");
            }
            state = next_state;
        }

        if !self.is_accepting(state) {
            return Err(AutomatonError::Rejected {
                state: state.to_string(),
                input: input.to_string(),
            });
        }

        Ok(state)
    }

    /// Like [`Automaton::execute`], but reports rejection as `Ok(false)`.
    /// Structural failures such as unknown symbols are still errors.
    pub fn accepts(&self, input: &str) -> AutomatonResult<bool> {
        match self.execute(input) {
            Ok(_) => Ok(true),
            Err(e) if e.is_rejection() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

fn validate_transitions(
    states: &[String],
    alphabet: &[String],
    state_set: &HashSet<String>,
    transitions: &TransitionTable,
    policy: TransitionPolicy,
) -> AutomatonResult<()> {
    if policy == TransitionPolicy::Strict && transitions.states_count() != states.len() {
        return Err(AutomatonError::TransitionStateCountMismatch {
            count: transitions.states_count(),
            allowed: states.len(),
        });
    }

    for state in states {
        if !transitions.has_transitions_for_state(state) {
            return Err(AutomatonError::TransitionsNotDefined {
                state: state.clone(),
            });
        }

        for symbol in alphabet {
            match transitions.next_state(state, symbol) {
                None => {
                    return Err(AutomatonError::MissingTransition {
                        state: state.clone(),
                        symbol: symbol.clone(),
                    });
                }
                Some(next_state) if !state_set.contains(next_state) => {
                    return Err(AutomatonError::InvalidNextState {
                        state: state.clone(),
                        symbol: symbol.clone(),
                        next_state: next_state.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        let count = transitions.transitions_count_for_state(state);
        if count > alphabet.len() {
            return Err(AutomatonError::TooManyTransitions {
                state: state.clone(),
                count,
                alphabet_size: alphabet.len(),
            });
        }
    }

    if transitions.states_count() > states.len() {
        return Err(AutomatonError::TooManyTransitionStates {
            count: transitions.states_count(),
            allowed: states.len(),
        });
    }

    Ok(())
}
