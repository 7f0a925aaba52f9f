use crate::{
    automaton::{
        Automaton,
        error::{AutomatonError, AutomatonResult},
        transition::TransitionTable,
    },
    config::{AutomatonConfig, RemainderConfig},
    utils::is_binary_string,
};

pub mod fixed;

pub use fixed::{FixedRemainderMachine, ModThreeMachine};

/// The alphabet of every remainder machine, in transition order.
pub const BINARY_ALPHABET: [&str; 2] = ["0", "1"];

/// This trait represents machines that compute the value of a binary string
/// modulo a fixed number.
pub trait Remainder {
    fn modulus(&self) -> u64;

    /// Returns the value of `binary`, read most significant bit first, modulo
    /// [`Remainder::modulus`].
    fn remainder(&self, binary: &str) -> AutomatonResult<u64>;
}

/// A DFA over `{0, 1}` whose states are the remainders `0..N`. Reading a bit
/// `b` in remainder `r` moves to `(2r + b) mod N`, so the final state is the
/// remainder of the whole input. The input is never turned into a number,
/// which means there is no limit on its length.
///
/// Every state is accepting, so execution can only fail on invalid input.
#[derive(Debug, Clone)]
pub struct RemainderMachine {
    modulus: u64,
    automaton: Automaton,
}

impl RemainderMachine {
    pub fn new(modulus: i64) -> AutomatonResult<Self> {
        Self::with_config(modulus, AutomatonConfig::default())
    }

    pub fn from_config(config: &RemainderConfig) -> AutomatonResult<Self> {
        Self::with_config(*config.get_modulus(), config.get_automaton().clone())
    }

    pub fn with_config(modulus: i64, config: AutomatonConfig) -> AutomatonResult<Self> {
        if modulus <= 0 {
            return Err(AutomatonError::InvalidModulus { modulus });
        }

        let state_count =
            usize::try_from(modulus).map_err(|_| AutomatonError::ModulusTooLarge { modulus })?;
        let mut states: Vec<String> = Vec::new();
        states
            .try_reserve_exact(state_count)
            .map_err(|_| AutomatonError::ModulusTooLarge { modulus })?;
        states.extend((0..modulus).map(|r| r.to_string()));

        let alphabet = BINARY_ALPHABET.map(String::from);
        let transitions = remainder_transitions(&states);

        let automaton = Automaton::with_config(
            states.as_slice(),
            alphabet.as_slice(),
            states[0].clone(),
            states.as_slice(),
            transitions,
            config,
        )?;

        tracing::debug!(modulus, "constructed remainder machine");

        Ok(RemainderMachine {
            modulus: modulus as u64,
            automaton,
        })
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Computes the remainder of `binary` modulo the machine's modulus. The
    /// empty string has the value 0.
    pub fn execute(&self, binary: &str) -> AutomatonResult<u64> {
        if !is_binary_string(binary) {
            return Err(AutomatonError::InvalidBinaryString {
                input: binary.to_string(),
            });
        }

        let state = self.automaton.execute(binary)?;
        state
            .parse()
            .map_err(|_| AutomatonError::NonNumericState {
                state: state.to_string(),
            })
    }
}

impl Remainder for RemainderMachine {
    fn modulus(&self) -> u64 {
        self.modulus
    }

    fn remainder(&self, binary: &str) -> AutomatonResult<u64> {
        self.execute(binary)
    }
}

/// Builds the transition table of a remainder machine over `states`, where
/// `states[r]` is the label of remainder `r`.
///
/// Visiting `(r, b)` in the order `(0, 0), (0, 1), (1, 0), ...` enumerates
/// `2r + b = 0, 1, 2, ..., 2N - 1`. Reduced modulo `N` this is a counter that
/// wraps back to 0 every `N` steps, so no division is needed.
fn remainder_transitions(states: &[String]) -> TransitionTable {
    let mut table = TransitionTable::new();
    let mut counter = 0;

    for state in states {
        for symbol in BINARY_ALPHABET {
            table.add_transition(state.as_str(), symbol, states[counter].as_str());

            counter += 1;
            if counter == states.len() {
                counter = 0;
            }
        }
    }

    table
}
