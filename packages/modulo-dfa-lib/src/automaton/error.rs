use thiserror::Error;

/// Distinguishes "the automaton or its input is malformed" from "the input is
/// well formed but not part of the recognized language".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structural,
    Rejection,
}

/// Every failure an automaton or a remainder machine can report.
///
/// All variants except [`AutomatonError::Rejected`] are structural: the caller
/// handed in an invalid configuration or an input outside the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("symbol {value} at position {position} of the alphabet is not a text token")]
    NonTextSymbol { value: String, position: usize },
    #[error("symbol at position {position} of the alphabet is empty")]
    EmptySymbol { position: usize },
    #[error("symbol '{symbol}' appears more than once in the alphabet")]
    DuplicateSymbol { symbol: String },

    #[error("allowed states must contain at least one state")]
    EmptyStates,
    #[error("state {value} at position {position} of the allowed states is not a text token")]
    NonTextState { value: String, position: usize },
    #[error("state at position {position} of the allowed states is empty")]
    EmptyState { position: usize },
    #[error("state '{state}' appears more than once in the allowed states")]
    DuplicateState { state: String },

    #[error("accepted state '{state}' is not one of the allowed states")]
    UnknownAcceptedState { state: String },
    #[error("initial state '{state}' is not one of the allowed states")]
    UnknownInitialState { state: String },

    #[error("transitions not defined for state '{state}'")]
    TransitionsNotDefined { state: String },
    #[error("missing transition for state '{state}' and symbol '{symbol}'")]
    MissingTransition { state: String, symbol: String },
    #[error(
        "transition for state '{state}' and symbol '{symbol}' leads to invalid next state '{next_state}'"
    )]
    InvalidNextState {
        state: String,
        symbol: String,
        next_state: String,
    },
    #[error(
        "too many transitions for state '{state}': {count} defined but the alphabet has {alphabet_size} symbols"
    )]
    TooManyTransitions {
        state: String,
        count: usize,
        alphabet_size: usize,
    },
    #[error("transitions exist for {count} states but only {allowed} states are allowed")]
    TooManyTransitionStates { count: usize, allowed: usize },
    #[error("transitions exist for {count} states but exactly {allowed} states are allowed")]
    TransitionStateCountMismatch { count: usize, allowed: usize },

    #[error("unknown transition for state '{state}' and symbol '{symbol}'")]
    UnknownTransition { state: String, symbol: String },
    #[error(
        "unknown symbol '{symbol}' at position {position} of input '{input}', alphabet is [{alphabet}]"
    )]
    UnknownSymbol {
        symbol: String,
        input: String,
        position: usize,
        alphabet: String,
    },
    #[error("input '{input}' ends in state '{state}' which is not an accepted state")]
    Rejected { state: String, input: String },

    #[error("modulus must be a positive integer, got {modulus}")]
    InvalidModulus { modulus: i64 },
    #[error("modulus {modulus} needs more states than can be allocated")]
    ModulusTooLarge { modulus: i64 },
    #[error("'{input}' is not a binary string")]
    InvalidBinaryString { input: String },
    #[error("state '{state}' is not a remainder label")]
    NonNumericState { state: String },
}

impl AutomatonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AutomatonError::Rejected { .. } => ErrorKind::Rejection,
            _ => ErrorKind::Structural,
        }
    }

    pub fn is_rejection(&self) -> bool {
        self.kind() == ErrorKind::Rejection
    }
}

pub type AutomatonResult<T> = std::result::Result<T, AutomatonError>;

#[test]
fn test_error_kind() {
    let rejected = AutomatonError::Rejected {
        state: "S2".into(),
        input: "ab".into(),
    };
    assert!(rejected.is_rejection());
    assert_eq!(rejected.kind(), ErrorKind::Rejection);

    let unknown = AutomatonError::UnknownSymbol {
        symbol: "c".into(),
        input: "abc".into(),
        position: 2,
        alphabet: "a, b".into(),
    };
    assert_eq!(unknown.kind(), ErrorKind::Structural);
    assert_eq!(
        unknown.to_string(),
        "unknown symbol 'c' at position 2 of input 'abc', alphabet is [a, b]"
    );
}
