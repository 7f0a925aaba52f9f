use crate::automaton::Automaton;

pub mod same_remainders;

/// Asserts that the transition function of `automaton` is total over `Q × Σ`
/// and that every transition leads back into `Q`.
pub fn assert_total(automaton: &Automaton) {
    for state in automaton.states() {
        for symbol in automaton.alphabet() {
            assert!(
                automaton.transitions().has_transition(state, symbol),
                "missing transition for ({}, {})",
                state,
                symbol
            );

            let next_state = automaton
                .transitions()
                .execute(state, symbol)
                .unwrap_or_else(|e| panic!("{}", e));
            assert!(
                automaton.is_state(next_state),
                "transition ({}, {}) leads to {} which is not a state",
                state,
                symbol,
                next_state
            );
        }
    }
}
