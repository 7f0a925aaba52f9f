use crate::{
    automaton::{Automaton, error::AutomatonResult},
    remainder::{Remainder, RemainderMachine},
};

/// A [`RemainderMachine`] with its modulus fixed at compile time.
#[derive(Debug, Clone)]
pub struct FixedRemainderMachine<const N: i64> {
    machine: RemainderMachine,
}

/// Computes the remainder of a binary string modulo 3.
pub type ModThreeMachine = FixedRemainderMachine<3>;

impl<const N: i64> FixedRemainderMachine<N> {
    pub fn new() -> AutomatonResult<Self> {
        Ok(FixedRemainderMachine {
            machine: RemainderMachine::new(N)?,
        })
    }

    pub fn modulus(&self) -> u64 {
        self.machine.modulus()
    }

    pub fn automaton(&self) -> &Automaton {
        self.machine.automaton()
    }

    pub fn execute(&self, binary: &str) -> AutomatonResult<u64> {
        self.machine.execute(binary)
    }
}

impl<const N: i64> Remainder for FixedRemainderMachine<N> {
    fn modulus(&self) -> u64 {
        self.machine.modulus()
    }

    fn remainder(&self, binary: &str) -> AutomatonResult<u64> {
        self.machine.execute(binary)
    }
}

#[test]
fn test_mod_three_modulus() {
    let machine = ModThreeMachine::new().unwrap();
    assert_eq!(machine.modulus(), 3);
    assert_eq!(machine.automaton().states(), ["0", "1", "2"]);
}

#[test]
fn test_non_positive_fixed_modulus() {
    assert!(FixedRemainderMachine::<0>::new().is_err());
}
