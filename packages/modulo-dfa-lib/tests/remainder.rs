use modulo_dfa_lib::{
    automaton::error::AutomatonError,
    config::{AutomatonConfig, RemainderConfig, TransitionPolicy},
    remainder::{FixedRemainderMachine, ModThreeMachine, Remainder, RemainderMachine},
    validation::{
        assert_total,
        same_remainders::{
            assert_remainders_match, assert_same_remainders, binary_words, reference_remainder,
            same_remainders,
        },
    },
};
use rand::{RngExt, SeedableRng, rngs::StdRng};

const LONGER_INPUTS: [&str; 8] = [
    "000000",
    "0001011",
    "0000000000000001",
    "1000000000000000",
    "110110110110110110110",
    "101010101010101010101010101010101",
    "11111111111111111111111111111111111111111111111111111111111111111111",
    "1000000000000000000000000000000000000000000000000000000000000000000000000001",
];

#[test]
fn test_mod_five() {
    let machine = RemainderMachine::new(5).unwrap();

    assert_eq!(machine.execute("110"), Ok(1));
    assert_eq!(machine.execute("1010"), Ok(0));
    assert_eq!(machine.execute("1101"), Ok(3));
    assert_eq!(machine.execute("1110"), Ok(4));
    assert_eq!(machine.execute("1111"), Ok(0));
}

#[test]
fn test_mod_three() {
    let machine = ModThreeMachine::new().unwrap();

    assert_eq!(machine.execute("110"), Ok(0));
    assert_eq!(machine.execute("1010"), Ok(1));
    assert_eq!(machine.execute("1101"), Ok(1));
    assert_eq!(machine.execute("1110"), Ok(2));
    assert_eq!(machine.execute("1111"), Ok(0));
}

#[test]
fn test_machine_layout() {
    let machine = RemainderMachine::new(4).unwrap();
    let automaton = machine.automaton();

    assert_eq!(machine.modulus(), 4);
    assert_eq!(automaton.states(), ["0", "1", "2", "3"]);
    assert_eq!(automaton.alphabet(), ["0", "1"]);
    assert_eq!(automaton.initial_state(), "0");
    assert_eq!(automaton.accepted_states(), automaton.states());
}

#[test]
fn test_all_moduli_build_valid_automata() {
    for modulus in 1..=25 {
        let machine = RemainderMachine::new(modulus).unwrap();
        assert_total(machine.automaton());
        assert_eq!(machine.automaton().transitions().states_count(), modulus as usize);
    }
}

#[test]
fn test_all_moduli_pass_strict_validation() {
    let config = AutomatonConfig::default().with_transition_policy(TransitionPolicy::Strict);

    for modulus in 1..=25 {
        assert!(RemainderMachine::with_config(modulus, config.clone()).is_ok());
    }
}

#[test]
fn test_remainders_for_short_words() {
    for modulus in 1..=25 {
        let machine = RemainderMachine::new(modulus).unwrap();
        assert_remainders_match(&machine, 5);
    }
}

#[test]
fn test_remainders_for_longer_words() {
    for modulus in 1..=25 {
        let machine = RemainderMachine::new(modulus).unwrap();

        for input in LONGER_INPUTS {
            let expected = u128::from_str_radix(input, 2).unwrap() % modulus as u128;
            assert_eq!(
                machine.execute(input),
                Ok(expected as u64),
                "{} mod {}",
                input,
                modulus
            );
        }
    }
}

#[test]
fn test_leading_zeros_do_not_change_the_remainder() {
    let machine = RemainderMachine::new(7).unwrap();

    for word in binary_words(4) {
        let padded = format!("000{}", word);
        assert_eq!(machine.execute(&padded), machine.execute(&word));
    }
}

#[test]
fn test_empty_input_is_zero() {
    for modulus in 1..=25 {
        let machine = RemainderMachine::new(modulus).unwrap();
        assert_eq!(machine.execute(""), Ok(0));
    }
}

#[test]
fn test_large_input() {
    let machine = RemainderMachine::new(5).unwrap();
    let input = "1".repeat(100);

    let first = machine.execute(&input);
    assert_eq!(first, Ok(0));
    assert_eq!(machine.execute(&input), first);
}

#[test]
fn test_very_long_input() {
    let machine = RemainderMachine::new(11).unwrap();
    let input = "10".repeat(50_000);

    assert_eq!(
        machine.execute(&input),
        Ok(reference_remainder(&input, 11))
    );
}

#[test]
fn test_random_inputs() {
    let mut r = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let modulus = r.random_range(1..=1000i64);
        let length = r.random_range(1..=127usize);
        let input: String = (0..length)
            .map(|_| if r.random_range(0..2) == 1 { '1' } else { '0' })
            .collect();

        let machine = RemainderMachine::new(modulus).unwrap();
        let expected = u128::from_str_radix(&input, 2).unwrap() % modulus as u128;

        assert_eq!(machine.execute(&input), Ok(expected as u64), "{} mod {}", input, modulus);
    }
}

#[test]
fn test_mod_three_matches_general_machine() {
    let general = RemainderMachine::new(3).unwrap();
    let fixed = ModThreeMachine::new().unwrap();

    assert!(same_remainders(&general, &fixed, 8));
    assert_same_remainders(&general, &fixed, 8);

    for input in LONGER_INPUTS {
        assert_eq!(fixed.execute(input), general.execute(input));
    }
}

#[test]
fn test_different_moduli_are_not_the_same() {
    let three = ModThreeMachine::new().unwrap();
    let five = FixedRemainderMachine::<5>::new().unwrap();

    assert!(!same_remainders(&three, &five, 4));
}

#[test]
fn test_remainder_trait() {
    let machines: Vec<Box<dyn Remainder>> = vec![
        Box::new(RemainderMachine::new(6).unwrap()),
        Box::new(FixedRemainderMachine::<6>::new().unwrap()),
    ];

    for machine in machines {
        assert_eq!(machine.modulus(), 6);
        assert_eq!(machine.remainder("10111"), Ok(5));
    }
}

#[test]
fn test_invalid_modulus() {
    assert_eq!(
        RemainderMachine::new(0).unwrap_err(),
        AutomatonError::InvalidModulus { modulus: 0 }
    );
    assert_eq!(
        RemainderMachine::new(-3).unwrap_err(),
        AutomatonError::InvalidModulus { modulus: -3 }
    );
    assert_eq!(
        RemainderMachine::new(-3).unwrap_err().to_string(),
        "modulus must be a positive integer, got -3"
    );
}

#[test]
fn test_unallocatable_modulus() {
    let err = RemainderMachine::new(i64::MAX).unwrap_err();
    assert_eq!(err, AutomatonError::ModulusTooLarge { modulus: i64::MAX });
    assert!(!err.is_rejection());
}

#[test]
fn test_invalid_binary_string() {
    let machine = ModThreeMachine::new().unwrap();

    for input in [" ", "10 1", " 101", "102", "abc", "0b101", "1\n"] {
        let err = machine.execute(input).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::InvalidBinaryString {
                input: input.to_string(),
            }
        );
        assert!(!err.is_rejection());
    }

    assert_eq!(
        machine.execute("10 1").unwrap_err().to_string(),
        "'10 1' is not a binary string"
    );
}

#[test]
fn test_from_config() {
    let config = RemainderConfig::from_toml(
        r#"
        modulus = 9

        [automaton]
        trace_execution = true
        "#,
    )
    .unwrap();

    let machine = RemainderMachine::from_config(&config).unwrap();
    assert_eq!(machine.modulus(), 9);
    assert!(*machine.automaton().config().get_trace_execution());
    assert_eq!(machine.execute("1100100"), Ok(100 % 9));

    let default_machine = RemainderMachine::from_config(&RemainderConfig::default()).unwrap();
    assert_eq!(default_machine.modulus(), 3);

    let invalid = RemainderConfig::default().with_modulus(0);
    assert!(RemainderMachine::from_config(&invalid).is_err());
}

#[test]
fn test_machines_are_shareable_between_threads() {
    let machine = RemainderMachine::new(13).unwrap();

    std::thread::scope(|s| {
        for t in 0..4u64 {
            let machine = &machine;
            s.spawn(move || {
                for value in 0..256u64 {
                    let input = format!("{:b}", value + t * 256);
                    assert_eq!(machine.execute(&input), Ok((value + t * 256) % 13));
                }
            });
        }
    });
}
