use itertools::{Itertools, repeat_n};

use crate::remainder::Remainder;

/// All binary words of length `0..=max_word_length`, shortest first.
pub fn binary_words(max_word_length: usize) -> impl Iterator<Item = String> {
    std::iter::once(String::new()).chain((1..=max_word_length).flat_map(|length| {
        repeat_n(['0', '1'], length)
            .multi_cartesian_product()
            .map(|word| word.into_iter().collect::<String>())
    }))
}

/// Reference remainder computed with plain arithmetic, one bit at a time.
/// `binary` must only contain `0` and `1`.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn reference_remainder(binary: &str, modulus: u64) -> u64 {
    assert!(modulus != 0, "reference_remainder needs a positive modulus");
    let modulus = modulus as u128;
    binary.bytes().fold(0u128, |acc, bit| {
        (acc * 2 + u128::from(bit == b'1')) % modulus
    }) as u64
}

/// Checks if two machines compute the same remainder for every binary word
/// up to a certain length.
pub fn same_remainders(a: &impl Remainder, b: &impl Remainder, max_word_length: usize) -> bool {
    if a.modulus() != b.modulus() {
        return false;
    }

    for word in binary_words(max_word_length) {
        if a.remainder(&word) != b.remainder(&word) {
            println!("{:?}", word);
            return false;
        }
    }

    true
}

pub fn assert_same_remainders(
    a: &impl Remainder,
    b: &impl Remainder,
    max_word_length: usize,
) {
    if a.modulus() != b.modulus() {
        panic!("Moduli are not the same");
    }

    for word in binary_words(max_word_length) {
        let (ra, rb) = (a.remainder(&word), b.remainder(&word));
        if ra != rb {
            panic!(
                "{:?} yields {:?} on machine `a` but {:?} on machine `b`.",
                word, ra, rb
            );
        }
    }
}

/// Asserts that `machine` agrees with [`reference_remainder`] on every
/// binary word up to a certain length.
pub fn assert_remainders_match(machine: &impl Remainder, max_word_length: usize) {
    for word in binary_words(max_word_length) {
        let expected = reference_remainder(&word, machine.modulus());
        match machine.remainder(&word) {
            Ok(actual) => assert_eq!(
                actual,
                expected,
                "{:?} mod {} should be {} but the machine computed {}",
                word,
                machine.modulus(),
                expected,
                actual
            ),
            Err(e) => panic!("{:?} mod {} failed: {}", word, machine.modulus(), e),
        }
    }
}

#[test]
fn test_binary_words() {
    let words = binary_words(2).collect_vec();
    assert_eq!(words, vec!["", "0", "1", "00", "01", "10", "11"]);
    assert_eq!(binary_words(5).count(), 63);
}

#[test]
fn test_reference_remainder() {
    assert_eq!(reference_remainder("", 5), 0);
    assert_eq!(reference_remainder("1101", 5), 3);
    assert_eq!(reference_remainder("1111", 3), 0);
}

#[test]
#[should_panic(expected = "reference_remainder needs a positive modulus")]
fn test_reference_remainder_zero_modulus() {
    reference_remainder("101", 0);
}
