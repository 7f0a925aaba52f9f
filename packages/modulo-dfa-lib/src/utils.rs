/// Checks whether `input` consists only of the characters `0` and `1`. The
/// empty string is a binary string.
pub fn is_binary_string(input: &str) -> bool {
    input.chars().all(|c| c == '0' || c == '1')
}

#[test]
fn test_is_binary_string() {
    assert!(is_binary_string(""));
    assert!(is_binary_string("0"));
    assert!(is_binary_string("0010110"));

    assert!(!is_binary_string(" "));
    assert!(!is_binary_string("10 1"));
    assert!(!is_binary_string("102"));
    assert!(!is_binary_string("abc"));
    assert!(!is_binary_string("１"));
}
