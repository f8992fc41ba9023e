//! Tweet ID comparison.
//!
//! Tweet IDs are decimal strings that exceed the safe range of 64-bit
//! integers, so they are never parsed numerically. Ordering is decided on
//! the digit strings themselves: longer string wins (no leading zeros are
//! assumed), equal lengths compare digit-by-digit from the most significant
//! end.

/// Outcome of comparing two tweet ID strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOrdering {
    /// The first argument is the larger ID.
    LeftLarger,
    /// The second argument is the larger ID.
    RightLarger,
    /// Both arguments are the same ID.
    Equal,
    /// At least one argument is not a decimal-digit string.
    Invalid,
}

/// Compare two tweet IDs represented as decimal strings.
pub fn compare_ids(left: &str, right: &str) -> IdOrdering {
    if !is_decimal(left) || !is_decimal(right) {
        return IdOrdering::Invalid;
    }

    if left.len() > right.len() {
        return IdOrdering::LeftLarger;
    }
    if left.len() < right.len() {
        return IdOrdering::RightLarger;
    }

    // Same length: ASCII digit ordering matches numeric ordering.
    for (l, r) in left.bytes().zip(right.bytes()) {
        if l > r {
            return IdOrdering::LeftLarger;
        }
        if l < r {
            return IdOrdering::RightLarger;
        }
    }

    IdOrdering::Equal
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_decides_first() {
        assert_eq!(compare_ids("12345", "999"), IdOrdering::LeftLarger);
        assert_eq!(compare_ids("999", "1000"), IdOrdering::RightLarger);
    }

    #[test]
    fn test_equal_ids() {
        assert_eq!(compare_ids("42", "42"), IdOrdering::Equal);
        assert_eq!(compare_ids("0", "0"), IdOrdering::Equal);
    }

    #[test]
    fn test_same_length_digit_comparison() {
        assert_eq!(compare_ids("123457", "123456"), IdOrdering::LeftLarger);
        assert_eq!(compare_ids("899999", "900000"), IdOrdering::RightLarger);
    }

    #[test]
    fn test_non_digit_input_is_invalid() {
        assert_eq!(compare_ids("12a", "5"), IdOrdering::Invalid);
        assert_eq!(compare_ids("5", "12a"), IdOrdering::Invalid);
        assert_eq!(compare_ids("", "5"), IdOrdering::Invalid);
        assert_eq!(compare_ids("-1", "5"), IdOrdering::Invalid);
        assert_eq!(compare_ids("1.5", "5"), IdOrdering::Invalid);
    }

    #[test]
    fn test_antisymmetry() {
        let ids = ["1", "9", "10", "42", "999", "1000", "1630456789012345678"];
        for a in &ids {
            for b in &ids {
                match compare_ids(a, b) {
                    IdOrdering::LeftLarger => {
                        assert_eq!(compare_ids(b, a), IdOrdering::RightLarger)
                    }
                    IdOrdering::RightLarger => {
                        assert_eq!(compare_ids(b, a), IdOrdering::LeftLarger)
                    }
                    IdOrdering::Equal => assert_eq!(compare_ids(b, a), IdOrdering::Equal),
                    IdOrdering::Invalid => panic!("digit inputs must not be invalid"),
                }
            }
        }
    }

    #[test]
    fn test_beyond_u64_range() {
        // Both IDs are larger than u64::MAX; string comparison still works.
        assert_eq!(
            compare_ids("99999999999999999999999", "99999999999999999999998"),
            IdOrdering::LeftLarger
        );
    }
}
