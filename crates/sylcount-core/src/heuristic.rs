//! Naive vowel-group syllable estimation.
//!
//! Last-resort fallback for words the dictionaries have never seen and the
//! analogy engine cannot connect. Counts vowel-group onsets and discounts a
//! silent `e`/`es` ending.

/// Estimate syllables by counting vowel groups, treating `y` as a vowel.
///
/// A trailing `e` or `es` is assumed silent and subtracts one. The result is
/// not clamped: an empty or vowel-free word estimates to zero.
pub fn estimate_syllables(word: &str) -> usize {
    let vowels = [b'a', b'e', b'i', b'o', b'u', b'y'];
    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;

    // Count vowel groups
    for &b in word.as_bytes() {
        let is_vowel = vowels.contains(&b);
        if is_vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Discount silent endings
    if word.ends_with('e') || word.ends_with("es") {
        syllables = syllables.saturating_sub(1);
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_groups() {
        assert_eq!(estimate_syllables("cat"), 1);
        assert_eq!(estimate_syllables("window"), 2);
        assert_eq!(estimate_syllables("banana"), 3);
    }

    #[test]
    fn y_counts_as_vowel() {
        assert_eq!(estimate_syllables("rhythm"), 1);
        assert_eq!(estimate_syllables("myth"), 1);
    }

    #[test]
    fn silent_endings_discounted() {
        assert_eq!(estimate_syllables("make"), 1);
        assert_eq!(estimate_syllables("apples"), 1);
    }

    #[test]
    fn single_vowel() {
        assert_eq!(estimate_syllables("a"), 1);
    }

    #[test]
    fn unclamped() {
        assert_eq!(estimate_syllables(""), 0);
        assert_eq!(estimate_syllables("shh"), 0);
        assert_eq!(estimate_syllables("e"), 0);
    }

    #[test]
    fn apostrophes_break_groups() {
        assert_eq!(estimate_syllables("don't"), 1);
        assert_eq!(estimate_syllables("o'er"), 2);
    }
}
