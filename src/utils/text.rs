// file: src/utils/text.rs
// description: locale-invariant casing and case-insensitive comparison helpers
// reference: Unicode default case mapping (char::to_lowercase / to_uppercase)

use std::cmp::Ordering;

/// Uppercases the first character of every whitespace-delimited word and
/// lowercases the rest. Whitespace is copied through unchanged.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_whitespace() {
            result.push(ch);
            at_word_start = true;
        } else if at_word_start {
            result.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

// Folds to uppercase so punctuation between 'Z' and 'a' sorts after letters.
fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_uppercase)
}

pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    folded(a).eq(folded(b))
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("laser rifle"), "Laser Rifle");
        assert_eq!(title_case("LASER RIFLE"), "Laser Rifle");
        assert_eq!(title_case("mIxEd case"), "Mixed Case");
    }

    #[test]
    fn test_title_case_keeps_whitespace() {
        assert_eq!(title_case("  two  spaces\tand tab"), "  Two  Spaces\tAnd Tab");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_punctuation_is_not_a_boundary() {
        assert_eq!(title_case("self-tamer"), "Self-tamer");
        assert_eq!(title_case("(psychic) drone"), "(psychic) Drone");
    }

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_case("APPLE", "apple"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("b", "A"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("!buy", "!Balance"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("a_b", "aab"), Ordering::Greater);
    }

    #[test]
    fn test_eq_and_contains_ignore_case() {
        assert!(eq_ignore_case("TMC Long Range", "tmc long range"));
        assert!(!eq_ignore_case("tmc", "tmc long range"));
        assert!(contains_ignore_case("!healMyPawn", "mypawn"));
        assert!(!contains_ignore_case("!heal", "mypawn"));
    }
}
