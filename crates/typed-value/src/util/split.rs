//! Tokenizing of separated value lists.
//!
//! Vector, color, matrix and array literals are lists of components separated
//! by commas and/or whitespace. Any run of separator characters delimits two
//! tokens, so `"1,2,3"`, `"1, 2, 3"` and `"1 2\t3"` all yield the same tokens.

/// Characters accepted between the components of a list literal.
pub const VALID_SEPARATORS: &[char] = &[',', ' ', '\t', '\n', '\r'];

/// Separator emitted between components when formatting a list literal.
pub const PREFERRED_SEPARATOR: &str = ", ";

/// Splits `text` on any of `separators`, dropping empty tokens.
///
/// Leading, trailing and repeated separators never produce empty tokens, so
/// an empty or all-separator input yields an empty list.
pub fn split_string<'a>(text: &'a str, separators: &[char]) -> Vec<&'a str> {
    text.split(|c: char| separators.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mixed_separators() {
        assert_eq!(split_string("1,2,3", VALID_SEPARATORS), vec!["1", "2", "3"]);
        assert_eq!(split_string("1, 2, 3", VALID_SEPARATORS), vec!["1", "2", "3"]);
        assert_eq!(split_string("1 2\t3\n4", VALID_SEPARATORS), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_split_drops_empty_tokens() {
        assert_eq!(split_string(",,1,, 2 ,", VALID_SEPARATORS), vec!["1", "2"]);
        assert!(split_string("", VALID_SEPARATORS).is_empty());
        assert!(split_string(" , ", VALID_SEPARATORS).is_empty());
    }

    #[test]
    fn test_split_custom_separators() {
        assert_eq!(split_string("a;b c", &[';']), vec!["a", "b c"]);
    }
}
